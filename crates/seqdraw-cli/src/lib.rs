//! CLI logic for the seqdraw sequence diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use seqdraw::{DiagramBuilder, SeqdrawError};

/// Run the seqdraw CLI application
///
/// Parses the input file, renders every statement that parsed to SVG and
/// writes it to the output path. Diagnostics do not stop rendering: the SVG
/// is written first and the diagnostics are returned afterwards, so a
/// partially broken file still produces a drawing.
///
/// # Errors
///
/// Returns `SeqdrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Render errors (no output is written)
/// - Parse diagnostics (after the output is written)
pub fn run(args: &Args) -> Result<(), SeqdrawError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(width) = args.width {
        app_config = app_config.with_width(width);
    }

    let source = fs::read_to_string(&args.input)?;

    if let Some(path) = &args.highlight {
        let scan = seqdraw_parser::scan(&source);
        fs::write(path, seqdraw_parser::highlight(&source, scan.tokens()))?;
        info!(highlight_file = path.as_str(); "Highlighted source written");
    }

    let builder = DiagramBuilder::new(app_config);
    let program = builder.parse(&source);
    if program.has_errors() {
        warn!(
            diagnostics = program.diagnostics().len();
            "Source has errors, rendering the statements that parsed"
        );
    }

    let svg = builder.render_svg(program.statements())?;
    fs::write(&args.output, svg)?;
    info!(output_file = args.output; "SVG exported successfully");

    program
        .into_result()
        .map(|_| ())
        .map_err(|err| SeqdrawError::new_parse_error(err, source))
}
