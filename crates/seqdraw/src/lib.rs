//! Seqdraw - a small language for sequence diagrams.
//!
//! Parsing, layout, and rendering for seqdraw programs. Actors are drawn as a
//! row of labelled boxes with lifelines; actions are labelled arrows between
//! lifelines, one row per action.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use seqdraw_core::{color, draw, geometry};
pub use seqdraw_parser::{Program, ast};

pub use error::{RenderError, SeqdrawError};

use log::{debug, info, trace};

use seqdraw_core::draw::DrawingSurface;
use seqdraw_parser::ast::Statement;

use config::AppConfig;
use export::SvgSurface;

/// Builder for parsing and rendering seqdraw diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use seqdraw::{DiagramBuilder, config::AppConfig};
///
/// let source = "actor a = \"A\"; actor b = \"B\"; action a -> b = \"hi\";";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Strict parsing: any diagnostic is an error
/// let statements = builder.parse_strict(source)
///     .expect("Failed to parse");
///
/// let svg = builder.render_svg(&statements)
///     .expect("Failed to render");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source code, recovering from errors.
    ///
    /// The returned [`Program`] holds every statement that parsed and every
    /// diagnostic found. Hosts that draw while the user types render the
    /// statements and show the diagnostics next to the drawing.
    pub fn parse(&self, source: &str) -> Program {
        info!("Parsing diagram");
        let program = seqdraw_parser::parse(source);
        debug!(
            statements = program.statements().len(),
            diagnostics = program.diagnostics().len();
            "Diagram parsed"
        );
        trace!(program:?; "Parsed program");
        program
    }

    /// Parse source code, failing if any diagnostic was reported.
    ///
    /// # Errors
    ///
    /// Returns [`SeqdrawError::Parse`] carrying every diagnostic and the
    /// source text.
    pub fn parse_strict(&self, source: &str) -> Result<Vec<Statement>, SeqdrawError> {
        self.parse(source)
            .into_result()
            .map_err(|err| SeqdrawError::new_parse_error(err, source))
    }

    /// Lay out and draw `statements` onto any drawing surface.
    ///
    /// # Errors
    ///
    /// Returns [`SeqdrawError::Render`] when an action refers to an actor that
    /// was never declared, and [`SeqdrawError::Config`] when
    /// `available_width` is not a positive number or the layout configuration
    /// is unusable. Calls already issued before a render error stay on the
    /// surface.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        statements: &[Statement],
        surface: &mut S,
        available_width: f32,
    ) -> Result<(), SeqdrawError> {
        check_width(available_width)?;
        self.config
            .layout()
            .validate()
            .map_err(SeqdrawError::Config)?;

        let engine = self.config.layout().engine();
        trace!(engine:?; "Layout engine configured");
        engine.render(statements, surface, available_width)?;

        Ok(())
    }

    /// Render `statements` to an SVG string.
    ///
    /// The available width comes from the layout configuration.
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render); no SVG is produced on error.
    pub fn render_svg(&self, statements: &[Statement]) -> Result<String, SeqdrawError> {
        let mut surface = SvgSurface::new(
            self.config.style(),
            self.config.layout().default_font_size(),
        );
        self.render(statements, &mut surface, self.config.layout().width())?;

        let svg = surface.into_document().to_string();
        debug!(bytes = svg.len(); "SVG document produced");
        Ok(svg)
    }
}

fn check_width(width: f32) -> Result<(), SeqdrawError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(SeqdrawError::Config(format!(
            "available width must be a positive number, got {width}"
        )))
    }
}
