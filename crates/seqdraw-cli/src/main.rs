//! seqdraw CLI entry point.

use std::{fs, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use seqdraw_cli::{Args, error_adapter::to_reports};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting seqdraw");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = seqdraw_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();
        // Render failures are located by looking at the input again.
        let source = fs::read_to_string(&args.input).ok();

        for report in to_reports(&err, source.as_deref()) {
            let mut writer = String::new();
            if reporter.render_report(&mut writer, &report).is_err() {
                writer = report.to_string();
            }

            error!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
