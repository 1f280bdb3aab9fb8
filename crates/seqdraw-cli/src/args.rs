//! Command-line argument definitions for the seqdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the drawing width, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the seqdraw sequence diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input seqdraw file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Width available to the diagram, overriding the configuration
    #[arg(short, long)]
    pub width: Option<f32>,

    /// Also write the source as syntax-highlighted HTML to this path
    #[arg(long)]
    pub highlight: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["seqdraw", "diagram.seq"]);

        assert_eq!(args.input, "diagram.seq");
        assert_eq!(args.output, "out.svg");
        assert!(args.config.is_none());
        assert!(args.width.is_none());
        assert!(args.highlight.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_options() {
        let args = Args::parse_from([
            "seqdraw",
            "in.seq",
            "-o",
            "diagram.svg",
            "-c",
            "custom.toml",
            "--width",
            "800",
            "--highlight",
            "in.html",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.output, "diagram.svg");
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert_eq!(args.width, Some(800.0));
        assert_eq!(args.highlight.as_deref(), Some("in.html"));
        assert_eq!(args.log_level, "debug");
    }
}
