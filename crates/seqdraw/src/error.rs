//! Error types for seqdraw operations.
//!
//! This module provides the main error type [`SeqdrawError`] which wraps
//! the error conditions that can occur while processing a diagram, and
//! [`RenderError`] for failures of the layout pass itself.

use std::io;

use thiserror::Error;

use seqdraw_parser::error::ParseError;

/// A failure of the render pass.
///
/// Render errors are fatal: the pass stops at the first one and the diagram
/// should be treated as unrenderable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("undefined actor `{0}`")]
    UndefinedActor(String),
}

/// The main error type for seqdraw operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the diagnostics so
/// callers can point at the offending spans.
#[derive(Debug, Error)]
pub enum SeqdrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SeqdrawError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
