//! The core diagnostic type.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// An error found while scanning or parsing, with its source location.
///
/// Every diagnostic carries a message and, once attached, the 1-based source
/// line it was found on, an error code, labeled spans and help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    line: Option<usize>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use seqdraw_parser::error::{Diagnostic, ErrorCode};
    /// # use seqdraw_parser::Span;
    /// let diag = Diagnostic::error("unexpected character `%`")
    ///     .with_code(ErrorCode::E002)
    ///     .with_label(Span::new(4..5), "not valid here");
    ///
    /// assert_eq!(diag.code(), Some(ErrorCode::E002));
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            line: None,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the 1-based source line, if known.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message (line 3)"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.line().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
        assert!(diag.primary_span().is_none());
    }

    #[test]
    fn test_diagnostic_labels() {
        let diag = Diagnostic::error("expected ';' at end of statement")
            .with_secondary_label(Span::new(0..5), "statement starts here")
            .with_label(Span::new(20..20), "expected ';'");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_secondary());
        assert_eq!(diag.primary_span(), Some(Span::new(20..20)));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unexpected character `%`").with_code(ErrorCode::E002);
        assert_eq!(diag.to_string(), "error[E002]: unexpected character `%`");

        let diag = diag.with_line(7);
        assert_eq!(
            diag.to_string(),
            "error[E002]: unexpected character `%` (line 7)"
        );

        assert_eq!(Diagnostic::error("plain").to_string(), "error: plain");
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("unterminated string literal")
            .with_code(ErrorCode::E001)
            .with_line(2)
            .with_label(Span::new(10..16), "string starts here")
            .with_help("close the string with `\"` before the end of the line");

        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.line(), Some(2));
        assert_eq!(
            diag.help(),
            Some("close the string with `\"` before the end of the line")
        );
    }
}
