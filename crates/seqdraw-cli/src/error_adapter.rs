//! Turns [`SeqdrawError`]s into miette reports for the terminal.
//!
//! Every failure becomes one or more [`Report`]s:
//!
//! - a parse failure gives one report per diagnostic, labelled in the source
//! - an undefined actor gives one report pointing at the first action that
//!   uses the name, when the source is at hand
//! - I/O and configuration failures give a single unlabelled report
//!
//! Codes are the diagnostic codes (`E001`, `E100`, ...) for parse failures and
//! `seqdraw::*` names for the rest.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use seqdraw::{RenderError, SeqdrawError};
use seqdraw_parser::{Span, Token, TokenKind, error::Diagnostic};

/// A single rendered failure.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    message: String,
    code: String,
    help: Option<String>,
    source: Option<&'a str>,
    labels: Vec<LabeledSpan>,
}

impl<'a> Report<'a> {
    fn plain(message: impl Into<String>, code: &str) -> Self {
        Self {
            message: message.into(),
            code: code.to_string(),
            help: None,
            source: None,
            labels: Vec::new(),
        }
    }

    fn from_diagnostic(diag: &Diagnostic, source: &'a str) -> Self {
        let code = diag
            .code()
            .map_or("seqdraw::parse", |code| code.as_str());
        let labels = diag
            .labels()
            .iter()
            .map(|label| {
                let message = Some(label.message().to_string());
                let span = to_source_span(label.span());
                if label.is_primary() {
                    LabeledSpan::new_primary_with_span(message, span)
                } else {
                    LabeledSpan::new_with_span(message, span)
                }
            })
            .collect();

        Self {
            message: diag.message().to_string(),
            code: code.to_string(),
            help: diag.help().map(str::to_string),
            source: Some(source),
            labels,
        }
    }

    fn undefined_actor(err: &RenderError, name: &str, source: Option<&'a str>) -> Self {
        let mut report = Self::plain(err.to_string(), "seqdraw::render::undefined_actor");
        report.help = Some(format!("declare it first, e.g. `actor {name} = \"{name}\";`"));

        let located = source.and_then(|src| Some((src, first_use_in_action(src, name)?)));
        if let Some((source, span)) = located {
            report.source = Some(source);
            report.labels.push(LabeledSpan::new_primary_with_span(
                Some(format!("`{name}` is never declared")),
                to_source_span(span),
            ));
        }
        report
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn labelled_spans(&self) -> &[LabeledSpan] {
        &self.labels
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Report<'_> {}

impl MietteDiagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        Some(Box::new(&self.code))
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'b>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.source.as_ref().map(|src| src as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            None
        } else {
            Some(Box::new(self.labels.iter().cloned()))
        }
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// The span of the first identifier `name` inside an `action` statement.
fn first_use_in_action(source: &str, name: &str) -> Option<Span> {
    let scan = seqdraw_parser::scan(source);
    let mut in_action = false;

    scan.tokens().iter().find_map(|token: &Token| {
        match token.kind() {
            TokenKind::Action => in_action = true,
            TokenKind::Actor | TokenKind::Semicolon => in_action = false,
            TokenKind::Identifier if in_action && token.lexeme(source) == name => {
                return Some(token.span());
            }
            _ => {}
        }
        None
    })
}

/// Build the reports for `err`.
///
/// `source` is the text that was being processed. Parse failures carry their
/// own copy; it is only used to locate render failures.
pub fn to_reports<'a>(err: &'a SeqdrawError, source: Option<&'a str>) -> Vec<Report<'a>> {
    match err {
        SeqdrawError::Parse { err, src } => err
            .iter()
            .map(|diag| Report::from_diagnostic(diag, src))
            .collect(),
        SeqdrawError::Render(render @ RenderError::UndefinedActor(name)) => {
            vec![Report::undefined_actor(render, name, source)]
        }
        SeqdrawError::Io(_) => vec![Report::plain(err.to_string(), "seqdraw::io")],
        SeqdrawError::Config(_) => vec![Report::plain(err.to_string(), "seqdraw::config")],
    }
}
