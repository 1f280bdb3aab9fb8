//! Source spans annotated with a short message.

use crate::span::Span;

/// What a [`Label`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The token that caused the diagnostic.
    Cause,
    /// Surrounding context, such as the statement the cause belongs to.
    Context,
}

/// A message attached to a span of the source.
///
/// Scanner diagnostics carry a single cause label. Parser diagnostics also
/// point at the keyword that opened the failed statement when it is not the
/// offending token itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    role: LabelRole,
    span: Span,
    message: String,
}

impl Label {
    pub fn new(role: LabelRole, span: Span, message: impl Into<String>) -> Self {
        Self {
            role,
            span,
            message: message.into(),
        }
    }

    /// A label on the token that caused the diagnostic.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(LabelRole::Cause, span, message)
    }

    /// A label on related context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(LabelRole::Context, span, message)
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.role == LabelRole::Cause
    }

    pub fn is_secondary(&self) -> bool {
        self.role == LabelRole::Context
    }

    /// The labelled text of `source`; empty at end of input.
    pub fn snippet<'src>(&self, source: &'src str) -> &'src str {
        self.span.slice(source)
    }
}
