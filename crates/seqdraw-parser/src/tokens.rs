//! Token definitions for the diagram language.

use std::fmt;

use crate::span::Span;

/// The category of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Equal,
    /// A string literal; its span covers the content between the quotes.
    String,
    /// `<-`
    LeftArrow,
    /// `->`
    RightArrow,
    /// The `actor` keyword.
    Actor,
    /// The `action` keyword.
    Action,
    Identifier,
    Semicolon,
    LeftParen,
    RightParen,
    /// Reserved for hosts that want to keep malformed input in the token
    /// stream. The scanner reports problems as diagnostics instead and never
    /// produces this kind.
    Error,
    /// End of input; always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// How the token is described in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Equal => "'='",
            TokenKind::String => "string",
            TokenKind::LeftArrow => "'<-'",
            TokenKind::RightArrow => "'->'",
            TokenKind::Actor => "'actor'",
            TokenKind::Action => "'action'",
            TokenKind::Identifier => "identifier",
            TokenKind::Semicolon => "';'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether the token starts a statement.
    pub fn is_declaration_keyword(&self) -> bool {
        matches!(self, TokenKind::Actor | TokenKind::Action)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token together with where it was found.
///
/// Tokens do not own their text. [`Token::lexeme`] slices it out of the
/// source the token was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    line: usize,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, span: Span) -> Self {
        Self { kind, line, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The 1-based line the token starts on.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Byte offset of the first character of the lexeme.
    pub fn start(&self) -> usize {
        self.span.start()
    }

    /// Byte offset one past the last character of the lexeme.
    pub fn end(&self) -> usize {
        self.span.end()
    }

    /// The token's text within `source`.
    ///
    /// For [`TokenKind::String`] this is the content without quotes, and for
    /// [`TokenKind::Eof`] it is empty.
    pub fn lexeme<'src>(&self, source: &'src str) -> &'src str {
        self.span.slice(source)
    }
}
