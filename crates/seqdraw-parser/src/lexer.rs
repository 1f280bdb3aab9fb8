//! Scanner for diagram source text.
//!
//! The scanner turns source text into a flat list of [`Token`]s ending in a
//! single [`TokenKind::Eof`]. Whitespace is skipped and newlines only advance
//! the line counter. Malformed input never stops the scan: each problem is
//! recorded as a [`Diagnostic`] and scanning resumes after it.
//!
//! Offsets are byte offsets into the source.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, cut_err, preceded, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
    tokens::{Token, TokenKind},
};

/// Diagnostic details attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LexerDiagnostic>>;

/// What a single step of the scanner recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Token(TokenKind),
    Whitespace,
    Newline,
}

/// Parse a string literal: `"` then anything except `"` or a newline, then `"`.
///
/// There are no escape sequences. Once the opening quote is seen the parser
/// commits, so a missing closing quote is reported instead of backtracking.
fn string_literal(input: &mut Input<'_>) -> IResult<Lexeme> {
    let start = input.current_token_start();

    preceded(
        '"',
        cut_err(terminated(
            take_while(0.., |c: char| c != '"' && c != '\n'),
            '"',
        ))
        .context(LexerDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated string literal",
            help: Some("close the string with `\"` before the end of the line"),
            start,
        }),
    )
    .value(Lexeme::Token(TokenKind::String))
    .parse_next(input)
}

/// Parse `->` and `<-`.
fn arrow(input: &mut Input<'_>) -> IResult<Lexeme> {
    alt((
        literal("->").value(TokenKind::RightArrow),
        literal("<-").value(TokenKind::LeftArrow),
    ))
    .map(Lexeme::Token)
    .parse_next(input)
}

/// Parse single character tokens
fn single_char_token(input: &mut Input<'_>) -> IResult<Lexeme> {
    alt((
        '='.value(TokenKind::Equal),
        ';'.value(TokenKind::Semicolon),
        '('.value(TokenKind::LeftParen),
        ')'.value(TokenKind::RightParen),
    ))
    .map(Lexeme::Token)
    .parse_next(input)
}

/// Parse an identifier or keyword.
///
/// The longest run of identifier characters is taken first and only then
/// checked against the keyword table, so `actors` and `action_1` stay
/// identifiers.
fn word(input: &mut Input<'_>) -> IResult<Lexeme> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .map(|word: &str| match word {
            "actor" => TokenKind::Actor,
            "action" => TokenKind::Action,
            _ => TokenKind::Identifier,
        })
        .map(Lexeme::Token)
        .parse_next(input)
}

/// Parse spaces, tabs and carriage returns.
fn whitespace(input: &mut Input<'_>) -> IResult<Lexeme> {
    take_while(1.., [' ', '\t', '\r'])
        .value(Lexeme::Whitespace)
        .parse_next(input)
}

fn newline(input: &mut Input<'_>) -> IResult<Lexeme> {
    '\n'.value(Lexeme::Newline).parse_next(input)
}

/// Parse a single lexeme with position tracking.
fn positioned_lexeme(input: &mut Input<'_>) -> IResult<(Lexeme, Span)> {
    let start = input.current_token_start();

    let lexeme = alt((
        whitespace,
        newline,
        string_literal,
        arrow,
        single_char_token,
        word,
    ))
    .parse_next(input)?;

    let end = input.current_token_start();
    let span = match lexeme {
        // The quotes are not part of the value.
        Lexeme::Token(TokenKind::String) => Span::new(start + 1..end - 1),
        _ => Span::new(start..end),
    };

    Ok((lexeme, span))
}

/// The result of scanning a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Scan {
    /// The scanned tokens. The last one is always [`TokenKind::Eof`].
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Problems found while scanning, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Lexer that accumulates tokens and diagnostics during scanning.
struct Lexer<'a> {
    source: &'a str,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Scan the input, collecting tokens and errors.
    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            let checkpoint = input.checkpoint();

            match positioned_lexeme(&mut input) {
                Ok((Lexeme::Token(kind), span)) => {
                    trace!(kind:?, line = self.line, start = span.start(); "Scanned token");
                    self.tokens.push(Token::new(kind, self.line, span));
                }
                Ok((Lexeme::Whitespace, _)) => {}
                Ok((Lexeme::Newline, _)) => self.line += 1,
                Err(ErrMode::Cut(err)) => {
                    // A committed parser stops right where the problem is. For
                    // strings that is the end of the line, which is left for
                    // the next step so the line count stays right.
                    let error_pos = input.current_token_start();
                    self.report_committed(err, error_pos);
                }
                Err(_) => {
                    input.reset(&checkpoint);
                    let start = input.current_token_start();
                    input.next_token();
                    let end = input.current_token_start();
                    self.report_unexpected(Span::new(start..end));
                }
            }
        }

        let end = self.source.len();
        self.tokens
            .push(Token::new(TokenKind::Eof, self.line, Span::new(end..end)));
    }

    /// Report an error raised by a parser that had committed to a token.
    fn report_committed(&mut self, err: ContextError<LexerDiagnostic>, error_pos: usize) {
        let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = err.context().next().cloned()
        else {
            self.report_unexpected(Span::new(error_pos..error_pos));
            return;
        };

        let mut diagnostic = Diagnostic::error(message)
            .with_code(code)
            .with_line(self.line)
            .with_label(Span::new(start..error_pos), code.description());
        if let Some(help) = help {
            diagnostic = diagnostic.with_help(help);
        }
        self.diagnostics.emit(diagnostic);
    }

    /// Report a character that does not start any token.
    fn report_unexpected(&mut self, span: Span) {
        let text = span.slice(self.source);
        let mut diagnostic = Diagnostic::error(format!("unexpected character `{}`", text))
            .with_code(ErrorCode::E002)
            .with_line(self.line)
            .with_label(span, ErrorCode::E002.description());
        if text == "-" || text == "<" {
            diagnostic = diagnostic.with_help("arrows are written `->` or `<-`");
        }
        self.diagnostics.emit(diagnostic);
    }

    fn finish(self) -> Scan {
        if self.diagnostics.has_errors() {
            debug!(line = self.line; "Scanning finished with errors");
        }
        Scan {
            tokens: self.tokens,
            diagnostics: self.diagnostics.into_diagnostics(),
        }
    }
}

/// Scan `source` into tokens, collecting every scanning error.
///
/// Scanning always completes: the returned token list ends with exactly one
/// [`TokenKind::Eof`] token whose span is the empty range at the end of the
/// source.
///
/// # Examples
///
/// ```
/// # use seqdraw_parser::{scan, TokenKind};
/// let scan = scan("actor user = \"User\";");
/// let kinds: Vec<_> = scan.tokens().iter().map(|t| t.kind()).collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Actor,
///         TokenKind::Identifier,
///         TokenKind::Equal,
///         TokenKind::String,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// assert!(scan.diagnostics().is_empty());
/// ```
pub fn scan(source: &str) -> Scan {
    let mut lexer = Lexer::new(source);
    lexer.tokenize(LocatingSlice::new(source));
    lexer.finish()
}
