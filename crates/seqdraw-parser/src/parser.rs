//! Recovering parser for scanned tokens.
//!
//! Each statement is parsed with winnow combinators over a [`TokenSlice`].
//! Once a statement's keyword has been seen the parser commits to it, so the
//! first unexpected token is reported precisely. A failed statement is dropped
//! and the parser skips ahead to the next statement boundary before trying
//! again, so one malformed statement never hides the rest of the program.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, cut_err},
    error::{ContextError, ErrMode, ModalResult},
    stream::{Stream, TokenSlice},
    token::any,
};

use crate::{
    ast::{ActionDeclaration, ActorDeclaration, Arrow, Statement},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{Token, TokenKind},
};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Expected(&'static str);

type Input<'t> = TokenSlice<'t, Token>;
type IResult<O> = ModalResult<O, ContextError<Expected>>;

/// Match a single token of `kind` without describing it on failure.
fn keyword<'t>(kind: TokenKind) -> impl winnow::Parser<Input<'t>, &'t Token, ErrMode<ContextError<Expected>>> {
    any.verify(move |token: &Token| token.kind() == kind)
}

/// Match a single token of `kind`, reporting `expected` if it is missing.
fn token<'t>(
    kind: TokenKind,
    expected: &'static str,
) -> impl winnow::Parser<Input<'t>, &'t Token, ErrMode<ContextError<Expected>>> {
    keyword(kind).context(Expected(expected))
}

/// Parse `->` or `<-`
fn arrow(input: &mut Input<'_>) -> IResult<Arrow> {
    alt((
        keyword(TokenKind::RightArrow).value(Arrow::Right),
        keyword(TokenKind::LeftArrow).value(Arrow::Left),
    ))
    .context(Expected("'->' or '<-'"))
    .parse_next(input)
}

/// Parse `actor <identifier> = <string> ;`
fn actor_declaration(input: &mut Input<'_>, source: &str) -> IResult<ActorDeclaration> {
    keyword(TokenKind::Actor).parse_next(input)?;

    let (name, _, value, _) = cut_err((
        token(TokenKind::Identifier, "actor name"),
        token(TokenKind::Equal, "'='"),
        token(TokenKind::String, "string"),
        token(TokenKind::Semicolon, "';' at end of statement"),
    ))
    .parse_next(input)?;

    Ok(ActorDeclaration::new(
        name.lexeme(source),
        value.lexeme(source),
    ))
}

/// Parse `action <identifier> (-> | <-) <identifier> = <string> ;`
fn action_declaration(input: &mut Input<'_>, source: &str) -> IResult<ActionDeclaration> {
    keyword(TokenKind::Action).parse_next(input)?;

    let (left, direction, right, _, value, _) = cut_err((
        token(TokenKind::Identifier, "actor name"),
        arrow,
        token(TokenKind::Identifier, "actor name"),
        token(TokenKind::Equal, "'='"),
        token(TokenKind::String, "string"),
        token(TokenKind::Semicolon, "';' at end of statement"),
    ))
    .parse_next(input)?;

    Ok(ActionDeclaration::new(
        left.lexeme(source),
        direction,
        right.lexeme(source),
        value.lexeme(source),
    ))
}

/// Parse one statement, dispatching on its leading keyword.
fn statement<'t>(input: &mut Input<'t>, source: &str) -> IResult<Statement> {
    alt((
        |i: &mut Input<'t>| actor_declaration(i, source).map(Statement::Actor),
        |i: &mut Input<'t>| action_declaration(i, source).map(Statement::Action),
    ))
    .context(Expected("declaration"))
    .parse_next(input)
}

/// The next token, if any.
fn peek(input: &Input<'_>) -> Option<Token> {
    input.first().copied()
}

fn is_at_end(input: &Input<'_>) -> bool {
    peek(input).is_none_or(|token| token.kind() == TokenKind::Eof)
}

/// Consume the next token unless the input is at its end.
fn advance(input: &mut Input<'_>) -> Option<Token> {
    if is_at_end(input) {
        return None;
    }
    input.next_token().copied()
}

/// Skip to the next statement boundary.
///
/// At least one token is consumed before any boundary is checked. Skipping
/// stops right after a `;`, right before `actor` or `action`, or at the end
/// of input.
fn synchronize(input: &mut Input<'_>) {
    let mut previous = advance(input);

    while let Some(current) = peek(input) {
        if current.kind() == TokenKind::Eof
            || current.kind().is_declaration_keyword()
            || previous.is_some_and(|token| token.kind() == TokenKind::Semicolon)
        {
            return;
        }
        previous = advance(input);
    }
}

/// The outcome of parsing: every statement that parsed, plus every problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    statements: Vec<Statement>,
    diagnostics: Vec<Diagnostic>,
}

impl Program {
    pub fn new(statements: Vec<Statement>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            statements,
            diagnostics,
        }
    }

    /// Statements that parsed successfully, in source order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Scanning and parsing errors, scanning errors first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Statement>, Vec<Diagnostic>) {
        (self.statements, self.diagnostics)
    }

    /// All statements, or every diagnostic if there was any.
    pub fn into_result(self) -> Result<Vec<Statement>, ParseError> {
        match ParseError::new(self.diagnostics) {
            Some(err) => Err(err),
            None => Ok(self.statements),
        }
    }
}

/// Describe what was found at `token` for an "expected ..., found ..." message.
fn describe_found(token: Option<Token>, source: &str) -> String {
    match token {
        Some(token) if token.kind() != TokenKind::Eof => match token.kind() {
            TokenKind::String => format!("string \"{}\"", token.lexeme(source)),
            _ => format!("`{}`", token.lexeme(source)),
        },
        _ => TokenKind::Eof.describe().to_string(),
    }
}

/// Parser state for one run over a token list.
struct Parser<'a> {
    source: &'a str,
    statements: Vec<Statement>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            statements: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn parse(&mut self, mut input: Input<'_>) {
        while !is_at_end(&input) {
            let start = peek(&input);

            match statement(&mut input, self.source) {
                Ok(statement) => {
                    trace!(statement:?; "Parsed statement");
                    self.statements.push(statement);
                }
                Err(err) => {
                    let found = peek(&input);
                    self.report(err, start, found);
                    synchronize(&mut input);
                }
            }
        }
    }

    /// Turn a failed statement into a diagnostic.
    ///
    /// `start` is the first token of the statement and `found` the token the
    /// parser stopped at.
    fn report(
        &mut self,
        err: ErrMode<ContextError<Expected>>,
        start: Option<Token>,
        found: Option<Token>,
    ) {
        let (committed, context) = match err {
            ErrMode::Cut(e) => (true, e),
            ErrMode::Backtrack(e) => (false, e),
            ErrMode::Incomplete(_) => (false, ContextError::new()),
        };
        let Expected(expected) = context
            .context()
            .next()
            .copied()
            .unwrap_or(Expected("declaration"));

        let end = self.source.len();
        let span = found.map_or(Span::new(end..end), |token| token.span());
        let line = found.or(start).map_or(1, |token| token.line());
        let message = format!(
            "expected {}, found {}",
            expected,
            describe_found(found, self.source)
        );

        let diagnostic = if committed {
            let mut diagnostic = Diagnostic::error(message)
                .with_code(ErrorCode::E100)
                .with_line(line)
                .with_label(span, format!("expected {} here", expected));
            if let Some(start) = start.filter(|start| Some(*start) != found) {
                diagnostic =
                    diagnostic.with_secondary_label(start.span(), "in this statement");
            }
            diagnostic
        } else {
            Diagnostic::error(message)
                .with_code(ErrorCode::E101)
                .with_line(line)
                .with_label(span, ErrorCode::E101.description())
                .with_help("statements start with `actor` or `action`")
        };

        self.diagnostics.emit(diagnostic);
    }

    fn finish(self) -> Program {
        if self.diagnostics.has_errors() {
            debug!(statements = self.statements.len(); "Parsing finished with errors");
        }
        Program::new(self.statements, self.diagnostics.into_diagnostics())
    }
}

/// Parse a scanned token list into statements.
///
/// `tokens` should come from [`scan`](crate::scan) over the same `source`;
/// names and labels are sliced out of `source` by token span. Parsing never
/// fails as a whole: statements that parse are returned together with one
/// diagnostic per statement that did not.
pub fn parse_tokens(tokens: &[Token], source: &str) -> Program {
    let mut parser = Parser::new(source);
    parser.parse(TokenSlice::new(tokens));
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;

    fn parse_source(source: &str) -> Program {
        let scan = scan(source);
        assert!(scan.diagnostics().is_empty(), "scan errors in {source:?}");
        parse_tokens(scan.tokens(), source)
    }

    fn messages(program: &Program) -> Vec<&str> {
        program.diagnostics().iter().map(Diagnostic::message).collect()
    }

    #[test]
    fn test_actor_declaration() {
        let program = parse_source("actor user = \"End User\";");

        assert!(!program.has_errors());
        assert_eq!(
            program.statements(),
            &[Statement::Actor(ActorDeclaration::new("user", "End User"))]
        );
    }

    #[test]
    fn test_action_declarations() {
        let program = parse_source("action a -> b = \"call\";\naction a <- b = \"reply\";");

        assert!(!program.has_errors());
        assert_eq!(
            program.statements(),
            &[
                Statement::Action(ActionDeclaration::new("a", Arrow::Right, "b", "call")),
                Statement::Action(ActionDeclaration::new("a", Arrow::Left, "b", "reply")),
            ]
        );
    }

    #[test]
    fn test_empty_program() {
        let program = parse_source("");
        assert!(program.statements().is_empty());
        assert!(!program.has_errors());

        let program = parse_tokens(&[], "");
        assert!(program.statements().is_empty());
    }

    #[test]
    fn test_missing_left_actor() {
        let program = parse_source("action -> B = \"x\";");

        assert!(program.statements().is_empty());
        assert_eq!(messages(&program), ["expected actor name, found `->`"]);

        let diagnostic = &program.diagnostics()[0];
        assert_eq!(diagnostic.code(), Some(ErrorCode::E100));
        assert_eq!(diagnostic.line(), Some(1));
        assert_eq!(diagnostic.primary_span(), Some(Span::new(7..9)));
        assert!(diagnostic.labels().iter().any(|label| label.is_secondary()));
    }

    #[test]
    fn test_each_missing_piece_is_named() {
        let cases = [
            ("action a b = \"x\";", "expected '->' or '<-', found `b`"),
            ("actor a \"x\";", "expected '=', found string \"x\""),
            ("actor a = b;", "expected string, found `b`"),
            ("actor a = \"x\"", "expected ';' at end of statement, found end of input"),
        ];

        for (source, expected) in cases {
            let program = parse_source(source);
            assert!(program.statements().is_empty(), "{source}");
            assert_eq!(messages(&program), [expected], "{source}");
        }
    }

    #[test]
    fn test_expected_declaration() {
        let program = parse_source("user = \"x\";\nactor a = \"A\";");

        assert_eq!(program.statements().len(), 1);
        assert_eq!(messages(&program), ["expected declaration, found `user`"]);
        assert_eq!(program.diagnostics()[0].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_recovery_stops_after_semicolon() {
        let program = parse_source("actor a = = ; ( ) actor b = \"B\";");

        // `(` after the `;` is a new, separately reported non-declaration.
        assert_eq!(
            program.statements(),
            &[Statement::Actor(ActorDeclaration::new("b", "B"))]
        );
        assert_eq!(program.diagnostics().len(), 2);
        assert_eq!(program.diagnostics()[1].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_recovery_stops_before_keyword() {
        let program = parse_source("actor a = \"A\"\nactor b = \"B\";");

        // The error token is the second `actor`, and recovery always consumes
        // the token it failed on, so the second statement is lost as well.
        assert!(program.statements().is_empty());
        assert_eq!(program.diagnostics().len(), 1);
        assert_eq!(program.diagnostics()[0].line(), Some(2));
    }

    #[test]
    fn test_error_at_end_of_input_terminates() {
        let program = parse_source("actor");

        assert!(program.statements().is_empty());
        assert_eq!(messages(&program), ["expected actor name, found end of input"]);
        assert_eq!(program.diagnostics()[0].primary_span(), Some(Span::new(5..5)));
    }

    #[test]
    fn test_into_result() {
        let ok = parse_source("actor a = \"A\";").into_result().unwrap();
        assert_eq!(ok.len(), 1);

        let err = parse_source("actor a").into_result().unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
    }
}
