//! # Seqdraw Parser
//!
//! Scanner and recovering parser for the seqdraw sequence-diagram language.
//!
//! A program is a list of statements:
//!
//! ```text
//! actor client = "Client";
//! actor server = "Server";
//! action client -> server = "request";
//! action client <- server = "response";
//! ```
//!
//! Neither stage stops at the first error. [`parse`] always returns every
//! statement that could be parsed together with every problem found, so a
//! host can keep drawing while the user is still typing.
//!
//! ## Usage
//!
//! ```
//! # use seqdraw_parser::{parse, ast::Statement};
//! let program = parse("actor a = \"A\";\nactor = \"broken\";\nactor b = \"B\";");
//!
//! assert_eq!(program.statements().len(), 2);
//! assert_eq!(program.diagnostics().len(), 1);
//! assert!(matches!(&program.statements()[1], Statement::Actor(actor) if actor.name == "b"));
//! ```

pub mod ast;
pub mod error;
mod highlight;
mod lexer;
mod parser;
mod span;
mod tokens;

pub use highlight::{highlight, token_class};
pub use lexer::{Scan, scan};
pub use parser::{Program, parse_tokens};
pub use span::Span;
pub use tokens::{Token, TokenKind};

use log::{debug, info};

/// Scan and parse `source` in one step.
///
/// Scanning errors come first in the returned diagnostics, followed by
/// parsing errors, each group in source order.
pub fn parse(source: &str) -> Program {
    info!(bytes = source.len(); "Parsing source");

    let (tokens, mut diagnostics) = scan(source).into_parts();
    debug!(tokens = tokens.len(), scan_errors = diagnostics.len(); "Source scanned");

    let (statements, parse_diagnostics) = parse_tokens(&tokens, source).into_parts();
    diagnostics.extend(parse_diagnostics);
    debug!(
        statements = statements.len(),
        errors = diagnostics.len();
        "Source parsed"
    );

    Program::new(statements, diagnostics)
}
