//! Diagnostics reported by the scanner and parser.
//!
//! Neither phase stops at the first problem. Each one records a
//! [`Diagnostic`] and keeps going, so a single run reports every error it can
//! find. The diagnostics of a run are wrapped in a [`ParseError`] when a
//! caller wants a plain `Result`.
//!
//! # Example
//!
//! ```
//! # use seqdraw_parser::error::{Diagnostic, ErrorCode};
//! # use seqdraw_parser::Span;
//! let diag = Diagnostic::error("expected '=', found `->`")
//!     .with_code(ErrorCode::E100)
//!     .with_line(3)
//!     .with_label(Span::new(40..42), "expected '=' here")
//!     .with_secondary_label(Span::new(30..35), "in this declaration");
//!
//! assert_eq!(diag.to_string(), "error[E100]: expected '=', found `->` (line 3)");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelRole};
pub use parse_error::ParseError;
