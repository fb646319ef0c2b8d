//! Mel Parse - reader for mel program text.
//!
//! Grammar (whitespace-insensitive between tokens except inside identifiers):
//!
//! ```text
//! E := (val INTEGER) | (var IDENT) | (add E E) | (sub E E)
//!    | (if E E then E else E) | (let IDENT E E) | (function IDENT E)
//!    | (call E E)
//! ```
//!
//! [`parse_program`] is the entry point; [`Parser`] exposes the reader for
//! callers that want to read several expressions from one text.

mod cursor;
mod error;
mod grammar;
mod keyword;

pub use cursor::{is_whitespace, Cursor};
pub use error::{ParseError, ParseErrorKind};
pub use grammar::Parser;
pub use keyword::Keyword;

use mel_ir::{Expr, StringInterner};

/// Read one expression from `source`.
///
/// Text after the expression is ignored.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_program(source: &str, interner: &StringInterner) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(source, interner);
    let expr = parser.parse_expr()?;

    let rest = parser.remaining();
    if memchr::memchr(b'(', rest.as_bytes()).is_some() {
        tracing::debug!(
            offset = parser.position(),
            "ignoring input after the first complete expression"
        );
    }
    Ok(expr)
}
