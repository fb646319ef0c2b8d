//! Parse error types.
//!
//! Every parse failure is a syntax error: the input ran out mid-expression,
//! a keyword is not one of the eight forms, or a `val` has no usable integer.
//! Errors carry the span of the offending text so the driver can point at it.

use mel_ir::Span;

/// What went wrong while reading.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("unknown expression keyword `{keyword}`")]
    UnknownKeyword { keyword: String },

    #[error("invalid integer literal `{text}`")]
    InvalidInteger { text: String },
}

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("syntax error: {kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Input ended at `offset` while `expected` was still needed.
    pub fn unexpected_eof(expected: &'static str, offset: usize) -> Self {
        Self::new(ParseErrorKind::UnexpectedEof { expected }, Span::point(offset))
    }

    pub fn unknown_keyword(keyword: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnknownKeyword {
                keyword: keyword.to_string(),
            },
            span,
        )
    }

    pub fn invalid_integer(text: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::InvalidInteger {
                text: text.to_string(),
            },
            span,
        )
    }
}
