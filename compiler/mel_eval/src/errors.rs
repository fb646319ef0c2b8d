//! Runtime error types.
//!
//! Evaluation fails in exactly two ways: a name is not bound (name error) or
//! a value has the wrong shape for where it is used (type error). Factory
//! functions build both the structured `kind` and the display `message`, so
//! call sites stay one-liners.

use mel_ir::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse error taxonomy reported to the user.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// An unbound variable reference.
    Name,
    /// An operand or callee of the wrong kind.
    Type,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Name => f.write_str("name error"),
            ErrorCategory::Type => f.write_str("type error"),
        }
    }
}

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },

    /// An arithmetic or comparison operand did not reduce to a literal.
    #[error("expected a literal, got a {found}")]
    ExpectedLiteral { found: &'static str },

    /// The callee of `call` did not reduce to a function.
    #[error("attempted to call a non-function value (a {found})")]
    NotCallable { found: &'static str },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalErrorKind::UnboundVariable { .. } => ErrorCategory::Name,
            EvalErrorKind::ExpectedLiteral { .. } | EvalErrorKind::NotCallable { .. } => {
                ErrorCategory::Type
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = format!("{}: {kind}", kind.category());
        EvalError { kind, message }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Reference to a name with no binding in scope.
#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

/// Arithmetic or comparison operand that is not a literal.
#[cold]
pub fn expected_literal(found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedLiteral { found })
}

/// Application of something that is not a function.
#[cold]
pub fn not_callable(found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { found })
}

#[cfg(test)]
mod tests;
