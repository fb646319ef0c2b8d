#![deny(clippy::arithmetic_side_effects)]
//! Mel Eval - evaluator for mel programs.
//!
//! # Architecture
//!
//! - [`Interpreter`]: structural recursion over [`Expr`], one match arm per form
//! - [`Environment`](mel_ir::Environment): persistent scopes from `mel_ir`
//! - [`EvalError`]: name and type errors, built through the factory functions
//!   in [`errors`]
//! - [`EvalCounters`]: optional work counters for `--profile`
//!
//! Integer arithmetic wraps on overflow.

mod diagnostics;
pub mod errors;
mod interpreter;

pub use diagnostics::EvalCounters;
pub use errors::{
    expected_literal, not_callable, unbound_variable, ErrorCategory, EvalError, EvalErrorKind,
    EvalResult,
};
pub use interpreter::Interpreter;

use mel_ir::{Environment, Expr, StringInterner};

/// Evaluate a whole program under an empty environment.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_program(root: &Expr, interner: &StringInterner) -> EvalResult {
    Interpreter::new(interner).eval(root, &Environment::new())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
