//! Mel IR - syntax tree and runtime value types for the mel interpreter.
//!
//! Everything the later phases share lives here:
//!
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`Span`]: byte ranges into the program text
//! - [`Expr`] / [`Closure`]: the expression tree produced by the parser
//! - [`Value`]: the closed set of evaluation results
//! - [`Environment`]: persistent name → expression mapping used by the evaluator
//!
//! The tree is immutable once built. Children are reference counted so the
//! evaluator can store an unevaluated subexpression in an environment without
//! copying it.

mod ast;
mod environment;
mod interner;
mod name;
mod span;
mod value;

pub use ast::{Closure, Expr};
pub use environment::Environment;
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
pub use value::Value;
