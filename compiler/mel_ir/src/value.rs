//! Evaluation results.

use std::rc::Rc;

use crate::{Closure, Expr};

/// The result of evaluating an expression.
///
/// Only literals and closures are legal results; every other [`Expr`]
/// variant reduces to one of these.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Literal(i64),
    Closure(Closure),
}

impl Value {
    /// Short variant name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Literal(_) => "literal",
            Value::Closure(_) => "function",
        }
    }

    /// The closure, if this is a function.
    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Closure(closure) => Some(closure),
            Value::Literal(_) => None,
        }
    }

    /// Turn the value back into an expression so it can be bound.
    ///
    /// Evaluating the result yields this value again.
    pub fn into_expr(self) -> Rc<Expr> {
        Rc::new(match self {
            Value::Literal(n) => Expr::Literal(n),
            Value::Closure(closure) => Expr::Closure(closure),
        })
    }
}
