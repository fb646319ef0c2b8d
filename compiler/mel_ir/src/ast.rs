//! Expression tree.
//!
//! One enum covers every form of the language. `Literal` and `Closure` double
//! as runtime values (see [`Value`](crate::Value)); all other variants only
//! ever appear in parsed programs.

use std::mem;
use std::rc::Rc;

use crate::{Environment, Name};

/// A mel expression.
///
/// Children are `Rc<Expr>`: the tree is never mutated after parsing, and the
/// evaluator stores unevaluated subtrees in environments by bumping a count
/// instead of copying.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `(val N)`
    Literal(i64),
    /// `(var ID)`
    Variable(Name),
    /// `(add A B)`
    Add(Rc<Expr>, Rc<Expr>),
    /// `(sub A B)`
    Subtract(Rc<Expr>, Rc<Expr>),
    /// `(if A B then T else E)`: takes `then_branch` when `A > B`.
    Conditional {
        cmp_left: Rc<Expr>,
        cmp_right: Rc<Expr>,
        then_branch: Rc<Expr>,
        else_branch: Rc<Expr>,
    },
    /// `(let ID V B)`: binds `name` to the unevaluated `bound` for `body`.
    Binding {
        name: Name,
        bound: Rc<Expr>,
        body: Rc<Expr>,
    },
    /// `(function ID BODY)`
    Closure(Closure),
    /// `(call F A)`
    Application { callee: Rc<Expr>, arg: Rc<Expr> },
}

impl Expr {
    pub fn literal(value: i64) -> Self {
        Expr::Literal(value)
    }

    pub fn variable(name: Name) -> Self {
        Expr::Variable(name)
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Rc::new(left), Rc::new(right))
    }

    pub fn subtract(left: Expr, right: Expr) -> Self {
        Expr::Subtract(Rc::new(left), Rc::new(right))
    }

    pub fn conditional(cmp_left: Expr, cmp_right: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Conditional {
            cmp_left: Rc::new(cmp_left),
            cmp_right: Rc::new(cmp_right),
            then_branch: Rc::new(then_branch),
            else_branch: Rc::new(else_branch),
        }
    }

    pub fn binding(name: Name, bound: Expr, body: Expr) -> Self {
        Expr::Binding {
            name,
            bound: Rc::new(bound),
            body: Rc::new(body),
        }
    }

    /// A function literal with nothing captured yet.
    pub fn function(param: Name, body: Expr) -> Self {
        Expr::Closure(Closure::new(param, Rc::new(body)))
    }

    pub fn application(callee: Expr, arg: Expr) -> Self {
        Expr::Application {
            callee: Rc::new(callee),
            arg: Rc::new(arg),
        }
    }

    /// Short variant name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "literal",
            Expr::Variable(_) => "variable",
            Expr::Add(..) => "addition",
            Expr::Subtract(..) => "subtraction",
            Expr::Conditional { .. } => "conditional",
            Expr::Binding { .. } => "binding",
            Expr::Closure(_) => "function",
            Expr::Application { .. } => "application",
        }
    }
}

impl Expr {
    /// Move every uniquely owned child into `out`, leaving a shared leaf in
    /// its place. Shared children are left alone: dropping them only
    /// decrements a count.
    fn take_unique_children(&mut self, out: &mut Vec<Rc<Expr>>) {
        let mut take = |child: &mut Rc<Expr>| {
            if Rc::strong_count(child) == 1 && Rc::weak_count(child) == 0 {
                out.push(mem::replace(child, dropped_leaf()));
            }
        };
        match self {
            Expr::Literal(_) | Expr::Variable(_) => {}
            Expr::Add(left, right) | Expr::Subtract(left, right) => {
                take(left);
                take(right);
            }
            Expr::Conditional {
                cmp_left,
                cmp_right,
                then_branch,
                else_branch,
            } => {
                take(cmp_left);
                take(cmp_right);
                take(then_branch);
                take(else_branch);
            }
            Expr::Binding { bound, body, .. } => {
                take(bound);
                take(body);
            }
            Expr::Closure(closure) => take(&mut closure.body),
            Expr::Application { callee, arg } => {
                take(callee);
                take(arg);
            }
        }
    }
}

thread_local! {
    static DROPPED_LEAF: Rc<Expr> = Rc::new(Expr::Literal(0));
}

/// Stand-in for a child that has been moved out during drop.
fn dropped_leaf() -> Rc<Expr> {
    DROPPED_LEAF
        .try_with(Rc::clone)
        .unwrap_or_else(|_| Rc::new(Expr::Literal(0)))
}

impl Drop for Expr {
    // Unlink uniquely owned subtrees onto a work list so a deeply nested
    // program does not recurse once per level on drop.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_unique_children(&mut pending);
        while let Some(child) = pending.pop() {
            if let Ok(mut expr) = Rc::try_unwrap(child) {
                expr.take_unique_children(&mut pending);
            }
        }
    }
}

/// A one-argument function.
///
/// `captured` is `None` for a function literal straight out of the parser and
/// becomes `Some` exactly once, when a `let` binds the function.
#[derive(Clone, Debug, PartialEq)]
pub struct Closure {
    pub param: Name,
    pub body: Rc<Expr>,
    captured: Option<Environment>,
}

impl Closure {
    pub fn new(param: Name, body: Rc<Expr>) -> Self {
        Closure {
            param,
            body,
            captured: None,
        }
    }

    /// Copy of this closure with `env` as its captured snapshot.
    ///
    /// The body is shared, not copied.
    #[must_use]
    pub fn capture(&self, env: Environment) -> Self {
        Closure {
            param: self.param,
            body: Rc::clone(&self.body),
            captured: Some(env),
        }
    }

    /// Whether a snapshot has been taken.
    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    /// The environment the body runs in, before the parameter is bound.
    ///
    /// Empty when the closure was never bound by a `let`.
    pub fn captured_env(&self) -> Environment {
        self.captured.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
