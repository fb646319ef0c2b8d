//! The evaluator.
//!
//! `Interpreter::eval` reduces an expression under an environment to a
//! [`Value`]. Environments are persistent, so each recursive call simply
//! receives the snapshot it should see: `let` and `call` evaluate their
//! bodies under an extended copy, and nothing a subexpression binds leaks to
//! its caller or its siblings.
//!
//! `let` stores its bound expression unevaluated; each `var` reference
//! re-evaluates it under the environment in force at the reference. The one
//! exception is a bound function literal, which captures the current
//! environment when the `let` runs and keeps that snapshot for every later
//! call.

use std::rc::Rc;

use mel_ir::{Closure, Environment, Expr, Name, StringInterner, Value};
use mel_stack::ensure_sufficient_stack;

use crate::diagnostics::EvalCounters;
use crate::errors::{expected_literal, not_callable, unbound_variable, EvalError, EvalResult};

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    counters: Option<EvalCounters>,
}

impl<'a> Interpreter<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Interpreter {
            interner,
            counters: None,
        }
    }

    /// Enable [`EvalCounters`].
    #[must_use]
    pub fn with_counters(mut self) -> Self {
        self.counters = Some(EvalCounters::default());
        self
    }

    /// Counters collected so far, `None` unless enabled.
    pub fn counters(&self) -> Option<&EvalCounters> {
        self.counters.as_ref()
    }

    /// Evaluate `expr` under `env`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        if let Some(counters) = self.counters.as_mut() {
            counters.count_expression();
        }

        match expr {
            Expr::Literal(n) => Ok(Value::Literal(*n)),
            Expr::Variable(name) => self.eval_variable(*name, env),
            Expr::Add(left, right) => {
                let left = self.eval_literal(left, env)?;
                let right = self.eval_literal(right, env)?;
                Ok(Value::Literal(left.wrapping_add(right)))
            }
            Expr::Subtract(left, right) => {
                let left = self.eval_literal(left, env)?;
                let right = self.eval_literal(right, env)?;
                Ok(Value::Literal(left.wrapping_sub(right)))
            }
            Expr::Conditional {
                cmp_left,
                cmp_right,
                then_branch,
                else_branch,
            } => {
                let left = self.eval_literal(cmp_left, env)?;
                let right = self.eval_literal(cmp_right, env)?;
                // Strictly greater; ties take the else branch.
                if left > right {
                    self.eval(then_branch, env)
                } else {
                    self.eval(else_branch, env)
                }
            }
            Expr::Binding { name, bound, body } => self.eval_binding(*name, bound, body, env),
            Expr::Closure(closure) => Ok(Value::Closure(closure.clone())),
            Expr::Application { callee, arg } => self.eval_application(callee, arg, env),
        }
    }

    fn eval_literal(&mut self, expr: &Expr, env: &Environment) -> Result<i64, EvalError> {
        match self.eval(expr, env)? {
            Value::Literal(n) => Ok(n),
            other => Err(expected_literal(other.kind_name())),
        }
    }

    fn eval_variable(&mut self, name: Name, env: &Environment) -> EvalResult {
        if let Some(counters) = self.counters.as_mut() {
            counters.count_variable_lookup();
        }
        let Some(bound) = env.lookup(name) else {
            return Err(unbound_variable(self.interner.lookup(name)));
        };
        self.eval(bound, env)
    }

    fn eval_binding(
        &mut self,
        name: Name,
        bound: &Rc<Expr>,
        body: &Expr,
        env: &Environment,
    ) -> EvalResult {
        let stored = match bound.as_ref() {
            Expr::Closure(closure) => Rc::new(Expr::Closure(self.capture(name, closure, env))),
            _ => Rc::clone(bound),
        };
        let scope = env.bind(name, stored);
        self.eval(body, &scope)
    }

    fn capture(&mut self, name: Name, closure: &Closure, env: &Environment) -> Closure {
        if let Some(counters) = self.counters.as_mut() {
            counters.count_capture();
        }
        tracing::debug!(
            function = self.interner.lookup(name),
            visible = env.names().len(),
            "capturing environment"
        );
        closure.capture(env.clone())
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn eval_application(&mut self, callee: &Expr, arg: &Expr, env: &Environment) -> EvalResult {
        let closure = match self.eval(callee, env)? {
            Value::Closure(closure) => closure,
            other => return Err(not_callable(other.kind_name())),
        };
        if let Some(counters) = self.counters.as_mut() {
            counters.count_function_call();
        }

        // The argument is evaluated eagerly, in the caller's environment, and
        // bound into a fresh copy of the captured one.
        let arg = self.eval(arg, env)?;
        let scope = closure.captured_env().bind(closure.param, arg.into_expr());
        self.eval(&closure.body, &scope)
    }
}

