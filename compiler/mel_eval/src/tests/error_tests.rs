use super::*;
use crate::{ErrorCategory, EvalErrorKind};
use pretty_assertions::assert_eq;

#[test]
fn unbound_variable_is_a_name_error() {
    let err = run_err("(var x)");
    assert_eq!(err.category(), ErrorCategory::Name);
    assert_eq!(err.to_string(), "name error: unbound variable `x`");
}

#[test]
fn calling_a_literal_is_a_type_error() {
    let err = run_err("(call (val 3) (val 4))");
    assert_eq!(err.kind, EvalErrorKind::NotCallable { found: "literal" });
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn adding_a_function_is_a_type_error() {
    let err = run_err("(add (function x (var x)) (val 1))");
    assert_eq!(err.kind, EvalErrorKind::ExpectedLiteral { found: "function" });
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn comparing_a_function_is_a_type_error() {
    let err = run_err("(if (val 1) (function x (var x)) then (val 1) else (val 0))");
    assert_eq!(err.kind, EvalErrorKind::ExpectedLiteral { found: "function" });
}

#[test]
fn left_operand_fails_first() {
    let err = run_err("(sub (var a) (var b))");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "a".to_string()
        }
    );
}

#[test]
fn callee_fails_before_argument() {
    let err = run_err("(call (var f) (var arg))");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "f".to_string()
        }
    );
}

#[test]
fn argument_error_surfaces_from_call() {
    let err = run_err("(call (function x (val 0)) (var missing))");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn error_in_reevaluated_binding_is_reported_at_use() {
    // `y` is bound to an ill-typed expression; the failure happens at `(var y)`.
    let err = run_err("(let y (add (val 1) (function z (var z))) (var y))");
    assert_eq!(err.kind, EvalErrorKind::ExpectedLiteral { found: "function" });
}
