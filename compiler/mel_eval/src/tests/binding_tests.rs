use super::*;
use pretty_assertions::assert_eq;

#[test]
fn let_binds_for_body() {
    assert_eq!(run_literal("(let x (val 4) (add (var x) (var x)))"), 8);
}

#[test]
fn shadowing_takes_innermost() {
    assert_eq!(
        run_literal("(let x (val 1) in (let x (val 2) in (var x)))"),
        2
    );
}

#[test]
fn binding_does_not_leak_to_sibling() {
    // The left operand binds y; the right operand must not see it.
    let err = run_err("(add (let y (val 1) (var y)) (var y))");
    assert_eq!(
        err.kind,
        crate::EvalErrorKind::UnboundVariable {
            name: "y".to_string()
        }
    );
}

#[test]
fn binding_does_not_leak_to_enclosing_scope() {
    assert_eq!(
        run_literal("(let x (val 1) (add (let x (val 100) (var x)) (var x)))"),
        101
    );
}

#[test]
fn bound_expression_is_reevaluated_at_each_reference() {
    // `y` is bound to `(var x)`; each reference resolves `x` where it is used.
    assert_eq!(
        run_literal("(let x (val 1) (let y (var x) (let x (val 50) (var y))))"),
        50
    );
}

#[test]
fn bound_expression_may_reference_later_bindings() {
    assert_eq!(
        run_literal("(let y (add (var x) (val 1)) (let x (val 41) (var y)))"),
        42
    );
}

#[test]
fn unused_binding_with_bad_expression_is_harmless() {
    // The bound expression is never evaluated, so its unbound name is fine.
    assert_eq!(run_literal("(let x (var nowhere) (val 3))"), 3);
}

#[test]
fn binding_in_printed_form_evaluates_the_same() {
    assert_eq!(
        run_literal("(let x = (val 6) in (sub (var x) (val 1)))"),
        5
    );
}

#[test]
fn body_result_is_returned_unchanged() {
    let value = run("(let x (val 1) (function y (var x)))").unwrap();
    assert!(value.as_closure().is_some());
}
