use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unbound_variable_has_correct_kind() {
    let err = unbound_variable("q");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "q".to_string()
        }
    );
    assert_eq!(err.category(), ErrorCategory::Name);
    assert_eq!(err.message, "name error: unbound variable `q`");
}

#[test]
fn expected_literal_has_correct_kind() {
    let err = expected_literal("function");
    assert_eq!(err.kind, EvalErrorKind::ExpectedLiteral { found: "function" });
    assert_eq!(err.category(), ErrorCategory::Type);
    assert_eq!(err.message, "type error: expected a literal, got a function");
}

#[test]
fn not_callable_has_correct_kind() {
    let err = not_callable("literal");
    assert_eq!(err.kind, EvalErrorKind::NotCallable { found: "literal" });
    assert_eq!(err.category(), ErrorCategory::Type);
    assert_eq!(
        err.to_string(),
        "type error: attempted to call a non-function value (a literal)"
    );
}
