use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn constructors_build_expected_variants() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let expr = Expr::binding(x, Expr::literal(1), Expr::add(Expr::variable(x), Expr::literal(2)));
    let Expr::Binding { name, bound, body } = &expr else {
        panic!("expected binding, got {expr:?}");
    };
    assert_eq!(*name, x);
    assert_eq!(**bound, Expr::Literal(1));
    assert_eq!(
        **body,
        Expr::Add(Rc::new(Expr::Variable(x)), Rc::new(Expr::Literal(2)))
    );
}

#[test]
fn parsed_function_has_no_capture() {
    let interner = StringInterner::new();
    let y = interner.intern("y");

    let function = Expr::function(y, Expr::variable(y));
    let Expr::Closure(closure) = &function else {
        panic!("expected closure");
    };
    assert!(!closure.is_captured());
    assert!(closure.captured_env().is_empty());
}

#[test]
fn capture_shares_body_and_keeps_original_untouched() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let closure = Closure::new(y, Rc::new(Expr::variable(x)));
    let env = Environment::new().bind(x, Rc::new(Expr::literal(10)));
    let captured = closure.capture(env.clone());

    assert!(captured.is_captured());
    assert!(!closure.is_captured());
    assert!(Rc::ptr_eq(&captured.body, &closure.body));
    assert_eq!(captured.captured_env(), env);
}

#[test]
fn kind_names() {
    let interner = StringInterner::new();
    let f = interner.intern("f");

    assert_eq!(Expr::literal(0).kind_name(), "literal");
    assert_eq!(Expr::variable(f).kind_name(), "variable");
    assert_eq!(Expr::function(f, Expr::literal(0)).kind_name(), "function");
    assert_eq!(
        Expr::application(Expr::variable(f), Expr::literal(0)).kind_name(),
        "application"
    );
}

#[test]
fn dropping_deep_tree_does_not_recurse() {
    let mut expr = Expr::literal(0);
    for _ in 0..300_000 {
        expr = Expr::add(Expr::literal(1), expr);
    }
    drop(expr);
}

#[test]
fn dropping_tree_keeps_shared_subtrees_alive() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let shared = Rc::new(Expr::add(Expr::variable(x), Expr::literal(1)));
    let outer = Expr::Subtract(Rc::clone(&shared), Rc::new(Expr::literal(2)));
    drop(outer);

    assert_eq!(Rc::strong_count(&shared), 1);
    assert_eq!(
        *shared,
        Expr::Add(Rc::new(Expr::Variable(x)), Rc::new(Expr::Literal(1)))
    );
}
