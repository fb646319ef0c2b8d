use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

fn lit(value: i64) -> Rc<Expr> {
    Rc::new(Expr::literal(value))
}

#[test]
fn empty_environment_has_no_bindings() {
    let interner = StringInterner::new();
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.lookup(interner.intern("x")), None);
}

#[test]
fn bind_then_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let env = Environment::new().bind(x, lit(42));
    assert_eq!(env.lookup(x).map(|e| (**e).clone()), Some(Expr::Literal(42)));
    assert!(env.contains(x));
}

#[test]
fn bind_leaves_original_untouched() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let outer = Environment::new().bind(x, lit(1));
    let inner = outer.bind(y, lit(2));

    assert!(inner.contains(y));
    assert!(!outer.contains(y));
}

#[test]
fn newer_binding_shadows_older() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let outer = Environment::new().bind(x, lit(1));
    let inner = outer.bind(x, lit(2));

    assert_eq!(inner.lookup(x).map(|e| (**e).clone()), Some(Expr::Literal(2)));
    assert_eq!(outer.lookup(x).map(|e| (**e).clone()), Some(Expr::Literal(1)));
}

#[test]
fn sibling_extensions_are_independent() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let a = interner.intern("a");
    let b = interner.intern("b");

    let base = Environment::new().bind(x, lit(0));
    let left = base.bind(a, lit(1));
    let right = base.bind(b, lit(2));

    assert!(left.contains(a) && !left.contains(b));
    assert!(right.contains(b) && !right.contains(a));
}

#[test]
fn names_skip_shadowed_bindings() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let env = Environment::new()
        .bind(x, lit(1))
        .bind(y, lit(2))
        .bind(x, lit(3));

    assert_eq!(env.names(), vec![x, y]);
}

#[test]
fn structural_equality() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let a = Environment::new().bind(x, lit(1));
    let b = Environment::new().bind(x, lit(1));
    let c = Environment::new().bind(x, lit(2));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Environment::new());
}

#[test]
fn long_chain_drops_without_recursing() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    for i in 0..200_000 {
        env = env.bind(x, lit(i));
    }
    assert_eq!(env.lookup(x).map(|e| (**e).clone()), Some(Expr::Literal(199_999)));
    drop(env);
}
