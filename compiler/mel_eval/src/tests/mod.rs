//! Evaluator tests, driven through the reader.

mod binding_tests;
mod error_tests;

use crate::{evaluate_program, EvalError, EvalResult, Interpreter};
use mel_ir::{Environment, StringInterner, Value};
use mel_parse::parse_program;

/// Parse and evaluate `source` with a fresh interner.
fn run(source: &str) -> EvalResult {
    let interner = StringInterner::new();
    let expr = parse_program(source, &interner).unwrap();
    evaluate_program(&expr, &interner)
}

fn run_literal(source: &str) -> i64 {
    match run(source).unwrap() {
        Value::Literal(n) => n,
        other => panic!("expected a literal from {source}, got {other:?}"),
    }
}

fn run_err(source: &str) -> EvalError {
    run(source).unwrap_err()
}

/// Parse and evaluate with counters enabled, returning both.
fn run_counted(source: &str) -> (EvalResult, crate::EvalCounters) {
    let interner = StringInterner::new();
    let expr = parse_program(source, &interner).unwrap();
    let mut interpreter = Interpreter::new(&interner).with_counters();
    let result = interpreter.eval(&expr, &Environment::new());
    let counters = interpreter.counters().cloned().unwrap_or_default();
    (result, counters)
}
