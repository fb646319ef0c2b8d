//! Parse and evaluate benchmarks for mel.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mel_ir::StringInterner;
use std::hint::black_box;

/// Closure capture and application.
const CLOSURE_CALL: &str = "(let x (val 10) in (let f (function y (add (var x) (var y))) in \
                            (let x (val 999) in (call (var f) (val 1)))))";

/// A chain of `n` nested additions.
fn generate_add_chain(n: usize) -> String {
    let mut source = "(val 0)".to_string();
    for i in 0..n {
        source = format!("(add {source} (val {i}))");
    }
    source
}

/// `n` nested lets, each referencing the previous binding.
///
/// Bound expressions re-evaluate at each reference, so work grows with depth.
fn generate_let_chain(n: usize) -> String {
    let mut source = format!("(var v{n})");
    for i in (1..=n).rev() {
        source = format!("(let v{i} (add (var v{}) (val 1)) {source})", i - 1);
    }
    format!("(let v0 (val 0) {source})")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for n in [10, 100, 1000] {
        let source = generate_add_chain(n);
        group.bench_with_input(BenchmarkId::new("add_chain", n), &source, |b, source| {
            b.iter(|| {
                let interner = StringInterner::new();
                mel_parse::parse_program(black_box(source), &interner)
            });
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    c.bench_function("run/closure_call", |b| {
        b.iter(|| melc::run_source(black_box(CLOSURE_CALL)));
    });

    let mut group = c.benchmark_group("run/let_chain");
    for n in [10, 50, 200] {
        let source = generate_let_chain(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, source| {
            b.iter(|| melc::run_source(black_box(source)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_run);
criterion_main!(benches);
