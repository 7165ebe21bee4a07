//! Micro-benchmarks for the hot paths: evaluation and generation.

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use digitle::{evaluate, generate, Difficulty};

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_two_operator", |b| {
        b.iter(|| evaluate(black_box("12*4+6")))
    });
}

fn bench_generate(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    c.bench_function("generate_hard", |b| {
        b.iter(|| generate(black_box(day), Difficulty::Hard))
    });
}

criterion_group!(benches, bench_evaluate, bench_generate);
criterion_main!(benches);
