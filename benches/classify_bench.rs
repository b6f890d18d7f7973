use criterion::{criterion_group, criterion_main, Criterion};
use jitstress_runner::core::classify::classify_output;
use std::hint::black_box;

fn passing_output() -> String {
    let mut out = String::new();
    for test in 0..500 {
        for scenario in 0..8 {
            out.push_str(&format!("Beginning scenario: Vector128_{test}_{scenario}\n"));
            out.push_str("  validating results\n");
        }
        out.push_str(&format!("Passed test: Vector128_{test}\n"));
    }
    out
}

fn failing_output() -> String {
    let mut out = passing_output();
    out.push_str("Test failed: Vector128_Add\n  expected 1 got 2\n   at Tests.Add() in Program.cs:line 40\n\n");
    out
}

fn bench_classify_output(c: &mut Criterion) {
    let passing = passing_output();
    let failing = failing_output();

    c.bench_function("classify_passing_output", |b| {
        b.iter(|| classify_output(black_box(&passing)))
    });
    c.bench_function("classify_failing_output", |b| {
        b.iter(|| classify_output(black_box(&failing)))
    });
}

criterion_group!(benches, bench_classify_output);
criterion_main!(benches);
