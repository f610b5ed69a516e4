//! Analyser Benchmarks
//!
//! Measures throughput of the expression analyser.
//! Run with: `cargo bench --package calc-lex`

use calc_lex::analyse;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn token_count(source: &str) -> usize {
    analyse(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_analyse_short(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyse");

    let source = "0.02+0-0.2346356346346*234234/0.234234";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_sum", |b| b.iter(|| token_count(black_box("1+1"))));

    group.bench_function("mixed", |b| b.iter(|| token_count(black_box(source))));

    group.finish();
}

fn bench_analyse_long(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyse_long");

    let spaced = vec!["12345 * 0.5"; 1_000].join(" - ");
    group.throughput(Throughput::Bytes(spaced.len() as u64));
    group.bench_function("spaced_terms", |b| b.iter(|| token_count(black_box(&spaced))));

    let fraction = format!("0.{}", "7".repeat(4_096));
    group.bench_function("long_fraction", |b| b.iter(|| token_count(black_box(&fraction))));

    group.finish();
}

fn bench_analyse_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyse_rejections");

    group.bench_function("early", |b| b.iter(|| token_count(black_box("+1+2+3"))));

    let late = format!("{}+00", vec!["1"; 500].join("+"));
    group.bench_function("late", |b| b.iter(|| token_count(black_box(&late))));

    group.finish();
}

criterion_group!(
    benches,
    bench_analyse_short,
    bench_analyse_long,
    bench_analyse_rejections
);
criterion_main!(benches);
