// ============================================================================
// Decimal Matcher Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Literal parsing and digit counting
// 2. Matching - End-to-end matching per constraint policy
// 3. Rejection - Unparseable inputs
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use decimal_matcher::prelude::*;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for num_digits in [8usize, 28, 256].iter() {
        let literal = format!("{}.{}", "7".repeat(num_digits / 2), "3".repeat(num_digits / 2));

        group.bench_with_input(
            BenchmarkId::new("ParsedDecimal", num_digits),
            &literal,
            |b, literal| {
                b.iter(|| {
                    let parsed = ParsedDecimal::parse(black_box(literal)).unwrap();
                    black_box((parsed.precision(), parsed.decimal_places()))
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Matching Benchmarks
// ============================================================================

fn benchmark_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_policy");

    let policies: [(&str, &[u32]); 3] = [
        ("default", &[]),
        ("max_digits", &[11]),
        ("max_digits_and_decimals", &[11, 2]),
    ];

    for (name, params) in policies {
        let matcher = DecimalNumberMatcher::from_params(params).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut sink = NoOpErrorSink;
                matcher.match_into(black_box(Some("123456.789")), &mut sink);
            });
        });
    }

    group.finish();
}

fn benchmark_rejection(c: &mut Criterion) {
    let matcher = DecimalNumberMatcher::default();

    c.bench_function("match_unparseable", |b| {
        b.iter(|| black_box(matcher.match_input(black_box(Some("12,345.67")))));
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_policies,
    benchmark_rejection
);
criterion_main!(benches);
