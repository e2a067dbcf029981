//! Criterion benchmarks for criteria compilation.
//!
//! Covers value escaping, single-criteria compilation and batch compilation
//! on and off the rayon pool.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use ckan_solr::criteria::{Criteria, Range, Scalar};
use ckan_solr::query::{CompilerConfig, QueryCompiler, sanitize};

/// Generate test criteria for benchmarking.
fn generate_test_criteria(count: usize) -> Vec<Criteria> {
    let words = [
        "economy", "health", "open data", "transport", "a*b", "AND", "env-2024", "c:\\temp",
    ];

    (0..count)
        .map(|i| {
            let word = words[i % words.len()];
            let criteria = Criteria::new(format!("field_{}", i % 16))
                .equals(word)
                .contains(word)
                .starts_with(word);
            if i % 3 == 0 {
                criteria.between(Range::new(
                    Some(Scalar::from(i as i64)),
                    None,
                    true,
                    false,
                ))
            } else {
                criteria
            }
        })
        .collect()
}

/// Benchmark escaping and quoting.
fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    group.bench_function("sanitize_plain", |b| {
        b.iter(|| black_box(sanitize(black_box("economy"))))
    });

    group.bench_function("sanitize_reserved", |b| {
        b.iter(|| black_box(sanitize(black_box("(a || b) && c:d \"quoted\""))))
    });

    group.finish();
}

/// Benchmark compilation.
fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    let criteria = generate_test_criteria(1000);
    let compiler = QueryCompiler::new();

    group.bench_function("compile_single", |b| {
        b.iter(|| black_box(compiler.compile(black_box(&criteria[0]))))
    });

    group.throughput(Throughput::Elements(criteria.len() as u64));
    group.bench_function("compile_all_sequential", |b| {
        let sequential = QueryCompiler::with_config(
            CompilerConfig::default().with_parallel_threshold(usize::MAX),
        );
        b.iter(|| black_box(sequential.compile_all(black_box(&criteria))))
    });

    group.bench_function("compile_all_parallel", |b| {
        let parallel =
            QueryCompiler::with_config(CompilerConfig::default().with_parallel_threshold(1));
        b.iter(|| black_box(parallel.compile_all(black_box(&criteria))))
    });

    group.finish();
}

criterion_group!(benches, bench_escape, bench_compile);
criterion_main!(benches);
