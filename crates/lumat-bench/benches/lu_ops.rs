//! Criterion micro-benchmarks for multiply, determinant, and inverse.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lumat_arena::HeapAllocator;
use lumat_bench::{build_matrix, reference_profile, stress_profile, BenchProfile};
use lumat_matrix::{determinant, inverse, multiply};

fn profiles() -> [BenchProfile; 3] {
    let mid = BenchProfile {
        dimension: 32,
        ..reference_profile(7)
    };
    [reference_profile(7), mid, stress_profile(7)]
}

fn bench_multiply(c: &mut Criterion) {
    let heap = HeapAllocator;
    let mut group = c.benchmark_group("multiply");
    for profile in profiles() {
        let a = build_matrix(&profile, &heap).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(profile.dimension), &a, |b, a| {
            b.iter(|| multiply(black_box(a), black_box(a)).unwrap());
        });
    }
    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let heap = HeapAllocator;
    let mut group = c.benchmark_group("determinant");
    for profile in profiles() {
        let a = build_matrix(&profile, &heap).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(profile.dimension), &a, |b, a| {
            b.iter(|| determinant(black_box(a)).unwrap());
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let heap = HeapAllocator;
    let mut group = c.benchmark_group("inverse");
    for profile in profiles() {
        let a = build_matrix(&profile, &heap).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(profile.dimension), &a, |b, a| {
            b.iter(|| inverse(black_box(a)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_determinant, bench_inverse);
criterion_main!(benches);
