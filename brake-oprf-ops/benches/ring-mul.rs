//! Benchmarks for negacyclic ring multiplication.
#![cfg(feature = "benchmark")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use brake_oprf_ops::primitives::poly::{
    naive_cyclotomic_mul, rec_karatsuba_mul, test::gen::rand_poly, Poly, PolyConf,
};
use brake_oprf_ops::FullRes;

// Configure Criterion:
// Define one group for each equivalent operation, so we can compare their times.
criterion_group! {
    name = bench_ring_multiplication;
    // This can be any expression that returns a `Criterion` object.
    config = Criterion::default().sample_size(40);
    // List equivalent multiplication implementations here.
    targets = bench_naive_mul, bench_karatsuba_mul
}

// List groups here.
criterion_main!(bench_ring_multiplication);

/// Run schoolbook multiplication as a Criterion benchmark with random data.
pub fn bench_naive_mul(settings: &mut Criterion) {
    // Setup: generate random operands at the deployment ring dimension
    let p1: Poly<FullRes> = rand_poly(FullRes::MAX_POLY_DEGREE - 1);
    let p2: Poly<FullRes> = rand_poly(FullRes::MAX_POLY_DEGREE - 1);

    settings.bench_with_input(
        BenchmarkId::new("Schoolbook multiplication", "Random input"),
        &(p1, p2),
        |benchmark, (p1, p2)| benchmark.iter_with_large_drop(|| naive_cyclotomic_mul(p1, p2)),
    );
}

/// Run recursive Karatsuba multiplication as a Criterion benchmark with random data.
pub fn bench_karatsuba_mul(settings: &mut Criterion) {
    let p1: Poly<FullRes> = rand_poly(FullRes::MAX_POLY_DEGREE - 1);
    let p2: Poly<FullRes> = rand_poly(FullRes::MAX_POLY_DEGREE - 1);

    settings.bench_with_input(
        BenchmarkId::new("Karatsuba multiplication", "Random input"),
        &(p1, p2),
        |benchmark, (p1, p2)| benchmark.iter_with_large_drop(|| rec_karatsuba_mul(p1, p2)),
    );
}
