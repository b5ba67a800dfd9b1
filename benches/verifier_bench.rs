// ABOUTME: Criterion benchmarks for plan verification
// ABOUTME: Measures single-plan verification by plan length and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the plan verifier.

#![allow(clippy::missing_docs_in_private_items, missing_docs, clippy::expect_used)]

mod common;

use common::fixtures::{request, requests, PlanLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wellplan::config::VerifierConfig;
use wellplan::verification::{normalize_intake, normalize_profile};
use wellplan::PlanVerifier;

fn verifier() -> PlanVerifier {
    PlanVerifier::with_builtin_catalogs(VerifierConfig::default()).expect("built-in catalogs load")
}

fn bench_verify_plan(c: &mut Criterion) {
    let verifier = verifier();
    let mut group = c.benchmark_group("verify_plan");

    for length in [PlanLength::Short, PlanLength::Standard, PlanLength::Long] {
        let request = request(1, length);
        let profile = normalize_profile(&request.profile).expect("fixture profile is valid");
        let intake = normalize_intake(&request.intake, &profile).expect("fixture intake is valid");
        group.throughput(Throughput::Elements(u64::from(length.weeks())));
        group.bench_with_input(
            BenchmarkId::new("weeks", length.weeks()),
            &request.plan,
            |b, plan| {
                b.iter(|| verifier.verify(black_box(&profile), black_box(&intake), plan.clone()));
            },
        );
    }

    group.finish();
}

fn bench_verify_request(c: &mut Criterion) {
    let verifier = verifier();
    let request = request(2, PlanLength::Standard);
    c.bench_function("verify_request_with_normalization", |b| {
        b.iter(|| verifier.verify_request(black_box(&request)));
    });
}

fn bench_verify_batch(c: &mut Criterion) {
    let verifier = verifier();
    let mut group = c.benchmark_group("verify_batch");

    for size in [8_usize, 64, 256] {
        let batch = requests(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| verifier.verify_batch(black_box(batch)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_verify_plan,
    bench_verify_request,
    bench_verify_batch
);
criterion_main!(benches);
