//! Benchmarks for the allocation optimizer.
//!
//! Run with: cargo bench -p bondopt-optimizer

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use bondopt_core::{BondRecord, Metric, OptimizationParameters, Sector, SectorBonds};
use bondopt_optimizer::{build_allocation_model, optimize};
use chrono::NaiveDate;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_universe(size: usize) -> SectorBonds {
    let records = (0..size).map(|i| {
        let sector = Sector::all()[i % 3];
        let duration = Decimal::new(15 + (i as i64 * 37) % 95, 1);
        let oas = Decimal::from(40 + (i as i64 * 53) % 260);
        let ytm = Decimal::new(250 + (i as i64 * 29) % 400, 2);
        BondRecord::new(
            format!("BENCH{i:05}"),
            sector,
            format!("T{}", i % 97),
            NaiveDate::from_ymd_opt(2026 + (i % 20) as i32, 3, 15).unwrap(),
        )
        .with_effective_duration(duration)
        .with_oas(oas)
        .with_ytm(ytm)
    });
    SectorBonds::from_records(records)
}

fn bench_build_model(c: &mut Criterion) {
    let params = OptimizationParameters::new(0.01, 5.0, 0.35, Metric::Oas);
    let mut group = c.benchmark_group("build_allocation_model");

    for size in [100, 1_000, 3_000] {
        let bonds = create_universe(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bonds, |b, bonds| {
            b.iter(|| build_allocation_model(black_box(bonds), black_box(&params)))
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let params = OptimizationParameters::new(0.01, 5.0, 0.35, Metric::Oas);
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);

    for size in [100, 1_000] {
        let bonds = create_universe(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bonds, |b, bonds| {
            b.iter(|| optimize(black_box(bonds), black_box(&params)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_model, bench_optimize);
criterion_main!(benches);
