//! Benchmark suite for expiry date calculation.
//!
//! Measures the calculation across pricing paths and the cost of the `tracing`
//! instrumentation when a subscriber is listening.
//!
//! Run with: `cargo bench --bench expiry_calculation`

#![allow(missing_docs, reason = "Benchmark functions are self-documenting")]

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use prepaid_expiry::{ExpiryDateCalculator, PaymentRecord};

fn sample_record(pay_amount: u64) -> PaymentRecord {
    let first = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap_or_default();
    let billed = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap_or_default();
    PaymentRecord::new(billed, pay_amount).with_first_billing_date(first)
}

/// Benchmark proportional and annual pricing paths
fn bench_pricing_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing_paths");
    let calculator = ExpiryDateCalculator::default();

    for pay_amount in [10_000_u64, 30_000, 100_000, 240_000] {
        let record = sample_record(pay_amount);
        group.bench_with_input(BenchmarkId::from_parameter(pay_amount), &record, |b, record| {
            b.iter(|| black_box(calculator.calculate_expiry_date(black_box(record))));
        });
    }

    group.finish();
}

/// Benchmark the rejection path
fn bench_rejected_amount(c: &mut Criterion) {
    let calculator = ExpiryDateCalculator::default();
    let record = sample_record(15_000);

    c.bench_function("rejected_amount", |b| {
        b.iter(|| black_box(calculator.calculate_expiry_date(black_box(&record))));
    });
}

/// Benchmark instrumentation overhead with an active subscriber
fn bench_with_debug_logging(c: &mut Criterion) {
    let calculator = ExpiryDateCalculator::default();
    let record = sample_record(10_000);

    c.bench_function("calculation_with_debug_subscriber", |b| {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            b.iter(|| black_box(calculator.calculate_expiry_date(black_box(&record))));
        });
    });
}

criterion_group!(benches, bench_pricing_paths, bench_rejected_amount, bench_with_debug_logging);
criterion_main!(benches);
