//! Performance benchmarks for the Grupo 2S financial engine.
//!
//! This benchmark suite tracks the hot paths of the calculation core:
//! - Apportionment across a varying number of shares
//! - Installment schedule generation
//! - Net-salary computation (INSS + IRPF)
//! - The full HTTP round trip for a net-salary request
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use grupo2s_engine::api::{create_router, AppState};
use grupo2s_engine::calculation::{apportion, compute_net_salary, generate_installments};
use grupo2s_engine::config::TaxTableLoader;
use grupo2s_engine::models::{Additions, Deductions, ShareSpec};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Creates a bench state with loaded tax tables.
fn create_bench_state() -> AppState {
    let loader = TaxTableLoader::load("./config/grupo2s").expect("Failed to load tax tables");
    AppState::new(loader)
}

/// Builds `count` shares whose percentages sum to exactly 100.
fn create_shares(count: u32) -> Vec<ShareSpec> {
    let base = (Decimal::ONE_HUNDRED / Decimal::from(count)).round_dp(4);
    let mut shares: Vec<ShareSpec> = (0..count - 1)
        .map(|i| ShareSpec {
            id: format!("cc_{:03}", i),
            percent: base,
        })
        .collect();
    shares.push(ShareSpec {
        id: format!("cc_{:03}", count - 1),
        percent: Decimal::ONE_HUNDRED - base * Decimal::from(count - 1),
    });
    shares
}

/// Benchmark: apportionment over a growing share list.
fn bench_apportion(c: &mut Criterion) {
    let total = dec("125000.00");
    let mut group = c.benchmark_group("apportion");

    for share_count in [2u32, 10, 50, 200].iter() {
        let shares = create_shares(*share_count);

        group.throughput(Throughput::Elements(*share_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shares", share_count),
            share_count,
            |b, _| b.iter(|| black_box(apportion(black_box(total), black_box(&shares)).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: installment schedule generation.
fn bench_generate_installments(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let total = dec("48000.00");

    let mut group = c.benchmark_group("installments");

    for count in [3u32, 12, 48].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("count", count), count, |b, &count| {
            b.iter(|| {
                black_box(generate_installments(black_box(total), count, black_box(start)).unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark: full net-salary computation against the 2024 tables.
fn bench_net_salary(c: &mut Criterion) {
    let loader = TaxTableLoader::load("./config/grupo2s").expect("Failed to load tax tables");
    let tables = loader.latest();
    let additions = Additions {
        bonus: dec("500.00"),
        ..Additions::default()
    };
    let deductions = Deductions {
        health_plan: dec("250.00"),
        ..Deductions::default()
    };

    c.bench_function("net_salary", |b| {
        b.iter(|| {
            black_box(compute_net_salary(
                black_box(dec("4250.00")),
                &additions,
                &deductions,
                2,
                tables,
            ))
        })
    });
}

/// Benchmark: net-salary request through the full HTTP stack.
fn bench_net_salary_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();
    let router = create_router(state);
    let body = r#"{
        "base_salary": "4250.00",
        "additions": {"bonus": "500.00"},
        "deductions": {"health_plan": "250.00"},
        "dependents": 2
    }"#;

    c.bench_function("net_salary_http", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll/net-salary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_apportion,
    bench_generate_installments,
    bench_net_salary,
    bench_net_salary_http,
);
criterion_main!(benches);
