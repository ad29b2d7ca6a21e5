//! Performance benchmarks for the salary simulator.
//!
//! Covers the forward withholding calculation (direct and through the HTTP
//! layer) and the full reverse proposal sweep.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salary_simulator::Simulator;
use salary_simulator::api::{AppState, create_router};
use salary_simulator::config::ConfigLoader;
use salary_simulator::models::{CalculationInput, MaritalStatus, ReverseCalculationInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_simulator() -> Simulator {
    let loader =
        ConfigLoader::load("./config/continente-2026.yaml").expect("Failed to load dataset");
    Simulator::with_dataset(loader.into_dataset())
}

fn create_reverse_input(target: i64) -> ReverseCalculationInput {
    ReverseCalculationInput {
        target_net_salary: Decimal::from(target),
        location: "continente".to_string(),
        marital_status: MaritalStatus::Single,
        dependents: 1,
        disability: false,
        pay_in_twelfths: false,
        meal_allowance_daily: Decimal::new(1020, 2),
        meal_allowance_days: 22,
        meal_allowance_months: 11,
        iht_percentage: Decimal::ZERO,
        tsu_percentage: Decimal::new(2375, 2),
        social_security_rate: Decimal::new(11, 2),
    }
}

/// Benchmark: One withholding calculation, no HTTP.
fn bench_single_calculation(c: &mut Criterion) {
    let simulator = create_simulator();
    let input = CalculationInput::new(Decimal::from(1500), MaritalStatus::Single, 1);

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(simulator.calculate(black_box(&input)).unwrap()))
    });
}

/// Benchmark: One withholding calculation through the router.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(create_simulator()));
    let body = serde_json::json!({
        "gross_salary": "1500",
        "marital_status": "single",
        "location": "continente",
        "dependents": 1
    })
    .to_string();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Full proposal sweep (7 percentages × 50 bisection steps).
fn bench_proposal_sweep(c: &mut Criterion) {
    let simulator = create_simulator();

    let mut group = c.benchmark_group("proposal_sweep");
    group.throughput(Throughput::Elements(7));

    for target in [1000i64, 2000, 5000] {
        let input = create_reverse_input(target);
        group.bench_with_input(BenchmarkId::new("target", target), &input, |b, input| {
            b.iter(|| black_box(simulator.get_proposals(input).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: Batch of 1000 calculations across all profiles.
fn bench_batch_1000(c: &mut Criterion) {
    let simulator = create_simulator();
    let statuses = [
        MaritalStatus::Single,
        MaritalStatus::MarriedOneHolder,
        MaritalStatus::MarriedTwoHolders,
    ];

    let inputs: Vec<CalculationInput> = (0..1000i64)
        .map(|i| CalculationInput {
            disability: i % 5 == 0,
            ..CalculationInput::new(
                Decimal::from(800 + i * 7),
                statuses[(i % 3) as usize],
                (i % 4) as u32,
            )
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let results: Vec<_> = inputs
                .iter()
                .map(|input| simulator.calculate(input).unwrap())
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_calculate_endpoint,
    bench_proposal_sweep,
    bench_batch_1000,
);
criterion_main!(benches);
