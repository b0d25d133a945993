//! Performance benchmarks for the Rental Pricing Engine.
//!
//! Covers direct engine calls for short, monthly and yearly rentals, plus the
//! full `/quote` request path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDateTime;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use rental_pricing::api::{AppState, create_router};
use rental_pricing::calculation::PricingEngine;
use rental_pricing::config::ConfigLoader;
use rental_pricing::models::{HolidayRule, RentalWindow};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/emotorent").expect("Failed to load config");
    AppState::new(config)
}

fn make_window(start: &str, end: &str) -> RentalWindow {
    RentalWindow::new(
        NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
        NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M:%S").unwrap(),
    )
}

/// Benchmark: engine compute across rental lengths.
fn bench_engine_compute(c: &mut Criterion) {
    let engine = PricingEngine::new();
    let holidays: Vec<HolidayRule> = create_test_state().config().active_holidays();

    let cases = [
        (2, "2025-04-29 10:00:00", "2025-05-01 10:00:00", Decimal::ONE),
        (31, "2025-04-01 10:00:00", "2025-05-02 10:00:00", Decimal::new(92, 2)),
        (400, "2025-01-01 10:00:00", "2026-02-05 10:00:00", Decimal::new(80, 2)),
    ];

    let mut group = c.benchmark_group("engine_compute");
    for (days, start, end, rate) in cases {
        let window = make_window(start, end);
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::new("days", days), &window, |b, window| {
            b.iter(|| {
                let result = engine
                    .compute(
                        black_box(window),
                        Decimal::from(100_000),
                        &holidays,
                        rate,
                        Decimal::from(10),
                    )
                    .unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

/// Benchmark: single quote through the HTTP router.
fn bench_quote_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "vehicle_category": "standard",
        "daily_rate": "100000",
        "start": "2025-04-29T10:00:00",
        "end": "2025-05-30T10:00:00",
        "membership_tier": "gold"
    })
    .to_string();

    c.bench_function("quote_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/quote")
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

criterion_group!(benches, bench_engine_compute, bench_quote_request);
criterion_main!(benches);
