//! Performance benchmarks for the leave ledger.
//!
//! Covers the working-day counter over long intervals, the ledger over
//! growing span lists, and a full `/leave-summary` round trip through the
//! router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_ledger::api::{AppState, create_router};
use leave_ledger::calculation::{consumed_days, count_working_days};
use leave_ledger::config::ConfigLoader;
use leave_ledger::models::{DateInterval, DurationType, LeaveSpan, LocalDate, RequestKind, SpanStatus};
use leave_ledger::registry::ExceptionDayRegistry;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/institution").expect("Failed to load config")
}

/// Creates `count` spans of one to three days each, spread from July 2025.
fn create_spans(count: usize) -> Vec<LeaveSpan> {
    let base = LocalDate::parse_iso("2025-07-21").expect("valid date");
    (0..count)
        .map(|i| {
            let start = base.add_days((i * 4) as i64).expect("in range");
            let end = start.add_days((i % 3) as i64).expect("in range");
            LeaveSpan {
                id: format!("leave_{:04}", i),
                student_id: "stu_bench".to_string(),
                start,
                end,
                status: if i % 5 == 0 {
                    SpanStatus::Pending
                } else {
                    SpanStatus::Approved
                },
                duration_type: if i % 7 == 0 {
                    DurationType::HalfDayForenoon
                } else {
                    DurationType::FullDay
                },
                kind: if i % 4 == 0 {
                    RequestKind::OnDuty
                } else {
                    RequestKind::Leave
                },
            }
        })
        .collect()
}

/// Benchmark: Working days across intervals of increasing length.
fn bench_working_days(c: &mut Criterion) {
    let exceptions = load_config().exception_days();
    let start = LocalDate::parse_iso("2025-06-01").expect("valid date");

    let mut group = c.benchmark_group("working_days");
    for days in [7_i64, 30, 365, 3650] {
        let interval = DateInterval::new(start, start.add_days(days - 1).expect("in range"));
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("days", days), &interval, |b, interval| {
            b.iter(|| black_box(count_working_days(black_box(interval), &exceptions)))
        });
    }
    group.finish();
}

/// Benchmark: Consumed days over growing span lists.
fn bench_consumed_days(c: &mut Criterion) {
    let exceptions = load_config().exception_days();
    let as_of = LocalDate::parse_iso("2026-06-30").expect("valid date");

    let mut group = c.benchmark_group("consumed_days");
    for span_count in [1_usize, 10, 100, 1000] {
        let spans = create_spans(span_count);
        group.throughput(Throughput::Elements(span_count as u64));
        group.bench_with_input(BenchmarkId::new("spans", span_count), &spans, |b, spans| {
            b.iter(|| black_box(consumed_days(black_box(spans), as_of, &exceptions)))
        });
    }
    group.finish();
}

/// Benchmark: A leave summary request through the router.
fn bench_leave_summary_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));

    let spans: Vec<serde_json::Value> = create_spans(20)
        .into_iter()
        .map(|span| serde_json::to_value(span).expect("span serializes"))
        .collect();
    let body = serde_json::json!({
        "student_id": "stu_bench",
        "batch": "2024",
        "semester": 3,
        "as_of": "2025-12-31",
        "spans": spans
    })
    .to_string();

    c.bench_function("leave_summary_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/leave-summary")
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

criterion_group!(
    benches,
    bench_working_days,
    bench_consumed_days,
    bench_leave_summary_request,
);
criterion_main!(benches);
