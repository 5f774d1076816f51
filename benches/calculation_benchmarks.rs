//! Performance benchmarks for the payroll calculation engine.
//!
//! This benchmark suite verifies that the engine meets its latency targets:
//! - Single-row calculation: < 100μs mean
//! - Seeding a 100-row batch: < 10ms mean
//! - Seeding a 1000-row batch: < 100ms mean
//! - Single-row edit with recomputation: < 200μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{calculate_payroll, resolve_period_rates};
use payroll_engine::config::ConfigLoader;
use payroll_engine::draft::DraftManager;
use payroll_engine::models::{EmployeeSnapshot, PayField, PayFrequency, PayInput, PeriodContext};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Loads the demo statutory configuration.
fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/demo").expect("Failed to load config")
}

fn june_context() -> PeriodContext {
    PeriodContext::new(
        PayFrequency::Monthly,
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        false,
    )
}

/// Creates a roster of the given size with varied salaries and hire dates.
fn create_roster(size: usize) -> Vec<EmployeeSnapshot> {
    (0..size)
        .map(|i| EmployeeSnapshot {
            id: format!("emp_bench_{:04}", i),
            display_name: format!("Employee {:04}", i),
            monthly_salary: Decimal::from(300 + (i % 20) as i64 * 25),
            hire_date: if i % 10 == 0 {
                NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
            } else {
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
            },
            tax_resident: i % 7 != 0,
            tax_exempt: false,
            department: String::new(),
            position: String::new(),
        })
        .collect()
}

/// Benchmark: a single statutory calculation, bypassing the draft layer.
///
/// Target: < 100μs mean
fn bench_single_calculation(c: &mut Criterion) {
    let config = load_config();
    let context = june_context();
    let rules = config
        .rules_for(context.pay_date)
        .expect("demo rules missing")
        .clone();
    let employee = create_roster(1).remove(0);
    let rates = resolve_period_rates(
        employee.monthly_salary,
        employee.hire_date,
        &context,
        &rules.schedule,
    )
    .expect("rate resolution failed");
    let input = PayInput {
        regular_hours: rates.prorated_default_hours,
        overtime_hours: Decimal::from_str("12").unwrap(),
        late_minutes: Decimal::from_str("45").unwrap(),
        bonus: Decimal::from_str("25").unwrap(),
        ..PayInput::default()
    };

    c.bench_function("single_calculation", |b| {
        b.iter(|| {
            let result = calculate_payroll(
                black_box(&employee),
                black_box(&rates),
                black_box(&input),
                &context,
                &rules,
            );
            black_box(result)
        })
    });
}

/// Benchmark: seeding a draft batch (pro-ration plus one calculation per row).
///
/// Targets: < 10ms mean at 100 rows, < 100ms mean at 1000 rows
fn bench_batch_seeding(c: &mut Criterion) {
    let config = load_config();
    let context = june_context();
    let rules = config
        .rules_for(context.pay_date)
        .expect("demo rules missing")
        .clone();

    let mut group = c.benchmark_group("batch_seeding");
    for size in [100usize, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| {
                let manager =
                    DraftManager::new(roster.clone(), context.clone(), rules.clone());
                black_box(manager)
            })
        });
    }
    group.finish();
}

/// Benchmark: one field edit on a 1000-row batch (row-local recompute).
///
/// Target: < 200μs mean; must not scale with batch size.
fn bench_single_edit(c: &mut Criterion) {
    let config = load_config();
    let context = june_context();
    let rules = config
        .rules_for(context.pay_date)
        .expect("demo rules missing")
        .clone();
    let mut manager = DraftManager::new(create_roster(1000), context, rules);
    let mut overtime = 0u32;

    c.bench_function("single_edit_1000_rows", |b| {
        b.iter(|| {
            // Vary the value so the edit is never a no-op.
            overtime = (overtime + 1) % 200;
            let accepted = manager.set_field(
                "emp_bench_0500",
                PayField::OvertimeHours,
                Decimal::from(overtime),
            );
            black_box(accepted)
        })
    });
}

/// Benchmark: the full preview endpoint through the router.
///
/// Target: < 1ms mean for a 10-employee request
fn bench_preview_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_config());
    let router = create_router(state);

    let employees: Vec<serde_json::Value> = (0..10)
        .map(|i| {
            serde_json::json!({
                "id": format!("emp_{:03}", i),
                "display_name": format!("Employee {:03}", i),
                "monthly_salary": "500.00",
                "hire_date": "2020-01-01",
                "tax_resident": true
            })
        })
        .collect();
    let body = serde_json::json!({
        "employees": employees,
        "period": {
            "frequency": "monthly",
            "start_date": "2025-06-01",
            "end_date": "2025-06-30",
            "pay_date": "2025-06-30"
        }
    })
    .to_string();

    c.bench_function("preview_10_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll/preview")
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
    bench_single_calculation,
    bench_batch_seeding,
    bench_single_edit,
    bench_preview_endpoint
);
criterion_main!(benches);
