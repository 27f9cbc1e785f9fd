//! Performance benchmarks for the payroll engine.
//!
//! Covers the hot paths:
//! - Payroll for a single clocked day
//! - Payroll for a full month of records
//! - A batch of employees through the service
//! - Ledger clock-in/clock-out
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{NaiveDate, NaiveTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::calculation::{calculate_payroll, is_weekend};
use payroll_engine::config::{ConfigLoader, PayrollPolicy};
use payroll_engine::directory::InMemoryEmployeeDirectory;
use payroll_engine::ledger::AttendanceLedger;
use payroll_engine::models::{
    AttendanceRecord, AttendanceStatus, Employee, HolidayCalendar, PayrollMonth,
};
use payroll_engine::service::PayrollService;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

fn bench_employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Bench {}", id),
        department: "ICT".to_string(),
        base_monthly_salary: Decimal::new(85000, 0),
    }
}

/// Creates up to `count` clocked records on the weekdays of October 2025,
/// alternating standard and overtime days.
fn create_records(employee_id: &str, count: usize) -> Vec<AttendanceRecord> {
    let month = PayrollMonth::new(2025, 10).unwrap();
    month
        .days()
        .filter(|d| !is_weekend(*d))
        .take(count)
        .enumerate()
        .map(|(i, date)| AttendanceRecord {
            employee_id: employee_id.to_string(),
            date,
            clock_in: Some("08:00".to_string()),
            clock_out: Some(if i % 2 == 0 { "17:00" } else { "19:30" }.to_string()),
            hours_worked: None,
            status: AttendanceStatus::Present,
        })
        .collect()
}

/// Benchmark: Payroll for one clocked day.
fn bench_single_day(c: &mut Criterion) {
    let config = load_config();
    let employee = bench_employee("emp_bench_001");
    let records = create_records(&employee.id, 1);
    let month = PayrollMonth::new(2025, 10).unwrap();

    c.bench_function("single_day", |b| {
        b.iter(|| {
            black_box(calculate_payroll(
                black_box(&employee),
                month,
                black_box(&records),
                config.holiday_calendar(),
                config.policy(),
            ))
        })
    });
}

/// Benchmark: Payroll for a full month with holidays.
fn bench_full_month(c: &mut Criterion) {
    let config = load_config();
    let employee = bench_employee("emp_bench_001");
    let records = create_records(&employee.id, 31);
    let month = PayrollMonth::new(2025, 10).unwrap();

    c.bench_function("full_month", |b| {
        b.iter(|| {
            black_box(calculate_payroll(
                &employee,
                month,
                black_box(&records),
                config.holiday_calendar(),
                config.policy(),
            ))
        })
    });
}

/// Benchmark: 100 employees through the service over a shared ledger.
fn bench_batch_100(c: &mut Criterion) {
    let employees: Vec<Employee> = (0..100)
        .map(|i| bench_employee(&format!("emp_batch_{:03}", i)))
        .collect();
    let records: Vec<AttendanceRecord> = employees
        .iter()
        .flat_map(|e| create_records(&e.id, 23))
        .collect();
    let directory = InMemoryEmployeeDirectory::new(employees.clone()).unwrap();
    let service = PayrollService::new(
        AttendanceLedger::new(payroll_engine::ledger::InMemoryAttendanceStore::with_records(
            records,
        )),
        directory,
        load_config().holiday_calendar().clone(),
        PayrollPolicy::default(),
    );

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));
    group.sample_size(20);

    group.bench_function("batch_100", |b| {
        b.iter(|| {
            let results: Vec<_> = employees
                .iter()
                .map(|e| service.compute_payroll(&e.id, "2025-10"))
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Record counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let employee = bench_employee("emp_bench_001");
    let holidays = HolidayCalendar::default();
    let policy = PayrollPolicy::default();
    let month = PayrollMonth::new(2025, 10).unwrap();

    let mut group = c.benchmark_group("scaling");

    for record_count in [1, 5, 10, 23].iter() {
        let records = create_records(&employee.id, *record_count);

        group.throughput(Throughput::Elements(*record_count as u64));
        group.bench_with_input(
            BenchmarkId::new("records", record_count),
            &records,
            |b, records| {
                b.iter(|| black_box(calculate_payroll(&employee, month, records, &holidays, &policy)))
            },
        );
    }

    group.finish();
}

/// Benchmark: A clock-in followed by a clock-out on a fresh ledger day.
fn bench_ledger_clocking(c: &mut Criterion) {
    let clock_in = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let clock_out = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    c.bench_function("ledger_clock_in_out", |b| {
        let ledger = AttendanceLedger::in_memory();
        let mut days = start.iter_days();
        b.iter(|| {
            let date = days.next().unwrap_or(start);
            let _ = ledger.clock_in("emp_bench_001", date, clock_in);
            black_box(ledger.clock_out("emp_bench_001", date, clock_out))
        })
    });
}

criterion_group!(
    benches,
    bench_single_day,
    bench_full_month,
    bench_batch_100,
    bench_scaling,
    bench_ledger_clocking,
);
criterion_main!(benches);
