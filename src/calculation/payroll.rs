//! Monthly payroll calculation.
//!
//! [`calculate_payroll`] runs the full pipeline for one employee and one
//! month: work day count, rate derivation, per-record classification and pay,
//! absence deductions and the final salary. Every decision is recorded in the
//! result's audit trace.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, AuditWarning, Employee, HolidaySource, PayCategory,
    PayLine, PayrollMonth, PayrollResult,
};

use super::classification::{RecordClassification, classify_record};
use super::daily_pay::split_daily_hours;
use super::rates::derive_rates;
use super::work_days::{count_work_days, is_weekend};

/// Rounds a reported figure to 2 decimal places, halves away from zero.
pub fn round_report(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Running totals over the month's records, kept at full precision.
#[derive(Debug, Default)]
struct MonthTotals {
    days_present: u32,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    holiday_hours: Decimal,
    unauthorized_absences: u32,
}

/// Calculates an employee's payroll for a month.
///
/// Records dated outside the month or belonging to another employee are
/// ignored. Individual records never fail the calculation; unusable records
/// are classified and reported as audit warnings.
///
/// # Errors
///
/// - [`EngineError::InvalidEmployee`] if the salary is not positive
/// - [`EngineError::InvalidPolicy`] if a policy value cannot be applied
/// - [`EngineError::NoWorkDaysInMonth`] if every weekday is a holiday
///
/// [`EngineError::InvalidEmployee`]: crate::error::EngineError::InvalidEmployee
/// [`EngineError::InvalidPolicy`]: crate::error::EngineError::InvalidPolicy
/// [`EngineError::NoWorkDaysInMonth`]: crate::error::EngineError::NoWorkDaysInMonth
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{AttendanceRecord, Employee, HolidayCalendar, PayrollMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Nicole".to_string(),
///     department: "ICT".to_string(),
///     base_monthly_salary: Decimal::new(88000, 0),
/// };
/// let mut record = AttendanceRecord::new("emp_001", NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
/// record.clock_in = Some("08:00".to_string());
/// record.clock_out = Some("17:00".to_string());
///
/// let result = calculate_payroll(
///     &employee,
///     PayrollMonth::new(2025, 9).unwrap(),
///     &[record],
///     &HolidayCalendar::default(),
///     &PayrollPolicy::default(),
/// )
/// .unwrap();
///
/// // 22 work days: 4000 per day, 500 per hour; 8 billable hours
/// assert_eq!(result.work_days_in_month, 22);
/// assert_eq!(result.regular_pay, Decimal::new(400000, 2));
/// assert_eq!(result.final_salary, Decimal::new(400000, 2));
/// ```
pub fn calculate_payroll(
    employee: &Employee,
    month: PayrollMonth,
    records: &[AttendanceRecord],
    holidays: &dyn HolidaySource,
    policy: &PayrollPolicy,
) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();
    employee.validate()?;
    policy.validate()?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut pay_lines: Vec<PayLine> = Vec::new();
    let mut step_number: u32 = 1;

    let work_day_count = count_work_days(month, holidays, step_number);
    steps.push(work_day_count.audit_step);
    step_number += 1;

    let rates = derive_rates(
        employee.base_monthly_salary,
        work_day_count.work_days,
        policy.standard_daily_hours,
        month,
        step_number,
    )?;
    steps.push(rates.audit_step);
    step_number += 1;

    let hourly_rate = rates.hourly_rate;
    let overtime_rate = hourly_rate * policy.overtime_multiplier;
    let holiday_rate = hourly_rate * policy.holiday_multiplier;

    let mut month_records: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.employee_id == employee.id && month.contains(r.date))
        .collect();
    month_records.sort_by_key(|r| r.date);
    if month_records.len() < records.len() {
        debug!(
            employee_id = %employee.id,
            month = %month,
            ignored = records.len() - month_records.len(),
            "Ignoring records outside the payroll month"
        );
    }

    let mut totals = MonthTotals::default();

    for record in month_records {
        let date = record.date;
        let is_holiday = holidays.is_holiday(date);
        let is_work_day = !is_weekend(date) && !is_holiday;
        let classification = classify_record(record, is_work_day);

        debug!(
            employee_id = %employee.id,
            %date,
            classification = classification.label(),
            "Record classified"
        );

        let counts_as_absence = match &classification {
            RecordClassification::UnauthorizedAbsence => true,
            RecordClassification::Malformed { .. } => is_work_day,
            _ => false,
        };
        steps.push(classification_step(
            step_number,
            record,
            &classification,
            is_work_day,
            is_holiday,
            counts_as_absence,
        ));
        step_number += 1;

        match &classification {
            RecordClassification::Clocked { hours } => {
                let split = split_daily_hours(
                    *hours,
                    is_holiday,
                    policy.standard_daily_hours,
                    policy.unpaid_break_hours,
                    step_number,
                );
                steps.push(split.audit_step);
                step_number += 1;

                totals.days_present += 1;
                totals.regular_hours += split.regular_hours;
                totals.overtime_hours += split.overtime_hours;
                totals.holiday_hours += split.holiday_hours;

                for (category, hours, rate) in [
                    (PayCategory::Regular, split.regular_hours, hourly_rate),
                    (PayCategory::Overtime, split.overtime_hours, overtime_rate),
                    (PayCategory::HolidayBonus, split.holiday_hours, holiday_rate),
                ] {
                    push_pay_line(&mut pay_lines, date, category, hours, rate);
                }
            }
            RecordClassification::PreApprovedOvertime { unreadable_clock } => {
                if let Some(detail) = unreadable_clock {
                    warn!(employee_id = %employee.id, %date, detail = %detail, "Unreadable clock data on overtime record");
                    warnings.push(AuditWarning {
                        code: "MALFORMED_CLOCK_DATA".to_string(),
                        message: format!("{}: {}", date, detail),
                        severity: "low".to_string(),
                    });
                }
                totals.overtime_hours += policy.pre_approved_overtime_hours;
                push_pay_line(
                    &mut pay_lines,
                    date,
                    PayCategory::PreApprovedOvertime,
                    policy.pre_approved_overtime_hours,
                    overtime_rate,
                );
            }
            RecordClassification::Malformed { detail } => {
                warn!(employee_id = %employee.id, %date, detail = %detail, "Malformed attendance record");
                warnings.push(AuditWarning {
                    code: "MALFORMED_CLOCK_DATA".to_string(),
                    message: format!("{}: {}", date, detail),
                    severity: if is_work_day { "high" } else { "medium" }.to_string(),
                });
            }
            RecordClassification::Incomplete { detail } => {
                warnings.push(AuditWarning {
                    code: "INCOMPLETE_CLOCK_DATA".to_string(),
                    message: format!("{}: {}", date, detail),
                    severity: "low".to_string(),
                });
            }
            RecordClassification::UnauthorizedAbsence | RecordClassification::Excluded { .. } => {}
        }

        if counts_as_absence {
            totals.unauthorized_absences += 1;
        }
    }

    let regular_pay = totals.regular_hours * hourly_rate;
    let overtime_pay = totals.overtime_hours * overtime_rate;
    let holiday_bonus = totals.holiday_hours * holiday_rate;

    let deduction_per_absence = rates.base_daily_salary * policy.absence_deduction_multiplier;
    let deductions = Decimal::from(totals.unauthorized_absences) * deduction_per_absence;
    steps.push(AuditStep {
        step_number,
        rule_id: "absence_deduction".to_string(),
        rule_name: "Unauthorized Absence Deduction".to_string(),
        input: serde_json::json!({
            "unauthorized_absences": totals.unauthorized_absences,
            "base_daily_salary": round_report(rates.base_daily_salary).to_string(),
            "absence_deduction_multiplier": policy.absence_deduction_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "deductions": round_report(deductions).to_string()
        }),
        reasoning: format!(
            "{} unauthorized absence(s) x ${} daily salary x {}",
            totals.unauthorized_absences,
            round_report(rates.base_daily_salary),
            policy.absence_deduction_multiplier.normalize()
        ),
    });
    step_number += 1;

    let gross_pay = regular_pay + overtime_pay + holiday_bonus;
    let final_salary = (gross_pay - deductions).max(Decimal::ZERO);
    let clamped = gross_pay < deductions;
    if clamped {
        warnings.push(AuditWarning {
            code: "DEDUCTIONS_EXCEED_GROSS_PAY".to_string(),
            message: format!(
                "Deductions ${} exceed gross pay ${}; final salary set to zero",
                round_report(deductions),
                round_report(gross_pay)
            ),
            severity: "medium".to_string(),
        });
    }
    steps.push(AuditStep {
        step_number,
        rule_id: "final_salary".to_string(),
        rule_name: "Final Salary".to_string(),
        input: serde_json::json!({
            "regular_pay": round_report(regular_pay).to_string(),
            "overtime_pay": round_report(overtime_pay).to_string(),
            "holiday_bonus": round_report(holiday_bonus).to_string(),
            "deductions": round_report(deductions).to_string()
        }),
        output: serde_json::json!({
            "final_salary": round_report(final_salary).to_string()
        }),
        reasoning: if clamped {
            "Deductions exceed gross pay, final salary floored at zero".to_string()
        } else {
            format!(
                "${} gross pay less ${} deductions",
                round_report(gross_pay),
                round_report(deductions)
            )
        },
    });

    let duration_us = start_time.elapsed().as_micros() as u64;

    let result = PayrollResult {
        calculation_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        department: employee.department.clone(),
        month,
        base_monthly_salary: round_report(employee.base_monthly_salary),
        work_days_in_month: work_day_count.work_days,
        base_daily_salary: round_report(rates.base_daily_salary),
        hourly_rate: round_report(hourly_rate),
        days_present: totals.days_present,
        regular_hours: round_report(totals.regular_hours),
        regular_pay: round_report(regular_pay),
        overtime_hours: round_report(totals.overtime_hours),
        overtime_pay: round_report(overtime_pay),
        holiday_hours: round_report(totals.holiday_hours),
        holiday_bonus: round_report(holiday_bonus),
        unauthorized_absences: totals.unauthorized_absences,
        deductions: round_report(deductions),
        final_salary: round_report(final_salary),
        payment_date: month.payment_date(),
        pay_lines,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    };

    info!(
        employee_id = %result.employee_id,
        month = %month,
        final_salary = %result.final_salary,
        unauthorized_absences = result.unauthorized_absences,
        warnings = result.audit_trace.warnings.len(),
        duration_us,
        "Payroll calculated"
    );

    Ok(result)
}

fn push_pay_line(
    pay_lines: &mut Vec<PayLine>,
    date: NaiveDate,
    category: PayCategory,
    hours: Decimal,
    rate: Decimal,
) {
    if hours <= Decimal::ZERO {
        return;
    }
    pay_lines.push(PayLine {
        date,
        category,
        hours: round_report(hours),
        rate: round_report(rate),
        amount: round_report(hours * rate),
    });
}

fn classification_step(
    step_number: u32,
    record: &AttendanceRecord,
    classification: &RecordClassification,
    is_work_day: bool,
    is_holiday: bool,
    counts_as_absence: bool,
) -> AuditStep {
    let reasoning = match classification {
        RecordClassification::Clocked { hours } => {
            format!("Clocked {} hours on {}", hours.normalize(), record.date)
        }
        RecordClassification::PreApprovedOvertime { unreadable_clock: None } => {
            format!("Pre-approved overtime without clock data on {}", record.date)
        }
        RecordClassification::PreApprovedOvertime {
            unreadable_clock: Some(detail),
        } => format!(
            "Pre-approved overtime on {} paid despite unreadable clock data: {}",
            record.date, detail
        ),
        RecordClassification::UnauthorizedAbsence => {
            format!("Unauthorized absence on work day {}", record.date)
        }
        RecordClassification::Malformed { detail } if counts_as_absence => {
            format!("Malformed clock data on work day {} counted as absence: {}", record.date, detail)
        }
        RecordClassification::Malformed { detail } => {
            format!("Malformed clock data on {} excluded: {}", record.date, detail)
        }
        RecordClassification::Incomplete { detail } => {
            format!("Incomplete record on {} excluded: {}", record.date, detail)
        }
        RecordClassification::Excluded { reason } => {
            format!("Record on {} excluded: {}", record.date, reason)
        }
    };

    AuditStep {
        step_number,
        rule_id: "record_classification".to_string(),
        rule_name: "Attendance Record Classification".to_string(),
        input: serde_json::json!({
            "date": record.date.to_string(),
            "clock_in": record.clock_in,
            "clock_out": record.clock_out,
            "hours_worked": record.hours_worked.map(|h| h.normalize().to_string()),
            "status": record.status.as_str(),
            "is_work_day": is_work_day,
            "is_holiday": is_holiday
        }),
        output: serde_json::json!({
            "classification": classification.label(),
            "counts_as_absence": counts_as_absence
        }),
        reasoning,
    }
}
