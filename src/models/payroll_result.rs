//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated structures
//! that capture all outputs from a monthly payroll computation, including pay
//! lines, absence deductions and an audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayrollMonth;

/// Represents the category of pay for a pay line.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayCategory;
///
/// let category = PayCategory::Regular;
/// assert_eq!(format!("{:?}", category), "Regular");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Billable hours up to the daily standard on a non-holiday.
    Regular,
    /// Billable hours beyond the daily standard on a non-holiday.
    Overtime,
    /// Overtime credited from a pre-approved overtime record without usable clock data.
    PreApprovedOvertime,
    /// Billable hours worked on a public holiday.
    HolidayBonus,
}

/// Represents a single line item in a payroll computation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayLine, PayCategory};
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
/// use std::str::FromStr;
///
/// let pay_line = PayLine {
///     date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     category: PayCategory::Regular,
///     hours: Decimal::from_str("8").unwrap(),
///     rate: Decimal::from_str("482.95").unwrap(),
///     amount: Decimal::from_str("3863.64").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The attendance date this pay line applies to.
    pub date: NaiveDate,
    /// The category of pay.
    pub category: PayCategory,
    /// The number of hours in this category.
    pub hours: Decimal,
    /// The hourly rate for this category.
    pub rate: Decimal,
    /// The total amount for this pay line (hours * rate).
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag records that were excluded from pay-bearing computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The payroll breakdown for one employee and one month.
///
/// Computed fresh on every request and never persisted. All monetary and
/// hour figures are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub computed_at: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The employee the payroll is for.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department.
    pub department: String,
    /// The payroll month.
    pub month: PayrollMonth,
    /// The employee's base monthly salary.
    pub base_monthly_salary: Decimal,
    /// Weekdays in the month that are not public holidays.
    pub work_days_in_month: u32,
    /// Base salary divided by work days.
    pub base_daily_salary: Decimal,
    /// Daily salary divided by the standard daily hours.
    pub hourly_rate: Decimal,
    /// Records with both clock-in and clock-out that were paid.
    pub days_present: u32,
    /// Billable hours paid at the hourly rate.
    pub regular_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Billable hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Billable hours worked on public holidays.
    pub holiday_hours: Decimal,
    /// Pay for holiday hours.
    pub holiday_bonus: Decimal,
    /// Work days counted as unauthorized absences.
    pub unauthorized_absences: u32,
    /// Total deducted for unauthorized absences.
    pub deductions: Decimal,
    /// Net salary, never negative.
    pub final_salary: Decimal,
    /// The date the salary is paid.
    pub payment_date: NaiveDate,
    /// Individual pay lines making up the computation.
    pub pay_lines: Vec<PayLine>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Gross pay before deductions.
    pub fn gross_pay(&self) -> Decimal {
        self.regular_pay + self.overtime_pay + self.holiday_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_result() -> PayrollResult {
        PayrollResult {
            calculation_id: Uuid::nil(),
            computed_at: DateTime::parse_from_rfc3339("2025-09-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            employee_id: "emp_001".to_string(),
            employee_name: "Nicole".to_string(),
            department: "ICT".to_string(),
            month: PayrollMonth::new(2025, 8).unwrap(),
            base_monthly_salary: dec("85000.00"),
            work_days_in_month: 21,
            base_daily_salary: dec("4047.62"),
            hourly_rate: dec("505.95"),
            days_present: 1,
            regular_hours: dec("8.00"),
            regular_pay: dec("4047.62"),
            overtime_hours: dec("1.00"),
            overtime_pay: dec("758.93"),
            holiday_hours: dec("0.00"),
            holiday_bonus: dec("0.00"),
            unauthorized_absences: 1,
            deductions: dec("6071.43"),
            final_salary: dec("0.00"),
            payment_date: NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
            pay_lines: vec![],
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        }
    }

    #[test]
    fn test_pay_category_serialization() {
        assert_eq!(
            serde_json::to_string(&PayCategory::HolidayBonus).unwrap(),
            "\"holiday_bonus\""
        );
        assert_eq!(
            serde_json::to_string(&PayCategory::PreApprovedOvertime).unwrap(),
            "\"pre_approved_overtime\""
        );
        let category: PayCategory = serde_json::from_str("\"overtime\"").unwrap();
        assert_eq!(category, PayCategory::Overtime);
    }

    #[test]
    fn test_pay_line_serialization() {
        let pay_line = PayLine {
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            category: PayCategory::Regular,
            hours: dec("8.00"),
            rate: dec("482.95"),
            amount: dec("3863.64"),
        };

        let json = serde_json::to_string(&pay_line).unwrap();
        assert!(json.contains("\"date\":\"2025-08-04\""));
        assert!(json.contains("\"category\":\"regular\""));
        assert!(json.contains("\"hours\":\"8.00\""));
        assert!(json.contains("\"amount\":\"3863.64\""));
    }

    #[test]
    fn test_gross_pay_sums_pay_components() {
        let result = create_sample_result();
        assert_eq!(result.gross_pay(), dec("4806.55"));
    }

    #[test]
    fn test_payroll_result_serialization() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"month\":\"2025-08\""));
        assert!(json.contains("\"payment_date\":\"2025-09-05\""));
        assert!(json.contains("\"final_salary\":\"0.00\""));
        assert!(json.contains("\"audit_trace\":{"));

        let deserialized: PayrollResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "MALFORMED_CLOCK_DATA".to_string(),
            message: "Clock-in '8am' is not HH:MM".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"MALFORMED_CLOCK_DATA\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }
}
