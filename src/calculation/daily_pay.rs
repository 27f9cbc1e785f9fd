//! Daily hours split.
//!
//! This module turns the hours of one clocked day into billable hours and
//! splits them into regular, overtime or holiday hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The split of one clocked day's hours.
///
/// On a public holiday every billable hour is a holiday hour; otherwise
/// billable hours are regular up to the standard day and overtime beyond it.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::split_daily_hours;
/// use rust_decimal::Decimal;
///
/// // 08:00 to 19:00 on a work day: 10 billable hours
/// let split = split_daily_hours(Decimal::new(11, 0), false, Decimal::new(8, 0), Decimal::ONE, 3);
///
/// assert_eq!(split.billable_hours, Decimal::new(10, 0));
/// assert_eq!(split.regular_hours, Decimal::new(8, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(split.holiday_hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoursSplit {
    /// Worked hours less the unpaid break, never negative.
    pub billable_hours: Decimal,
    /// Billable hours up to the standard day on a non-holiday.
    pub regular_hours: Decimal,
    /// Billable hours beyond the standard day on a non-holiday.
    pub overtime_hours: Decimal,
    /// Billable hours on a public holiday.
    pub holiday_hours: Decimal,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

/// Splits the hours worked on one day.
///
/// # Arguments
///
/// * `worked_hours` - Hours between clock-in and clock-out
/// * `is_holiday` - Whether the day is a public holiday
/// * `standard_daily_hours` - Regular hours threshold (8 by default)
/// * `unpaid_break_hours` - Break subtracted before the split (1 by default)
/// * `step_number` - The step number for audit trail sequencing
pub fn split_daily_hours(
    worked_hours: Decimal,
    is_holiday: bool,
    standard_daily_hours: Decimal,
    unpaid_break_hours: Decimal,
    step_number: u32,
) -> DailyHoursSplit {
    let billable_hours = (worked_hours - unpaid_break_hours).max(Decimal::ZERO);

    let (regular_hours, overtime_hours, holiday_hours) = if is_holiday {
        (Decimal::ZERO, Decimal::ZERO, billable_hours)
    } else {
        let regular = billable_hours.min(standard_daily_hours);
        (regular, billable_hours - regular, Decimal::ZERO)
    };

    let reasoning = if is_holiday {
        format!(
            "{} hours worked less {} hour break = {} billable hours, all on a public holiday",
            worked_hours.normalize(),
            unpaid_break_hours.normalize(),
            billable_hours.normalize()
        )
    } else if overtime_hours > Decimal::ZERO {
        format!(
            "{} billable hours exceeds {} hour standard day by {} hours",
            billable_hours.normalize(),
            standard_daily_hours.normalize(),
            overtime_hours.normalize()
        )
    } else {
        format!(
            "{} billable hours is within the {} hour standard day",
            billable_hours.normalize(),
            standard_daily_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_hours_split".to_string(),
        rule_name: "Daily Hours Split".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "unpaid_break_hours": unpaid_break_hours.normalize().to_string(),
            "standard_daily_hours": standard_daily_hours.normalize().to_string(),
            "is_holiday": is_holiday
        }),
        output: serde_json::json!({
            "billable_hours": billable_hours.normalize().to_string(),
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "holiday_hours": holiday_hours.normalize().to_string()
        }),
        reasoning,
    };

    DailyHoursSplit {
        billable_hours,
        regular_hours,
        overtime_hours,
        holiday_hours,
        audit_step,
    }
}
