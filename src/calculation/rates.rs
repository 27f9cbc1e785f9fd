//! Daily salary and hourly rate derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PayrollMonth};

/// The rates derived from a monthly salary.
///
/// Both rates are kept at full precision; rounding happens when the payroll
/// result is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDerivation {
    /// Monthly salary divided by the work days of the month.
    pub base_daily_salary: Decimal,
    /// Daily salary divided by the standard daily hours.
    pub hourly_rate: Decimal,
    /// The audit step recording the derivation.
    pub audit_step: AuditStep,
}

/// Derives the daily salary and hourly rate for a month.
///
/// # Errors
///
/// - [`EngineError::NoWorkDaysInMonth`] if `work_days` is zero
/// - [`EngineError::InvalidPolicy`] if `standard_daily_hours` is not positive
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::derive_rates;
/// use payroll_engine::models::PayrollMonth;
/// use rust_decimal::Decimal;
///
/// let month = PayrollMonth::new(2025, 9).unwrap();
/// let rates = derive_rates(Decimal::new(88000, 0), 22, Decimal::new(8, 0), month, 2).unwrap();
///
/// assert_eq!(rates.base_daily_salary, Decimal::new(4000, 0));
/// assert_eq!(rates.hourly_rate, Decimal::new(500, 0));
/// ```
pub fn derive_rates(
    base_monthly_salary: Decimal,
    work_days: u32,
    standard_daily_hours: Decimal,
    month: PayrollMonth,
    step_number: u32,
) -> EngineResult<RateDerivation> {
    if work_days == 0 {
        return Err(EngineError::NoWorkDaysInMonth {
            year: month.year(),
            month: month.month(),
        });
    }
    if standard_daily_hours <= Decimal::ZERO {
        return Err(EngineError::InvalidPolicy {
            field: "standard_daily_hours".to_string(),
            value: standard_daily_hours.to_string(),
        });
    }

    let base_daily_salary = base_monthly_salary / Decimal::from(work_days);
    let hourly_rate = base_daily_salary / standard_daily_hours;

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_derivation".to_string(),
        rule_name: "Daily and Hourly Rate Derivation".to_string(),
        input: serde_json::json!({
            "base_monthly_salary": base_monthly_salary.normalize().to_string(),
            "work_days": work_days,
            "standard_daily_hours": standard_daily_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_daily_salary": base_daily_salary.round_dp(4).normalize().to_string(),
            "hourly_rate": hourly_rate.round_dp(4).normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} work days = ${} per day; / {} hours = ${} per hour",
            base_monthly_salary.normalize(),
            work_days,
            base_daily_salary.round_dp(2),
            standard_daily_hours.normalize(),
            hourly_rate.round_dp(2)
        ),
    };

    Ok(RateDerivation {
        base_daily_salary,
        hourly_rate,
        audit_step,
    })
}
