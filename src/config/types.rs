//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, HolidayCalendar, PublicHoliday};

/// Pay rules applied by the payroll calculator.
///
/// Every field has a default, so a `policy.yaml` only needs to list the
/// values it changes.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(policy.standard_daily_hours, Decimal::new(8, 0));
/// assert_eq!(policy.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollPolicy {
    /// Billable hours per day paid at the hourly rate; also the divisor of the
    /// daily salary.
    pub standard_daily_hours: Decimal,
    /// Unpaid break subtracted from each clocked day.
    pub unpaid_break_hours: Decimal,
    /// Multiplier for billable hours beyond the standard day.
    pub overtime_multiplier: Decimal,
    /// Multiplier for billable hours on a public holiday.
    pub holiday_multiplier: Decimal,
    /// Multiplier of the daily salary deducted per unauthorized absence.
    pub absence_deduction_multiplier: Decimal,
    /// Hours credited for a pre-approved overtime record without clock data.
    pub pre_approved_overtime_hours: Decimal,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            standard_daily_hours: Decimal::new(8, 0),
            unpaid_break_hours: Decimal::ONE,
            overtime_multiplier: Decimal::new(15, 1),
            holiday_multiplier: Decimal::TWO,
            absence_deduction_multiplier: Decimal::new(15, 1),
            pre_approved_overtime_hours: Decimal::new(4, 0),
        }
    }
}

impl PayrollPolicy {
    /// Checks that the policy can be applied.
    ///
    /// The standard daily hours must be positive; every other value must not
    /// be negative.
    pub fn validate(&self) -> EngineResult<()> {
        match self.find_invalid_field() {
            Some((field, value)) => Err(EngineError::InvalidPolicy {
                field: field.to_string(),
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns the first field holding an unusable value, with that value.
    pub(crate) fn find_invalid_field(&self) -> Option<(&'static str, Decimal)> {
        if self.standard_daily_hours <= Decimal::ZERO {
            return Some(("standard_daily_hours", self.standard_daily_hours));
        }
        [
            ("unpaid_break_hours", self.unpaid_break_hours),
            ("overtime_multiplier", self.overtime_multiplier),
            ("holiday_multiplier", self.holiday_multiplier),
            (
                "absence_deduction_multiplier",
                self.absence_deduction_multiplier,
            ),
            (
                "pre_approved_overtime_hours",
                self.pre_approved_overtime_hours,
            ),
        ]
        .into_iter()
        .find(|(_, value)| *value < Decimal::ZERO)
    }
}

/// Employee directory file structure (`employees.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employees available for payroll.
    pub employees: Vec<Employee>,
}

/// Holiday calendar file structure (`holidays/*.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The public holidays listed in the file.
    pub holidays: Vec<PublicHoliday>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    policy: PayrollPolicy,
    employees: Vec<Employee>,
    holidays: HolidayCalendar,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(policy: PayrollPolicy, employees: Vec<Employee>, holidays: HolidayCalendar) -> Self {
        let mut employees = employees;
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            policy,
            employees,
            holidays,
        }
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns all employees, ordered by identifier.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_values() {
        let policy = PayrollPolicy::default();
        assert_eq!(policy.standard_daily_hours, dec("8"));
        assert_eq!(policy.unpaid_break_hours, dec("1"));
        assert_eq!(policy.overtime_multiplier, dec("1.5"));
        assert_eq!(policy.holiday_multiplier, dec("2"));
        assert_eq!(policy.absence_deduction_multiplier, dec("1.5"));
        assert_eq!(policy.pre_approved_overtime_hours, dec("4"));
        assert_eq!(policy.find_invalid_field(), None);
    }

    #[test]
    fn test_partial_policy_yaml_uses_defaults() {
        let yaml = "overtime_multiplier: 1.75\n";
        let policy: PayrollPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.overtime_multiplier, dec("1.75"));
        assert_eq!(policy.standard_daily_hours, dec("8"));
    }

    #[test]
    fn test_invalid_policy_fields_detected() {
        let policy = PayrollPolicy {
            standard_daily_hours: Decimal::ZERO,
            ..PayrollPolicy::default()
        };
        assert_eq!(
            policy.find_invalid_field(),
            Some(("standard_daily_hours", Decimal::ZERO))
        );

        let policy = PayrollPolicy {
            holiday_multiplier: dec("-2"),
            ..PayrollPolicy::default()
        };
        assert_eq!(
            policy.find_invalid_field(),
            Some(("holiday_multiplier", dec("-2")))
        );
        assert_eq!(
            policy.validate(),
            Err(EngineError::InvalidPolicy {
                field: "holiday_multiplier".to_string(),
                value: "-2".to_string(),
            })
        );
    }

    #[test]
    fn test_payroll_config_sorts_employees() {
        let employee = |id: &str| Employee {
            id: id.to_string(),
            name: id.to_string(),
            department: String::new(),
            base_monthly_salary: dec("1000"),
        };
        let config = PayrollConfig::new(
            PayrollPolicy::default(),
            vec![employee("b"), employee("a")],
            HolidayCalendar::default(),
        );
        assert_eq!(config.employees()[0].id, "a");
        assert_eq!(config.employees()[1].id, "b");
    }
}
