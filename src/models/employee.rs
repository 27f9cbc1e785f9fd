//! Employee model.
//!
//! This module defines the Employee struct supplied by the employee directory
//! and consumed by the payroll calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents an employee whose attendance is paid monthly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (typically a work email).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Gross salary for a full month of work days.
    pub base_monthly_salary: Decimal,
}

impl Employee {
    /// Checks that the employee can be paid.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "nicole@example.com".to_string(),
    ///     name: "Nicole".to_string(),
    ///     department: "ICT".to_string(),
    ///     base_monthly_salary: Decimal::new(85000, 0),
    /// };
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.base_monthly_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "base_monthly_salary".to_string(),
                message: format!("must be positive, got {}", self.base_monthly_salary),
            });
        }
        Ok(())
    }
}
