//! Payroll service.
//!
//! [`PayrollService`] composes the attendance ledger, an employee directory, a
//! holiday source and the payroll policy, so a caller can ask for an
//! employee's payroll by identifier and `YYYY-MM` month.

use std::sync::Arc;

use tracing::{info, warn};

use crate::calculation::calculate_payroll;
use crate::config::{ConfigLoader, PayrollPolicy};
use crate::directory::{EmployeeDirectory, InMemoryEmployeeDirectory};
use crate::error::{EngineError, EngineResult};
use crate::ledger::{AttendanceLedger, AttendanceStore, InMemoryAttendanceStore};
use crate::models::{HolidayCalendar, HolidaySource, PayrollMonth, PayrollResult};

/// Computes payroll from the ledger's records.
///
/// Cloning the service is cheap; clones share the ledger, directory and
/// holidays.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::service::PayrollService;
///
/// let config = ConfigLoader::load("./config/default")?;
/// let service = PayrollService::from_config(&config)?;
///
/// service.ledger().clock_in_at("nicole@example.com", "2025-09-01", "08:00")?;
/// service.ledger().clock_out_at("nicole@example.com", "2025-09-01", "17:00")?;
///
/// let result = service.compute_payroll("nicole@example.com", "2025-09")?;
/// println!("Final salary: {}", result.final_salary);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct PayrollService<
    S = InMemoryAttendanceStore,
    D = InMemoryEmployeeDirectory,
    H = HolidayCalendar,
> {
    ledger: AttendanceLedger<S>,
    directory: Arc<D>,
    holidays: Arc<H>,
    policy: PayrollPolicy,
}

impl<S, D, H> Clone for PayrollService<S, D, H> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            directory: Arc::clone(&self.directory),
            holidays: Arc::clone(&self.holidays),
            policy: self.policy.clone(),
        }
    }
}

impl PayrollService {
    /// Creates a service over an empty in-memory ledger, seeded from configuration.
    pub fn from_config(config: &ConfigLoader) -> EngineResult<Self> {
        Ok(Self::new(
            AttendanceLedger::in_memory(),
            config.employee_directory()?,
            config.holiday_calendar().clone(),
            config.policy().clone(),
        ))
    }
}

impl<S, D, H> PayrollService<S, D, H>
where
    S: AttendanceStore,
    D: EmployeeDirectory,
    H: HolidaySource,
{
    /// Creates a service from its parts.
    pub fn new(ledger: AttendanceLedger<S>, directory: D, holidays: H, policy: PayrollPolicy) -> Self {
        Self {
            ledger,
            directory: Arc::new(directory),
            holidays: Arc::new(holidays),
            policy,
        }
    }

    /// Returns the attendance ledger.
    pub fn ledger(&self) -> &AttendanceLedger<S> {
        &self.ledger
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Computes an employee's payroll for a `YYYY-MM` month.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmployeeNotFound`] if the directory has no such employee
    /// - [`EngineError::InvalidMonth`] if `month` is not `YYYY-MM`
    /// - any error of [`calculate_payroll`]
    pub fn compute_payroll(&self, employee_id: &str, month: &str) -> EngineResult<PayrollResult> {
        let result = self
            .check_request(employee_id, month)
            .and_then(|month| self.compute_payroll_for(employee_id, month));
        if let Err(err) = &result {
            warn!(employee_id, month, error = %err, "Payroll request rejected");
        }
        result
    }

    /// Computes an employee's payroll for a parsed month.
    pub fn compute_payroll_for(
        &self,
        employee_id: &str,
        month: PayrollMonth,
    ) -> EngineResult<PayrollResult> {
        let employee = self
            .directory
            .find(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })?;

        let records =
            self.ledger
                .records_in_range(employee_id, month.first_day(), month.last_day())?;

        let result = calculate_payroll(
            &employee,
            month,
            &records,
            self.holidays.as_ref(),
            &self.policy,
        )?;

        info!(
            employee_id,
            month = %month,
            calculation_id = %result.calculation_id,
            records = records.len(),
            "Payroll computed"
        );
        Ok(result)
    }

    fn check_request(&self, employee_id: &str, month: &str) -> EngineResult<PayrollMonth> {
        if self.directory.find(employee_id).is_none() {
            return Err(EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            });
        }
        month.parse()
    }
}
