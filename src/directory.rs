//! Employee lookup.
//!
//! The payroll service resolves employees (and their salaries) through an
//! [`EmployeeDirectory`]. [`InMemoryEmployeeDirectory`] is seeded from
//! `employees.yaml` by the configuration loader.

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::Employee;

/// Read access to employees.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the employee with the given identifier.
    fn find(&self, employee_id: &str) -> Option<Employee>;
}

/// An [`EmployeeDirectory`] kept in process memory.
///
/// # Example
///
/// ```
/// use payroll_engine::directory::{EmployeeDirectory, InMemoryEmployeeDirectory};
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let directory = InMemoryEmployeeDirectory::new(vec![Employee {
///     id: "nicole@example.com".to_string(),
///     name: "Nicole".to_string(),
///     department: "ICT".to_string(),
///     base_monthly_salary: Decimal::new(85000, 0),
/// }])
/// .unwrap();
///
/// assert!(directory.find("nicole@example.com").is_some());
/// assert!(directory.find("nobody@example.com").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: HashMap<String, Employee>,
}

impl InMemoryEmployeeDirectory {
    /// Creates a directory from a list of employees.
    ///
    /// Each employee is validated. A later entry with a repeated identifier
    /// replaces the earlier one.
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> EngineResult<Self> {
        let mut directory = Self::default();
        for employee in employees {
            directory.insert(employee)?;
        }
        Ok(directory)
    }

    /// Adds or replaces an employee.
    pub fn insert(&mut self, employee: Employee) -> EngineResult<()> {
        employee.validate()?;
        self.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn find(&self, employee_id: &str) -> Option<Employee> {
        self.employees.get(employee_id).cloned()
    }
}
