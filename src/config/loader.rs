//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::directory::InMemoryEmployeeDirectory;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, HolidayCalendar, PublicHoliday};

use super::types::{EmployeesConfig, HolidaysConfig, PayrollConfig, PayrollPolicy};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides the policy, the employee directory and the holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml      # Pay rules (hours, multipliers)
/// ├── employees.yaml   # Employee directory seed
/// └── holidays/
///     └── 2025.yaml    # Public holidays, one file per year
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let employee = loader.get_employee("nicole@example.com").unwrap();
/// println!("{} earns {}", employee.name, employee.base_monthly_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - The policy holds a non-positive daily hours value or a negative value
    /// - An employee is invalid or listed twice
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PayrollPolicy>(&policy_path)?;
        if let Some((field, value)) = policy.find_invalid_field() {
            return Err(EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: format!("{} has unusable value {}", field, value),
            });
        }

        let employees_path = path.join("employees.yaml");
        let employees = Self::load_yaml::<EmployeesConfig>(&employees_path)?.employees;
        Self::check_employees(&employees_path, &employees)?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            path = %path.display(),
            employees = employees.len(),
            holidays = holidays.len(),
            "Payroll configuration loaded"
        );

        let config = PayrollConfig::new(policy, employees, HolidayCalendar::new(holidays));
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_employees(path: &Path, employees: &[Employee]) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for employee in employees {
            employee.validate()?;
            if !seen.insert(employee.id.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate employee id '{}'", employee.id),
                });
            }
        }
        Ok(())
    }

    /// Loads every holiday file from the holidays directory, in file name order.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<PublicHoliday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();

        let mut holidays = Vec::new();
        for file in &files {
            holidays.extend(Self::load_yaml::<HolidaysConfig>(file)?.holidays);
        }
        Ok(holidays)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        self.config.policy()
    }

    /// Returns all configured employees, ordered by identifier.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets an employee by identifier.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmployeeNotFound`] if no employee has the identifier.
    pub fn get_employee(&self, employee_id: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Returns the holiday calendar.
    pub fn holiday_calendar(&self) -> &HolidayCalendar {
        self.config.holidays()
    }

    /// Builds an employee directory seeded with the configured employees.
    pub fn employee_directory(&self) -> EngineResult<InMemoryEmployeeDirectory> {
        InMemoryEmployeeDirectory::new(self.config.employees().iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::EmployeeDirectory;
    use crate::models::HolidaySource;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes a configuration directory under the system temp dir.
    fn write_config(name: &str, policy: &str, employees: &str, holidays: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(dir.join("holidays")).unwrap();
        fs::write(dir.join("policy.yaml"), policy).unwrap();
        fs::write(dir.join("employees.yaml"), employees).unwrap();
        for (file, content) in holidays {
            fs::write(dir.join("holidays").join(file), content).unwrap();
        }
        dir
    }

    const EMPLOYEES: &str = "employees:\n  - id: ann@example.com\n    name: Ann\n    department: ICT\n    base_monthly_salary: 50000\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), &PayrollPolicy::default());
        assert!(!loader.employees().is_empty());
    }

    #[test]
    fn test_get_employee() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let employee = loader.get_employee("nicole@example.com").unwrap();
        assert_eq!(employee.name, "Nicole Wanjiru");
        assert_eq!(employee.base_monthly_salary, dec("85000"));
    }

    #[test]
    fn test_get_employee_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_employee("unknown@example.com") {
            Err(EngineError::EmployeeNotFound { employee_id }) => {
                assert_eq!(employee_id, "unknown@example.com");
            }
            other => panic!("Expected EmployeeNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_holiday_calendar_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let calendar = loader.holiday_calendar();

        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 4, 18).unwrap()));
        assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()));
    }

    #[test]
    fn test_employee_directory_built_from_config() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let directory = loader.employee_directory().unwrap();

        assert_eq!(directory.len(), loader.employees().len());
        assert!(directory.find("nicole@example.com").is_some());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_holidays_directory_returns_error() {
        let dir = write_config("no-holidays", "{}\n", EMPLOYEES, &[]);
        fs::remove_dir(dir.join("holidays")).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("holidays")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_bad_yaml_returns_parse_error() {
        let dir = write_config("bad-yaml", "standard_daily_hours: [8\n", EMPLOYEES, &[]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_unusable_policy_value_rejected() {
        let dir = write_config("zero-hours", "standard_daily_hours: 0\n", EMPLOYEES, &[]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("standard_daily_hours"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_duplicate_employee_rejected() {
        let employees = format!("{}{}", EMPLOYEES, &EMPLOYEES["employees:\n".len()..]);
        let dir = write_config("duplicate", "{}\n", &employees, &[]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("ann@example.com"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_holiday_files_are_merged() {
        let dir = write_config(
            "merged",
            "holiday_multiplier: 2.5\n",
            EMPLOYEES,
            &[
                ("2025.yaml", "holidays:\n  - date: 2025-12-25\n    name: Christmas Day\n"),
                ("2026.yaml", "holidays:\n  - date: 2026-01-01\n    name: New Year's Day\n"),
                ("notes.txt", "ignored"),
            ],
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.policy().holiday_multiplier, dec("2.5"));
        assert_eq!(loader.holiday_calendar().holidays().len(), 2);
        fs::remove_dir_all(dir).unwrap();
    }
}
