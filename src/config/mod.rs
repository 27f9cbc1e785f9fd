//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files: the pay policy, the employee directory seed and public holidays.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Overtime multiplier: {}", config.policy().overtime_multiplier);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeesConfig, HolidaysConfig, PayrollConfig, PayrollPolicy};
