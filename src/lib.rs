//! Attendance ledger and monthly payroll engine
//!
//! This crate records employee clock-in and clock-out events per calendar day
//! and derives monthly payroll from them: regular pay, overtime, public holiday
//! bonuses and deductions for unauthorized absences, with an audit trace of
//! every decision.
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::PayrollPolicy;
//! use payroll_engine::directory::InMemoryEmployeeDirectory;
//! use payroll_engine::ledger::AttendanceLedger;
//! use payroll_engine::models::{Employee, HolidayCalendar};
//! use payroll_engine::service::PayrollService;
//! use rust_decimal::Decimal;
//!
//! let directory = InMemoryEmployeeDirectory::new(vec![Employee {
//!     id: "ann@example.com".to_string(),
//!     name: "Ann".to_string(),
//!     department: "ICT".to_string(),
//!     base_monthly_salary: Decimal::new(88000, 0),
//! }])?;
//! let service = PayrollService::new(
//!     AttendanceLedger::in_memory(),
//!     directory,
//!     HolidayCalendar::default(),
//!     PayrollPolicy::default(),
//! );
//!
//! service.ledger().clock_in_at("ann@example.com", "2025-09-01", "08:00")?;
//! service.ledger().clock_out_at("ann@example.com", "2025-09-01", "17:00")?;
//!
//! let result = service.compute_payroll("ann@example.com", "2025-09")?;
//! assert_eq!(result.regular_pay, Decimal::new(4000, 0));
//! # Ok::<(), payroll_engine::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod models;
pub mod service;
