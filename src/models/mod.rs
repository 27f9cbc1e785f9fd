//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used by the ledger and the
//! payroll calculator.

mod attendance;
mod employee;
mod holiday;
mod payroll_month;
mod payroll_result;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary, ManualEntry};
pub use employee::Employee;
pub use holiday::{HolidayCalendar, HolidaySource, PublicHoliday};
pub use payroll_month::{PAYMENT_DAY_OF_MONTH, PayrollMonth};
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, PayCategory, PayLine, PayrollResult,
};
