//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the ledger, the calculator and the configuration
//! loader can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations return this error type, so callers at the
/// transport boundary can map each variant to a user-facing response.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::AlreadyClockedIn {
///     employee_id: "ann@example.com".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Employee 'ann@example.com' already clocked in on 2025-08-04"
/// );
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A clock-in was attempted on a date that already has one.
    #[error("Employee '{employee_id}' already clocked in on {date}")]
    AlreadyClockedIn {
        /// The employee identifier.
        employee_id: String,
        /// The attendance date.
        date: NaiveDate,
    },

    /// A clock-out was attempted without a prior clock-in.
    #[error("Employee '{employee_id}' must clock in before clocking out on {date}")]
    NotClockedIn {
        /// The employee identifier.
        employee_id: String,
        /// The attendance date.
        date: NaiveDate,
    },

    /// A clock-out was attempted on a date that already has one.
    #[error("Employee '{employee_id}' already clocked out on {date}")]
    AlreadyClockedOut {
        /// The employee identifier.
        employee_id: String,
        /// The attendance date.
        date: NaiveDate,
    },

    /// Clock-out precedes clock-in and does not qualify as a midnight crossover.
    #[error("Clock-out {clock_out} is earlier than clock-in {clock_in} and does not cross midnight")]
    InvalidTimeOrder {
        /// The clock-in time.
        clock_in: String,
        /// The clock-out time.
        clock_out: String,
    },

    /// A time value was not in `HH:MM` 24-hour format.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected value.
        value: String,
    },

    /// A date value was not in `YYYY-MM-DD` format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected value.
        value: String,
    },

    /// A manually supplied hours figure was negative.
    #[error("Invalid hours worked '{value}': must not be negative")]
    InvalidHours {
        /// The rejected value.
        value: String,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        employee_id: String,
    },

    /// A month could not be parsed into a year and month.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected value.
        value: String,
    },

    /// The month has no work days, so no daily rate can be derived.
    #[error("No work days in {year}-{month:02}")]
    NoWorkDaysInMonth {
        /// The calendar year.
        year: i32,
        /// The calendar month (1-12).
        month: u32,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A payroll policy value cannot be applied.
    #[error("Invalid payroll policy field '{field}': {value}")]
    InvalidPolicy {
        /// The policy field.
        field: String,
        /// The rejected value.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
