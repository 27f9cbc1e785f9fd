//! Calculation logic for the payroll engine.
//!
//! This module contains the functions that turn a month of attendance
//! records into a payroll: work day counting, daily and hourly rate
//! derivation, record classification, the daily regular/overtime/holiday
//! split, and the monthly payroll pipeline that ties them together.

mod classification;
mod daily_pay;
mod payroll;
mod rates;
mod work_days;

pub use classification::{RecordClassification, classify_record};
pub use daily_pay::{DailyHoursSplit, split_daily_hours};
pub use payroll::{calculate_payroll, round_report};
pub use rates::{RateDerivation, derive_rates};
pub use work_days::{WorkDayCount, count_work_days, is_weekend, is_work_day};
