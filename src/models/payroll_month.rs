//! Payroll month model.
//!
//! A [`PayrollMonth`] is a calendar month parsed from `YYYY-MM`, the unit
//! payroll is computed over.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Day of the following month on which salaries are paid.
pub const PAYMENT_DAY_OF_MONTH: u32 = 5;

/// A calendar month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollMonth;
/// use chrono::NaiveDate;
///
/// let month: PayrollMonth = "2025-02".parse().unwrap();
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// assert_eq!(month.to_string(), "2025-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayrollMonth {
    first_day: NaiveDate,
}

impl PayrollMonth {
    /// Creates a month from a year and a month number (1-12).
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| EngineError::InvalidMonth {
                value: format!("{}-{:02}", year, month),
            })
    }

    /// Returns the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month number (1-12).
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day.pred_opt().unwrap_or(self.first_day)
    }

    /// The following month.
    pub fn next(&self) -> Self {
        Self {
            first_day: self
                .first_day
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first_day),
        }
    }

    /// Iterates over every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let month = self.month();
        self.first_day
            .iter_days()
            .take_while(move |d| d.month() == month)
    }

    /// Returns true if `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The date salaries for this month are paid: the 5th of the next month.
    pub fn payment_date(&self) -> NaiveDate {
        let next = self.next().first_day;
        next.with_day(PAYMENT_DAY_OF_MONTH).unwrap_or(next)
    }
}

impl FromStr for PayrollMonth {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: value.to_string(),
        };

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for PayrollMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayrollMonth> for String {
    fn from(month: PayrollMonth) -> Self {
        month.to_string()
    }
}

impl fmt::Display for PayrollMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
