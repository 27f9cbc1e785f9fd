//! Public holiday model and holiday lookup.
//!
//! This module contains the [`PublicHoliday`] type, the [`HolidaySource`]
//! capability the payroll calculator depends on, and [`HolidayCalendar`],
//! an in-memory implementation of it.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named public holiday.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     name: "Madaraka Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}

/// Read access to a set of public holidays.
pub trait HolidaySource: Send + Sync {
    /// Returns true if `date` is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Returns the holiday dates falling in the given month.
    fn holidays_in_month(&self, year: i32, month: u32) -> BTreeSet<NaiveDate>;
}

/// An in-memory holiday calendar.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{HolidayCalendar, HolidaySource, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
///     name: "Labour Day".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()));
/// assert_eq!(calendar.holidays_in_month(2025, 5).len(), 1);
/// assert!(calendar.holidays_in_month(2025, 6).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar, sorted by date, keeping the first name seen per date.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        let mut holidays = holidays;
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        holidays.dedup_by(|later, earlier| later.date == earlier.date);
        Self { holidays }
    }

    /// Returns all holidays in date order.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Returns the holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.holidays
            .binary_search_by(|h| h.date.cmp(&date))
            .ok()
            .map(|idx| &self.holidays[idx])
    }
}

impl HolidaySource for HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    fn holidays_in_month(&self, year: i32, month: u32) -> BTreeSet<NaiveDate> {
        self.holidays
            .iter()
            .filter(|h| h.date.year() == year && h.date.month() == month)
            .map(|h| h.date)
            .collect()
    }
}
