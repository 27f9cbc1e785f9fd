//! Work day detection.
//!
//! A work day is a Monday to Friday that is not a public holiday. The number
//! of work days in a month divides the monthly salary into a daily salary.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, HolidaySource, PayrollMonth};

/// The result of counting the work days of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayCount {
    /// Weekdays in the month that are not public holidays.
    pub work_days: u32,
    /// Public holidays falling on a weekday, in date order.
    pub weekday_holidays: Vec<NaiveDate>,
    /// The audit step recording the count.
    pub audit_step: AuditStep,
}

/// Returns true if the date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if the date is a Monday to Friday that is not a holiday.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::is_work_day;
/// use payroll_engine::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let holidays = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
///     name: "Mashujaa Day".to_string(),
/// }]);
///
/// // Friday
/// assert!(is_work_day(NaiveDate::from_ymd_opt(2025, 10, 17).unwrap(), &holidays));
/// // Saturday
/// assert!(!is_work_day(NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(), &holidays));
/// // Monday, public holiday
/// assert!(!is_work_day(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(), &holidays));
/// ```
pub fn is_work_day(date: NaiveDate, holidays: &dyn HolidaySource) -> bool {
    !is_weekend(date) && !holidays.is_holiday(date)
}

/// Counts the work days of a month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::count_work_days;
/// use payroll_engine::models::{HolidayCalendar, PayrollMonth};
///
/// // September 2025 starts on a Monday and has 30 days
/// let month = PayrollMonth::new(2025, 9).unwrap();
/// let count = count_work_days(month, &HolidayCalendar::default(), 1);
/// assert_eq!(count.work_days, 22);
/// ```
pub fn count_work_days(
    month: PayrollMonth,
    holidays: &dyn HolidaySource,
    step_number: u32,
) -> WorkDayCount {
    let holidays_in_month = holidays.holidays_in_month(month.year(), month.month());

    let weekdays: Vec<NaiveDate> = month.days().filter(|d| !is_weekend(*d)).collect();
    let weekday_holidays: Vec<NaiveDate> = weekdays
        .iter()
        .copied()
        .filter(|d| holidays_in_month.contains(d))
        .collect();
    let work_days = (weekdays.len() - weekday_holidays.len()) as u32;

    let reasoning = if weekday_holidays.is_empty() {
        format!("{} has {} weekdays and no weekday holidays", month, weekdays.len())
    } else {
        format!(
            "{} has {} weekdays, less {} public holiday(s) falling on a weekday",
            month,
            weekdays.len(),
            weekday_holidays.len()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "work_day_count".to_string(),
        rule_name: "Work Day Count".to_string(),
        input: serde_json::json!({
            "month": month.to_string(),
            "public_holidays": holidays_in_month
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "weekdays": weekdays.len(),
            "work_days": work_days
        }),
        reasoning,
    };

    WorkDayCount {
        work_days,
        weekday_holidays,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HolidayCalendar, PublicHoliday};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn calendar(dates: &[&str]) -> HolidayCalendar {
        HolidayCalendar::new(
            dates
                .iter()
                .map(|d| PublicHoliday {
                    date: make_date(d),
                    name: format!("Holiday {}", d),
                })
                .collect(),
        )
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(make_date("2025-08-02"))); // Saturday
        assert!(is_weekend(make_date("2025-08-03"))); // Sunday
        assert!(!is_weekend(make_date("2025-08-04"))); // Monday
        assert!(!is_weekend(make_date("2025-08-08"))); // Friday
    }

    #[test]
    fn test_month_without_holidays() {
        let count = count_work_days(
            PayrollMonth::new(2025, 8).unwrap(),
            &HolidayCalendar::default(),
            1,
        );
        assert_eq!(count.work_days, 21);
        assert!(count.weekday_holidays.is_empty());
        assert_eq!(count.audit_step.rule_id, "work_day_count");
        assert_eq!(count.audit_step.output["work_days"], 21);
    }

    #[test]
    fn test_weekday_holidays_reduce_count() {
        // October 2025: 23 weekdays, Huduma Day (Fri) and Mashujaa Day (Mon)
        let holidays = calendar(&["2025-10-10", "2025-10-20"]);
        let count = count_work_days(PayrollMonth::new(2025, 10).unwrap(), &holidays, 1);

        assert_eq!(count.work_days, 21);
        assert_eq!(
            count.weekday_holidays,
            vec![make_date("2025-10-10"), make_date("2025-10-20")]
        );
    }

    #[test]
    fn test_weekend_holiday_does_not_reduce_count() {
        // Madaraka Day 2025 falls on a Sunday; June 2025 has 21 weekdays
        let holidays = calendar(&["2025-06-01"]);
        let count = count_work_days(PayrollMonth::new(2025, 6).unwrap(), &holidays, 1);

        assert_eq!(count.work_days, 21);
        assert!(count.weekday_holidays.is_empty());
    }

    #[test]
    fn test_holidays_in_other_months_ignored() {
        let holidays = calendar(&["2025-12-25", "2024-09-02"]);
        let count = count_work_days(PayrollMonth::new(2025, 9).unwrap(), &holidays, 1);
        assert_eq!(count.work_days, 22);
    }

    #[test]
    fn test_every_weekday_a_holiday_gives_zero() {
        let month = PayrollMonth::new(2025, 2).unwrap();
        let all_days: Vec<String> = month.days().map(|d| d.to_string()).collect();
        let refs: Vec<&str> = all_days.iter().map(String::as_str).collect();

        let count = count_work_days(month, &calendar(&refs), 3);
        assert_eq!(count.work_days, 0);
        assert_eq!(count.audit_step.step_number, 3);
    }
}
