//! Attendance record model and related types.
//!
//! This module defines the [`AttendanceRecord`] kept by the ledger for each
//! (employee, date) pair, the [`ManualEntry`] used to correct records outside
//! the clock-in/clock-out flow, and the [`AttendanceSummary`] returned by
//! range queries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The attendance status recorded for a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee attended (set on clock-in).
    #[default]
    Present,
    /// The employee did not attend and the absence was not authorized.
    Absent,
    /// Pre-approved overtime, possibly without clock data.
    Overtime,
    /// The employee is clocked in and has not clocked out yet.
    ClockedIn,
}

impl AttendanceStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Overtime => "overtime",
            AttendanceStatus::ClockedIn => "clocked_in",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employee's attendance for one calendar date.
///
/// Clock values are `HH:MM` strings on a 24-hour clock. The ledger validates
/// every value it writes; records handed over by other stores may carry
/// malformed text, which the payroll calculator classifies explicitly.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "ann@example.com".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     clock_in: Some("08:00".to_string()),
///     clock_out: None,
///     hours_worked: None,
///     status: AttendanceStatus::Present,
/// };
/// assert!(record.has_clocked_in());
/// assert!(!record.has_clocked_out());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the employee that owns the record.
    pub employee_id: String,
    /// Calendar day the record tracks.
    pub date: NaiveDate,
    /// Clock-in time as `HH:MM`.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Clock-out time as `HH:MM`.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Hours between clock-in and clock-out, rounded to 2 decimal places.
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    /// Status of the day.
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Creates an empty record for the given key.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            clock_in: None,
            clock_out: None,
            hours_worked: None,
            status: AttendanceStatus::Present,
        }
    }

    /// Returns true if a non-blank clock-in value is recorded.
    pub fn has_clocked_in(&self) -> bool {
        is_set(self.clock_in.as_deref())
    }

    /// Returns true if a non-blank clock-out value is recorded.
    pub fn has_clocked_out(&self) -> bool {
        is_set(self.clock_out.as_deref())
    }
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Fields supplied to the manual-entry path.
///
/// `None` fields leave the existing record value untouched; the status is
/// always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    /// Clock-in time as `HH:MM`.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Clock-out time as `HH:MM`.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Explicit hours worked.
    #[serde(default)]
    pub hours_worked: Option<Decimal>,
    /// Status to record.
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl ManualEntry {
    /// Creates an entry marking the day as an unauthorized absence.
    pub fn absence() -> Self {
        Self {
            status: AttendanceStatus::Absent,
            ..Self::default()
        }
    }
}

/// Total hours and days present for one employee over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The employee the summary is for.
    pub employee_id: String,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Sum of recorded hours, rounded to 2 decimal places.
    pub total_hours: Decimal,
    /// Number of records with a clock-in, completed or not.
    pub days_present: u32,
}

impl AttendanceSummary {
    /// Returns a one-line human-readable description.
    ///
    /// ```
    /// use payroll_engine::models::AttendanceSummary;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let summary = AttendanceSummary {
    ///     employee_id: "emp_001".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
    ///     total_hours: Decimal::new(1675, 1),
    ///     days_present: 20,
    /// };
    /// assert_eq!(summary.description(), "Worked 20 days, 167.5 hours");
    /// ```
    pub fn description(&self) -> String {
        format!(
            "Worked {} days, {} hours",
            self.days_present,
            self.total_hours.round_dp(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_record_is_present_without_times() {
        let record = AttendanceRecord::new("emp_001", make_date("2025-08-04"));
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(!record.has_clocked_in());
        assert!(!record.has_clocked_out());
        assert_eq!(record.hours_worked, None);
    }

    #[test]
    fn test_blank_clock_values_count_as_unset() {
        let mut record = AttendanceRecord::new("emp_001", make_date("2025-08-04"));
        record.clock_in = Some("  ".to_string());
        record.clock_out = Some(String::new());
        assert!(!record.has_clocked_in());
        assert!(!record.has_clocked_out());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::ClockedIn).unwrap(),
            "\"clocked_in\""
        );
        let status: AttendanceStatus = serde_json::from_str("\"overtime\"").unwrap();
        assert_eq!(status, AttendanceStatus::Overtime);
        assert_eq!(AttendanceStatus::Absent.to_string(), "absent");
    }

    #[test]
    fn test_deserialize_record_with_defaults() {
        let json = r#"{
            "employee_id": "emp_001",
            "date": "2025-08-04",
            "clock_in": "08:00"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.clock_in.as_deref(), Some("08:00"));
        assert_eq!(record.clock_out, None);
        assert_eq!(record.hours_worked, None);
        assert_eq!(record.status, AttendanceStatus::Present);
    }

    #[test]
    fn test_deserialize_record_with_hours() {
        let json = r#"{
            "employee_id": "emp_001",
            "date": "2025-08-04",
            "clock_in": "08:00",
            "clock_out": "17:30",
            "hours_worked": "9.5",
            "status": "present"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hours_worked, Some(Decimal::from_str("9.5").unwrap()));
        assert!(record.has_clocked_out());
    }

    #[test]
    fn test_manual_absence_entry() {
        let entry = ManualEntry::absence();
        assert_eq!(entry.status, AttendanceStatus::Absent);
        assert_eq!(entry.clock_in, None);
        assert_eq!(entry.hours_worked, None);
    }

    #[test]
    fn test_summary_description_rounds_to_one_place() {
        let summary = AttendanceSummary {
            employee_id: "emp_001".to_string(),
            start_date: make_date("2025-08-01"),
            end_date: make_date("2025-08-31"),
            total_hours: Decimal::from_str("16.75").unwrap(),
            days_present: 2,
        };
        assert_eq!(summary.description(), "Worked 2 days, 16.8 hours");
    }
}
