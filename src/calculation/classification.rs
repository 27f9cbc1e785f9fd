//! Attendance record classification.
//!
//! Every record in the payroll month falls into exactly one
//! [`RecordClassification`]. Classification never fails: malformed clock data
//! is a classification of its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{hours_between, parse_clock_time};
use crate::models::{AttendanceRecord, AttendanceStatus};

/// How a record contributes to the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordClassification {
    /// Both clock values are present and valid; the day is paid.
    Clocked {
        /// Hours worked before the unpaid break is subtracted.
        hours: Decimal,
    },
    /// Overtime status without usable clock data; a fixed block is paid.
    PreApprovedOvertime {
        /// Why the clock values could not be read, if any were recorded.
        unreadable_clock: Option<String>,
    },
    /// Absent on a work day; one absence is deducted.
    UnauthorizedAbsence,
    /// Clock data that cannot be read. Deducted as an absence on a work day.
    Malformed {
        /// What made the clock data unusable.
        detail: String,
    },
    /// Clock data that is missing a clock-out or clock-in.
    Incomplete {
        /// What is missing.
        detail: String,
    },
    /// Contributes nothing.
    Excluded {
        /// Why the record was excluded.
        reason: String,
    },
}

impl RecordClassification {
    /// Returns a short label for logs and audit steps.
    pub fn label(&self) -> &'static str {
        match self {
            RecordClassification::Clocked { .. } => "clocked",
            RecordClassification::PreApprovedOvertime { .. } => "pre_approved_overtime",
            RecordClassification::UnauthorizedAbsence => "unauthorized_absence",
            RecordClassification::Malformed { .. } => "malformed",
            RecordClassification::Incomplete { .. } => "incomplete",
            RecordClassification::Excluded { .. } => "excluded",
        }
    }
}

/// The state of a record's clock values.
enum ClockData {
    Usable(Decimal),
    Malformed(String),
    Partial(String),
    Empty,
}

/// Classifies an attendance record.
///
/// Precedence, first match wins:
///
/// 1. Both clock values parse and are in a valid order: [`Clocked`]. The stored
///    `hours_worked` is used when present, otherwise the hours are recomputed
///    with the ledger's midnight rule.
/// 2. Status `overtime`: [`PreApprovedOvertime`], carrying the reason when
///    clock values were recorded but cannot be read.
/// 3. A clock value that does not parse, a clock-out that precedes the
///    clock-in past the crossover cutoff, or negative stored hours: [`Malformed`].
/// 4. Status `absent`: [`UnauthorizedAbsence`] on a work day, otherwise
///    [`Excluded`].
/// 5. Only one clock value, or hours without clock values: [`Incomplete`].
/// 6. Anything else: [`Excluded`].
///
/// [`Clocked`]: RecordClassification::Clocked
/// [`Malformed`]: RecordClassification::Malformed
/// [`PreApprovedOvertime`]: RecordClassification::PreApprovedOvertime
/// [`UnauthorizedAbsence`]: RecordClassification::UnauthorizedAbsence
/// [`Excluded`]: RecordClassification::Excluded
/// [`Incomplete`]: RecordClassification::Incomplete
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{classify_record, RecordClassification};
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut record = AttendanceRecord::new("emp_001", NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
/// record.clock_in = Some("08:00".to_string());
/// record.clock_out = Some("17:00".to_string());
///
/// assert_eq!(
///     classify_record(&record, true),
///     RecordClassification::Clocked { hours: Decimal::new(9, 0) }
/// );
///
/// record.clock_in = None;
/// record.clock_out = None;
/// record.status = AttendanceStatus::Absent;
/// assert_eq!(classify_record(&record, true), RecordClassification::UnauthorizedAbsence);
/// ```
pub fn classify_record(record: &AttendanceRecord, is_work_day: bool) -> RecordClassification {
    let clock_data = read_clock_data(record);
    if let ClockData::Usable(hours) = clock_data {
        return RecordClassification::Clocked { hours };
    }

    if record.status == AttendanceStatus::Overtime {
        let unreadable_clock = match clock_data {
            ClockData::Malformed(detail) => Some(detail),
            _ => None,
        };
        return RecordClassification::PreApprovedOvertime { unreadable_clock };
    }

    match clock_data {
        ClockData::Malformed(detail) => return RecordClassification::Malformed { detail },
        ClockData::Partial(detail) if record.status != AttendanceStatus::Absent => {
            return RecordClassification::Incomplete { detail };
        }
        _ => {}
    }

    match record.status {
        AttendanceStatus::Absent if is_work_day => RecordClassification::UnauthorizedAbsence,
        AttendanceStatus::Absent => RecordClassification::Excluded {
            reason: "absence on a non-work day".to_string(),
        },
        _ => match record.hours_worked {
            Some(hours) => RecordClassification::Incomplete {
                detail: format!("{} hours recorded without clock times", hours),
            },
            None => RecordClassification::Excluded {
                reason: "no clock data".to_string(),
            },
        },
    }
}

fn read_clock_data(record: &AttendanceRecord) -> ClockData {
    let clock_in = record.clock_in.as_deref().filter(|_| record.has_clocked_in());
    let clock_out = record.clock_out.as_deref().filter(|_| record.has_clocked_out());

    match (clock_in, clock_out) {
        (Some(clock_in), Some(clock_out)) => {
            let (parsed_in, parsed_out) = match (parse_clock_time(clock_in), parse_clock_time(clock_out)) {
                (Ok(parsed_in), Ok(parsed_out)) => (parsed_in, parsed_out),
                (Err(err), _) | (_, Err(err)) => return ClockData::Malformed(err.to_string()),
            };
            let computed = match hours_between(parsed_in, parsed_out) {
                Ok(hours) => hours,
                Err(err) => return ClockData::Malformed(err.to_string()),
            };
            match record.hours_worked {
                Some(hours) if hours < Decimal::ZERO => {
                    ClockData::Malformed(format!("negative hours worked {}", hours))
                }
                Some(hours) => ClockData::Usable(hours),
                None => ClockData::Usable(computed),
            }
        }
        (Some(value), None) | (None, Some(value)) => match parse_clock_time(value) {
            Err(err) => ClockData::Malformed(err.to_string()),
            Ok(_) if clock_in.is_some() => {
                ClockData::Partial(format!("clock-in {} without clock-out", value.trim()))
            }
            Ok(_) => ClockData::Partial(format!("clock-out {} without clock-in", value.trim())),
        },
        (None, None) => ClockData::Empty,
    }
}
