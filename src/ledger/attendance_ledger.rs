//! The attendance ledger.
//!
//! [`AttendanceLedger`] enforces the per-day clock state machine
//! (`NoRecord → ClockedIn → Completed`), offers a manual-entry path for
//! corrections, and answers hour/day summaries over date ranges.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary, ManualEntry};

use super::clock_time::{format_clock_time, hours_between, parse_clock_time, parse_date};
use super::store::{AttendanceStore, InMemoryAttendanceStore};

/// Tracks clock events per (employee, date).
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::AttendanceLedger;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let ledger = AttendanceLedger::in_memory();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
///
/// ledger.clock_in("emp_001", date, NaiveTime::from_hms_opt(8, 0, 0).unwrap()).unwrap();
/// let record = ledger.clock_out("emp_001", date, NaiveTime::from_hms_opt(17, 30, 0).unwrap()).unwrap();
///
/// assert_eq!(record.hours_worked, Some(Decimal::new(95, 1)));
/// ```
#[derive(Debug)]
pub struct AttendanceLedger<S = InMemoryAttendanceStore> {
    store: Arc<S>,
}

impl<S> Clone for AttendanceLedger<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl AttendanceLedger<InMemoryAttendanceStore> {
    /// Creates a ledger backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryAttendanceStore::new())
    }
}

impl<S: AttendanceStore> AttendanceLedger<S> {
    /// Creates a ledger over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a ledger over a store shared with other components.
    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Records the first clock-in of the day.
    ///
    /// Creates the record with status `present`. A record that exists without
    /// a clock-in (for example a manually entered absence) receives the time
    /// and becomes `present`.
    ///
    /// # Errors
    ///
    /// [`EngineError::AlreadyClockedIn`] if the day already has a clock-in; the
    /// record is left unchanged.
    pub fn clock_in(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> EngineResult<AttendanceRecord> {
        let result = self.store.apply(employee_id, date, |existing| {
            let mut record = match existing {
                Some(record) if record.has_clocked_in() => {
                    return Err(EngineError::AlreadyClockedIn {
                        employee_id: employee_id.to_string(),
                        date,
                    });
                }
                Some(record) => record.clone(),
                None => AttendanceRecord::new(employee_id, date),
            };
            record.clock_in = Some(format_clock_time(time));
            record.status = AttendanceStatus::Present;
            Ok(record)
        });

        match &result {
            Ok(record) => info!(
                employee_id,
                %date,
                clock_in = record.clock_in.as_deref().unwrap_or_default(),
                "Clocked in"
            ),
            Err(err) => warn!(employee_id, %date, error = %err, "Clock-in rejected"),
        }
        result
    }

    /// Records the clock-out of the day and derives the hours worked.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotClockedIn`] if there is no record or no clock-in
    /// - [`EngineError::AlreadyClockedOut`] if the day already has a clock-out
    /// - [`EngineError::InvalidTimeOrder`] if the clock-out precedes the
    ///   clock-in and does not qualify as a midnight crossover
    pub fn clock_out(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> EngineResult<AttendanceRecord> {
        let result = self.store.apply(employee_id, date, |existing| {
            let record = match existing {
                Some(record) if record.has_clocked_in() => record,
                _ => {
                    return Err(EngineError::NotClockedIn {
                        employee_id: employee_id.to_string(),
                        date,
                    });
                }
            };
            if record.has_clocked_out() {
                return Err(EngineError::AlreadyClockedOut {
                    employee_id: employee_id.to_string(),
                    date,
                });
            }

            let clock_in = parse_clock_time(record.clock_in.as_deref().unwrap_or_default())?;
            let hours = hours_between(clock_in, time)?;

            let mut record = record.clone();
            record.clock_out = Some(format_clock_time(time));
            record.hours_worked = Some(hours);
            Ok(record)
        });

        match &result {
            Ok(record) => info!(
                employee_id,
                %date,
                hours_worked = %record.hours_worked.unwrap_or_default(),
                "Clocked out"
            ),
            Err(err) => warn!(employee_id, %date, error = %err, "Clock-out rejected"),
        }
        result
    }

    /// Clock-in from transport values: a `YYYY-MM-DD` date and an `HH:MM` time.
    ///
    /// Both values are validated before the store is touched.
    pub fn clock_in_at(&self, employee_id: &str, date: &str, time: &str) -> EngineResult<AttendanceRecord> {
        let date = parse_date(date)?;
        let time = parse_clock_time(time)?;
        self.clock_in(employee_id, date, time)
    }

    /// Clock-out from transport values: a `YYYY-MM-DD` date and an `HH:MM` time.
    pub fn clock_out_at(&self, employee_id: &str, date: &str, time: &str) -> EngineResult<AttendanceRecord> {
        let date = parse_date(date)?;
        let time = parse_clock_time(time)?;
        self.clock_out(employee_id, date, time)
    }

    /// Creates or overwrites a record outside the clock state machine.
    ///
    /// Supplied clock values and hours replace the stored ones; omitted ones are
    /// kept. The status is always written. Used for corrections and for marking
    /// absences retroactively.
    ///
    /// When a clock value is supplied without hours and the record ends up with
    /// both clock values, `hours_worked` is recomputed from them.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidTimeFormat`] if a supplied time is not `HH:MM`
    /// - [`EngineError::InvalidHours`] if supplied hours are negative
    /// - [`EngineError::InvalidTimeOrder`] if recomputed hours would need a
    ///   clock-out before the clock-in outside the midnight crossover
    pub fn upsert_manual_record(
        &self,
        employee_id: &str,
        date: NaiveDate,
        entry: ManualEntry,
    ) -> EngineResult<AttendanceRecord> {
        let clock_in = entry
            .clock_in
            .as_deref()
            .map(parse_clock_time)
            .transpose()?
            .map(format_clock_time);
        let clock_out = entry
            .clock_out
            .as_deref()
            .map(parse_clock_time)
            .transpose()?
            .map(format_clock_time);
        if let Some(hours) = entry.hours_worked {
            if hours < Decimal::ZERO {
                return Err(EngineError::InvalidHours {
                    value: hours.to_string(),
                });
            }
        }

        let record = self.store.apply(employee_id, date, |existing| {
            let mut record = existing
                .cloned()
                .unwrap_or_else(|| AttendanceRecord::new(employee_id, date));
            let times_supplied = clock_in.is_some() || clock_out.is_some();
            if clock_in.is_some() {
                record.clock_in = clock_in;
            }
            if clock_out.is_some() {
                record.clock_out = clock_out;
            }
            if entry.hours_worked.is_some() {
                record.hours_worked = entry.hours_worked;
            } else if times_supplied {
                if let Some(hours) = recorded_hours(&record)? {
                    record.hours_worked = Some(hours);
                }
            }
            record.status = entry.status;
            Ok(record)
        })?;

        info!(employee_id, %date, status = %record.status, "Manual attendance recorded");
        Ok(record)
    }

    /// Returns the record for an employee on a date.
    pub fn record(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord> {
        self.store.get(employee_id, date)
    }

    /// Returns all of an employee's records, newest first.
    pub fn records_for(&self, employee_id: &str) -> Vec<AttendanceRecord> {
        let mut records = self.store.records_for(employee_id);
        records.reverse();
        records
    }

    /// Returns an employee's records between two dates (inclusive), oldest first.
    pub fn records_in_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        check_range(start, end)?;
        Ok(self.store.records_in_range(employee_id, start, end))
    }

    /// Totals hours and counts days present for an employee over a date range.
    ///
    /// Days present counts records with a clock-in whether or not a clock-out
    /// followed.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDateRange`] if `end` is before `start`.
    pub fn summarize(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<AttendanceSummary> {
        let records = self.records_in_range(employee_id, start, end)?;
        let summary = summarize_records(employee_id, start, end, &records);
        debug!(
            employee_id,
            %start,
            %end,
            total_hours = %summary.total_hours,
            days_present = summary.days_present,
            "Attendance summarized"
        );
        Ok(summary)
    }

    /// Summarizes every employee with a record in the range, ordered by identifier.
    pub fn attendance_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceSummary>> {
        check_range(start, end)?;
        Ok(self
            .store
            .employees_in_range(start, end)
            .iter()
            .map(|employee_id| {
                let records = self.store.records_in_range(employee_id, start, end);
                summarize_records(employee_id, start, end, &records)
            })
            .collect())
    }
}

fn recorded_hours(record: &AttendanceRecord) -> EngineResult<Option<Decimal>> {
    match (record.clock_in.as_deref(), record.clock_out.as_deref()) {
        (Some(clock_in), Some(clock_out)) => {
            let hours = hours_between(parse_clock_time(clock_in)?, parse_clock_time(clock_out)?)?;
            Ok(Some(hours))
        }
        _ => Ok(None),
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if end < start {
        return Err(EngineError::InvalidDateRange { start, end });
    }
    Ok(())
}

fn summarize_records(
    employee_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    records: &[AttendanceRecord],
) -> AttendanceSummary {
    let total_hours: Decimal = records.iter().filter_map(|r| r.hours_worked).sum();
    let days_present = records.iter().filter(|r| r.has_clocked_in()).count() as u32;

    AttendanceSummary {
        employee_id: employee_id.to_string(),
        start_date: start,
        end_date: end,
        total_hours: total_hours.round_dp(2),
        days_present,
    }
}
