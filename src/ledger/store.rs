//! Attendance storage.
//!
//! The ledger owns all record mutation but delegates persistence to an
//! [`AttendanceStore`]. Every mutation goes through [`AttendanceStore::apply`],
//! which runs the state transition and commits its result atomically for the
//! (employee, date) key, so two racing clock-ins cannot both succeed.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

/// Storage key of an attendance record.
pub type RecordKey = (String, NaiveDate);

/// Persistence for attendance records.
pub trait AttendanceStore: Send + Sync {
    /// Returns the record for an employee on a date.
    fn get(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord>;

    /// Runs `transition` against the current record and stores its output.
    ///
    /// The read, the transition and the write happen as one step for the key.
    /// When the transition fails nothing is written.
    fn apply<F>(
        &self,
        employee_id: &str,
        date: NaiveDate,
        transition: F,
    ) -> EngineResult<AttendanceRecord>
    where
        F: FnOnce(Option<&AttendanceRecord>) -> EngineResult<AttendanceRecord>;

    /// Returns an employee's records between two dates (inclusive), oldest first.
    fn records_in_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AttendanceRecord>;

    /// Returns every record of an employee, oldest first.
    fn records_for(&self, employee_id: &str) -> Vec<AttendanceRecord>;

    /// Returns the identifiers of employees with any record in the range, sorted.
    fn employees_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<String>;
}

/// An [`AttendanceStore`] kept in process memory.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::{AttendanceStore, InMemoryAttendanceStore};
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let store = InMemoryAttendanceStore::new();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
/// store.apply("emp_001", date, |_| Ok(AttendanceRecord::new("emp_001", date))).unwrap();
/// assert!(store.get("emp_001", date).is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: RwLock<BTreeMap<RecordKey, AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given records.
    ///
    /// Later records replace earlier ones with the same key.
    pub fn with_records(records: impl IntoIterator<Item = AttendanceRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| ((r.employee_id.clone(), r.date), r))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn get(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord> {
        self.records
            .read()
            .get(&(employee_id.to_string(), date))
            .cloned()
    }

    fn apply<F>(
        &self,
        employee_id: &str,
        date: NaiveDate,
        transition: F,
    ) -> EngineResult<AttendanceRecord>
    where
        F: FnOnce(Option<&AttendanceRecord>) -> EngineResult<AttendanceRecord>,
    {
        let key = (employee_id.to_string(), date);
        let mut guard = self.records.write();
        let updated = transition(guard.get(&key))?;
        guard.insert(key, updated.clone());
        Ok(updated)
    }

    fn records_in_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        if end < start {
            return Vec::new();
        }
        let lower = (employee_id.to_string(), start);
        let upper = (employee_id.to_string(), end);
        self.records
            .read()
            .range(lower..=upper)
            .map(|(_, record)| record.clone())
            .collect()
    }

    fn records_for(&self, employee_id: &str) -> Vec<AttendanceRecord> {
        self.records_in_range(employee_id, NaiveDate::MIN, NaiveDate::MAX)
    }

    fn employees_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<String> {
        let mut employees: Vec<String> = self
            .records
            .read()
            .values()
            .filter(|r| r.date >= start && r.date <= end)
            .map(|r| r.employee_id.clone())
            .collect();
        employees.dedup();
        employees
    }
}
