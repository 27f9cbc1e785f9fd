//! Attendance ledger.
//!
//! The ledger records clock-in and clock-out events per (employee, date),
//! derives worked hours, and answers summaries over date ranges.

mod attendance_ledger;
mod clock_time;
mod store;

pub use attendance_ledger::AttendanceLedger;
pub use clock_time::{
    CLOCK_TIME_FORMAT, DATE_FORMAT, MIDNIGHT_CROSSOVER_CUTOFF_HOUR, format_clock_time,
    hours_between, parse_clock_time, parse_date, shift_hours,
};
pub use store::{AttendanceStore, InMemoryAttendanceStore, RecordKey};
