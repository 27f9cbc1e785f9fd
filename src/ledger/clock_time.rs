//! Clock time parsing and shift duration.
//!
//! Clock values travel as `HH:MM` strings on a 24-hour clock and dates as
//! `YYYY-MM-DD`. This module parses both and derives the worked duration
//! between a clock-in and a clock-out, including shifts that cross midnight.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Clock-out hours strictly below this value may cross midnight.
///
/// A clock-out earlier than the clock-in is treated as falling on the next
/// day only when its hour is before 12:00; anything later is rejected.
pub const MIDNIGHT_CROSSOVER_CUTOFF_HOUR: u32 = 12;

/// The `chrono` format of clock values.
pub const CLOCK_TIME_FORMAT: &str = "%H:%M";

/// The `chrono` format of date values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Parses an `HH:MM` clock value.
///
/// # Examples
///
/// ```
/// use payroll_engine::ledger::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert!(parse_clock_time("8am").is_err());
/// assert!(parse_clock_time("24:00").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_TIME_FORMAT).map_err(|_| {
        EngineError::InvalidTimeFormat {
            value: value.to_string(),
        }
    })
}

/// Parses a `YYYY-MM-DD` date value.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Formats a clock time as `HH:MM`.
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format(CLOCK_TIME_FORMAT).to_string()
}

/// Calculates the hours between a clock-in and a clock-out.
///
/// The result is rounded to 2 decimal places. When the clock-out is earlier
/// than the clock-in, the shift is taken to cross midnight if the clock-out
/// hour is before [`MIDNIGHT_CROSSOVER_CUTOFF_HOUR`]; otherwise the pair is
/// rejected with [`EngineError::InvalidTimeOrder`].
///
/// # Examples
///
/// ```
/// use payroll_engine::ledger::{hours_between, parse_clock_time};
/// use rust_decimal::Decimal;
///
/// let hours = hours_between(parse_clock_time("08:00").unwrap(), parse_clock_time("17:00").unwrap()).unwrap();
/// assert_eq!(hours, Decimal::new(9, 0));
///
/// // 23:30 to 00:15 crosses midnight: 45 minutes
/// let hours = hours_between(parse_clock_time("23:30").unwrap(), parse_clock_time("00:15").unwrap()).unwrap();
/// assert_eq!(hours, Decimal::new(75, 2));
/// ```
pub fn hours_between(clock_in: NaiveTime, clock_out: NaiveTime) -> EngineResult<Decimal> {
    let mut seconds = (clock_out - clock_in).num_seconds();

    if clock_out < clock_in {
        if clock_out.hour() >= MIDNIGHT_CROSSOVER_CUTOFF_HOUR {
            return Err(EngineError::InvalidTimeOrder {
                clock_in: format_clock_time(clock_in),
                clock_out: format_clock_time(clock_out),
            });
        }
        seconds += SECONDS_PER_DAY;
    }

    Ok((Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)).round_dp(2))
}

/// Parses both clock values and calculates the hours between them.
pub fn shift_hours(clock_in: &str, clock_out: &str) -> EngineResult<Decimal> {
    hours_between(parse_clock_time(clock_in)?, parse_clock_time(clock_out)?)
}
