//! Schedule row parsing.
//!
//! The exporter writes date and time as free text, and the shape of that
//! text decides what kind of event a row is:
//!
//! - `01.09.2025 - 03.09.2025` in the date column: an all-day range
//! - a range placeholder such as `00:00 - 23:59` in the time column: a single all-day date
//! - anything else: a timed match starting at `{date} {time}` Prague time

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::Prague;

use crate::error::{RozpisError, RozpisResult};
use crate::event::{Event, Schedule};
use crate::venue::Venue;

pub const COLUMN_DAY: usize = 0;
pub const COLUMN_DATE: usize = 1;
pub const COLUMN_TIME: usize = 2;
pub const COLUMN_VENUE: usize = 3;
pub const COLUMN_COMPETITION: usize = 4;
pub const COLUMN_MATCH_NUMBER: usize = 5;
pub const COLUMN_HOME: usize = 6;
pub const COLUMN_AWAY: usize = 7;
pub const COLUMN_STATE: usize = 8;

/// Number of columns every row must have.
pub const COLUMN_COUNT: usize = 9;

/// Assumed length of a match
pub const MATCH_DURATION_HOURS: i64 = 2;

const RANGE_SEPARATOR: &str = " - ";
const DATE_FORMAT: &str = "%d.%m.%Y";
const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Parse one schedule row into an event.
///
/// `line` is only used for error reporting.
pub fn parse_row(fields: &[&str], line: u64) -> RozpisResult<Event> {
    if fields.len() < COLUMN_COUNT {
        return Err(RozpisError::MalformedRow {
            line,
            columns: fields.len(),
            expected: COLUMN_COUNT,
        });
    }

    let schedule = parse_schedule(fields[COLUMN_DATE], fields[COLUMN_TIME])?;
    let venue = Venue::from_code(fields[COLUMN_VENUE])?;

    Ok(Event {
        schedule,
        venue,
        home: fields[COLUMN_HOME].to_string(),
        away: fields[COLUMN_AWAY].to_string(),
        state: fields[COLUMN_STATE].to_string(),
        competition: fields[COLUMN_COMPETITION].to_string(),
        match_number: fields[COLUMN_MATCH_NUMBER].to_string(),
    })
}

/// Resolve the date and time columns into a schedule.
pub fn parse_schedule(date_text: &str, time_text: &str) -> RozpisResult<Schedule> {
    if date_text.contains(RANGE_SEPARATOR) {
        let (start, end) = parse_date_range(date_text)?;
        return Ok(Schedule::AllDay {
            start,
            end: end + Duration::days(1),
        });
    }

    if time_text.contains(RANGE_SEPARATOR) {
        let day = parse_date(date_text)?;
        return Ok(Schedule::AllDay {
            start: day,
            end: day,
        });
    }

    let start = parse_local_date_time(date_text, time_text)?;
    Ok(Schedule::Timed {
        start,
        end: start + Duration::hours(MATCH_DURATION_HOURS),
    })
}

/// Parse `dd.mm.yyyy - dd.mm.yyyy` into its inclusive first and last day.
fn parse_date_range(text: &str) -> RozpisResult<(NaiveDate, NaiveDate)> {
    let parts: Vec<&str> = text
        .split('-')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [start, end] => {
            let start = NaiveDate::parse_from_str(start, DATE_FORMAT)
                .map_err(|_| RozpisError::InvalidDate(text.to_string()))?;
            let end = NaiveDate::parse_from_str(end, DATE_FORMAT)
                .map_err(|_| RozpisError::InvalidDate(text.to_string()))?;
            Ok((start, end))
        }
        _ => Err(RozpisError::InvalidDate(text.to_string())),
    }
}

/// Parse `dd.mm.yyyy` as a calendar day.
pub fn parse_date(text: &str) -> RozpisResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| RozpisError::InvalidDate(text.to_string()))
}

/// Parse `dd.mm.yyyy` + `HH:MM` as Prague wall time.
///
/// A time repeated by the autumn DST change resolves to its first
/// occurrence. A time skipped by the spring change is rejected.
pub fn parse_local_date_time(date_text: &str, time_text: &str) -> RozpisResult<DateTime<Utc>> {
    let combined = format!("{} {}", date_text.trim(), time_text.trim());
    let naive = NaiveDateTime::parse_from_str(&combined, DATE_TIME_FORMAT)
        .map_err(|_| RozpisError::InvalidDateTime(combined.clone()))?;

    Prague
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(RozpisError::InvalidDateTime(combined))
}
