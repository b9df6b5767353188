//! Core library for rozpis.
//!
//! Turns the league website's schedule export into iCalendar documents:
//! - `schedule` and `row` read the Windows-1250 CSV into `Event`s
//! - `venue` is the closed catalog of stadium codes
//! - `expand` produces arrival and match entries
//! - `ics` writes (and reads back) the calendar
//! - `feed` loads the list of configured feeds

pub mod error;
pub mod event;
pub mod expand;
pub mod feed;
pub mod ics;
pub mod pipeline;
pub mod row;
pub mod schedule;
pub mod venue;

pub use error::{RozpisError, RozpisResult};
pub use event::{CalendarEntry, Event, EventTime, Schedule};
pub use feed::FeedConfig;
pub use venue::Venue;
