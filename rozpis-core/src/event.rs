//! Schedule events and calendar entries.
//!
//! An `Event` is one row of the schedule export. A `CalendarEntry` is one
//! VEVENT in the generated calendar; a timed match produces two of them.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::venue::Venue;

/// A calendar timestamp: either a whole day or an exact instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

/// When a match takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Whole days; `end` is exclusive, matching iCalendar DTEND semantics.
    AllDay { start: NaiveDate, end: NaiveDate },
    /// A timed match, resolved from local wall time.
    Timed {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// One row of the schedule export.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub schedule: Schedule,
    pub venue: Venue,
    pub home: String,
    pub away: String,
    /// Match status text, e.g. "Odehráno" or "Nehraje se"
    pub state: String,
    pub competition: String,
    pub match_number: String,
}

impl Event {
    pub fn is_all_day(&self) -> bool {
        matches!(self.schedule, Schedule::AllDay { .. })
    }

    pub fn start(&self) -> EventTime {
        match self.schedule {
            Schedule::AllDay { start, .. } => EventTime::Date(start),
            Schedule::Timed { start, .. } => EventTime::DateTime(start),
        }
    }

    pub fn end(&self) -> EventTime {
        match self.schedule {
            Schedule::AllDay { end, .. } => EventTime::Date(end),
            Schedule::Timed { end, .. } => EventTime::DateTime(end),
        }
    }

    /// "{home} - {away}"
    pub fn title(&self) -> String {
        format!("{} - {}", self.home, self.away)
    }
}

/// A VEVENT ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub uid: String,
    pub start: EventTime,
    pub end: Option<EventTime>,
    pub duration: Option<Duration>,
    pub location: String,
    pub summary: String,
    /// Informational travel time (X-APPLE-TRAVEL-DURATION)
    pub travel_duration: Option<Duration>,
}
