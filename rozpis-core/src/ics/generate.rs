//! ICS document generation.

use chrono::{DateTime, Duration, Utc};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::event::{CalendarEntry, EventTime};

pub const PRODID: &str = "-//rozpis//rozpis//CS";

/// Vendor property carrying the estimated travel time to the venue
pub const TRAVEL_DURATION_PROPERTY: &str = "X-APPLE-TRAVEL-DURATION";

/// Calendar-level data that is not part of any entry.
#[derive(Debug, Clone)]
pub struct CalendarMetadata {
    /// Shown by clients as the calendar name (X-WR-CALNAME)
    pub title: String,
    /// Used as DTSTAMP of every entry
    pub generated_at: DateTime<Utc>,
}

/// Generate a complete calendar document for the given entries.
pub fn generate_calendar(entries: &[CalendarEntry], metadata: &CalendarMetadata) -> String {
    let mut cal = Calendar::new();
    cal.name(&metadata.title);

    let dtstamp = metadata.generated_at.format("%Y%m%dT%H%M%SZ").to_string();

    for entry in entries {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&entry.uid);
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.summary(&entry.summary);
        ics_event.location(&entry.location);

        add_datetime_property(&mut ics_event, "DTSTART", &entry.start);
        if let Some(ref end) = entry.end {
            add_datetime_property(&mut ics_event, "DTEND", end);
        }

        if let Some(duration) = entry.duration {
            ics_event.add_property("DURATION", format_duration(duration));
        }

        if let Some(travel) = entry.travel_duration {
            let mut prop = Property::new(TRAVEL_DURATION_PROPERTY, format_duration(travel));
            prop.add_parameter("VALUE", "DURATION");
            ics_event.append_property(prop);
        }

        cal.push(ics_event.done());
    }

    strip_ics_bloat(&cal.done().to_string())
}

/// Format a duration as an RFC 5545 duration value, e.g. `PT1H40M`.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    match (hours, minutes) {
        (0, m) => format!("{sign}PT{m}M"),
        (h, 0) => format!("{sign}PT{h}H"),
        (h, m) => format!("{sign}PT{h}H{m}M"),
    }
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with ours
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Add a datetime property with proper formatting based on EventTime variant
fn add_datetime_property(ics_event: &mut icalendar::Event, name: &str, time: &EventTime) {
    match time {
        EventTime::Date(d) => {
            let mut prop = Property::new(name, d.format("%Y%m%d").to_string());
            prop.append_parameter(ValueType::Date);
            ics_event.append_property(prop);
        }
        EventTime::DateTime(dt) => {
            ics_event.add_property(name, dt.format("%Y%m%dT%H%M%SZ").to_string());
        }
    }
}
