//! Turning schedule events into calendar entries.

use chrono::Duration;
use uuid::Uuid;

use crate::event::{CalendarEntry, Event, EventTime, Schedule};

/// State text the exporter uses for cancelled matches.
pub const CANCELLED_STATE: &str = "Nehraje se";

/// Summary of the reminder placed before every timed match.
pub const ARRIVAL_SUMMARY: &str = "Sraz hodinu před zápasem + rozcvička";

/// How long before a timed match players have to arrive.
pub const ARRIVAL_LEAD_HOURS: i64 = 1;

/// Namespace for entry UIDs, so regenerated calendars keep their UIDs.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_7a3e_52d4_4b8e_9a61_0c3f_d2b7_e415);

/// Drop cancelled matches and expand the rest into calendar entries.
///
/// Timed matches produce an arrival entry followed by the match itself.
/// All-day events produce only the match. Input order is preserved.
pub fn expand(events: &[Event]) -> Vec<CalendarEntry> {
    events
        .iter()
        .filter(|event| {
            let cancelled = is_cancelled(event);
            if cancelled {
                tracing::debug!("skipping cancelled match: {}", event.title());
            }
            !cancelled
        })
        .flat_map(expand_event)
        .collect()
}

pub fn is_cancelled(event: &Event) -> bool {
    event.state == CANCELLED_STATE
}

fn expand_event(event: &Event) -> Vec<CalendarEntry> {
    let mut entries = Vec::with_capacity(2);
    let location = event.venue.label().to_string();

    if let Schedule::Timed { start, .. } = event.schedule {
        let lead = Duration::hours(ARRIVAL_LEAD_HOURS);
        entries.push(CalendarEntry {
            uid: entry_uid(event, "arrival"),
            start: EventTime::DateTime(start - lead),
            end: None,
            duration: Some(lead),
            location: location.clone(),
            summary: ARRIVAL_SUMMARY.to_string(),
            travel_duration: Some(event.venue.travel_duration()),
        });
    }

    entries.push(CalendarEntry {
        uid: entry_uid(event, "match"),
        start: event.start(),
        end: Some(event.end()),
        duration: None,
        location,
        summary: event.title(),
        travel_duration: None,
    });

    entries
}

/// Stable UID for one entry of an event.
///
/// Built from the match identity, venue and start time, so a rescheduled or
/// relocated match gets a new UID while an unchanged one keeps it between runs.
fn entry_uid(event: &Event, kind: &str) -> String {
    let start = match event.start() {
        EventTime::Date(d) => d.format("%Y%m%d").to_string(),
        EventTime::DateTime(dt) => dt.format("%Y%m%dT%H%M%SZ").to_string(),
    };
    let key = format!(
        "{}|{}|{}|{}|{}|{}|{}",
        event.competition,
        event.match_number,
        event.home,
        event.away,
        event.venue.code(),
        start,
        kind
    );
    format!("{}@rozpis", Uuid::new_v5(&UID_NAMESPACE, key.as_bytes()))
}
