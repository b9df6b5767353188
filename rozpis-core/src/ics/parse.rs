//! ICS parsing using the icalendar crate's parser.

use chrono::{Duration, TimeZone};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, Property, read_calendar, unfold},
};

use crate::error::{RozpisError, RozpisResult};
use crate::event::{CalendarEntry, EventTime};
use crate::ics::generate::TRAVEL_DURATION_PROPERTY;

/// Parse every VEVENT of a calendar document back into entries, in document order.
pub fn parse_calendar(content: &str) -> RozpisResult<Vec<CalendarEntry>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| RozpisError::IcsParse(e.to_string()))?;

    calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(parse_entry)
        .collect()
}

fn parse_entry(vevent: &Component) -> RozpisResult<CalendarEntry> {
    let uid = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .ok_or_else(|| RozpisError::IcsParse("VEVENT without UID".to_string()))?;

    let start = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| RozpisError::IcsParse(format!("{} has no DTSTART", uid)))
        .and_then(to_event_time)?;

    let end = vevent.find_prop("DTEND").map(to_event_time).transpose()?;
    let duration = vevent
        .find_prop("DURATION")
        .map(|p| parse_duration(p.val.as_ref()))
        .transpose()?;
    let travel_duration = vevent
        .find_prop(TRAVEL_DURATION_PROPERTY)
        .map(|p| parse_duration(p.val.as_ref()))
        .transpose()?;

    let location = vevent
        .find_prop("LOCATION")
        .map(|p| p.val.to_string())
        .unwrap_or_default();
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    Ok(CalendarEntry {
        uid,
        start,
        end,
        duration,
        location,
        summary,
        travel_duration,
    })
}

/// Convert a DTSTART/DTEND property to an EventTime.
///
/// Floating times are read as UTC. Zoned times are resolved through chrono-tz.
fn to_event_time(prop: &Property) -> RozpisResult<EventTime> {
    let value = DatePerhapsTime::try_from(prop)
        .map_err(|_| RozpisError::IcsParse(format!("invalid {} '{}'", prop.name, prop.val)))?;

    match value {
        DatePerhapsTime::Date(d) => Ok(EventTime::Date(d)),
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Ok(EventTime::DateTime(dt)),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => {
            Ok(EventTime::DateTime(naive.and_utc()))
        }
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
            let tz: chrono_tz::Tz = tzid
                .parse()
                .map_err(|_| RozpisError::IcsParse(format!("unknown TZID '{}'", tzid)))?;
            tz.from_local_datetime(&date_time)
                .earliest()
                .map(|dt| EventTime::DateTime(dt.to_utc()))
                .ok_or_else(|| {
                    RozpisError::IcsParse(format!("{} does not exist in {}", date_time, tzid))
                })
        }
    }
}

fn parse_duration(value: &str) -> RozpisResult<Duration> {
    let is_negative = value.starts_with('-');
    let duration = iso8601::duration(value.trim_start_matches(['-', '+']))
        .map_err(|e| RozpisError::IcsParse(format!("invalid duration '{}': {}", value, e)))?;
    let std_duration: std::time::Duration = duration.into();
    let duration = Duration::from_std(std_duration)
        .map_err(|_| RozpisError::IcsParse(format!("duration out of range '{}'", value)))?;

    Ok(if is_negative { -duration } else { duration })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::{CalendarMetadata, generate_calendar};
    use chrono::{NaiveDate, Utc};

    fn metadata() -> CalendarMetadata {
        CalendarMetadata {
            title: "Test".to_string(),
            generated_at: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    fn entries() -> Vec<CalendarEntry> {
        let start = Utc.with_ymd_and_hms(2025, 9, 15, 16, 30, 0).unwrap();
        vec![
            CalendarEntry {
                uid: "a@rozpis".to_string(),
                start: EventTime::DateTime(start - Duration::hours(1)),
                end: None,
                duration: Some(Duration::hours(1)),
                location: "Kladno, ČEZ STADION Kladno".to_string(),
                summary: "Sraz hodinu před zápasem + rozcvička".to_string(),
                travel_duration: Some(Duration::minutes(100)),
            },
            CalendarEntry {
                uid: "b@rozpis".to_string(),
                start: EventTime::DateTime(start),
                end: Some(EventTime::DateTime(start + Duration::hours(2))),
                duration: None,
                location: "Kladno, ČEZ STADION Kladno".to_string(),
                summary: "HC Kladno; B - HC Slaný".to_string(),
                travel_duration: None,
            },
            CalendarEntry {
                uid: "c@rozpis".to_string(),
                start: EventTime::Date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()),
                end: Some(EventTime::Date(NaiveDate::from_ymd_opt(2025, 9, 4).unwrap())),
                duration: None,
                location: "Plzeň - Košutka, ICE ARENA Plzeň".to_string(),
                summary: "Turnaj - Plzeň".to_string(),
                travel_duration: None,
            },
        ]
    }

    #[test]
    fn generate_then_parse_roundtrip() {
        let original = entries();
        let ics = generate_calendar(&original, &metadata());
        let parsed = parse_calendar(&ics).expect("Should parse generated ICS");

        assert_eq!(parsed, original, "ICS:\n{}", ics);
    }

    #[test]
    fn parse_handles_folded_lines() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:test-123\r\n\
DTSTAMP:20250801T120000Z\r\n\
SUMMARY:A very long \r\n summary\r\n\
DTSTART:20250915T163000Z\r\n\
DTEND:20250915T183000Z\r\n\
LOCATION:Beroun\\, Zimní stadion\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

        let parsed = parse_calendar(ics).expect("Should parse");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].summary, "A very long summary");
        assert_eq!(parsed[0].location, "Beroun, Zimní stadion");
    }

    #[test]
    fn parse_resolves_tzid() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:test-123\r\n\
DTSTART;TZID=Europe/Prague:20250915T183000\r\n\
DURATION:PT2H\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

        let parsed = parse_calendar(ics).expect("Should parse");
        assert_eq!(
            parsed[0].start,
            EventTime::DateTime(Utc.with_ymd_and_hms(2025, 9, 15, 16, 30, 0).unwrap())
        );
        assert_eq!(parsed[0].duration, Some(Duration::hours(2)));
    }

    #[test]
    fn parse_requires_dtstart() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:test-123\r\n\
SUMMARY:No start\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

        assert!(matches!(parse_calendar(ics), Err(RozpisError::IcsParse(_))));
    }

    #[test]
    fn roundtrip_keeps_backslashes_and_separators() {
        let mut original = entries();
        original[1].summary = "A\\B, C; D - E".to_string();
        original[1].location = "Praha\\Letňany, Zimní stadion".to_string();

        let ics = generate_calendar(&original, &metadata());
        let parsed = parse_calendar(&ics).expect("Should parse generated ICS");

        assert_eq!(parsed[1].summary, "A\\B, C; D - E");
        assert_eq!(parsed[1].location, "Praha\\Letňany, Zimní stadion");
    }
}
