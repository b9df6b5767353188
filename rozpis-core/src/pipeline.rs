//! Schedule bytes to calendar document.

use crate::error::RozpisResult;
use crate::expand::expand;
use crate::ics::{CalendarMetadata, generate_calendar};
use crate::schedule::{decode_windows_1250, read_schedule};

/// Run one feed's export through decoding, parsing, expansion and serialization.
///
/// Any failure aborts the whole document; there is no partial output.
pub fn build_calendar(bytes: &[u8], metadata: &CalendarMetadata) -> RozpisResult<String> {
    let text = decode_windows_1250(bytes)?;
    let events = read_schedule(&text)?;
    let entries = expand(&events);

    tracing::info!(
        rows = events.len(),
        entries = entries.len(),
        "built calendar '{}'",
        metadata.title
    );

    Ok(generate_calendar(&entries, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RozpisError;
    use crate::event::EventTime;
    use crate::ics::parse_calendar;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use chrono_tz::Europe::Prague;

    /// Encode test CSV the way the league website serves it.
    fn to_windows_1250(text: &str) -> Vec<u8> {
        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1250.encode(text);
        assert!(!had_errors);
        bytes.into_owned()
    }

    fn metadata() -> CalendarMetadata {
        CalendarMetadata {
            title: "HC Beroun".to_string(),
            generated_at: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    const SCHEDULE: &str = "Den;Datum;Začátek;ZS;Soutěž;Číslo utkání;Domácí;Hosté;Stav\r\n\
po;01.09.2025 - 03.09.2025;;BE;LZ;1;TeamA;TeamB;Odehráno\r\n\
po;15.09.2025;18:30;KL;LZ;2;TeamA;TeamB;Odehráno\r\n\
so;20.09.2025;10:00;PB;LZ;3;TeamC;TeamD;Nehraje se\r\n\
ne;21.09.2025;00:00 - 23:59;ČA;LZ;4;Turnaj;Čáslav;Odehráno\r\n";

    #[test]
    fn builds_calendar_from_export() {
        let ics = build_calendar(&to_windows_1250(SCHEDULE), &metadata()).unwrap();
        let entries = parse_calendar(&ics).unwrap();

        // all-day range, arrival + match, cancelled dropped, single all-day
        assert_eq!(entries.len(), 4, "ICS:\n{}", ics);

        assert_eq!(
            entries[0].start,
            EventTime::Date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        );
        assert_eq!(
            entries[0].end,
            Some(EventTime::Date(NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()))
        );
        assert_eq!(entries[0].location, "Beroun, Zimní stadion");

        let match_start = Prague
            .with_ymd_and_hms(2025, 9, 15, 18, 30, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            entries[1].start,
            EventTime::DateTime(match_start - Duration::hours(1))
        );
        assert_eq!(entries[1].duration, Some(Duration::hours(1)));
        assert_eq!(entries[1].travel_duration, Some(Duration::minutes(45)));
        assert_eq!(entries[2].start, EventTime::DateTime(match_start));
        assert_eq!(
            entries[2].end,
            Some(EventTime::DateTime(match_start + Duration::hours(2)))
        );

        assert_eq!(entries[3].summary, "Turnaj - Čáslav");
        assert_eq!(entries[3].location, "Čáslav, Zimní stadion");
        assert_eq!(entries[3].start, entries[3].end.unwrap());
    }

    #[test]
    fn unknown_venue_fails_the_feed() {
        let schedule = format!("{SCHEDULE}po;22.09.2025;18:00;XY;LZ;5;A;B;Odehráno\r\n");
        let result = build_calendar(&to_windows_1250(&schedule), &metadata());
        assert!(matches!(result, Err(RozpisError::UnknownVenue(code)) if code == "XY"));
    }

    #[test]
    fn undecodable_bytes_fail_the_feed() {
        let mut bytes = to_windows_1250(SCHEDULE);
        bytes.push(0x81);
        let result = build_calendar(&bytes, &metadata());
        assert!(matches!(result, Err(RozpisError::Encoding(_))));
    }
}
