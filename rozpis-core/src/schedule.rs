//! Reading the schedule export.
//!
//! The league website serves the schedule as a `;`-separated CSV file in
//! Windows-1250. The first row is a header.

use encoding_rs::WINDOWS_1250;

use crate::error::{RozpisError, RozpisResult};
use crate::event::Event;
use crate::row::parse_row;

/// Column delimiter used by the exporter.
pub const DELIMITER: u8 = b';';

/// Transcode Windows-1250 bytes to a UTF-8 string.
///
/// The five bytes Windows-1250 leaves unassigned (0x81, 0x83, 0x88, 0x90,
/// 0x98) decode to C1 control characters; seeing one means the input is
/// not really Windows-1250, so it is rejected.
pub fn decode_windows_1250(bytes: &[u8]) -> RozpisResult<String> {
    let (text, had_errors) = WINDOWS_1250.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(RozpisError::Encoding(
            "input contains bytes that are not valid Windows-1250".to_string(),
        ));
    }

    if let Some(offset) = text.find(is_unassigned) {
        return Err(RozpisError::Encoding(format!(
            "unassigned Windows-1250 byte near character {}",
            text[..offset].chars().count()
        )));
    }

    Ok(text.into_owned())
}

fn is_unassigned(c: char) -> bool {
    ('\u{80}'..='\u{9f}').contains(&c)
}

/// Parse the decoded CSV table into events, skipping the header row.
pub fn read_schedule(text: &str) -> RozpisResult<Vec<Event>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<&str> = record.iter().collect();

        let event = parse_row(&fields, line)?;
        tracing::debug!(
            line,
            venue = event.venue.code(),
            state = %event.state,
            "parsed row: {}",
            event.title()
        );
        events.push(event);
    }

    Ok(events)
}
