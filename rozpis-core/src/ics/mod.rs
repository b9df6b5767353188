//! ICS generation and parsing.
//!
//! This module writes calendar entries as RFC 5545 documents and reads them back.

mod generate;
mod parse;

pub use generate::{CalendarMetadata, format_duration, generate_calendar};
pub use parse::parse_calendar;
