//! Error types for rozpis.

use thiserror::Error;

/// Errors that can occur while turning a schedule export into a calendar.
#[derive(Error, Debug)]
pub enum RozpisError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Could not decode Windows-1250 data: {0}")]
    Encoding(String),

    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Invalid date and time '{0}'")]
    InvalidDateTime(String),

    #[error("Unknown venue code '{0}'")]
    UnknownVenue(String),

    #[error("Malformed row on line {line}: expected at least {expected} columns, got {columns}")]
    MalformedRow {
        line: u64,
        columns: usize,
        expected: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rozpis operations.
pub type RozpisResult<T> = Result<T, RozpisError>;
