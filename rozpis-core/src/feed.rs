//! Feed configuration.
//!
//! Feeds are listed in a JSON file (`config.json` by default):
//!
//! ```json
//! [
//!   { "filename": "beroun-zaci", "url": "https://…/rozpis.csv", "title": "HC Beroun - žáci" }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RozpisError, RozpisResult};

/// One team/league schedule mapped to one output calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Output name; the calendar is written as `{filename}.ics`
    pub filename: String,
    /// Where the CSV export is downloaded from (URL or local path)
    pub url: String,
    /// Human-readable calendar name
    pub title: String,
}

impl FeedConfig {
    pub fn output_name(&self) -> String {
        format!("{}.ics", self.filename)
    }
}

/// Load and validate the feed list from a JSON file.
pub fn load_feeds(path: &Path) -> RozpisResult<Vec<FeedConfig>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        RozpisError::Config(format!("Could not read {}: {e}", path.display()))
    })?;

    parse_feeds(&contents)
        .map_err(|e| RozpisError::Config(format!("{}: {}", path.display(), e)))
}

/// Parse and validate a JSON feed list.
pub fn parse_feeds(contents: &str) -> Result<Vec<FeedConfig>, String> {
    let feeds: Vec<FeedConfig> =
        serde_json::from_str(contents).map_err(|e| format!("Invalid feed list: {e}"))?;
    validate_feeds(&feeds)?;
    Ok(feeds)
}

/// Reject feeds that would write outside the output directory or collide
/// with each other.
pub fn validate_feeds(feeds: &[FeedConfig]) -> Result<(), String> {
    let mut seen = HashSet::new();

    for feed in feeds {
        let name = feed.filename.trim();
        if name.is_empty() {
            return Err(format!("Feed '{}' has an empty filename", feed.title));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(format!(
                "Feed filename '{}' must not contain path separators",
                feed.filename
            ));
        }
        if !seen.insert(name) {
            return Err(format!("Duplicate feed filename '{}'", feed.filename));
        }
        if feed.url.trim().is_empty() {
            return Err(format!("Feed '{}' has no url", feed.filename));
        }
    }

    Ok(())
}
