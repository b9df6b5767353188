//! Running every configured feed.
//!
//! Feeds are independent: a failing feed is reported and counted, and the
//! batch moves on to the next one.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use rozpis_core::ics::CalendarMetadata;
use rozpis_core::pipeline::build_calendar;
use rozpis_core::{FeedConfig, RozpisError, RozpisResult};

use crate::fetch::Fetcher;
use crate::output::Output;
use crate::render::Render;
use crate::utils::tui::feed_spinner;

/// A feed that could not be generated.
#[derive(Debug)]
pub struct FeedFailure {
    pub filename: String,
    pub error: RozpisError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub total: usize,
    pub failures: Vec<FeedFailure>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.total - self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate every feed in order, writing each finished document to `output`.
pub async fn run(
    feeds: &[FeedConfig],
    fetcher: &Fetcher,
    output: &Output,
    generated_at: DateTime<Utc>,
) -> BatchReport {
    let mut report = BatchReport {
        total: feeds.len(),
        failures: Vec::new(),
    };

    for feed in feeds {
        let spinner = feed_spinner(feed.render());
        let result = process_feed(feed, fetcher, output, generated_at).await;
        spinner.finish_and_clear();

        match result {
            Ok(()) => {
                tracing::info!(feed = %feed.filename, "calendar generated");
                eprintln!("{} {}", "✓".green(), feed.render());
            }
            Err(error) => {
                tracing::error!(feed = %feed.filename, %error, "calendar generation failed");
                eprintln!("{} {}", "✗".red(), feed.render());
                eprintln!("   {}", error.to_string().red());
                report.failures.push(FeedFailure {
                    filename: feed.filename.clone(),
                    error,
                });
            }
        }
    }

    report
}

/// Fetch, convert and write one feed. Nothing is written unless the whole
/// document was built.
async fn process_feed(
    feed: &FeedConfig,
    fetcher: &Fetcher,
    output: &Output,
    generated_at: DateTime<Utc>,
) -> RozpisResult<()> {
    let bytes = fetcher.fetch(&feed.url).await?;

    let metadata = CalendarMetadata {
        title: feed.title.clone(),
        generated_at,
    };
    let calendar = build_calendar(&bytes, &metadata)?;

    if let Some(path) = output.write(feed, &calendar)? {
        tracing::debug!(feed = %feed.filename, path = %path.display(), "wrote calendar");
    }

    Ok(())
}
