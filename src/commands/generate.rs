use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use rozpis_core::FeedConfig;
use rozpis_core::feed::load_feeds;

use crate::batch;
use crate::fetch::Fetcher;
use crate::output::Output;
use crate::render::{Render, pluralize};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// JSON file listing the feeds to generate
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Directory for the generated .ics files (prints to stdout if unset)
    #[arg(short, long, env = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only generate these feeds (by filename)
    #[arg(short, long = "feed", value_name = "FILENAME")]
    pub feeds: Vec<String>,
}

pub async fn run(args: GenerateArgs) -> Result<ExitCode> {
    let all_feeds = load_feeds(&args.config)?;
    let feeds = select_feeds(all_feeds, &args.feeds)?;

    eprintln!(
        "Generating {} {}...",
        feeds.len(),
        pluralize("calendar", feeds.len())
    );

    let fetcher = Fetcher::new()?;
    let output = Output::new(args.output_dir);
    let report = batch::run(&feeds, &fetcher, &output, Utc::now()).await;

    eprintln!("\n{}", report.render());

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Restrict the configured feeds to the requested filenames, keeping config order.
fn select_feeds(feeds: Vec<FeedConfig>, names: &[String]) -> Result<Vec<FeedConfig>> {
    if names.is_empty() {
        return Ok(feeds);
    }

    for name in names {
        if !feeds.iter().any(|f| &f.filename == name) {
            let available: Vec<_> = feeds.iter().map(|f| f.filename.as_str()).collect();
            anyhow::bail!(
                "Feed '{}' not found. Available: {}",
                name,
                available.join(", ")
            );
        }
    }

    Ok(feeds
        .into_iter()
        .filter(|f| names.contains(&f.filename))
        .collect())
}
