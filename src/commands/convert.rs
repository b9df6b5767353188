use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use rozpis_core::ics::CalendarMetadata;
use rozpis_core::pipeline::build_calendar;

use crate::output::write_atomic;

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Schedule export (Windows-1250 CSV)
    pub input: PathBuf,

    /// Calendar name (defaults to the input file name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Where to write the .ics file (prints to stdout if unset)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let title = args.title.unwrap_or_else(|| {
        args.input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "rozpis".to_string())
    });

    let metadata = CalendarMetadata {
        title,
        generated_at: Utc::now(),
    };
    let calendar = build_calendar(&bytes, &metadata)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    match args.output {
        Some(path) => {
            write_atomic(&path, &calendar)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", calendar),
    }

    Ok(())
}
