mod batch;
mod commands;
mod fetch;
mod output;
mod render;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::convert::ConvertArgs;
use commands::generate::GenerateArgs;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "rozpis")]
#[command(about = "Generate iCalendar files from Czech ice hockey schedule exports")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Running without a subcommand is the same as `rozpis generate`
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Download every configured schedule and write one calendar per feed
    Generate(GenerateArgs),
    /// Convert a single local schedule export
    Convert(ConvertArgs),
    /// List known venues with their travel times
    Venues,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(args).await,
        None => commands::generate::run(cli.generate).await,
        Some(Commands::Convert(args)) => {
            commands::convert::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Venues) => {
            commands::venues::run();
            Ok(ExitCode::SUCCESS)
        }
    }
}
