//! CLI entry point for the card library scraper.
//!
//! Fetches the card index, then one details page per card, and writes the
//! assembled library JSON document to stdout (or a file). Any network
//! failure aborts the run with no partial output.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use deckbox_core::Scraper;
use deckbox_core::scrape::{DEFAULT_DETAILS_BASE_URL, DEFAULT_INDEX_URL};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Build the card library document by scraping the card index and per-card
/// detail pages.
#[derive(Parser, Debug)]
#[command(name = "gather-library")]
#[command(author, version, about)]
struct Args {
    /// Card index page URL
    #[arg(long, default_value = DEFAULT_INDEX_URL)]
    index_url: String,

    /// Base URL for per-card detail pages
    #[arg(long, default_value = DEFAULT_DETAILS_BASE_URL)]
    details_url: String,

    /// Delay between detail requests in milliseconds (0-60000)
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(0..=60000))]
    delay: u64,

    /// Write the library document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");
    info!(index = %args.index_url, details = %args.details_url, "Gathering card library");

    let scraper = Scraper::with_endpoints(
        &args.index_url,
        &args.details_url,
        Duration::from_millis(args.delay),
    )?;

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(0).with_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("gathering cards");
        bar
    };

    let library = scraper
        .gather_library_with_progress(|done, total| {
            if progress.length() != Some(total as u64) {
                progress.set_length(total as u64);
            }
            progress.set_position(done as u64);
        })
        .await
        .context("scrape run failed; no library written")?;

    progress.finish_and_clear();
    info!(cards = library.len(), "Library assembled");

    let json = library.to_json_string()?;
    match &args.output {
        Some(path) => std::fs::write(path, &json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
