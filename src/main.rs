//! CLI entry point for the deckbox renderer.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Parser;
use deckbox_core::{Library, PlanRequest, build_plan, export_deck, parse_deck};
use tracing::{debug, info};
use url::Url;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
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

    // Read the decklist: from the positional file or stdin
    let decklist = match &args.decklist {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read decklist {}", path.display()))?,
        None => {
            if io::stdin().is_terminal() {
                info!("No decklist provided. Pipe one via stdin or pass a file path.");
                info!("Example: deckbox deck.txt --library library.json");
                return Ok(());
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Export needs no library: it is a pure round trip through the parser.
    if args.export {
        let deck = parse_deck(&decklist);
        debug!(main_deck = deck.main_deck.len(), market = deck.market.len(), "Deck parsed");
        print!("{}", export_deck(&deck));
        return Ok(());
    }

    let library = load_library(&args.library).await?;
    info!(cards = library.len(), source = %args.library, "Library loaded");

    let request = PlanRequest {
        decklist,
        title: args.title.clone(),
        href: args.href.clone(),
    };
    let plan = build_plan(&request, &library);

    let sections: usize = plan.columns.iter().map(|c| c.sections.len()).sum();
    info!(columns = plan.columns.len(), sections, "Layout plan built");

    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}

/// Loads the library document from an http(s) URL or a local file path.
///
/// One fetch per run, no retry: a load failure is fatal to the invocation,
/// never to the core. The fetch uses the same timed-out, identified client
/// as the scraper so a stalled server cannot hang the run.
async fn load_library(location: &str) -> Result<Library> {
    let is_http = Url::parse(location)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);

    if is_http {
        let client = deckbox_core::scrape::http_client()
            .context("failed to build HTTP client")?;
        let text = client
            .get(location)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("failed to fetch library from {location}"))?
            .text()
            .await
            .with_context(|| format!("failed to read library body from {location}"))?;
        Ok(Library::from_json_str(&text)?)
    } else {
        Ok(Library::from_file(location)
            .with_context(|| format!("failed to load library file {location}"))?)
    }
}
