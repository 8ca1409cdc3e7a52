//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Render an Eternal decklist into a categorized layout plan.
///
/// Reads a decklist in Eternal export format, loads the card library, and
/// writes the layout plan as JSON on stdout. With `--export`, writes the
/// canonical decklist text instead (the clipboard payload).
#[derive(Parser, Debug)]
#[command(name = "deckbox")]
#[command(author, version, about)]
pub struct Args {
    /// Decklist file to render (reads stdin when omitted)
    pub decklist: Option<PathBuf>,

    /// Card library document: an http(s) URL or a local JSON file
    #[arg(short = 'L', long, default_value_t = default_library_location())]
    pub library: String,

    /// Deck title for the plan header
    #[arg(short, long)]
    pub title: Option<String>,

    /// Link target for the deck title
    #[arg(long)]
    pub href: Option<String>,

    /// Print the canonical export text instead of a layout plan
    #[arg(short, long)]
    pub export: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Default library document location, overridable per invocation the same
/// way the host element attribute does.
fn default_library_location() -> String {
    "https://eternal.deckbox.info/library.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["deckbox"]).unwrap();
        assert!(args.decklist.is_none());
        assert!(args.library.contains("library.json"));
        assert!(!args.export);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_positional_decklist_path() {
        let args = Args::try_parse_from(["deckbox", "deck.txt"]).unwrap();
        assert_eq!(args.decklist.unwrap(), PathBuf::from("deck.txt"));
    }

    #[test]
    fn test_cli_library_override() {
        let args = Args::try_parse_from(["deckbox", "-L", "cards.json"]).unwrap();
        assert_eq!(args.library, "cards.json");

        let args = Args::try_parse_from(["deckbox", "--library", "https://example.com/l.json"])
            .unwrap();
        assert_eq!(args.library, "https://example.com/l.json");
    }

    #[test]
    fn test_cli_title_and_href() {
        let args = Args::try_parse_from([
            "deckbox",
            "--title",
            "Burn Queen",
            "--href",
            "https://example.com/decks/1",
        ])
        .unwrap();
        assert_eq!(args.title.as_deref(), Some("Burn Queen"));
        assert_eq!(args.href.as_deref(), Some("https://example.com/decks/1"));
    }

    #[test]
    fn test_cli_export_flag() {
        let args = Args::try_parse_from(["deckbox", "--export"]).unwrap();
        assert!(args.export);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["deckbox", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["deckbox", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["deckbox", "--invalid-flag"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::UnknownArgument
        );
    }
}
