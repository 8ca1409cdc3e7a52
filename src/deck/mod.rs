//! Decklist parsing in Eternal export format.
//!
//! The format is line-oriented: each card line reads
//! `<count> <name> (Set<N> #<M>)`, optionally preceded somewhere in the text
//! by a market delimiter line such as `---MARKET---`. Cards after the
//! delimiter belong to the market instead of the main deck.
//!
//! # Example
//!
//! ```
//! use deckbox_core::deck::parse_deck;
//!
//! let deck = parse_deck("2 Torch (Set1 #8)\n1 Permafrost (Set1 #193)\n");
//! assert_eq!(deck.main_deck.len(), 2);
//! assert!(deck.market.is_empty());
//! ```

mod entry;
mod export;

pub use entry::{CardEntry, Deck};
pub use export::{MARKET_DELIMITER, export_deck};

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

#[allow(clippy::expect_used)]
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+) ([^(]+) \((Set[0-9]+ #[0-9]+)\)").expect("card regex is valid")
});

#[allow(clippy::expect_used)]
static MARKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-{2,}MARKET-{2,}").expect("market regex is valid")
});

/// Parses a decklist in Eternal export format.
///
/// The remaining unconsumed text is repeatedly matched against the card and
/// market-delimiter patterns. A card match is appended to the main deck, or
/// to the market once a delimiter has been seen. Text matching neither
/// pattern is skipped a line at a time without any error, since the input
/// is whatever a page author pasted into the host element.
///
/// Empty input, or input with no recognizable lines, yields an empty
/// [`Deck`] rather than a failure.
#[must_use]
pub fn parse_deck(decklist: &str) -> Deck {
    let mut deck = Deck::new();
    let mut in_market = false;
    let mut remaining = decklist;

    while !remaining.is_empty() {
        if let Some(caps) = CARD_RE.captures(remaining) {
            let card = CardEntry::new(&caps[1], &caps[2], &caps[3]);
            if in_market {
                deck.market.push(card);
            } else {
                deck.main_deck.push(card);
            }

            let end = caps.get(0).map_or(remaining.len(), |m| m.end());
            remaining = &remaining[end..];
        } else if let Some(found) = MARKET_RE.find(remaining) {
            in_market = true;
            remaining = &remaining[found.end()..];
        } else {
            // Neither pattern matches at the head: drop one line and retry.
            match remaining.find('\n') {
                Some(newline) => {
                    let skipped = &remaining[..newline];
                    if !skipped.trim().is_empty() {
                        debug!(line = skipped, "Skipped unrecognized decklist line");
                    }
                    remaining = &remaining[newline + 1..];
                }
                None => break,
            }
        }
    }

    deck
}
