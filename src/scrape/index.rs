//! Fetching and parsing the card index page.
//!
//! The index is the power calculator page, which embeds one line per card:
//! `Set<N> #<M>;<influence>;<cost>;<name>;<flags>`. Lines not matching that
//! shape (markup, prose) are skipped.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use tracing::debug;

use super::{ScrapeError, get_page};

#[allow(clippy::expect_used)]
static INDEX_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Set([0-9]+) #([0-9]+);([^;]*);([^;]*);([^;]*);([^;]*)")
        .expect("index line regex is valid")
});

/// One card as listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCard {
    /// Set number, as text.
    pub set: String,
    /// Card number within the set, as text.
    pub number: String,
    /// Influence column (not carried into the library; the cost column is).
    pub influence: String,
    /// Cost in influence notation; becomes the library entry's cost.
    pub cost: String,
    /// Card name.
    pub name: String,
    /// Flags column, unused downstream.
    pub flags: String,
}

impl IndexCard {
    /// The compound library identifier for this card.
    #[must_use]
    pub fn id(&self) -> String {
        format!("Set{} #{}", self.set, self.number)
    }
}

/// Extracts index cards from the raw page body, one per matching line.
#[must_use]
pub fn parse_card_index(body: &str) -> Vec<IndexCard> {
    let mut cards = Vec::new();

    for line in body.lines() {
        if let Some(caps) = INDEX_LINE_RE.captures(line) {
            cards.push(IndexCard {
                set: caps[1].to_string(),
                number: caps[2].to_string(),
                influence: caps[3].trim().to_string(),
                cost: caps[4].trim().to_string(),
                name: caps[5].trim().to_string(),
                flags: caps[6].trim().to_string(),
            });
        }
    }

    cards
}

/// Fetches the index page and parses its card list.
///
/// # Errors
///
/// Returns [`ScrapeError`] on any transport failure or non-success status.
pub async fn fetch_card_index(client: &Client, index_url: &str) -> Result<Vec<IndexCard>, ScrapeError> {
    let (_, body) = get_page(client, index_url).await?;
    let cards = parse_card_index(&body);
    debug!(cards = cards.len(), url = index_url, "Parsed card index");
    Ok(cards)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_index_extracts_fields() {
        let body = "<html><pre>\nSet1 #8; F ; 1F ; Torch ; A\nSet1 #1;;; Fire Sigil ;\n</pre>";
        let cards = parse_card_index(body);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].set, "1");
        assert_eq!(cards[0].number, "8");
        assert_eq!(cards[0].influence, "F");
        assert_eq!(cards[0].cost, "1F");
        assert_eq!(cards[0].name, "Torch");
        assert_eq!(cards[0].flags, "A");
        assert_eq!(cards[1].name, "Fire Sigil");
        assert_eq!(cards[1].cost, "");
    }

    #[test]
    fn test_parse_card_index_skips_non_matching_lines() {
        let body = "Welcome to the calculator\nno card here\nSet2 #30;T;2T;Sandstorm Titan;";
        let cards = parse_card_index(body);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id(), "Set2 #30");
    }

    #[test]
    fn test_parse_card_index_empty_body() {
        assert!(parse_card_index("").is_empty());
    }

    #[test]
    fn test_index_card_id_format() {
        let cards = parse_card_index("Set4 #120;TT;4TT;Worldbearer Behemoth;");
        assert_eq!(cards[0].id(), "Set4 #120");
    }
}
