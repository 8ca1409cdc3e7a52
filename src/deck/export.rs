//! Regenerating decklist text from a parsed deck.

use super::entry::Deck;

/// Delimiter line written between the main deck and the market on export.
pub const MARKET_DELIMITER: &str = "--------------MARKET---------------";

/// Renders a deck back into Eternal export format.
///
/// One `<count> <name> (<id>)` line per main-deck entry, then, only when the
/// market is non-empty, the delimiter line followed by the market entries.
/// Every line is newline-terminated. This is the text handed to the
/// clipboard collaborator.
#[must_use]
pub fn export_deck(deck: &Deck) -> String {
    let mut decklist = String::new();

    for card in &deck.main_deck {
        decklist.push_str(&format!("{} {} ({})\n", card.count, card.name, card.id));
    }

    if !deck.market.is_empty() {
        decklist.push_str(MARKET_DELIMITER);
        decklist.push('\n');

        for card in &deck.market {
            decklist.push_str(&format!("{} {} ({})\n", card.count, card.name, card.id));
        }
    }

    decklist
}
