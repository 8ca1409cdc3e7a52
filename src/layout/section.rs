//! Categorizing deck entries into display sections and ordering each
//! section by cost.

use std::cmp::Ordering;

use tracing::warn;

use crate::deck::{CardEntry, Deck};
use crate::influence::{Influence, parse_influence};
use crate::library::{CardInfo, CardType, Library};

/// The six display sections, in their fixed display order.
pub const SECTION_NAMES: [&str; 6] = [
    "Units",
    "Spells",
    "Attachments",
    "Other",
    "Power",
    "Market",
];

/// Deck entries grouped by display section.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    pub units: Vec<CardEntry>,
    pub spells: Vec<CardEntry>,
    pub attachments: Vec<CardEntry>,
    pub other: Vec<CardEntry>,
    pub power: Vec<CardEntry>,
    pub market: Vec<CardEntry>,
}

impl Sections {
    /// The sections in fixed display order, paired with their names.
    #[must_use]
    pub fn in_display_order(&self) -> [(&'static str, &[CardEntry]); 6] {
        [
            (SECTION_NAMES[0], &self.units),
            (SECTION_NAMES[1], &self.spells),
            (SECTION_NAMES[2], &self.attachments),
            (SECTION_NAMES[3], &self.other),
            (SECTION_NAMES[4], &self.power),
            (SECTION_NAMES[5], &self.market),
        ]
    }
}

/// Groups a deck's entries into display sections.
///
/// Main-deck entries are bucketed by the library's type field for their
/// identifier; an unknown identifier or a non-standard type lands in Other.
/// Market entries always go to the Market section without a type lookup.
#[must_use]
pub fn categorize(deck: &Deck, library: &Library) -> Sections {
    let mut sections = Sections::default();

    for card in &deck.main_deck {
        let card_type = library
            .get(&card.id)
            .map_or(CardType::Other, CardInfo::card_type);

        let bucket = match card_type {
            CardType::Unit => &mut sections.units,
            CardType::Spell => &mut sections.spells,
            CardType::Attachment => &mut sections.attachments,
            CardType::Power => &mut sections.power,
            CardType::Other => &mut sections.other,
        };
        bucket.push(card.clone());
    }

    sections.market.extend(deck.market.iter().cloned());

    sections
}

/// Orders a section's cards by influence cost, then identifier.
///
/// The policy, in precedence order:
///
/// 1. Neither entry resolves to an influence record: compare identifiers.
/// 2. Exactly one entry lacks a record: the entry without data sorts first.
/// 3. Both resolve and the influence comparison is decisive: use it.
/// 4. Both resolve and compare equal: compare identifiers.
///
/// An entry "lacks a record" when its identifier is absent from the library
/// or its cost string fails to parse; parse failures are logged and demoted
/// to missing data rather than surfaced.
#[must_use]
pub fn sort_section(cards: &[CardEntry], library: &Library) -> Vec<CardEntry> {
    let mut keyed: Vec<(Option<Influence>, CardEntry)> = cards
        .iter()
        .map(|card| (resolve_influence(card, library), card.clone()))
        .collect();

    keyed.sort_by(|(influence_a, a), (influence_b, b)| match (influence_a, influence_b) {
        (None, None) => a.id.cmp(&b.id),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ia), Some(ib)) => ia.display_cmp(ib).then_with(|| a.id.cmp(&b.id)),
    });

    keyed.into_iter().map(|(_, card)| card).collect()
}

/// Parses the influence record for a card's library cost, if any.
///
/// Returns `None` for unknown identifiers and for malformed cost strings.
pub(crate) fn resolve_influence(card: &CardEntry, library: &Library) -> Option<Influence> {
    let info = library.get(&card.id)?;
    match parse_influence(&info.cost) {
        Ok(influence) => Some(influence),
        Err(error) => {
            warn!(card = %card.id, error = %error, "Unparseable cost in library");
            None
        }
    }
}
