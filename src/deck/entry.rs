//! Types representing parsed decklist entries.

use std::fmt;

/// One line of a decklist: a quantity, a display name, and the compound
/// card identifier (`"Set<N> #<M>"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    /// Quantity, kept as the decimal text it was written as.
    pub count: String,
    /// Display name. A trailing space before the parenthesis in the source
    /// survives here; the grammar does not trim it separately.
    pub name: String,
    /// Compound identifier, e.g. `"Set1 #5"`.
    pub id: String,
}

impl CardEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(count: impl Into<String>, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            name: name.into(),
            id: id.into(),
        }
    }

    /// The quantity as an integer. Counts are matched as decimal digit runs,
    /// so anything unparseable (overflow) contributes zero.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.count.parse().unwrap_or(0)
    }
}

impl fmt::Display for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.count, self.name, self.id)
    }
}

/// A parsed decklist: the main deck plus the optional market.
///
/// Market entries are only produced for lines after a market delimiter;
/// everything before it belongs to the main deck. Order within each list is
/// source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pub main_deck: Vec<CardEntry>,
    pub market: Vec<CardEntry>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if neither list holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_deck.is_empty() && self.market.is_empty()
    }

    /// Total number of entries across both lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.main_deck.len() + self.market.len()
    }
}
