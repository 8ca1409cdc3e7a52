//! The card library: a read-only mapping from card identifier to display
//! metadata, loaded once per run from a JSON document.
//!
//! The document is a flat object keyed by `"Set<N> #<M>"`:
//!
//! ```json
//! {
//!   "Set1 #8": {
//!     "name": "Torch",
//!     "cost": "1F",
//!     "rarity": "common",
//!     "type": "spell",
//!     "image": "https://cards.example/torch.png",
//!     "link": "https://cards.example/details/1-8/"
//!   }
//! }
//! ```
//!
//! Absence of an entry for an identifier is a valid, handled state: the card
//! is displayed without link, rarity, or cost, and categorized as "other".

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a library document.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The document could not be read.
    #[error("failed to read library document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid library JSON.
    #[error("failed to parse library document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Semantic card category used for sectioning a decklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    Unit,
    Spell,
    Attachment,
    Power,
    /// Anything else, including the empty string and unknown identifiers.
    Other,
}

impl CardType {
    /// Maps a library `type` field to a category. Unrecognized values and
    /// the empty string fall back to [`CardType::Other`].
    #[must_use]
    pub fn from_field(field: &str) -> Self {
        match field {
            "unit" => Self::Unit,
            "spell" => Self::Spell,
            "attachment" => Self::Attachment,
            "power" => Self::Power,
            _ => Self::Other,
        }
    }
}

/// Display metadata for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Card name as shown on the card.
    pub name: String,
    /// Influence cost in the notation consumed by [`crate::influence`].
    pub cost: String,
    /// Rarity string; empty when unknown.
    #[serde(default)]
    pub rarity: String,
    /// Card type field: `unit`, `spell`, `attachment`, `power`, or empty.
    /// Kept as the raw string so a produced document matches the consumed
    /// format byte for byte.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Card image URL.
    #[serde(default)]
    pub image: String,
    /// Canonical card details page URL.
    #[serde(default)]
    pub link: String,
}

impl CardInfo {
    /// The semantic category for this entry's `type` field.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        CardType::from_field(&self.kind)
    }
}

/// The loaded card library. Never mutated after load on the render path;
/// the scraper uses it as its accumulator while building a new document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    cards: HashMap<String, CardInfo>,
}

impl Library {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a card by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardInfo> {
        self.cards.get(id)
    }

    /// Inserts an entry, replacing any previous entry for the identifier.
    pub fn insert(&mut self, id: impl Into<String>, info: CardInfo) {
        self.cards.insert(id.into(), info);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true when the library holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Parses a library from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Json`] when the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, LibraryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a library document.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] on read or parse failure.
    pub fn from_reader(reader: impl Read) -> Result<Self, LibraryError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a library document from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`] when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the library to the JSON document format.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Json`] on serialization failure.
    pub fn to_json_string(&self) -> Result<String, LibraryError> {
        Ok(serde_json::to_string(self)?)
    }
}
