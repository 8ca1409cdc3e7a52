//! Influence cost parsing and display ordering.
//!
//! A card's cost is written in a compact notation such as `"2FF"`: two power
//! and two fire influence. Digits accumulate positionally, so `"12T"` is
//! twelve power and one time influence, not three power.

use std::cmp::Ordering;

use thiserror::Error;

/// Errors that can occur while decoding an influence string.
#[derive(Debug, Clone, Error)]
pub enum InfluenceError {
    /// The string contains a character outside `[0-9FJPSTX]`.
    /// The whole record is discarded; no partial parse is usable.
    #[error("invalid influence '{input}': unrecognized character '{character}'")]
    InvalidCharacter {
        /// The full cost string that failed to parse
        input: String,
        /// The offending character
        character: char,
    },

    /// The digit run encodes a power value that does not fit in `u32`.
    /// Treated downstream exactly like any other unparseable cost.
    #[error("invalid influence '{input}': power value out of range")]
    PowerOutOfRange {
        /// The full cost string that failed to parse
        input: String,
    },
}

/// A decoded influence requirement: generic power plus per-faction symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Influence {
    /// Generic power cost, built by concatenating decimal digits.
    pub power: u32,
    pub fire: u32,
    pub justice: u32,
    pub primal: u32,
    pub shadow: u32,
    pub time: u32,
    /// Wild influence ('X'). Tracked but never consulted for ordering
    /// or display.
    pub wild: u32,
}

/// Decodes an influence notation string.
///
/// # Errors
///
/// Returns [`InfluenceError::InvalidCharacter`] for any character outside
/// digits and the faction letters `F J P S T X`, and
/// [`InfluenceError::PowerOutOfRange`] when the accumulated power exceeds
/// `u32`. The failure covers the entire string.
pub fn parse_influence(text: &str) -> Result<Influence, InfluenceError> {
    let mut influence = Influence::default();

    for chr in text.chars() {
        match chr {
            '0'..='9' => {
                let digit = u32::from(chr) - u32::from('0');
                influence.power = influence
                    .power
                    .checked_mul(10)
                    .and_then(|power| power.checked_add(digit))
                    .ok_or_else(|| InfluenceError::PowerOutOfRange {
                        input: text.to_string(),
                    })?;
            }
            'F' => influence.fire += 1,
            'J' => influence.justice += 1,
            'P' => influence.primal += 1,
            'S' => influence.shadow += 1,
            'T' => influence.time += 1,
            'X' => influence.wild += 1,
            other => {
                return Err(InfluenceError::InvalidCharacter {
                    input: text.to_string(),
                    character: other,
                });
            }
        }
    }

    Ok(influence)
}

impl Influence {
    /// Compares two records for decklist display ordering.
    ///
    /// The priority is power, then shadow, primal, justice, time, fire.
    /// This asymmetric faction order is a display convention inherited from
    /// the site layout, not an alphabetical or semantic ranking. Wild
    /// influence does not participate.
    #[must_use]
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.power
            .cmp(&other.power)
            .then(self.shadow.cmp(&other.shadow))
            .then(self.primal.cmp(&other.primal))
            .then(self.justice.cmp(&other.justice))
            .then(self.time.cmp(&other.time))
            .then(self.fire.cmp(&other.fire))
    }

    /// Returns true if the record carries no power and no faction symbols.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.power == 0
            && self.fire == 0
            && self.justice == 0
            && self.primal == 0
            && self.shadow == 0
            && self.time == 0
    }
}
