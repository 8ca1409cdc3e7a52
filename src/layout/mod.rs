//! Decklist layout: sectioning, sort order, and the two-column balance.
//!
//! This module turns a parsed [`Deck`](crate::deck::Deck) into the six fixed
//! display sections (Units, Spells, Attachments, Other, Power, Market), each
//! ordered by influence cost, and decides where the second display column
//! opens. Assembling the full descriptive plan lives in [`crate::plan`].

mod columns;
mod section;

pub use columns::column_split_index;
pub use section::{SECTION_NAMES, Sections, categorize, sort_section};

pub(crate) use section::resolve_influence;
