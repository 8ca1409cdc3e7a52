//! Deckbox Core Library
//!
//! This library renders Eternal decklists into categorized, cost-ordered
//! layout plans, and builds the card metadata library those plans are
//! enriched from.
//!
//! # Architecture
//!
//! - [`influence`] - Influence cost notation parsing and display ordering
//! - [`deck`] - Decklist parsing and export (Eternal text format)
//! - [`library`] - The card metadata map and its JSON document format
//! - [`layout`] - Section categorization, sorting, and column balance
//! - [`plan`] - The descriptive layout plan handed to a rendering host
//! - [`scrape`] - The sequential pipeline that assembles the library

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod deck;
pub mod influence;
pub mod layout;
pub mod library;
pub mod plan;
pub mod scrape;

// Re-export commonly used types
pub use deck::{CardEntry, Deck, MARKET_DELIMITER, export_deck, parse_deck};
pub use influence::{Influence, InfluenceError, parse_influence};
pub use layout::{SECTION_NAMES, Sections, categorize, column_split_index, sort_section};
pub use library::{CardInfo, CardType, Library, LibraryError};
pub use plan::{DeckPlan, PlanRequest, build_plan};
pub use scrape::{ScrapeError, Scraper};
