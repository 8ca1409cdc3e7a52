//! Per-card detail extraction from the card database site.
//!
//! Each card has a details page at `cards/details/<set>-<number>/`. Three
//! fields are pattern-matched out of the page: the `og:image` URL, the
//! rarity icon class, and the card type link text. A field that fails to
//! match degrades to an empty string; only network failures are errors.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;

use super::{ScrapeError, get_page};

#[allow(clippy::expect_used)]
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"property="og:image" content="([^"]+)""#).expect("image regex is valid")
});

#[allow(clippy::expect_used)]
static RARITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="rarity-icon rarity-([^"]+)""#).expect("rarity regex is valid")
});

#[allow(clippy::expect_used)]
static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a href="/cards\?Types=[0-9]+">([^<]+)</a>"#).expect("type regex is valid")
});

/// Detail fields scraped for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    /// Final details-page URL (after redirects); the library link.
    pub link: String,
    /// Card image URL, entity-decoded. Empty when not found.
    pub image: String,
    /// Rarity string. Empty when not found.
    pub rarity: String,
    /// Library type field: `unit`, `spell`, `attachment`, `power`, or empty.
    pub kind: String,
}

/// Extracts detail fields from a fetched page body.
#[must_use]
pub fn extract_card_details(final_url: &str, body: &str) -> CardDetails {
    let image = IMAGE_RE
        .captures(body)
        .map(|caps| html_escape::decode_html_entities(&caps[1]).into_owned())
        .unwrap_or_default();

    let rarity = RARITY_RE
        .captures(body)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let kind = TYPE_RE
        .captures(body)
        .map_or("", |caps| map_type_text(caps.get(1).map_or("", |m| m.as_str())))
        .to_string();

    CardDetails {
        link: final_url.to_string(),
        image,
        rarity,
        kind,
    }
}

/// Maps the site's type link text onto the library's type vocabulary.
/// Anything unrecognized maps to the empty string.
fn map_type_text(text: &str) -> &'static str {
    match text {
        "Power" => "power",
        "Unit" => "unit",
        "Spell" | "Fast Spell" => "spell",
        "Weapon" | "Relic Weapon" | "Relic" | "Curse" | "Cursed Relic" => "attachment",
        _ => "",
    }
}

/// Fetches and extracts the details for one card.
///
/// # Errors
///
/// Returns [`ScrapeError`] on any transport failure or non-success status.
pub async fn fetch_card_details(
    client: &Client,
    details_base_url: &str,
    set: &str,
    number: &str,
) -> Result<CardDetails, ScrapeError> {
    let url = format!(
        "{}/cards/details/{set}-{number}/",
        details_base_url.trim_end_matches('/')
    );
    let (final_url, body) = get_page(client, &url).await?;
    Ok(extract_card_details(&final_url, &body))
}
