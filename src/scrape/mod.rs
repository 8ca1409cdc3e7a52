//! The card library scraper pipeline.
//!
//! Builds the library JSON document consumed by the renderer: first the
//! card index page is fetched and parsed, then one details page per card,
//! strictly sequentially, with a fixed delay between requests to bound the
//! request rate against the remote server. Results accumulate in an
//! explicit [`Library`] that is returned on completion.
//!
//! Failure policy: any transport error, timeout, or non-success status
//! aborts the whole run. There is no retry and no partial output.

mod details;
mod error;
mod index;

pub use details::{CardDetails, extract_card_details, fetch_card_details};
pub use error::ScrapeError;
pub use index::{IndexCard, fetch_card_index, parse_card_index};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::library::{CardInfo, Library};

/// Default card index page (the power calculator card list).
pub const DEFAULT_INDEX_URL: &str = "https://www.shiftstoned.com/epc/";

/// Default base URL for per-card details pages.
pub const DEFAULT_DETAILS_BASE_URL: &str = "https://eternalwarcry.com";

/// Default delay between consecutive detail requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the HTTP client used for every outbound request, scraper and
/// library fetch alike: explicit connect and read timeouts plus the
/// project user agent.
///
/// # Errors
///
/// Returns the underlying [`reqwest::Error`] when client construction
/// fails.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(READ_TIMEOUT)
        .user_agent(concat!("deckbox/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// The scraper: endpoints, HTTP client, and pacing.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    index_url: String,
    details_base_url: String,
    delay: Duration,
}

impl Scraper {
    /// Creates a scraper against the default endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Client`] when HTTP client construction fails.
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_endpoints(DEFAULT_INDEX_URL, DEFAULT_DETAILS_BASE_URL, DEFAULT_REQUEST_DELAY)
    }

    /// Creates a scraper with custom endpoints and pacing, for tests and
    /// CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Client`] when HTTP client construction fails.
    pub fn with_endpoints(
        index_url: impl Into<String>,
        details_base_url: impl Into<String>,
        delay: Duration,
    ) -> Result<Self, ScrapeError> {
        let client = http_client().map_err(ScrapeError::Client)?;

        Ok(Self {
            client,
            index_url: index_url.into(),
            details_base_url: details_base_url.into(),
            delay,
        })
    }

    /// Runs the full pipeline and returns the assembled library.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] on the first failed request; nothing is
    /// returned from a failed run.
    pub async fn gather_library(&self) -> Result<Library, ScrapeError> {
        self.gather_library_with_progress(|_, _| {}).await
    }

    /// Runs the pipeline, reporting `(done, total)` after each card.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] on the first failed request.
    pub async fn gather_library_with_progress(
        &self,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<Library, ScrapeError> {
        let cards = fetch_card_index(&self.client, &self.index_url).await?;
        let total = cards.len();
        info!(cards = total, "Card index fetched");

        let mut library = Library::new();

        for (position, card) in cards.iter().enumerate() {
            let details =
                fetch_card_details(&self.client, &self.details_base_url, &card.set, &card.number)
                    .await?;

            library.insert(
                card.id(),
                CardInfo {
                    name: card.name.clone(),
                    cost: card.cost.clone(),
                    rarity: details.rarity,
                    kind: details.kind,
                    image: details.image,
                    link: details.link,
                },
            );

            debug!(card = %card.id(), done = position + 1, total, "Card gathered");
            on_progress(position + 1, total);

            if position + 1 < total {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(cards = library.len(), "Library assembled");
        Ok(library)
    }
}

/// Fetches a page, following redirects, returning the final URL and body.
///
/// # Errors
///
/// Returns [`ScrapeError`] on transport failure, non-success status, or an
/// unreadable body.
pub(crate) async fn get_page(client: &Client, url: &str) -> Result<(String, String), ScrapeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|source| ScrapeError::Body {
            url: url.to_string(),
            source,
        })?;

    Ok((final_url, body))
}
