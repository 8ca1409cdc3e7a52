//! Error types for the scraper pipeline.

use thiserror::Error;

/// Errors that abort a scrape run.
///
/// Every variant is fatal to the whole pipeline: there is no retry and no
/// partial output. A failed run produces no library document at all.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A request failed at the transport level (connect, timeout, TLS).
    #[error("transport error fetching {url}: {source}")]
    Transport {
        /// The URL being fetched
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP error {status} fetching {url}")]
    HttpStatus {
        /// The URL being fetched
        url: String,
        /// The response status code
        status: u16,
    },

    /// The response body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// The URL being fetched
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
