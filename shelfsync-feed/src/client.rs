//! Shelf feed retrieval.
//!
//! A single GET of `{base}/review/list_rss/{user_id}?shelf={shelf}` per run;
//! no retries, no backoff, no authentication.

use crate::error::FeedError;
use crate::parse::{parse_feed, FeedItem};

/// Public Goodreads endpoint.
pub const GOODREADS_BASE_URL: &str = "https://www.goodreads.com";

/// Source of shelf feed items; the seam between the pipeline and the network.
pub trait ShelfSource {
    /// Fetch every item currently on `shelf` for `user_id`.
    fn fetch(&self, user_id: &str, shelf: &str) -> Result<Vec<FeedItem>, FeedError>;
}

/// Goodreads shelf RSS client.
pub struct GoodreadsClient {
    base_url: String,
}

impl GoodreadsClient {
    pub fn new() -> Self {
        Self::with_base_url(GOODREADS_BASE_URL)
    }

    /// Client against a non-default endpoint; tests point this at a local
    /// server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        GoodreadsClient {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GoodreadsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ShelfSource for GoodreadsClient {
    fn fetch(&self, user_id: &str, shelf: &str) -> Result<Vec<FeedItem>, FeedError> {
        let url = format!("{}/review/list_rss/{}", self.base_url, user_id);
        tracing::debug!("fetching shelf '{shelf}' from {url}");
        let body = ureq::get(&url)
            .query("shelf", shelf)
            .call()
            .map_err(Box::new)?
            .into_string()?;
        parse_feed(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
