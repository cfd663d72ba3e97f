//! Error types for shelfsync-feed.

use thiserror::Error;

/// All errors that can arise from fetching or parsing a shelf feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport or HTTP-status failure from the feed endpoint.
    #[error("feed request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// The response body could not be read.
    #[error("failed to read feed response: {0}")]
    Io(#[from] std::io::Error),

    /// The response was not a well-formed RSS document.
    #[error("failed to parse feed XML: {0}")]
    Parse(#[from] quick_xml::DeError),
}
