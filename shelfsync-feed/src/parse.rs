//! RSS document parsing.
//!
//! Goodreads serves a shelf as RSS 2.0: `rss > channel > item*`. Only the
//! item fields the pipeline consumes are modeled; everything else in the
//! document is ignored. A well-formed document with no channel or no items is
//! an empty shelf, not an error.

use serde::Deserialize;

use crate::error::FeedError;

/// One `<item>` of the shelf feed, fields as served by Goodreads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub author_name: Option<String>,
    pub book_published: Option<String>,
    pub average_rating: Option<String>,
    pub user_rating: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    pub user_read_at: Option<String>,
    pub user_date_added: Option<String>,
    pub user_date_created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Option<Channel>,
}

#[derive(Debug, Default, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<FeedItem>,
}

/// Parse a shelf RSS document into its items.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>, FeedError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    Ok(rss.channel.map(|channel| channel.items).unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
