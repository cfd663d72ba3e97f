//! # shelfsync-feed
//!
//! Goodreads shelf feed ingestion.
//!
//! [`GoodreadsClient`] fetches a shelf's RSS document, [`parse_feed`] turns
//! it into [`FeedItem`]s, and [`normalize`] flattens each item into a
//! [`Record`](shelfsync_core::Record) for the pipeline. The [`ShelfSource`]
//! trait is the seam tests use to substitute a canned feed.

pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;

pub use client::{GoodreadsClient, ShelfSource};
pub use error::FeedError;
pub use normalize::normalize;
pub use parse::{parse_feed, FeedItem};
