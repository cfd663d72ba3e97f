//! Shelfsync core library — domain types, sorting, configuration, errors.
//!
//! Public API surface:
//! - [`types`] — records and sort specifications
//! - [`config`] — [`SyncConfig`] and defaults
//! - [`sort`] — multi-key record ordering
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod sort;
pub mod types;

pub use config::{SyncConfig, DEFAULT_TAG_NAME, DEFAULT_TEMPLATE};
pub use error::ConfigError;
pub use types::{Record, SortDirection, SortKey, SortSpec};
