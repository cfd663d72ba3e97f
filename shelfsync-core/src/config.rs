//! Pipeline configuration.
//!
//! All values are supplied by the caller (CLI flags or environment); nothing
//! here reads process-wide state. The configuration is assembled once per
//! invocation and passed by reference through the pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::SortSpec;

/// Per-record line template applied when none is configured.
pub const DEFAULT_TEMPLATE: &str = "- [$title]($url) by $author (⭐️$average_rating)";

/// Anchor tag name applied when none is configured; expands to
/// `<!-- GOODREADS-LIST:START -->` / `<!-- GOODREADS-LIST:END -->`.
pub const DEFAULT_TAG_NAME: &str = "GOODREADS-LIST";

/// Everything one sync invocation needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Goodreads user id whose shelf is fetched.
    pub user_id: String,
    /// Shelf to fetch (e.g. `read`, `currently-reading`).
    pub shelf: String,
    /// Maximum number of records rendered after sorting.
    pub max_count: usize,
    /// Document whose anchored region is updated.
    pub document_path: PathBuf,
    /// Write the document but skip the git commit, emitting records instead.
    pub output_only: bool,
    /// Per-record line template (`$field` placeholders).
    pub template: String,
    /// Pre-validated multi-key sort specification.
    pub sort: SortSpec,
    /// Anchor tag name; expands to `<!-- {tag}:START -->` / `<!-- {tag}:END -->`.
    pub tag_name: String,
}
