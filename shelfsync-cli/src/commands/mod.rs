//! CLI subcommands.

pub mod diff;
pub mod sync;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use shelfsync_core::{SortSpec, SyncConfig, DEFAULT_TAG_NAME, DEFAULT_TEMPLATE};

/// Feed and document options shared by every subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Goodreads user id whose shelf is fetched.
    #[arg(long, env = "GOODREADS_USER_ID")]
    pub user_id: String,

    /// Shelf to fetch (e.g. read, currently-reading).
    #[arg(long, env = "GOODREADS_SHELF", default_value = "read")]
    pub shelf: String,

    /// Maximum number of records rendered after sorting.
    #[arg(long, env = "MAX_BOOKS_COUNT", default_value_t = 10)]
    pub max_count: usize,

    /// Document whose anchored region is updated.
    #[arg(long, env = "README_FILE_PATH", default_value = "README.md")]
    pub document: PathBuf,

    /// Per-record line template ($field placeholders).
    #[arg(long, env = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Comma-separated sort keys; a `<` prefix sorts ascending.
    #[arg(long, env = "SORT_BY_FIELDS", default_value = "")]
    pub sort_by: String,

    /// Anchor tag name (expands to `<!-- {tag}:START/END -->`).
    #[arg(long, env = "COMMENT_TAG_NAME", default_value = DEFAULT_TAG_NAME)]
    pub tag_name: String,
}

impl ConfigArgs {
    /// Validate and assemble the pipeline configuration.
    pub fn into_config(self, output_only: bool) -> anyhow::Result<SyncConfig> {
        let sort: SortSpec = self.sort_by.parse().context("invalid --sort-by")?;
        Ok(SyncConfig {
            user_id: self.user_id,
            shelf: self.shelf,
            max_count: self.max_count,
            document_path: self.document,
            output_only,
            template: self.template,
            sort,
            tag_name: self.tag_name,
        })
    }
}
