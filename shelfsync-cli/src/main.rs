//! Shelfsync — sync a Goodreads shelf into an anchored document region.
//!
//! # Usage
//!
//! ```text
//! shelfsync sync --user-id <id> [--shelf read] [--max-count 10]
//!                [--document README.md] [--sort-by "<user_read_at"]
//!                [--template "- [$title]($url)"] [--tag-name GOODREADS-LIST]
//!                [--output-only | --dry-run]
//! shelfsync diff --user-id <id> [...]
//! ```
//!
//! Every flag also reads an environment variable (`GOODREADS_USER_ID`,
//! `GOODREADS_SHELF`, `MAX_BOOKS_COUNT`, `README_FILE_PATH`, `TEMPLATE`,
//! `SORT_BY_FIELDS`, `COMMENT_TAG_NAME`, `OUTPUT_ONLY`), so the binary drops
//! into CI schedules without a wrapper script.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "shelfsync",
    version,
    about = "Sync a Goodreads shelf into an anchored region of a document",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the shelf, update the document, and commit when it changed.
    Sync(SyncArgs),

    /// Show the unified diff of what sync would write, without writing.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
