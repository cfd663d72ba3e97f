//! `shelfsync sync` — run the pipeline and persist the result.

use anyhow::{Context, Result};
use clap::Args;

use shelfsync_feed::GoodreadsClient;
use shelfsync_sync::{git, pipeline, SyncOutcome};

use super::ConfigArgs;

/// Arguments for `shelfsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write the document but skip the git commit; emit records as JSON.
    #[arg(long, env = "OUTPUT_ONLY")]
    pub output_only: bool,

    /// Show what would change without writing or committing.
    #[arg(long, conflicts_with = "output_only")]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let dry_run = self.dry_run;
        let config = self.config.into_config(self.output_only)?;
        let client = GoodreadsClient::new();

        let report = pipeline::run(&config, &client, dry_run)
            .with_context(|| format!("sync failed for shelf '{}'", config.shelf))?;

        match &report.outcome {
            SyncOutcome::EmptyShelf => {
                println!("✓ shelf '{}' is empty — nothing to do", config.shelf);
            }
            SyncOutcome::Unchanged { path } => {
                println!("✓ {} already up to date", path.display());
            }
            SyncOutcome::WouldWrite { path, diff } => {
                println!("[dry-run] ~ {} would change:", path.display());
                print!("{diff}");
                if !diff.ends_with('\n') {
                    println!();
                }
            }
            SyncOutcome::Written { path } => {
                println!(
                    "✎ {} updated ({} records)",
                    path.display(),
                    report.records.len()
                );
                if config.output_only {
                    println!("{}", serde_json::to_string_pretty(&report.records)?);
                } else {
                    git::commit_and_push(&config.document_path)
                        .context("failed to commit and push document")?;
                    println!("✓ committed and pushed");
                }
            }
        }

        Ok(())
    }
}
