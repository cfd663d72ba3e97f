//! `shelfsync diff` — show what sync would write, without writing.

use anyhow::{Context, Result};
use clap::Args;

use shelfsync_feed::GoodreadsClient;
use shelfsync_sync::{pipeline, SyncOutcome};

use super::ConfigArgs;

/// Arguments for `shelfsync diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.into_config(false)?;
        let client = GoodreadsClient::new();

        let report = pipeline::run(&config, &client, true)
            .with_context(|| format!("diff failed for shelf '{}'", config.shelf))?;

        match report.outcome {
            SyncOutcome::WouldWrite { diff, .. } => {
                print!("{diff}");
                if !diff.ends_with('\n') {
                    println!();
                }
            }
            _ => println!("No differences for '{}'.", config.document_path.display()),
        }

        Ok(())
    }
}
