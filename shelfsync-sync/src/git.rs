//! Version-control persistence collaborator.
//!
//! Stages, commits, and pushes the synced document under a fixed bot
//! identity. The identity is passed per-invocation via `-c`; the operator's
//! git config is never modified.

use std::path::Path;
use std::process::Command;

use crate::error::{io_err, SyncError};

/// Fixed commit message for synced updates.
pub const COMMIT_MESSAGE: &str = "Synced and updated with user's goodreads book lists";

const COMMITTER_NAME: &str = "goodreads-books-bot";
const COMMITTER_EMAIL: &str = "goodreads-books-bot@example.com";

/// Stage `document_path`, commit, and push.
pub fn commit_and_push(document_path: &Path) -> Result<(), SyncError> {
    let document = document_path.display().to_string();
    let name = format!("user.name={COMMITTER_NAME}");
    let email = format!("user.email={COMMITTER_EMAIL}");

    run_git("add", &["add", &document])?;
    run_git(
        "commit",
        &["-c", &name, "-c", &email, "commit", "-m", COMMIT_MESSAGE],
    )?;
    run_git("push", &["push"])?;

    tracing::info!("document update pushed upstream");
    Ok(())
}

fn run_git(task: &'static str, args: &[&str]) -> Result<(), SyncError> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| io_err("git", e))?;

    if output.status.success() {
        return Ok(());
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    Err(SyncError::Git {
        task,
        detail: format!("status {}: {} {}", output.status, stdout, stderr),
    })
}
