//! Change-gated atomic writer.
//!
//! The gate is exact string equality between the current document and the
//! injected document, not a semantic diff. When the gate opens, the write
//! goes to `<path>.shelfsync.tmp` first and renames into place, so a failed
//! write never leaves a partial document.

use std::path::{Path, PathBuf};

use crate::diff;
use crate::error::{io_err, SyncError};

/// Outcome of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The feed returned no items; nothing was computed or written.
    EmptyShelf,
    /// The injected document equals the current one; nothing was written.
    Unchanged { path: PathBuf },
    /// Dry-run mode: the document differs and *would* have been written.
    WouldWrite { path: PathBuf, diff: String },
    /// The document differed and was written.
    Written { path: PathBuf },
}

/// Gate on equality, then write atomically.
pub(crate) fn write_if_changed(
    path: &Path,
    original: &str,
    updated: &str,
    dry_run: bool,
) -> Result<SyncOutcome, SyncError> {
    if original == updated {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(SyncOutcome::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(SyncOutcome::WouldWrite {
            path: path.to_path_buf(),
            diff: diff::unified(original, updated, path),
        });
    }

    let tmp = PathBuf::from(format!("{}.shelfsync.tmp", path.display()));
    std::fs::write(&tmp, updated).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(SyncOutcome::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn changed_content_is_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "v1").unwrap();

        let outcome = write_if_changed(&path, "v1", "v2", false).unwrap();
        assert!(matches!(outcome, SyncOutcome::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn identical_content_is_not_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "same").unwrap();

        let outcome = write_if_changed(&path, "same", "same", false).unwrap();
        assert!(matches!(outcome, SyncOutcome::Unchanged { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "same");
    }

    #[test]
    fn dry_run_reports_diff_and_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "old\n").unwrap();

        let outcome = write_if_changed(&path, "old\n", "new\n", true).unwrap();
        match outcome {
            SyncOutcome::WouldWrite { diff, .. } => {
                assert!(diff.contains("-old"), "diff was: {diff}");
                assert!(diff.contains("+new"), "diff was: {diff}");
            }
            other => panic!("expected WouldWrite, got: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
    }

    #[test]
    fn tmp_file_is_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "v1").unwrap();

        write_if_changed(&path, "v1", "v2", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.shelfsync.tmp", path.display()));
        assert!(!tmp_path.exists(), ".shelfsync.tmp must be cleaned up");
    }

    #[test]
    #[cfg(unix)]
    fn failed_write_leaves_original_untouched() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();
        let path = readonly_dir.join("README.md");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        let err = write_if_changed(&path, "original", "updated", false)
            .expect_err("write into readonly dir should fail");
        assert!(matches!(err, SyncError::Io { .. }), "got: {err}");

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        let tmp_path = PathBuf::from(format!("{}.shelfsync.tmp", path.display()));
        assert!(!tmp_path.exists(), ".shelfsync.tmp must not linger");
    }
}
