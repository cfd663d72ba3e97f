//! Error types for shelfsync-sync.

use std::path::PathBuf;

use thiserror::Error;

use shelfsync_feed::FeedError;
use shelfsync_render::RenderError;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the feed collaborator.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// An error from the template renderer.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A required anchor marker is missing from the document.
    #[error("cannot find required anchor '{marker}' in the document")]
    AnchorNotFound { marker: String },

    /// The end anchor appears before the start anchor.
    #[error("anchor '{end}' appears before '{start}'")]
    AnchorOutOfOrder { start: String, end: String },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A git invocation failed while persisting the document.
    #[error("git {task} failed: {detail}")]
    Git { task: &'static str, detail: String },

    /// JSON serialization error (record observability output).
    #[error("record JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
