//! # shelfsync-sync
//!
//! Change-gated document synchronization engine.
//!
//! Call [`pipeline::run`] to fetch a shelf, render it, and splice it into the
//! anchored region of a document. The document is written (atomically) only
//! when the injected result differs from what is currently on disk.

pub mod diff;
pub mod error;
pub mod git;
pub mod inject;
pub mod pipeline;
pub mod writer;

pub use error::SyncError;
pub use inject::Anchors;
pub use pipeline::SyncReport;
pub use writer::SyncOutcome;
