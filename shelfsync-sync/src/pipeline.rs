//! Shared sync pipeline entrypoint used by every CLI command.
//!
//! One invocation is strictly sequential: fetch → normalize → sort →
//! truncate → render → inject → gate → write. The full updated document is
//! computed before any byte hits disk.

use std::path::Path;

use shelfsync_core::{sort::sort_records, Record, SyncConfig};
use shelfsync_feed::{normalize, ShelfSource};
use shelfsync_render::LineRenderer;

use crate::error::{io_err, SyncError};
use crate::inject::{inject, Anchors};
use crate::writer::{write_if_changed, SyncOutcome};

/// What one run produced: the outcome plus the records that fed it.
#[derive(Debug)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    pub records: Vec<Record>,
}

/// Run the sync pipeline once.
///
/// An empty shelf is a benign no-op, not an error. Anchor problems and I/O
/// failures surface as [`SyncError`] before anything is written.
pub fn run(
    config: &SyncConfig,
    source: &dyn ShelfSource,
    dry_run: bool,
) -> Result<SyncReport, SyncError> {
    let items = source.fetch(&config.user_id, &config.shelf)?;
    if items.is_empty() {
        tracing::info!("shelf '{}' is empty; nothing to sync", config.shelf);
        return Ok(SyncReport {
            outcome: SyncOutcome::EmptyShelf,
            records: Vec::new(),
        });
    }

    let records: Vec<Record> = items.iter().map(normalize).collect();
    let mut records = sort_records(records, &config.sort);
    records.truncate(config.max_count);

    let renderer = LineRenderer::new(config.template.as_str())?;
    let rendered = renderer.render_list(&records);

    let path: &Path = &config.document_path;
    let document = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let anchors = Anchors::from_tag(&config.tag_name);
    let updated = inject(&document, &anchors, &rendered)?;

    let outcome = write_if_changed(path, &document, &updated, dry_run)?;
    if matches!(
        outcome,
        SyncOutcome::Written { .. } | SyncOutcome::WouldWrite { .. }
    ) {
        log_records(&records)?;
    }

    Ok(SyncReport { outcome, records })
}

/// One info line per record that triggered an update.
fn log_records(records: &[Record]) -> Result<(), SyncError> {
    for record in records {
        tracing::info!("updated record: {}", serde_json::to_string(record)?);
    }
    Ok(())
}
