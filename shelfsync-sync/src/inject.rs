//! Anchor-delimited region replacement.
//!
//! The mutable region is everything strictly between the first start marker
//! and the first end marker; the markers themselves, all surrounding text,
//! and any later duplicate markers are preserved byte-for-byte.

use crate::error::SyncError;

/// Expanded start/end anchor markers for a tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    start: String,
    end: String,
}

impl Anchors {
    /// `<!-- {tag}:START -->` / `<!-- {tag}:END -->`
    pub fn from_tag(tag: &str) -> Self {
        Anchors {
            start: format!("<!-- {tag}:START -->"),
            end: format!("<!-- {tag}:END -->"),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// Replace the region between the anchors with `\n{rendered}\n`.
pub fn inject(document: &str, anchors: &Anchors, rendered: &str) -> Result<String, SyncError> {
    let start_idx = find_marker(document, anchors.start())?;
    let end_idx = find_marker(document, anchors.end())?;

    let region_start = start_idx + anchors.start().len();
    if end_idx < region_start {
        return Err(SyncError::AnchorOutOfOrder {
            start: anchors.start().to_string(),
            end: anchors.end().to_string(),
        });
    }

    let mut updated = String::with_capacity(document.len() + rendered.len() + 2);
    updated.push_str(&document[..region_start]);
    updated.push('\n');
    updated.push_str(rendered);
    updated.push('\n');
    updated.push_str(&document[end_idx..]);
    Ok(updated)
}

fn find_marker(document: &str, marker: &str) -> Result<usize, SyncError> {
    document
        .find(marker)
        .ok_or_else(|| SyncError::AnchorNotFound {
            marker: marker.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
