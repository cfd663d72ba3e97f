//! Multi-key record ordering.
//!
//! Comparison rule per key: date-valued fields are first converted to
//! epoch-millisecond strings (missing or unparseable → empty, which orders
//! before every valid timestamp); then, if both sides parse as numbers they
//! compare numerically, otherwise as plain strings. The default direction is
//! descending. Ties fall through to the next key; a full tie preserves input
//! order.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};

use crate::types::{Record, SortDirection, SortKey, SortSpec};

/// Fields holding feed date strings rather than plain text; these sort by
/// their parsed timestamp.
pub const DATE_FIELDS: [&str; 4] = [
    "pub_date",
    "user_read_at",
    "user_date_added",
    "user_date_created",
];

/// Order `records` by `spec`. An empty spec returns the input untouched.
pub fn sort_records(mut records: Vec<Record>, spec: &SortSpec) -> Vec<Record> {
    if spec.is_empty() {
        return records;
    }
    // sort_by is stable: records comparing equal on every key keep their
    // relative input order.
    records.sort_by(|a, b| compare_records(a, b, spec));
    records
}

fn compare_records(a: &Record, b: &Record, spec: &SortSpec) -> Ordering {
    spec.keys()
        .iter()
        .map(|key| compare_by_key(a, b, key))
        .find(|ord| !ord.is_eq())
        .unwrap_or(Ordering::Equal)
}

fn compare_by_key(a: &Record, b: &Record, key: &SortKey) -> Ordering {
    let left = sort_value(a, key);
    let right = sort_value(b, key);
    let ordering = match (left.parse::<f64>(), right.parse::<f64>()) {
        (Ok(l), Ok(r)) => l.total_cmp(&r),
        _ => left.cmp(&right),
    };
    match key.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// The comparable form of one field: missing fields compare as empty, date
/// fields compare by epoch milliseconds.
fn sort_value(record: &Record, key: &SortKey) -> String {
    let raw = record.get(&key.field).unwrap_or_default();
    if DATE_FIELDS.contains(&key.field.as_str()) {
        return parse_feed_date(raw)
            .map(|ms| ms.to_string())
            .unwrap_or_default();
    }
    raw.to_string()
}

/// Epoch milliseconds of a feed date string (RFC 2822 as served by RSS, with
/// RFC 3339 and bare-date fallbacks), or `None` when empty or unparseable.
pub fn parse_feed_date(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
