//! Domain types for the shelfsync pipeline.
//!
//! A [`Record`] is one normalized feed entry: a flat map from field name to
//! string value. Lookup of an absent field returns `None`, never panics.
//! A [`SortSpec`] is the pre-validated form of the comma-separated sort
//! configuration string; the sorter never re-parses strings.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One normalized feed entry.
///
/// Values are plain strings; numeric and date interpretation happens at the
/// point of comparison. Empty values are never stored, so "present but empty"
/// and "absent" are indistinguishable to lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `field`. Empty values are dropped.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.fields.insert(field.into(), value);
        }
    }

    /// Value of `field`, or `None` when absent. Unknown names are not an error.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.set(field, value);
        }
        record
    }
}

// ---------------------------------------------------------------------------
// Sort specification
// ---------------------------------------------------------------------------

/// Direction for one sort key. Bare field names sort descending; a `<` prefix
/// requests ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// One (field, direction) sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        SortKey {
            field: field.into(),
            direction,
        }
    }
}

/// Ordered list of sort keys; the first entry is the primary key, later
/// entries break ties. An empty spec means "preserve input order".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    pub fn new(keys: Vec<SortKey>) -> Self {
        SortSpec(keys)
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for SortSpec {
    type Err = ConfigError;

    /// Parse `"user_read_at,<title"` — comma-separated tokens, each an
    /// optional `<` or `>` prefix plus a field name. `<` selects ascending;
    /// everything else sorts descending. An empty string is an empty spec.
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(SortSpec::default());
        }

        let mut keys = Vec::new();
        for token in trimmed.split(',') {
            let token = token.trim();
            let (direction, field) = match token.strip_prefix('<') {
                Some(rest) => (SortDirection::Ascending, rest),
                None => (
                    SortDirection::Descending,
                    token.strip_prefix('>').unwrap_or(token),
                ),
            };
            let field = field.trim();
            if field.is_empty() {
                return Err(ConfigError::EmptySortField {
                    token: token.to_string(),
                });
            }
            keys.push(SortKey::new(field, direction));
        }
        Ok(SortSpec(keys))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
