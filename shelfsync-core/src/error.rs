//! Error types for shelfsync-core.

use thiserror::Error;

/// All errors that can arise from configuration parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A sort token had a direction prefix but no field name (e.g. `"<"`),
    /// or was entirely empty.
    #[error("sort spec token '{token}' has no field name")]
    EmptySortField { token: String },
}
