//! Error types for shelfsync-render.

use thiserror::Error;

/// All errors that can arise from building a renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The placeholder pattern failed to compile.
    #[error("placeholder pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
