//! # shelfsync-render
//!
//! Placeholder template rendering.
//!
//! Renders one [`Record`](shelfsync_core::Record) per line via `$field`
//! placeholder substitution. Create a [`LineRenderer`] once per template and
//! reuse it across records.

pub mod error;
pub mod template;

pub use error::RenderError;
pub use template::{LineRenderer, STAR_GLYPH, UNRATED};
