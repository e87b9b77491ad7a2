//! # Collision Map Format
//!
//! Renders synthesized brushes into the level editor's brace-delimited
//! `iwmap 4` text format.
//!
//! ## Architecture
//!
//! ```text
//! Vec<Brush> + mesh name → MapDocument (GUIDs assigned) → text → <mesh>.map
//! ```
//!
//! Each document holds one `worldspawn` entity carrying every brush and one
//! `misc_model` entity referencing the source model. Documents are never
//! patched; a re-run regenerates and overwrites them.

pub mod document;
pub mod entity;
pub mod error;
pub mod guid;

pub use document::MapDocument;
pub use entity::{Entity, MapBrush};
pub use error::MapError;
pub use guid::{Guid, IdSource, RandomIds};
