//! # Map Errors
//!
//! Error types for writing map documents.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a map document.
#[derive(Debug, Error)]
pub enum MapError {
    /// The document could not be written to its target path
    #[error("failed to write map {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
