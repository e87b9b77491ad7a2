//! # Edit Errors
//!
//! Error types for reading and replacing edited files.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing a file.
#[derive(Debug, Error)]
pub enum EditError {
    /// The input file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EditError {
    /// True for a missing input, which batch runs skip instead of failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
