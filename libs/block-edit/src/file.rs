//! # File Rewriting
//!
//! Whole-file read, transform and replace. Inputs are read completely and
//! closed before any output is written; outputs go to a uniquely named
//! temporary file in the target's directory that is then renamed over the
//! target, so readers see either the old or the new content.

use crate::error::EditError;
use crate::policy::Edited;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a whole text file.
///
/// # Errors
///
/// [`EditError::NotFound`] when the path does not exist, [`EditError::Read`]
/// for any other failure.
pub fn read_text(path: &Path) -> Result<String, EditError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            EditError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            EditError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Replaces `path` with `contents` through a temporary file in the same
/// directory.
///
/// The temporary file gets a fresh unique name, so existing files next to
/// the target are never touched. It is deleted if anything fails before the
/// rename.
pub fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Reads `input`, applies `edit`, and writes the result to `output`.
///
/// `input` and `output` may be the same path.
pub fn rewrite_to<F>(input: &Path, output: &Path, edit: F) -> Result<Edited, EditError>
where
    F: FnOnce(&str) -> Edited,
{
    let text = read_text(input)?;
    let edited = edit(&text);
    write_atomically(output, &edited.text).map_err(|source| EditError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(edited)
}

/// Reads, edits and replaces a file in place.
pub fn rewrite_in_place<F>(path: &Path, edit: F) -> Result<Edited, EditError>
where
    F: FnOnce(&str) -> Edited,
{
    rewrite_to(path, path, edit)
}
