//! Text cleanup runs over GDT and map files.
//!
//! Missing files are reported and skipped; any other failure is reported
//! for that file and the remaining files are still processed.

use crate::settings::BrushRemoval;
use block_edit::{
    remove_brushes, remove_duplicate_blocks, rewrite_in_place, rewrite_to, EditError, Edited,
    RemovedBlock, SeenHeaders,
};
use colmap_map::MapDocument;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A file that was rewritten.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Rewritten input.
    pub path: PathBuf,
    /// Blocks dropped from it.
    pub removed: Vec<RemovedBlock>,
}

/// Summary of a cleanup run.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Files rewritten.
    pub processed: Vec<FileOutcome>,
    /// Inputs that did not exist and were skipped.
    pub missing: Vec<PathBuf>,
    /// Files that could not be read or written.
    pub failed: Vec<(PathBuf, EditError)>,
}

impl CleanupReport {
    /// Total blocks removed across all files.
    pub fn removed_count(&self) -> usize {
        self.processed.iter().map(|f| f.removed.len()).sum()
    }

    fn record(&mut self, path: PathBuf, result: Result<Edited, EditError>) {
        match result {
            Ok(edited) => self.processed.push(FileOutcome {
                path,
                removed: edited.removed,
            }),
            Err(err) if err.is_not_found() => {
                log::warn!("{err}; skipping");
                self.missing.push(path);
            }
            Err(err) => {
                log::error!("{err}");
                self.failed.push((path, err));
            }
        }
    }
}

/// Copies `input` to `output` without repeated GDT entries.
pub fn dedupe_gdt(input: &Path, output: &Path) -> CleanupReport {
    let mut seen = SeenHeaders::new();
    let result = rewrite_to(input, output, |text| remove_duplicate_blocks(text, &mut seen));
    if let Ok(edited) = &result {
        for block in &edited.removed {
            log::debug!("dropped duplicate {} at line {}", block.header, block.lines.start + 1);
        }
        log::info!(
            "removed {} duplicate entries from {}, wrote {}",
            edited.removed.len(),
            input.display(),
            output.display()
        );
    }

    let mut report = CleanupReport::default();
    report.record(input.to_path_buf(), result);
    report
}

/// Strips the listed brushes from each mesh's map in `maps_dir`, in place.
///
/// Directives without a mesh name or without brush numbers are ignored.
pub fn remove_invalid_brushes(maps_dir: &Path, directives: &[BrushRemoval]) -> CleanupReport {
    let mut report = CleanupReport::default();

    for directive in directives {
        if directive.mesh.is_empty() || directive.brushes.is_empty() {
            log::debug!("ignoring empty brush removal entry {directive:?}");
            continue;
        }

        let path = MapDocument::path_for(maps_dir, &directive.mesh);
        log::info!("processing {}", path.display());
        let targets: BTreeSet<u64> = directive.brushes.iter().copied().collect();
        let result = rewrite_in_place(&path, |text| remove_brushes(text, &targets));

        if let Ok(edited) = &result {
            for block in &edited.removed {
                log::info!("removed {}", block.header);
            }
            let found = edited.removed.len();
            if found < targets.len() {
                log::warn!(
                    "{}: {} of {} requested brushes were not present",
                    directive.mesh,
                    targets.len() - found,
                    targets.len()
                );
            }
            log::info!("saved cleaned map for {}", directive.mesh);
        }
        report.record(path, result);
    }

    report
}
