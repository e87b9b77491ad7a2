//! Collision map generation: one `<mesh>.map` per configured mesh.

use crate::error::{MeshError, PipelineError, SourceError};
use crate::source::MeshSource;
use colmap_geometry::{synthesize_mesh, SkippedTriangle};
use colmap_map::{IdSource, MapDocument};
use config::BrushSettings;
use std::fs;
use std::path::{Path, PathBuf};

/// A map that was written.
#[derive(Debug, Clone)]
pub struct MeshOutcome {
    /// Mesh name.
    pub mesh: String,
    /// Written map file.
    pub path: PathBuf,
    /// Brushes written.
    pub brushes: usize,
    /// Triangles that produced no brush.
    pub skipped: Vec<SkippedTriangle>,
}

/// Summary of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Maps written, in mesh order.
    pub written: Vec<MeshOutcome>,
    /// Meshes whose export could not be loaded or whose map could not be
    /// written.
    pub failed: Vec<(String, MeshError)>,
}

/// Writes a collision map for every mesh in `mesh_names`, in order.
///
/// A mesh missing from `source` aborts the run. An export that cannot be
/// read or parsed, or a map that fails to write, is reported and the run
/// moves on to the next mesh.
pub fn generate_maps(
    mesh_names: &[String],
    source: &impl MeshSource,
    output_dir: &Path,
    settings: &BrushSettings,
    ids: &impl IdSource,
) -> Result<GenerateReport, PipelineError> {
    fs::create_dir_all(output_dir).map_err(|source| PipelineError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = GenerateReport::default();
    for name in mesh_names {
        let mesh = match source.load_mesh(name) {
            Ok(mesh) => mesh,
            Err(err @ SourceError::NotFound { .. }) => return Err(err.into()),
            Err(err) => {
                log::error!("{err}");
                report.failed.push((name.clone(), err.into()));
                continue;
            }
        };
        let synthesis = synthesize_mesh(&mesh, settings);
        if !synthesis.skipped.is_empty() {
            let indices: Vec<usize> = synthesis.skipped.iter().map(|s| s.index).collect();
            log::warn!(
                "{name}: skipped {} of {} triangles: {indices:?}",
                synthesis.skipped.len(),
                synthesis.triangle_count()
            );
        }

        let brushes = synthesis.brushes.len();
        let document = MapDocument::for_mesh(name, synthesis.brushes, ids);
        let path = MapDocument::path_for(output_dir, name);
        match document.write_to(&path) {
            Ok(()) => report.written.push(MeshOutcome {
                mesh: name.clone(),
                path,
                brushes,
                skipped: synthesis.skipped,
            }),
            Err(err) => {
                log::error!("{err}");
                report.failed.push((name.clone(), err.into()));
            }
        }
    }

    Ok(report)
}
