//! Mesh geometry sources.
//!
//! The 3D host exports each mesh as plain data; this module reads those
//! exports. Tests and embedders use the in-memory implementation.

use crate::error::SourceError;
use colmap_geometry::MeshGeometry;
use glam::{DMat4, DVec3};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Provides mesh geometry by name.
///
/// # Examples
/// ```
/// use colmap_pipeline::source::{InMemoryMeshSource, MeshSource};
/// let source = InMemoryMeshSource::default();
/// assert!(source.load_mesh("wall").is_err());
/// ```
pub trait MeshSource {
    /// Loads one mesh.
    fn load_mesh(&self, name: &str) -> Result<MeshGeometry, SourceError>;

    /// Names of every mesh this source can load, sorted.
    fn mesh_names(&self) -> Result<Vec<String>, SourceError>;
}

/// On-disk layout of one exported mesh.
///
/// `matrix_world` is row-major, as Blender prints it. It defaults to the
/// identity for exports that are already in world space.
#[derive(Debug, Clone, Deserialize)]
pub struct MeshExport {
    #[serde(default = "identity_rows")]
    pub matrix_world: [[f64; 4]; 4],
    /// Object-local vertex positions.
    pub vertices: Vec<[f64; 3]>,
    /// Vertex indices, three per triangle.
    pub triangles: Vec<[u32; 3]>,
}

fn identity_rows() -> [[f64; 4]; 4] {
    DMat4::IDENTITY.to_cols_array_2d()
}

impl MeshExport {
    /// Converts the export into validated mesh geometry.
    pub fn into_geometry(self, name: &str) -> Result<MeshGeometry, SourceError> {
        let world = DMat4::from_cols_array_2d(&self.matrix_world).transpose();
        let vertices = self.vertices.into_iter().map(DVec3::from_array).collect();
        MeshGeometry::new(name, vertices, self.triangles, world).map_err(|source| {
            SourceError::Geometry {
                name: name.to_string(),
                source,
            }
        })
    }
}

/// Reads `<dir>/<mesh>.json` exports.
#[derive(Debug, Clone)]
pub struct JsonMeshDirectory {
    dir: PathBuf,
}

impl JsonMeshDirectory {
    /// Reads exports from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of a mesh's export file.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl MeshSource for JsonMeshDirectory {
    fn load_mesh(&self, name: &str) -> Result<MeshGeometry, SourceError> {
        let path = self.path_for(name);
        let text = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound {
                    name: name.to_string(),
                }
            } else {
                SourceError::Read {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        let export: MeshExport =
            serde_json::from_str(&text).map_err(|source| SourceError::Parse { path, source })?;
        export.into_geometry(name)
    }

    fn mesh_names(&self) -> Result<Vec<String>, SourceError> {
        let read_err = |source: io::Error| SourceError::Read {
            path: self.dir.clone(),
            source,
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Mesh source backed by a map, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeshSource {
    meshes: BTreeMap<String, MeshGeometry>,
}

impl InMemoryMeshSource {
    /// Inserts or replaces a mesh under its own name.
    pub fn insert(&mut self, mesh: MeshGeometry) {
        self.meshes.insert(mesh.name().to_string(), mesh);
    }
}

impl MeshSource for InMemoryMeshSource {
    fn load_mesh(&self, name: &str) -> Result<MeshGeometry, SourceError> {
        self.meshes.get(name).cloned().ok_or_else(|| SourceError::NotFound {
            name: name.to_string(),
        })
    }

    fn mesh_names(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.meshes.keys().cloned().collect())
    }
}
