//! # Map Documents
//!
//! A document is the fixed header followed by numbered entities. It is
//! built once per mesh and written wholesale.
//!
//! ## Layout
//!
//! ```text
//! iwmap 4
//! "script_startingnumber" 0
//! "000_Global" flags  active
//! "The Map" flags expanded
//!
//! // entity 0      ← worldspawn + brushes
//! // entity 1      ← misc_model
//! ```

use crate::entity::Entity;
use crate::error::MapError;
use crate::guid::IdSource;
use colmap_geometry::Brush;
use config::constants::{MAP_EXTENSION, MAP_FORMAT_VERSION};
use std::fmt;
use std::path::{Path, PathBuf};

/// An ordered list of entities behind the fixed map header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapDocument {
    entities: Vec<Entity>,
}

impl MapDocument {
    /// Creates a document from entities in output order.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// The collision document for one mesh: worldspawn carrying `brushes`
    /// in the given order, then a misc_model referencing `mesh_name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colmap_map::{MapDocument, RandomIds};
    ///
    /// let doc = MapDocument::for_mesh("rock_01", Vec::new(), &RandomIds);
    /// let text = doc.render();
    /// assert!(text.starts_with("iwmap 4\n"));
    /// assert!(text.contains("\"model\" \"rock_01\""));
    /// ```
    pub fn for_mesh(mesh_name: &str, brushes: Vec<Brush>, ids: &impl IdSource) -> Self {
        Self::new(vec![
            Entity::worldspawn(brushes, ids),
            Entity::misc_model(mesh_name, ids),
        ])
    }

    /// Entities in output order.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of brushes across all entities.
    pub fn brush_count(&self) -> usize {
        self.entities.iter().map(|e| e.brushes().len()).sum()
    }

    /// Renders the full document text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Target path of a mesh's document inside `dir`.
    pub fn path_for(dir: &Path, mesh_name: &str) -> PathBuf {
        dir.join(format!("{mesh_name}.{MAP_EXTENSION}"))
    }

    /// Writes the document, replacing any existing file at `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), MapError> {
        block_edit::write_atomically(path, &self.render()).map_err(|source| MapError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("collision map exported to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for MapDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "iwmap {MAP_FORMAT_VERSION}")?;
        writeln!(f, "\"script_startingnumber\" 0")?;
        writeln!(f, "\"000_Global\" flags  active")?;
        writeln!(f, "\"The Map\" flags expanded")?;
        writeln!(f)?;
        for (index, entity) in self.entities.iter().enumerate() {
            entity.render(index, f)?;
        }
        Ok(())
    }
}
