//! # Collision Map Geometry
//!
//! Converts triangle meshes into the convex brush primitives used by the
//! level editor's collision pipeline.
//!
//! ## Architecture
//!
//! ```text
//! MeshGeometry (local space) → transform (world, inches) → brush synthesis → Brush
//! ```
//!
//! A flat triangle has no volume, so every triangle is inflated into a thin
//! prism along its normal. Prisms that fail validation are skipped and
//! reported, never emitted.
//!
//! ## Usage
//!
//! ```rust
//! use colmap_geometry::{synthesize_mesh, MeshGeometry};
//! use config::BrushSettings;
//! use glam::{DMat4, DVec3};
//!
//! let mesh = MeshGeometry::new(
//!     "wall",
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
//!     vec![[0, 1, 2]],
//!     DMat4::IDENTITY,
//! )?;
//! let report = synthesize_mesh(&mesh, &BrushSettings::default());
//! assert_eq!(report.brushes.len(), 1);
//! # Ok::<(), colmap_geometry::GeometryError>(())
//! ```

pub mod brush;
pub mod error;
pub mod mesh;
pub mod transform;

pub use brush::{
    synthesize_brush, synthesize_brushes, Brush, Face, SkippedTriangle, SynthesisReport,
};
pub use error::{DegenerateReason, GeometryError};
pub use mesh::MeshGeometry;
pub use transform::to_target_space;

use config::BrushSettings;

/// Synthesizes brushes for every triangle of a mesh.
///
/// Vertices are moved into target space with `settings.unit_scale` before
/// extrusion. Triangles are visited in mesh order, so brush order in the
/// report matches triangle encounter order.
pub fn synthesize_mesh(mesh: &MeshGeometry, settings: &BrushSettings) -> SynthesisReport {
    synthesize_brushes(mesh.world_triangles(settings.unit_scale), settings)
}
