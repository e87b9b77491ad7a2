//! # Mesh Input
//!
//! Plain triangle-mesh data as exported by the 3D host: vertex positions,
//! triangle indices and the object's world transform.

use crate::error::GeometryError;
use crate::transform::triangle_to_target_space;
use glam::{DMat4, DVec3};

/// A named, validated triangle mesh in object-local space.
///
/// Every triangle index is guaranteed to be in range, so corner lookups
/// never fail after construction.
///
/// # Example
///
/// ```rust
/// use colmap_geometry::MeshGeometry;
/// use glam::{DMat4, DVec3};
///
/// let mesh = MeshGeometry::new("floor", vec![DVec3::ZERO], vec![[0, 0, 3]], DMat4::IDENTITY);
/// assert!(mesh.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MeshGeometry {
    name: String,
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    world: DMat4,
}

impl MeshGeometry {
    /// Creates a mesh, validating indices and coordinates.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
        world: DMat4,
    ) -> Result<Self, GeometryError> {
        if !world.is_finite() {
            return Err(GeometryError::NonFiniteTransform);
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index });
        }
        for (triangle, indices) in triangles.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertices.len() {
                    return Err(GeometryError::index_out_of_range(
                        triangle,
                        index,
                        vertices.len(),
                    ));
                }
            }
        }

        Ok(Self {
            name: name.into(),
            vertices,
            triangles,
            world,
        })
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the local-space vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the triangle indices.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the world transform.
    #[inline]
    pub fn world(&self) -> &DMat4 {
        &self.world
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the local-space corners of a triangle, or `None` when
    /// `triangle` is out of range.
    pub fn corners(&self, triangle: usize) -> Option<[DVec3; 3]> {
        self.triangles.get(triangle).map(|t| self.lookup(t))
    }

    // Indices were range-checked in `new`.
    fn lookup(&self, triangle: &[u32; 3]) -> [DVec3; 3] {
        triangle.map(|i| self.vertices[i as usize])
    }

    /// Iterates triangles in target space, in mesh order.
    pub fn world_triangles(&self, unit_scale: f64) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles
            .iter()
            .map(move |t| triangle_to_target_space(self.lookup(t), &self.world, unit_scale))
    }
}
