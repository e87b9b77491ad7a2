//! # Geometry Errors
//!
//! Error types for mesh input and brush validation.

use thiserror::Error;

/// Errors raised while building mesh input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A triangle references a vertex that does not exist
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A vertex coordinate is NaN or infinite
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    /// The world transform contains NaN or infinite entries
    #[error("world transform is not finite")]
    NonFiniteTransform,
}

impl GeometryError {
    /// Creates an index out of range error.
    pub fn index_out_of_range(triangle: usize, index: u32, vertex_count: usize) -> Self {
        Self::IndexOutOfRange {
            triangle,
            index,
            vertex_count,
        }
    }
}

/// Why a triangle did not produce a brush.
///
/// Degenerate triangles are expected in real meshes; they are recorded and
/// skipped rather than treated as failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DegenerateReason {
    /// Edge cross product too short to define a normal
    #[error("normal length {length} is below tolerance")]
    NormalLength { length: f64 },

    /// Base triangle collapsed after rounding
    #[error("base triangle area {area} is below tolerance")]
    BaseArea { area: f64 },

    /// Extruded triangle collapsed after rounding
    #[error("extruded triangle area {area} is below tolerance")]
    ExtrudedArea { area: f64 },

    /// Prism is inverted or has no thickness
    #[error("prism volume {volume} is below tolerance")]
    Volume { volume: f64 },
}
