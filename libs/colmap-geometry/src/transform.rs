//! # Target Space Transform
//!
//! Maps object-local vertices into the level editor's coordinate space:
//! world transform first, then linear unit conversion.

use glam::{DMat4, DVec3};

/// Transforms a local vertex to world space and rescales it.
///
/// # Arguments
///
/// * `local` - Vertex position in object-local space
/// * `world` - The object's affine world transform
/// * `unit_scale` - Linear unit factor (meters → inches is 39.37)
///
/// # Example
///
/// ```rust
/// use colmap_geometry::to_target_space;
/// use glam::{DMat4, DVec3};
///
/// let world = DMat4::from_translation(DVec3::new(1.0, 0.0, 0.0));
/// let p = to_target_space(DVec3::new(1.0, 2.0, 3.0), &world, 10.0);
/// assert_eq!(p, DVec3::new(20.0, 20.0, 30.0));
/// ```
#[inline]
pub fn to_target_space(local: DVec3, world: &DMat4, unit_scale: f64) -> DVec3 {
    world.transform_point3(local) * unit_scale
}

/// Transforms the three corners of a triangle.
#[inline]
pub fn triangle_to_target_space(corners: [DVec3; 3], world: &DMat4, unit_scale: f64) -> [DVec3; 3] {
    corners.map(|v| to_target_space(v, world, unit_scale))
}
