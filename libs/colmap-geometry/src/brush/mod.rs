//! # Brush Synthesis
//!
//! Extrudes a single triangle into a five-sided prism brush.
//!
//! ## Algorithm
//!
//! 1. Face normal from the cross product of two edges
//! 2. Offset each corner along the normal by the scaled extrusion distance
//! 3. Round every point to four decimal places
//! 4. Validate base area, extruded area, prism volume and normal length
//!
//! Faces wind so that the plane normal of each one points out of the prism:
//! the bottom reverses the base winding, the top keeps it, and each side
//! follows its base edge.

use crate::error::DegenerateReason;
use config::constants::{round_coord, EPSILON};
use config::BrushSettings;
use glam::DVec3;

/// One planar face of a brush, defined by three ordered points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Plane points, wound so the plane faces out of the brush.
    pub points: [DVec3; 3],
}

impl Face {
    /// Unnormalized plane normal following the point winding.
    pub fn normal(&self) -> DVec3 {
        let [a, b, c] = self.points;
        (b - a).cross(c - a)
    }
}

/// A convex prism brush built from one triangle.
///
/// Only constructed through [`synthesize_brush`], so every instance has
/// passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    source_triangle: usize,
    faces: [Face; 5],
    volume: f64,
    material: String,
    lightmap: String,
}

impl Brush {
    /// Index of the triangle this brush was extruded from.
    #[inline]
    pub fn source_triangle(&self) -> usize {
        self.source_triangle
    }

    /// Bottom, top, then the three side walls.
    #[inline]
    pub fn faces(&self) -> &[Face; 5] {
        &self.faces
    }

    /// Signed volume of the tetrahedron spanned by the base and one
    /// extruded corner.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Surface material tag written on every face.
    #[inline]
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Lightmap tag written on every face.
    #[inline]
    pub fn lightmap(&self) -> &str {
        &self.lightmap
    }
}

/// A triangle that produced no brush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedTriangle {
    /// Triangle index in mesh order.
    pub index: usize,
    /// First check the prism failed.
    pub reason: DegenerateReason,
}

/// Result of synthesizing a whole mesh.
#[derive(Debug, Clone, Default)]
pub struct SynthesisReport {
    /// Valid brushes in triangle encounter order.
    pub brushes: Vec<Brush>,
    /// Triangles rejected by validation.
    pub skipped: Vec<SkippedTriangle>,
}

impl SynthesisReport {
    /// Number of triangles visited.
    pub fn triangle_count(&self) -> usize {
        self.brushes.len() + self.skipped.len()
    }
}

/// Extrudes one target-space triangle into a validated brush.
///
/// # Arguments
///
/// * `index` - Triangle index, kept on the brush for diagnostics
/// * `corners` - Triangle corners, already in target space
/// * `settings` - Extrusion distance, unit scale and texture tags
///
/// # Errors
///
/// Returns the first failed check. Callers are expected to skip the
/// triangle and keep going.
pub fn synthesize_brush(
    index: usize,
    corners: [DVec3; 3],
    settings: &BrushSettings,
) -> Result<Brush, DegenerateReason> {
    let [v1, v2, v3] = corners;
    let cross = (v2 - v1).cross(v3 - v1);
    let length = cross.length();
    if length.is_nan() || length < EPSILON {
        return Err(DegenerateReason::NormalLength { length });
    }
    let normal = cross / length;

    let offset = normal * settings.scaled_extrusion();
    let base = corners.map(round_point);
    let top = corners.map(|v| round_point(v + offset));

    let base_area = triangle_area(base);
    if base_area <= EPSILON {
        return Err(DegenerateReason::BaseArea { area: base_area });
    }
    let top_area = triangle_area(top);
    if top_area <= EPSILON {
        return Err(DegenerateReason::ExtrudedArea { area: top_area });
    }
    let volume = signed_volume(base, top[0]);
    if volume.is_nan() || volume <= EPSILON {
        return Err(DegenerateReason::Volume { volume });
    }
    let normal_length = normal.length();
    if normal_length.is_nan() || normal_length <= EPSILON {
        return Err(DegenerateReason::NormalLength {
            length: normal_length,
        });
    }

    let [b1, b2, b3] = base;
    let [t1, t2, t3] = top;
    let faces = [
        Face { points: [b1, b3, b2] },
        Face { points: [t1, t2, t3] },
        Face { points: [b1, b2, t2] },
        Face { points: [b2, b3, t3] },
        Face { points: [b3, b1, t1] },
    ];

    Ok(Brush {
        source_triangle: index,
        faces,
        volume,
        material: settings.material.clone(),
        lightmap: settings.lightmap.clone(),
    })
}

/// Synthesizes a brush per triangle, collecting skipped indices.
pub fn synthesize_brushes<I>(triangles: I, settings: &BrushSettings) -> SynthesisReport
where
    I: IntoIterator<Item = [DVec3; 3]>,
{
    let mut report = SynthesisReport::default();
    for (index, corners) in triangles.into_iter().enumerate() {
        match synthesize_brush(index, corners, settings) {
            Ok(brush) => report.brushes.push(brush),
            Err(reason) => {
                log::debug!("skipping triangle {index}: {reason}");
                report.skipped.push(SkippedTriangle { index, reason });
            }
        }
    }
    report
}

fn round_point(p: DVec3) -> DVec3 {
    DVec3::new(round_coord(p.x), round_coord(p.y), round_coord(p.z))
}

fn triangle_area([a, b, c]: [DVec3; 3]) -> f64 {
    0.5 * (b - a).cross(c - a).length()
}

/// Positive when `apex` lies on the side the base winding faces.
fn signed_volume([a, b, c]: [DVec3; 3], apex: DVec3) -> f64 {
    (b - a).cross(c - a).dot(apex - a) / 6.0
}

#[cfg(test)]
mod tests;
