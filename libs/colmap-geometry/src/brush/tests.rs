//! # Brush Synthesis Tests
//!
//! Validity checks, face layout and skip reporting.

use super::*;
use approx::assert_relative_eq;

fn unit_settings(extrude: f64) -> BrushSettings {
    BrushSettings::new(extrude, 1.0, "clip_physics", "lightmap_gray").unwrap()
}

fn right_triangle() -> [DVec3; 3] {
    [DVec3::ZERO, DVec3::X, DVec3::Y]
}

fn centroid(points: &[DVec3]) -> DVec3 {
    points.iter().copied().sum::<DVec3>() / points.len() as f64
}

#[test]
fn test_right_triangle_brush() {
    let brush = synthesize_brush(0, right_triangle(), &unit_settings(0.16)).unwrap();

    assert_eq!(brush.faces().len(), 5);
    assert_eq!(brush.source_triangle(), 0);
    assert_relative_eq!(brush.volume(), 0.5 * 1.0 * 0.16 / 3.0, epsilon = 1e-6);

    // Top face sits one extrusion above the base
    let top = brush.faces()[1];
    assert_eq!(top.points, [
        DVec3::new(0.0, 0.0, 0.16),
        DVec3::new(1.0, 0.0, 0.16),
        DVec3::new(0.0, 1.0, 0.16),
    ]);
}

#[test]
fn test_faces_point_outward() {
    let corners = [
        DVec3::new(3.2, -1.0, 0.5),
        DVec3::new(7.0, 2.5, 1.0),
        DVec3::new(-2.0, 4.0, 2.25),
    ];
    let brush = synthesize_brush(4, corners, &unit_settings(0.5)).unwrap();

    let all_points: Vec<DVec3> = brush.faces().iter().flat_map(|f| f.points).collect();
    let center = centroid(&all_points);
    for (i, face) in brush.faces().iter().enumerate() {
        let outward = centroid(&face.points) - center;
        assert!(
            face.normal().dot(outward) > 0.0,
            "face {i} winds inward: {:?}",
            face.points
        );
    }
}

#[test]
fn test_points_are_rounded() {
    let corners = [
        DVec3::new(0.123456, 0.0, 0.0),
        DVec3::new(10.987654, 0.333333, 0.0),
        DVec3::new(0.0, 10.555555, 0.777777),
    ];
    let brush = synthesize_brush(0, corners, &BrushSettings::default()).unwrap();
    for face in brush.faces() {
        for p in face.points {
            for c in p.to_array() {
                assert_eq!(round_coord(c), c);
            }
        }
    }
    assert_eq!(brush.faces()[0].points[0].x, 0.1235);
}

#[test]
fn test_collinear_triangle_is_rejected() {
    let corners = [DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)];
    let err = synthesize_brush(0, corners, &unit_settings(0.16)).unwrap_err();
    assert!(matches!(err, DegenerateReason::NormalLength { .. }));
}

#[test]
fn test_tiny_triangle_fails_area_check() {
    // Normal is long enough, area is not
    let corners = [DVec3::ZERO, DVec3::new(0.01, 0.0, 0.0), DVec3::new(0.0, 0.015, 0.0)];
    let err = synthesize_brush(0, corners, &unit_settings(0.16)).unwrap_err();
    assert!(matches!(err, DegenerateReason::BaseArea { .. }));
}

#[test]
fn test_thin_extrusion_fails_volume_check() {
    let err = synthesize_brush(0, right_triangle(), &unit_settings(0.0001)).unwrap_err();
    match err {
        DegenerateReason::Volume { volume } => assert!(volume < EPSILON),
        other => panic!("expected volume rejection, got {other:?}"),
    }
}

#[test]
fn test_nan_corner_is_rejected() {
    let corners = [DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 0.0), DVec3::Y];
    assert!(synthesize_brush(0, corners, &unit_settings(0.16)).is_err());
}

#[test]
fn test_texture_tags_come_from_settings() {
    let settings = BrushSettings::new(0.16, 1.0, "clip_player", "lightmap_white").unwrap();
    let brush = synthesize_brush(0, right_triangle(), &settings).unwrap();
    assert_eq!(brush.material(), "clip_player");
    assert_eq!(brush.lightmap(), "lightmap_white");
}

#[test]
fn test_extrusion_uses_unit_scale() {
    let settings = BrushSettings::new(0.16, 39.37, "clip_physics", "lightmap_gray").unwrap();
    let brush = synthesize_brush(0, right_triangle(), &settings).unwrap();
    assert_eq!(brush.faces()[1].points[0].z, 6.2992);
}

#[test]
fn test_synthesis_continues_past_failures() {
    let triangles = vec![
        right_triangle(),
        [DVec3::ZERO, DVec3::ZERO, DVec3::ZERO],
        [DVec3::new(0.0, 0.0, 5.0), DVec3::new(2.0, 0.0, 5.0), DVec3::new(0.0, 2.0, 5.0)],
    ];
    let report = synthesize_brushes(triangles, &unit_settings(0.16));

    assert_eq!(report.triangle_count(), 3);
    let sources: Vec<usize> = report.brushes.iter().map(Brush::source_triangle).collect();
    assert_eq!(sources, vec![0, 2]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
}

#[test]
fn test_every_emitted_brush_has_volume() {
    let triangles = (0..20).map(|i| {
        let s = 0.05 * i as f64;
        [DVec3::ZERO, DVec3::new(s, 0.0, 0.0), DVec3::new(0.0, s, 0.1 * s)]
    });
    let report = synthesize_brushes(triangles, &unit_settings(0.16));
    assert!(!report.brushes.is_empty());
    assert!(!report.skipped.is_empty());
    for brush in &report.brushes {
        assert_eq!(brush.faces().len(), 5);
        assert!(brush.volume() > EPSILON);
    }
}
