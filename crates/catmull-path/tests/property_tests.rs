//! Property-based tests for spline paths.
//!
//! These tests verify interpolation and arc-length properties that should
//! hold for any set of at least two control points.

use catmull_path::{CatmullRomPath, DistanceLut, FrameTable};
use glam::Vec3;
use quickcheck_macros::quickcheck;

const COORD_LIMIT: f32 = 100.0;
const ENDPOINT_TOLERANCE: f32 = 1e-3;

fn sanitize_f32(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-COORD_LIMIT, COORD_LIMIT)
    } else {
        0.0
    }
}

/// Turn arbitrary triples into at least two finite control points.
fn control_points(raw: Vec<(f32, f32, f32)>) -> Vec<Vec3> {
    let mut points: Vec<Vec3> = raw
        .into_iter()
        .take(12)
        .map(|(x, y, z)| Vec3::new(sanitize_f32(x), sanitize_f32(y), sanitize_f32(z)))
        .collect();
    while points.len() < 2 {
        points.push(Vec3::new(points.len() as f32, 1.0, -1.0));
    }
    points
}

fn build(raw: Vec<(f32, f32, f32)>) -> Option<(Vec<Vec3>, CatmullRomPath)> {
    let points = control_points(raw);
    CatmullRomPath::new(&points).ok().map(|path| (points, path))
}

#[quickcheck]
fn prop_endpoints_are_first_and_last_points(raw: Vec<(f32, f32, f32)>) -> bool {
    let Some((points, path)) = build(raw) else {
        return false;
    };
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return false;
    };

    path.position_at(0.0).abs_diff_eq(first, ENDPOINT_TOLERANCE)
        && path.position_at(1.0).abs_diff_eq(last, ENDPOINT_TOLERANCE)
}

#[quickcheck]
fn prop_weight_count_matches_segments(raw: Vec<(f32, f32, f32)>) -> bool {
    let Some((points, path)) = build(raw) else {
        return false;
    };
    path.weights().len() == 4 * (points.len() - 1) && path.segment_count() == points.len() - 1
}

#[quickcheck]
fn prop_distance_lut_is_monotonic(raw: Vec<(f32, f32, f32)>) -> bool {
    let Some((_, path)) = build(raw) else {
        return false;
    };
    let lut = path.distance_lut();
    lut.is_monotonic() && lut.table()[DistanceLut::SIZE - 1].to_bits() == path.arc_length().to_bits()
}

#[quickcheck]
fn prop_distance_endpoints_match_parameter_endpoints(raw: Vec<(f32, f32, f32)>) -> bool {
    let Some((_, path)) = build(raw) else {
        return false;
    };

    let start_matches = path.position_at_distance(0.0) == path.position_at(0.0);
    let end_matches = path
        .position_at_distance(path.arc_length())
        .abs_diff_eq(path.position_at(1.0), ENDPOINT_TOLERANCE);

    start_matches && end_matches
}

#[quickcheck]
fn prop_distance_to_t_stays_in_unit_range(raw: Vec<(f32, f32, f32)>, fraction: f32) -> bool {
    let Some((_, path)) = build(raw) else {
        return false;
    };
    let fraction = if fraction.is_finite() {
        fraction.abs().fract()
    } else {
        0.5
    };

    let t = path.distance_to_t(path.arc_length() * fraction);
    (0.0..=1.0).contains(&t)
}

#[quickcheck]
fn prop_set_points_is_idempotent(raw: Vec<(f32, f32, f32)>) -> bool {
    let points = control_points(raw);
    let Ok(mut path) = CatmullRomPath::new(&points) else {
        return false;
    };
    let first = path.clone();
    if path.set_points(&points).is_err() {
        return false;
    }

    let same_weights = first
        .weights()
        .iter()
        .zip(path.weights())
        .all(|(a, b)| a.to_array().map(f32::to_bits) == b.to_array().map(f32::to_bits));
    let same_lut = first
        .distance_lut()
        .table()
        .iter()
        .zip(path.distance_lut().table())
        .all(|(a, b)| a.to_bits() == b.to_bits());

    same_weights && same_lut
}

#[quickcheck]
fn prop_queries_stay_finite(raw: Vec<(f32, f32, f32)>, t: f32) -> bool {
    let Some((_, path)) = build(raw) else {
        return false;
    };
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };

    path.position_at(t).is_finite()
        && path.tangent_at(t).is_finite()
        && path.acceleration_at(t).is_finite()
        && path.position_at_distance(t * path.arc_length()).is_finite()
}

#[quickcheck]
fn prop_frame_table_is_unit_length(raw: Vec<(f32, f32, f32)>) -> bool {
    let Some((_, path)) = build(raw) else {
        return false;
    };
    let frames = FrameTable::from_path(&path, Vec3::Y);
    frames
        .binormals()
        .iter()
        .all(|b| b.is_finite() && (b.length() - 1.0).abs() < 1e-3)
}
