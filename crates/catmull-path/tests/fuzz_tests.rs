//! Edge-case tests for path evaluation.
//!
//! These tests feed NaN, infinities, out-of-range parameters and degenerate
//! control polygons through the path API and check that nothing panics and
//! that finite input keeps producing finite output.

use catmull_path::{CatmullRomPath, FrameTable, SplineError};
use glam::Vec3;

type TestResult = Result<(), SplineError>;

fn zigzag() -> Vec<Vec3> {
    (0..7)
        .map(|i| Vec3::new(i as f32, if i % 2 == 0 { 0.0 } else { 1.0 }, 0.25 * i as f32))
        .collect()
}

#[test]
fn fuzz_nan_parameter() -> TestResult {
    let path = CatmullRomPath::new(&zigzag())?;

    let p = path.position_at(f32::NAN);
    assert!(p.is_nan() || p.is_finite());

    let d = path.position_at_distance(f32::NAN);
    assert!(d.is_nan() || d.is_finite());

    Ok(())
}

#[test]
fn fuzz_infinite_distance() -> TestResult {
    let path = CatmullRomPath::new(&zigzag())?;

    // Falls back to distance / arc_length, which extrapolates to infinity
    let t = path.distance_to_t(f32::INFINITY);
    assert!(t.is_infinite() && t > 0.0);

    let t = path.distance_to_t(f32::NEG_INFINITY);
    assert!(t.is_infinite() && t < 0.0);

    Ok(())
}

#[test]
fn fuzz_out_of_range_parameters_extrapolate() -> TestResult {
    let path = CatmullRomPath::new(&zigzag())?;

    for t in [-1.0_f32, -0.1, 1.1, 2.0, 10.0] {
        assert!(path.position_at(t).is_finite(), "t={} not finite", t);
        assert!(path.tangent_at(t).is_finite());
        assert!(path.acceleration_at(t).is_finite());
    }

    Ok(())
}

#[test]
fn fuzz_out_of_range_distances_use_linear_fallback() -> TestResult {
    let path = CatmullRomPath::new(&zigzag())?;
    let length = path.arc_length();

    let t = path.distance_to_t(-length);
    assert!((t + 1.0).abs() < 1e-5, "got {}", t);

    let t = path.distance_to_t(2.0 * length);
    assert!((t - 2.0).abs() < 1e-5, "got {}", t);

    Ok(())
}

#[test]
fn fuzz_tiny_distances() -> TestResult {
    let path = CatmullRomPath::new(&zigzag())?;

    for d in [f32::MIN_POSITIVE, f32::EPSILON, 1e-30, 1e-10] {
        let t = path.distance_to_t(d);
        assert!((0.0..=1e-3).contains(&t), "distance {} mapped to {}", d, t);
    }

    Ok(())
}

#[test]
fn fuzz_nan_control_point_does_not_panic() -> TestResult {
    let points = [Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X];
    let path = CatmullRomPath::new(&points)?;

    // Results are meaningless but every query must return
    let _ = path.position_at(0.5);
    let _ = path.position_at_distance(0.5);
    let _ = FrameTable::from_path(&path, Vec3::Y);

    Ok(())
}

#[test]
fn fuzz_large_coordinates() -> TestResult {
    let points = [
        Vec3::splat(-1e6),
        Vec3::new(0.0, 1e6, 0.0),
        Vec3::splat(1e6),
    ];
    let path = CatmullRomPath::new(&points)?;

    assert!(path.arc_length().is_finite());
    assert!(path.arc_length() > 0.0);
    for i in 0..=32 {
        let t = i as f32 / 32.0;
        assert!(path.position_at(t).is_finite());
    }

    Ok(())
}

#[test]
fn fuzz_repeated_points_everywhere() -> TestResult {
    let points = [
        Vec3::ZERO,
        Vec3::ZERO,
        Vec3::X,
        Vec3::X,
        Vec3::X,
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ];
    let path = CatmullRomPath::new(&points)?;

    assert!(path.distance_lut().is_monotonic());
    for i in 0..=64 {
        let d = path.arc_length() * i as f32 / 64.0;
        assert!(path.position_at_distance(d).is_finite(), "NaN at distance {}", d);
        assert!(path.tangent_at_distance(d).is_finite());
    }

    let frames = FrameTable::from_path(&path, Vec3::Z);
    assert!(frames.binormals().iter().all(|b| b.is_finite()));

    Ok(())
}

#[test]
fn fuzz_many_updates_reuse_path() -> TestResult {
    let mut path = CatmullRomPath::default();

    for n in 2..40 {
        let points: Vec<Vec3> = (0..n)
            .map(|i| Vec3::new(i as f32, (i as f32 * 0.7).sin(), (i as f32 * 0.3).cos()))
            .collect();
        path.set_points(&points)?;
        assert_eq!(path.segment_count(), n - 1);
        assert!(path.distance_lut().is_monotonic());
    }

    Ok(())
}
