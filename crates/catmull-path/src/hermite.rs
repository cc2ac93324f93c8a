//! Cubic Hermite basis for a single spline segment.
//!
//! All functions use the expanded Hermite polynomials and are defined for any
//! real `t`. Callers normally pass `t` in `[0,1]`; values slightly outside
//! extrapolate the segment's cubic.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Position on a Hermite segment.
///
/// `p(t) = (2t³ - 3t² + 1)p₀ + (t³ - 2t² + t)m₀ + (-2t³ + 3t²)p₁ + (t³ - t²)m₁`
#[inline]
pub fn position(start: Vec3, m0: Vec3, m1: Vec3, end: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    (2.0 * t3 - 3.0 * t2 + 1.0) * start
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * end
        + (t3 - t2) * m1
}

/// First derivative of [`position`] with respect to `t`.
///
/// `p'(t) = (6t² - 6t)p₀ + (3t² - 4t + 1)m₀ + (-6t² + 6t)p₁ + (3t² - 2t)m₁`
#[inline]
pub fn velocity(start: Vec3, m0: Vec3, m1: Vec3, end: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    (6.0 * t2 - 6.0 * t) * start
        + (3.0 * t2 - 4.0 * t + 1.0) * m0
        + (-6.0 * t2 + 6.0 * t) * end
        + (3.0 * t2 - 2.0 * t) * m1
}

/// Second derivative of [`position`] with respect to `t`.
///
/// `p''(t) = (12t - 6)p₀ + (6t - 4)m₀ + (-12t + 6)p₁ + (6t - 2)m₁`
#[inline]
pub fn acceleration(start: Vec3, m0: Vec3, m1: Vec3, end: Vec3, t: f32) -> Vec3 {
    (12.0 * t - 6.0) * start + (6.0 * t - 4.0) * m0 + (-12.0 * t + 6.0) * end + (6.0 * t - 2.0) * m1
}

/// Maps a global curve parameter onto a segment index and local parameter.
///
/// The index is `floor(t * segment_count)` clamped to the valid segment
/// range, so `t = 1` evaluates the end of the last segment rather than
/// running past it. Parameters outside `[0,1]` keep their offset and
/// extrapolate the first or last segment.
#[inline]
pub fn locate_segment(t: f32, segment_count: usize) -> (usize, f32) {
    if segment_count == 0 {
        return (0, t);
    }

    let spans = segment_count as f32;
    let last = (segment_count - 1) as f32;
    // NaN survives the clamp and saturates to index 0 in the cast
    let index = (t * spans).floor().clamp(0.0, last) as usize;
    let local = (t - index as f32 / spans) * spans;

    (index, local)
}

/// One cubic segment in Hermite form.
///
/// The field order matches the packed weight layout: start point, outgoing
/// tangent, incoming tangent, end point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HermiteSegment {
    /// Segment start point (`p₀`).
    pub start: Vec3,
    /// Tangent leaving the start point (`m₀`).
    pub m0: Vec3,
    /// Tangent arriving at the end point (`m₁`).
    pub m1: Vec3,
    /// Segment end point (`p₁`).
    pub end: Vec3,
}

impl HermiteSegment {
    /// Number of weight vectors per segment.
    pub const WEIGHTS: usize = 4;

    /// Create a segment from its four weights.
    pub const fn new(start: Vec3, m0: Vec3, m1: Vec3, end: Vec3) -> Self {
        Self { start, m0, m1, end }
    }

    /// Build a segment from a `[p0, m0, m1, p1]` weight slice.
    ///
    /// Returns `None` unless the slice holds exactly four vectors.
    pub fn from_weights(weights: &[Vec3]) -> Option<Self> {
        match weights {
            [start, m0, m1, end] => Some(Self::new(*start, *m0, *m1, *end)),
            _ => None,
        }
    }

    /// The segment's weights in packed order.
    pub const fn weights(&self) -> [Vec3; 4] {
        [self.start, self.m0, self.m1, self.end]
    }

    /// Position at local parameter `t`.
    #[inline]
    pub fn position(&self, t: f32) -> Vec3 {
        position(self.start, self.m0, self.m1, self.end, t)
    }

    /// Velocity (tangent, unnormalized) at local parameter `t`.
    #[inline]
    pub fn velocity(&self, t: f32) -> Vec3 {
        velocity(self.start, self.m0, self.m1, self.end, t)
    }

    /// Acceleration at local parameter `t`.
    #[inline]
    pub fn acceleration(&self, t: f32) -> Vec3 {
        acceleration(self.start, self.m0, self.m1, self.end, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    fn sample_segment() -> HermiteSegment {
        HermiteSegment::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(1.0, -1.0, 0.5),
            Vec3::new(3.0, 1.0, 1.0),
        )
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = TOLERANCE);
        assert_relative_eq!(a.y, b.y, epsilon = TOLERANCE);
        assert_relative_eq!(a.z, b.z, epsilon = TOLERANCE);
    }

    #[test]
    fn test_position_hits_endpoints() {
        let seg = sample_segment();
        assert_vec_eq(seg.position(0.0), seg.start);
        assert_vec_eq(seg.position(1.0), seg.end);
    }

    #[test]
    fn test_velocity_matches_tangents_at_endpoints() {
        let seg = sample_segment();
        assert_vec_eq(seg.velocity(0.0), seg.m0);
        assert_vec_eq(seg.velocity(1.0), seg.m1);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let seg = sample_segment();
        let h = 1e-3;
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let numeric = (seg.position(t + h) - seg.position(t - h)) / (2.0 * h);
            let analytic = seg.velocity(t);
            assert!(
                (numeric - analytic).length() < 1e-2,
                "velocity mismatch at t={}: {:?} vs {:?}",
                t,
                numeric,
                analytic
            );
        }
    }

    #[test]
    fn test_acceleration_matches_finite_difference() {
        let seg = sample_segment();
        let h = 1e-3;
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let numeric = (seg.velocity(t + h) - seg.velocity(t - h)) / (2.0 * h);
            let analytic = seg.acceleration(t);
            assert!(
                (numeric - analytic).length() < 1e-2,
                "acceleration mismatch at t={}",
                t
            );
        }
    }

    #[test]
    fn test_straight_segment_is_linear() {
        let start = Vec3::ZERO;
        let end = Vec3::new(3.0, 0.0, 0.0);
        let tangent = end - start;
        let seg = HermiteSegment::new(start, tangent, tangent, end);

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_vec_eq(seg.position(t), start.lerp(end, t));
            assert_vec_eq(seg.acceleration(t), Vec3::ZERO);
        }
    }

    #[test]
    fn test_extrapolation_is_total() {
        let seg = sample_segment();
        for t in [-0.5_f32, 1.5, 10.0, -10.0] {
            assert!(seg.position(t).is_finite());
            assert!(seg.velocity(t).is_finite());
            assert!(seg.acceleration(t).is_finite());
        }
    }

    #[test]
    fn test_from_weights_requires_four() {
        let w = sample_segment().weights();
        assert_eq!(HermiteSegment::from_weights(&w), Some(sample_segment()));
        assert_eq!(HermiteSegment::from_weights(&w[..3]), None);
        assert_eq!(HermiteSegment::from_weights(&[]), None);
    }

    #[test]
    fn test_locate_segment_boundaries() {
        assert_eq!(locate_segment(0.0, 3), (0, 0.0));

        let (index, local) = locate_segment(1.0, 3);
        assert_eq!(index, 2);
        assert_relative_eq!(local, 1.0, epsilon = TOLERANCE);

        let (index, local) = locate_segment(0.5, 4);
        assert_eq!(index, 2);
        assert_relative_eq!(local, 0.0, epsilon = TOLERANCE);

        let (index, local) = locate_segment(0.5, 3);
        assert_eq!(index, 1);
        assert_relative_eq!(local, 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn test_locate_segment_out_of_range_extrapolates() {
        let (index, local) = locate_segment(-0.25, 2);
        assert_eq!(index, 0);
        assert_relative_eq!(local, -0.5, epsilon = TOLERANCE);

        let (index, local) = locate_segment(1.25, 2);
        assert_eq!(index, 1);
        assert_relative_eq!(local, 1.5, epsilon = TOLERANCE);

        let (index, local) = locate_segment(f32::NAN, 2);
        assert_eq!(index, 0);
        assert!(local.is_nan());
    }
}
