//! Catmull-Rom path through an ordered set of control points.

use glam::Vec3;

use crate::error::SplineError;
use crate::hermite::{HermiteSegment, locate_segment};
use crate::lut::DistanceLut;

/// A smooth open curve through an ordered list of control points.
///
/// Each pair of consecutive points is joined by a cubic Hermite segment whose
/// tangents are estimated Catmull-Rom style from the neighbouring points.
/// The path keeps a flat weight list (`[p0, m0, m1, p1]` per segment) and a
/// [`DistanceLut`] so positions can be queried either by normalized curve
/// parameter or by physical distance.
///
/// A default-constructed path has no segments yet; every query on it returns
/// `Vec3::ZERO` until the first successful [`set_points`](Self::set_points).
///
/// # Example
///
/// ```
/// use catmull_path::CatmullRomPath;
/// use glam::Vec3;
///
/// let mut path = CatmullRomPath::default();
/// assert!(!path.is_initialized());
///
/// path.set_points(&[Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0)])?;
/// assert_eq!(path.segment_count(), 2);
/// assert_eq!(path.position_at(0.0), Vec3::ZERO);
///
/// // Fewer than two points is rejected and the old curve is kept
/// assert!(path.set_points(&[Vec3::ONE]).is_err());
/// assert_eq!(path.segment_count(), 2);
/// # Ok::<(), catmull_path::SplineError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatmullRomPath {
    points: Vec<Vec3>,
    weights: Vec<Vec3>,
    distance_lut: DistanceLut,
    arc_length: f32,
}

impl CatmullRomPath {
    /// Minimum number of control points for a valid path.
    pub const MIN_POINTS: usize = 2;

    /// Create a path through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvalidInput`] if fewer than two points are
    /// given.
    pub fn new(points: &[Vec3]) -> Result<Self, SplineError> {
        let mut path = Self::default();
        path.set_points(points)?;
        Ok(path)
    }

    /// Replace the control points and recompute weights and distance LUT.
    ///
    /// The previous state is left untouched when this fails.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvalidInput`] if fewer than two points are
    /// given.
    pub fn set_points(&mut self, points: &[Vec3]) -> Result<(), SplineError> {
        if points.len() < Self::MIN_POINTS {
            tracing::debug!(point_count = points.len(), "rejected spline points");
            return Err(SplineError::too_few_points(points.len()));
        }

        self.points.clear();
        self.points.extend_from_slice(points);

        self.weights.clear();
        Self::catmull_rom_weights(points, &mut self.weights);

        let lut = DistanceLut::from_sampler(|t| self.position_at(t));
        self.arc_length = lut.total();
        self.distance_lut = lut;

        tracing::debug!(
            point_count = self.points.len(),
            segment_count = self.segment_count(),
            arc_length = self.arc_length,
            "spline points replaced"
        );

        Ok(())
    }

    /// Append Hermite weights for every segment of `points` to `weights`.
    ///
    /// Tangents are half the difference of the neighbouring points; the first
    /// and last segments use the segment's own chord at the open end.
    fn catmull_rom_weights(points: &[Vec3], weights: &mut Vec<Vec3>) {
        let count = points.len();
        weights.reserve(count.saturating_sub(1) * HermiteSegment::WEIGHTS);

        for (i, pair) in points.windows(2).enumerate() {
            let &[p0, p1] = pair else {
                continue;
            };
            let chord = (p1 - p0) * 0.5;

            let m0 = match i.checked_sub(1).and_then(|prev| points.get(prev)) {
                Some(&before) => (p1 - before) * 0.5,
                None => chord,
            };

            // Only reached for i < count - 2, so the modulus never wraps
            let m1 = if i + 2 < count {
                points
                    .get((i + 2) % count)
                    .map_or(chord, |&after| (after - p0) * 0.5)
            } else {
                chord
            };

            weights.extend_from_slice(&[p0, m0, m1, p1]);
        }
    }

    /// Returns true once the path has been given valid control points.
    pub fn is_initialized(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Control points the path currently passes through.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Flat Hermite weights, four per segment.
    pub fn weights(&self) -> &[Vec3] {
        &self.weights
    }

    /// Cumulative arc-length table.
    pub fn distance_lut(&self) -> &DistanceLut {
        &self.distance_lut
    }

    /// Estimated total length of the path.
    pub fn arc_length(&self) -> f32 {
        self.arc_length
    }

    /// Number of Hermite segments (control points minus one).
    pub fn segment_count(&self) -> usize {
        self.weights.len() / HermiteSegment::WEIGHTS
    }

    /// Segment `index`, if it exists.
    pub fn segment(&self, index: usize) -> Option<HermiteSegment> {
        let start = index.checked_mul(HermiteSegment::WEIGHTS)?;
        let end = start.checked_add(HermiteSegment::WEIGHTS)?;
        self.weights
            .get(start..end)
            .and_then(HermiteSegment::from_weights)
    }

    #[inline]
    fn segment_at(&self, t: f32) -> Option<(HermiteSegment, f32)> {
        let (index, local) = locate_segment(t, self.segment_count());
        self.segment(index).map(|segment| (segment, local))
    }

    /// Position at normalized curve parameter `t` (0 = first point, 1 = last).
    #[inline]
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.segment_at(t)
            .map_or(Vec3::ZERO, |(segment, local)| segment.position(local))
    }

    /// Unnormalized tangent (segment velocity) at curve parameter `t`.
    #[inline]
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        self.segment_at(t)
            .map_or(Vec3::ZERO, |(segment, local)| segment.velocity(local))
    }

    /// Acceleration at curve parameter `t`.
    #[inline]
    pub fn acceleration_at(&self, t: f32) -> Vec3 {
        self.segment_at(t)
            .map_or(Vec3::ZERO, |(segment, local)| segment.acceleration(local))
    }

    /// Convert a distance along the path into a curve parameter.
    ///
    /// See [`DistanceLut::distance_to_t`] for the out-of-range fallback.
    #[inline]
    pub fn distance_to_t(&self, distance: f32) -> f32 {
        self.distance_lut.distance_to_t(distance)
    }

    /// Position `distance` units along the path.
    #[inline]
    pub fn position_at_distance(&self, distance: f32) -> Vec3 {
        self.position_at(self.distance_to_t(distance))
    }

    /// Tangent `distance` units along the path.
    #[inline]
    pub fn tangent_at_distance(&self, distance: f32) -> Vec3 {
        self.tangent_at(self.distance_to_t(distance))
    }

    /// Acceleration `distance` units along the path.
    #[inline]
    pub fn acceleration_at_distance(&self, distance: f32) -> Vec3 {
        self.acceleration_at(self.distance_to_t(distance))
    }
}
