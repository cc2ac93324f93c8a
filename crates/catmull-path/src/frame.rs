//! Twist-minimizing binormal table sampled along a path.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::path::CatmullRomPath;

/// Number of binormals in a [`FrameTable`].
pub const FRAME_TABLE_RESOLUTION: usize = 16;

/// Binormals at evenly spaced curve parameters, propagated by parallel
/// transport.
///
/// The first binormal is seeded from a caller-supplied reference "up"
/// direction. Every following sample rotates the previous binormal by the
/// smallest rotation that carries the previous tangent onto the current one,
/// so the cross-section never flips or spins about the curve. Continuity only
/// breaks where the tangent reverses completely.
///
/// # Example
///
/// ```
/// use catmull_path::{CatmullRomPath, FrameTable};
/// use glam::Vec3;
///
/// let path = CatmullRomPath::new(&[Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0)])?;
/// let frames = FrameTable::from_path(&path, Vec3::Y);
///
/// // A curve lying in the XY plane keeps its binormal on the Z axis
/// for binormal in frames.binormals() {
///     assert!(binormal.z.abs() > 0.999);
/// }
/// # Ok::<(), catmull_path::SplineError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameTable {
    binormals: [Vec3; FRAME_TABLE_RESOLUTION],
}

impl FrameTable {
    /// Table size.
    pub const SIZE: usize = FRAME_TABLE_RESOLUTION;

    /// Reference up direction used when the caller has no preference.
    pub const DEFAULT_REFERENCE_UP: Vec3 = Vec3::Y;

    /// Curve parameter of table entry `index`.
    #[inline]
    pub fn parameter_at(index: usize) -> f32 {
        index as f32 / (Self::SIZE - 1) as f32
    }

    /// Build the table for `path`.
    ///
    /// The seed binormal is `tangent × reference_up`. If `reference_up` is
    /// zero or parallel to the starting tangent an arbitrary perpendicular is
    /// used instead. Samples where the tangent vanishes (coincident control
    /// points) reuse the last usable tangent.
    pub fn from_path(path: &CatmullRomPath, reference_up: Vec3) -> Self {
        let tangents: [Option<Vec3>; FRAME_TABLE_RESOLUTION] =
            std::array::from_fn(|i| path.tangent_at(Self::parameter_at(i)).try_normalize());

        let up = reference_up.try_normalize().unwrap_or(Self::DEFAULT_REFERENCE_UP);
        let mut previous_tangent = tangents
            .iter()
            .flatten()
            .copied()
            .next()
            .unwrap_or_else(|| up.any_orthonormal_vector());
        let mut previous_binormal = previous_tangent
            .cross(up)
            .try_normalize()
            .unwrap_or_else(|| previous_tangent.any_orthonormal_vector());

        let mut binormals = [Vec3::X; FRAME_TABLE_RESOLUTION];
        for (slot, tangent) in binormals.iter_mut().zip(tangents) {
            let tangent = tangent.unwrap_or(previous_tangent);
            let rotated = Quat::from_rotation_arc(previous_tangent, tangent) * previous_binormal;

            // Strip any drift along the tangent before renormalizing
            let binormal = (rotated - tangent * rotated.dot(tangent))
                .try_normalize()
                .unwrap_or_else(|| tangent.any_orthonormal_vector());

            *slot = binormal;
            previous_tangent = tangent;
            previous_binormal = binormal;
        }

        tracing::trace!(
            first = ?binormals.first(),
            last = ?binormals.last(),
            "frame table rebuilt"
        );

        Self { binormals }
    }

    /// All sampled binormals, ordered by increasing curve parameter.
    pub fn binormals(&self) -> &[Vec3; FRAME_TABLE_RESOLUTION] {
        &self.binormals
    }

    /// Binormal at curve parameter `t`, interpolated between samples.
    ///
    /// `t` is clamped to `[0,1]`.
    pub fn binormal_at(&self, t: f32) -> Vec3 {
        let scaled = t.clamp(0.0, 1.0) * (Self::SIZE - 1) as f32;
        let low = (scaled as usize).min(Self::SIZE - 2);
        let fraction = scaled - low as f32;

        match (self.binormals.get(low), self.binormals.get(low + 1)) {
            (Some(&a), Some(&b)) => a.lerp(b, fraction).try_normalize().unwrap_or(a),
            _ => Vec3::X,
        }
    }

    /// Smallest dot product between neighbouring binormals.
    ///
    /// Values near 1 mean the frame turns smoothly; a negative value means a
    /// sign flip somewhere along the table.
    pub fn min_neighbour_alignment(&self) -> f32 {
        self.binormals
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some(a.dot(*b)),
                _ => None,
            })
            .fold(1.0, f32::min)
    }
}

impl Default for FrameTable {
    fn default() -> Self {
        Self {
            binormals: [Vec3::X; FRAME_TABLE_RESOLUTION],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    fn helix(turns: f32, samples: usize) -> CatmullRomPath {
        let points: Vec<Vec3> = (0..samples)
            .map(|i| {
                let a = i as f32 / (samples - 1) as f32 * turns * std::f32::consts::TAU;
                Vec3::new(a.cos(), a.sin(), i as f32 * 0.3)
            })
            .collect();
        must(CatmullRomPath::new(&points))
    }

    #[test]
    fn test_all_binormals_are_unit_length() {
        let frames = FrameTable::from_path(&helix(1.5, 12), Vec3::Z);
        for (i, b) in frames.binormals().iter().enumerate() {
            assert!((b.length() - 1.0).abs() < 1e-4, "binormal {} = {:?}", i, b);
        }
    }

    #[test]
    fn test_binormals_are_perpendicular_to_tangent() {
        let path = helix(1.0, 10);
        let frames = FrameTable::from_path(&path, Vec3::Z);
        for (i, b) in frames.binormals().iter().enumerate() {
            let tangent = path.tangent_at(FrameTable::parameter_at(i)).normalize();
            assert!(b.dot(tangent).abs() < 1e-3, "sample {} not perpendicular", i);
        }
    }

    #[test]
    fn test_helix_frame_has_no_flips() {
        let frames = FrameTable::from_path(&helix(2.0, 16), Vec3::Z);
        assert!(
            frames.min_neighbour_alignment() > 0.5,
            "alignment {}",
            frames.min_neighbour_alignment()
        );
    }

    #[test]
    fn test_planar_curve_keeps_normal_binormal() {
        let path = must(CatmullRomPath::new(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
        ]));
        let frames = FrameTable::from_path(&path, Vec3::Y);

        // Seed is X × Y = +Z and transport must not leave the plane normal
        for b in frames.binormals() {
            assert!((b.z - 1.0).abs() < 1e-4, "binormal drifted: {:?}", b);
        }
    }

    #[test]
    fn test_reference_up_parallel_to_tangent_still_seeds() {
        let path = must(CatmullRomPath::new(&[Vec3::ZERO, Vec3::Y * 4.0]));
        let frames = FrameTable::from_path(&path, Vec3::Y);
        for b in frames.binormals() {
            assert!((b.length() - 1.0).abs() < 1e-4);
            assert!(b.y.abs() < 1e-4);
        }
        assert!(frames.min_neighbour_alignment() > 0.999);
    }

    #[test]
    fn test_zero_reference_up_uses_default() {
        let path = must(CatmullRomPath::new(&[Vec3::ZERO, Vec3::X]));
        let with_zero = FrameTable::from_path(&path, Vec3::ZERO);
        let with_default = FrameTable::from_path(&path, FrameTable::DEFAULT_REFERENCE_UP);
        assert_eq!(with_zero, with_default);
    }

    #[test]
    fn test_coincident_points_produce_finite_frames() {
        let path = must(CatmullRomPath::new(&[Vec3::ONE, Vec3::ONE, Vec3::ONE]));
        let frames = FrameTable::from_path(&path, Vec3::Y);
        for b in frames.binormals() {
            assert!(b.is_finite());
            assert!((b.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_binormal_at_interpolates_and_clamps() {
        let frames = FrameTable::from_path(&helix(1.0, 8), Vec3::Z);
        let first = frames.binormals()[0];
        let last = frames.binormals()[FrameTable::SIZE - 1];

        assert!(frames.binormal_at(0.0).abs_diff_eq(first, 1e-5));
        assert!(frames.binormal_at(-1.0).abs_diff_eq(first, 1e-5));
        assert!(frames.binormal_at(1.0).abs_diff_eq(last, 1e-5));
        assert!(frames.binormal_at(2.0).abs_diff_eq(last, 1e-5));

        let mid = frames.binormal_at(0.53);
        assert!((mid.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_default_table() {
        let frames = FrameTable::default();
        assert!(frames.binormals().iter().all(|b| *b == Vec3::X));
        assert_eq!(frames.min_neighbour_alignment(), 1.0);
    }
}
