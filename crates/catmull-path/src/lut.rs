//! Cumulative arc-length lookup table.

use serde::{Deserialize, Serialize};

/// Number of samples in a [`DistanceLut`].
///
/// This is part of the packed record layout; the GPU consumer reads exactly
/// this many floats.
pub const DISTANCE_LUT_RESOLUTION: usize = 32;

/// Pre-computed arc-length table for distance → curve parameter queries.
///
/// Entry `i` holds the chord-length distance travelled from the start of the
/// path to curve parameter `i / SIZE`. The table is non-decreasing by
/// construction and its last entry is taken as the path's total arc length.
/// Lookups remap brackets onto the `i / (SIZE - 1)` grid, so the whole
/// table spans the parameter range `[0, 1]`.
///
/// # Example
///
/// ```
/// use catmull_path::DistanceLut;
/// use glam::Vec3;
///
/// // A straight line from the origin to x = 32, sampled up to x = 31
/// let lut = DistanceLut::from_sampler(|t| Vec3::new(t * 32.0, 0.0, 0.0));
/// assert!((lut.total() - 31.0).abs() < 1e-4);
///
/// // Halfway along the line maps to t = 0.5
/// let t = lut.distance_to_t(15.5);
/// assert!((t - 0.5).abs() < 1e-4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceLut {
    pub(crate) table: [f32; DISTANCE_LUT_RESOLUTION],
}

impl DistanceLut {
    /// LUT size.
    pub const SIZE: usize = DISTANCE_LUT_RESOLUTION;

    /// An all-zero table, as held by a path before its first points arrive.
    pub const fn zeroed() -> Self {
        Self {
            table: [0.0; DISTANCE_LUT_RESOLUTION],
        }
    }

    /// Build a table by summing chord lengths between evenly spaced samples.
    ///
    /// `sample` maps a curve parameter in `[0,1]` to a position. It is called
    /// once per entry, at `t = i / SIZE`.
    pub fn from_sampler<F>(sample: F) -> Self
    where
        F: Fn(f32) -> glam::Vec3,
    {
        let mut table = [0.0f32; Self::SIZE];
        let mut distance = 0.0f32;
        let mut last = sample(0.0);

        for (i, entry) in table.iter_mut().enumerate() {
            let position = sample(Self::sample_parameter(i));
            distance += last.distance(position);
            last = position;
            *entry = distance;
        }

        tracing::trace!(arc_length = distance, "distance LUT rebuilt");

        Self { table }
    }

    /// Curve parameter the sampler is evaluated at for entry `index`.
    #[inline]
    pub fn sample_parameter(index: usize) -> f32 {
        index as f32 / Self::SIZE as f32
    }

    /// Curve parameter entry `index` maps back to in [`Self::distance_to_t`].
    #[inline]
    pub fn parameter_at(index: usize) -> f32 {
        index as f32 / (Self::SIZE - 1) as f32
    }

    /// Total distance covered by the table (its last entry).
    #[inline]
    pub fn total(&self) -> f32 {
        self.table.last().copied().unwrap_or(0.0)
    }

    /// Convert a distance along the path into a curve parameter.
    ///
    /// Finds the pair of entries bracketing `distance` and linearly remaps it
    /// into that pair's parameter interval. Distances outside
    /// `(0, total)`, or that no pair brackets, fall back to the linear
    /// estimate `distance / total`. A zero-length table maps everything to 0.
    #[inline]
    pub fn distance_to_t(&self, distance: f32) -> f32 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }

        if distance > 0.0 && distance < total {
            // First entry not below `distance`; entry before it is strictly below
            let upper = self.table.partition_point(|&d| d < distance);
            if let (Some(&d0), Some(&d1)) = (
                upper.checked_sub(1).and_then(|i| self.table.get(i)),
                self.table.get(upper),
            ) && d1 > d0
            {
                let t0 = Self::parameter_at(upper - 1);
                let t1 = Self::parameter_at(upper);
                return (distance - d0) / (d1 - d0) * (t1 - t0) + t0;
            }
        }

        distance / total
    }

    /// Get the raw table for inspection and packing.
    pub fn table(&self) -> &[f32; DISTANCE_LUT_RESOLUTION] {
        &self.table
    }

    /// Check that no entry is smaller than the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|pair| match pair {
            [a, b] => b >= a,
            _ => true,
        })
    }
}

impl Default for DistanceLut {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Serialize for DistanceLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.table.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DistanceLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<f32> = Vec::deserialize(deserializer)?;
        let table: [f32; DISTANCE_LUT_RESOLUTION] = vec.try_into().map_err(|v: Vec<f32>| {
            serde::de::Error::custom(format!(
                "Expected {} entries in DistanceLut, got {}",
                DISTANCE_LUT_RESOLUTION,
                v.len()
            ))
        })?;
        Ok(DistanceLut { table })
    }
}
