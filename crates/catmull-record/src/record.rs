//! Packed spline record for GPU upload.
//!
//! This module defines the fixed-size record a compute or vertex stage reads
//! to evaluate the spline without any CPU involvement.

use catmull_path::{CatmullRomPath, FrameTable, HermiteSegment, SplineError, locate_segment};
use glam::Vec3;

use crate::constants::{
    BINORMAL_COUNT, BINORMAL_FLOAT_COUNT, DISTANCE_LUT_SIZE, RECORD_SIZE, SUB_SPLINE_COUNT,
    WEIGHT_FLOAT_COUNT, WEIGHT_VECTOR_COUNT, WEIGHTS_PER_SEGMENT, WORD_SIZE,
};

/// Fixed-layout spline record.
///
/// All scalars are stored in little-endian format by [`to_bytes`].
///
/// # ABI Stability
///
/// This structure has a fixed size of 616 bytes and 4-byte alignment. The
/// GPU consumer declares the same capacities, so changing any of them is a
/// breaking change on both sides.
///
/// # Memory Layout
///
/// | Offset | Size | Field        |
/// |--------|------|--------------|
/// | 0      | 4    | point_count  |
/// | 4      | 4    | arc_length   |
/// | 8      | 288  | weights      |
/// | 296    | 128  | distance_lut |
/// | 424    | 192  | binormal_lut |
///
/// [`to_bytes`]: PackedSplineRecord::to_bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedSplineRecord {
    /// Number of control points represented by the written weights.
    ///
    /// `written_weight_vectors / 4 + 1`, or 0 for an empty record.
    pub point_count: i32,

    /// Total arc length of the source path.
    pub arc_length: f32,

    /// Hermite weights `p0, m0, m1, p1` per segment, flattened as x,y,z.
    /// Unused trailing slots are zero.
    pub weights: [f32; WEIGHT_FLOAT_COUNT],

    /// Cumulative distance at evenly spaced curve parameters.
    pub distance_lut: [f32; DISTANCE_LUT_SIZE],

    /// Unit binormals at evenly spaced curve parameters, flattened as x,y,z.
    pub binormal_lut: [f32; BINORMAL_FLOAT_COUNT],
}

impl Default for PackedSplineRecord {
    fn default() -> Self {
        Self {
            point_count: 0,
            arc_length: 0.0,
            weights: [0.0; WEIGHT_FLOAT_COUNT],
            distance_lut: [0.0; DISTANCE_LUT_SIZE],
            binormal_lut: [0.0; BINORMAL_FLOAT_COUNT],
        }
    }
}

impl PackedSplineRecord {
    /// Pack a path and its frame table.
    ///
    /// Paths with more than [`SUB_SPLINE_COUNT`] segments are truncated to
    /// their first segments.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvariantViolation`] if the path's distance
    /// LUT or the frame table do not match the record's capacities.
    pub fn pack(path: &CatmullRomPath, frames: &FrameTable) -> Result<Self, SplineError> {
        let record = Self::from_parts(
            path.weights(),
            path.arc_length(),
            path.distance_lut().table(),
            frames.binormals(),
        )?;

        tracing::debug!(
            point_count = record.point_count,
            segment_count = record.segment_count(),
            arc_length = record.arc_length,
            "spline record packed"
        );

        Ok(record)
    }

    /// Pack raw tables.
    ///
    /// Both tables are validated before anything is written, so a failed
    /// call never yields a half-filled record. A mismatch is logged and
    /// returned rather than asserted, so a host running a debug build keeps
    /// its frame loop alive and can skip the upload.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvariantViolation`] if `distance_lut` does not
    /// hold exactly [`DISTANCE_LUT_SIZE`] entries or `binormals` does not
    /// hold exactly [`BINORMAL_COUNT`] entries.
    pub fn from_parts(
        weights: &[Vec3],
        arc_length: f32,
        distance_lut: &[f32],
        binormals: &[Vec3],
    ) -> Result<Self, SplineError> {
        if distance_lut.len() != DISTANCE_LUT_SIZE {
            let error =
                SplineError::length_mismatch("distance_lut", DISTANCE_LUT_SIZE, distance_lut.len());
            tracing::error!(%error, "refusing to pack spline record");
            return Err(error);
        }
        if binormals.len() != BINORMAL_COUNT {
            let error =
                SplineError::length_mismatch("binormal_lut", BINORMAL_COUNT, binormals.len());
            tracing::error!(%error, "refusing to pack spline record");
            return Err(error);
        }

        if weights.len() > WEIGHT_VECTOR_COUNT {
            tracing::debug!(
                available = weights.len(),
                written = WEIGHT_VECTOR_COUNT,
                "spline weights truncated to record capacity"
            );
        }
        let written = weights.len().min(WEIGHT_VECTOR_COUNT);

        let mut record = Self {
            point_count: point_count_for(written),
            arc_length,
            ..Self::default()
        };
        for (slot, weight) in record.weights.chunks_exact_mut(3).zip(weights) {
            slot.copy_from_slice(&weight.to_array());
        }
        record.distance_lut.copy_from_slice(distance_lut);
        for (slot, binormal) in record.binormal_lut.chunks_exact_mut(3).zip(binormals) {
            slot.copy_from_slice(&binormal.to_array());
        }

        Ok(record)
    }

    /// Exact byte size of a record.
    #[must_use]
    pub const fn byte_size() -> usize {
        RECORD_SIZE
    }

    /// Convert the record to its little-endian byte image.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        let words = [self.point_count.to_le_bytes(), self.arc_length.to_le_bytes()]
            .into_iter()
            .chain(self.floats().map(f32::to_le_bytes));
        for (chunk, word) in bytes.chunks_exact_mut(WORD_SIZE).zip(words) {
            chunk.copy_from_slice(&word);
        }
        bytes
    }

    /// Decode a record from its little-endian byte image.
    ///
    /// All byte patterns decode; no validation is performed.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let mut words = bytes
            .chunks_exact(WORD_SIZE)
            .map(|chunk| <[u8; WORD_SIZE]>::try_from(chunk).unwrap_or([0; WORD_SIZE]));

        let mut record = Self::default();
        if let Some(word) = words.next() {
            record.point_count = i32::from_le_bytes(word);
        }
        if let Some(word) = words.next() {
            record.arc_length = f32::from_le_bytes(word);
        }
        let slots = record
            .weights
            .iter_mut()
            .chain(record.distance_lut.iter_mut())
            .chain(record.binormal_lut.iter_mut());
        for (slot, word) in slots.zip(words) {
            *slot = f32::from_le_bytes(word);
        }
        record
    }

    /// Number of segments the consumer will evaluate.
    ///
    /// Derived from `point_count` and bounded by [`SUB_SPLINE_COUNT`].
    #[must_use]
    pub fn segment_count(&self) -> usize {
        usize::try_from(self.point_count)
            .unwrap_or(0)
            .saturating_sub(1)
            .min(SUB_SPLINE_COUNT)
    }

    /// Weight vector `index`, or `None` past the record capacity.
    #[must_use]
    pub fn weight(&self, index: usize) -> Option<Vec3> {
        self.weights.chunks_exact(3).nth(index).map(Vec3::from_slice)
    }

    /// Hermite segment `index`, or `None` if it is not in use.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<HermiteSegment> {
        if index >= self.segment_count() {
            return None;
        }
        let base = index.checked_mul(WEIGHTS_PER_SEGMENT)?;
        Some(HermiteSegment::new(
            self.weight(base)?,
            self.weight(base + 1)?,
            self.weight(base + 2)?,
            self.weight(base + 3)?,
        ))
    }

    /// Binormal `index`, or `None` past the table size.
    #[must_use]
    pub fn binormal(&self, index: usize) -> Option<Vec3> {
        self.binormal_lut.chunks_exact(3).nth(index).map(Vec3::from_slice)
    }

    /// Position at global curve parameter `t`, evaluated from the packed
    /// weights the way the GPU consumer does.
    ///
    /// Returns [`Vec3::ZERO`] for an empty record.
    #[must_use]
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.evaluate(t, HermiteSegment::position)
    }

    /// First derivative at global curve parameter `t`, with respect to the
    /// segment-local parameter.
    #[must_use]
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        self.evaluate(t, HermiteSegment::velocity)
    }

    fn evaluate(&self, t: f32, f: fn(&HermiteSegment, f32) -> Vec3) -> Vec3 {
        let (index, local) = locate_segment(t, self.segment_count());
        self.segment(index)
            .map(|segment| f(&segment, local))
            .unwrap_or(Vec3::ZERO)
    }

    fn floats(&self) -> impl Iterator<Item = f32> + '_ {
        self.weights
            .iter()
            .chain(&self.distance_lut)
            .chain(&self.binormal_lut)
            .copied()
    }
}

fn point_count_for(written_weights: usize) -> i32 {
    if written_weights == 0 {
        return 0;
    }
    // Bounded by WEIGHT_VECTOR_COUNT / 4 + 1
    i32::try_from(written_weights / WEIGHTS_PER_SEGMENT + 1).unwrap_or(i32::MAX)
}

static_assertions::const_assert_eq!(std::mem::size_of::<PackedSplineRecord>(), RECORD_SIZE);
static_assertions::const_assert_eq!(std::mem::align_of::<PackedSplineRecord>(), 4);

impl serde::Serialize for PackedSplineRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("PackedSplineRecord", 5)?;
        s.serialize_field("point_count", &self.point_count)?;
        s.serialize_field("arc_length", &self.arc_length)?;
        s.serialize_field("weights", &self.weights[..])?;
        s.serialize_field("distance_lut", &self.distance_lut[..])?;
        s.serialize_field("binormal_lut", &self.binormal_lut[..])?;
        s.end()
    }
}

impl<'de> serde::Deserialize<'de> for PackedSplineRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct PackedSplineRecordHelper {
            point_count: i32,
            arc_length: f32,
            weights: Vec<f32>,
            distance_lut: Vec<f32>,
            binormal_lut: Vec<f32>,
        }

        fn fixed<const N: usize, E: serde::de::Error>(values: Vec<f32>) -> Result<[f32; N], E> {
            let len = values.len();
            <[f32; N]>::try_from(values)
                .map_err(|_| E::invalid_length(len, &format!("{N} floats").as_str()))
        }

        let helper = PackedSplineRecordHelper::deserialize(deserializer)?;
        Ok(Self {
            point_count: helper.point_count,
            arc_length: helper.arc_length,
            weights: fixed::<WEIGHT_FLOAT_COUNT, D::Error>(helper.weights)?,
            distance_lut: fixed::<DISTANCE_LUT_SIZE, D::Error>(helper.distance_lut)?,
            binormal_lut: fixed::<BINORMAL_FLOAT_COUNT, D::Error>(helper.binormal_lut)?,
        })
    }
}
