//! Record capacities and byte layout.
//!
//! These constants define the contract between the packer and the GPU
//! consumer, which declares a struct with the same static capacities. All
//! fields are 32-bit and little-endian.

use catmull_path::{DISTANCE_LUT_RESOLUTION, FRAME_TABLE_RESOLUTION};

/// Maximum number of Hermite segments carried by one record.
///
/// Paths with more segments are truncated to their first
/// `SUB_SPLINE_COUNT` segments when packed.
pub const SUB_SPLINE_COUNT: usize = 6;

/// Weight vectors per segment (`p0, m0, m1, p1`).
pub const WEIGHTS_PER_SEGMENT: usize = 4;

/// Number of weight vectors in a record.
pub const WEIGHT_VECTOR_COUNT: usize = SUB_SPLINE_COUNT * WEIGHTS_PER_SEGMENT;

/// Number of floats in the weights block.
pub const WEIGHT_FLOAT_COUNT: usize = WEIGHT_VECTOR_COUNT * 3;

/// Number of floats in the distance LUT block.
pub const DISTANCE_LUT_SIZE: usize = DISTANCE_LUT_RESOLUTION;

/// Number of binormal vectors in a record.
pub const BINORMAL_COUNT: usize = FRAME_TABLE_RESOLUTION;

/// Number of floats in the binormal LUT block.
pub const BINORMAL_FLOAT_COUNT: usize = BINORMAL_COUNT * 3;

/// Size in bytes of every scalar in the record.
pub const WORD_SIZE: usize = 4;

/// Exact byte size of a record with the given capacities.
///
/// `point_count + arc_length + weights + distance LUT + binormal LUT`
#[must_use]
pub const fn record_size(sub_splines: usize, distance_count: usize, binormal_count: usize) -> usize {
    WORD_SIZE
        + WORD_SIZE
        + sub_splines * WEIGHTS_PER_SEGMENT * 3 * WORD_SIZE
        + distance_count * WORD_SIZE
        + binormal_count * 3 * WORD_SIZE
}

/// Byte size of a record with the crate's capacities (616 bytes).
pub const RECORD_SIZE: usize = record_size(SUB_SPLINE_COUNT, DISTANCE_LUT_SIZE, BINORMAL_COUNT);

/// Byte size of the root basis sent next to each record (three `vec4`).
pub const ROOT_BASIS_SIZE: usize = 3 * 4 * WORD_SIZE;

/// Byte offsets of each record field.
pub mod offset {
    use super::{DISTANCE_LUT_SIZE, WEIGHT_FLOAT_COUNT, WORD_SIZE};

    /// `point_count: i32`
    pub const POINT_COUNT: usize = 0;
    /// `arc_length: f32`
    pub const ARC_LENGTH: usize = POINT_COUNT + WORD_SIZE;
    /// `weights: [f32; 72]`
    pub const WEIGHTS: usize = ARC_LENGTH + WORD_SIZE;
    /// `distance_lut: [f32; 32]`
    pub const DISTANCE_LUT: usize = WEIGHTS + WEIGHT_FLOAT_COUNT * WORD_SIZE;
    /// `binormal_lut: [f32; 48]`
    pub const BINORMAL_LUT: usize = DISTANCE_LUT + DISTANCE_LUT_SIZE * WORD_SIZE;
}

static_assertions::const_assert_eq!(RECORD_SIZE, 616);
static_assertions::const_assert_eq!(
    offset::BINORMAL_LUT + BINORMAL_FLOAT_COUNT * WORD_SIZE,
    RECORD_SIZE
);
