//! Error types for spline construction and packing.

/// Error type for spline operations.
///
/// Out-of-range curve parameters and distances are not errors; queries
/// degrade to a linear approximation instead. Only malformed input and
/// internal table drift are reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplineError {
    /// Too few control points to form a segment.
    ///
    /// A path needs at least two points. The previous path state is kept
    /// when this is returned.
    #[error("A spline path needs at least 2 control points, got {point_count}")]
    InvalidInput {
        /// Number of points that were supplied.
        point_count: usize,
    },

    /// A fixed-size table disagrees with the record layout.
    ///
    /// Table sizes are compile-time constants on both sides, so this means
    /// the path and the packer have drifted out of sync.
    #[error("Invariant violation: {field} has {actual} entries, expected {expected}")]
    InvariantViolation {
        /// Name of the offending table.
        field: &'static str,
        /// Length required by the record layout.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

impl SplineError {
    /// Create an invalid input error for the given point count.
    pub fn too_few_points(point_count: usize) -> Self {
        SplineError::InvalidInput { point_count }
    }

    /// Create an invariant violation for a table length mismatch.
    pub fn length_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        SplineError::InvariantViolation {
            field,
            expected,
            actual,
        }
    }

    /// Returns true if this error indicates a programming bug rather than
    /// bad caller input.
    pub fn is_internal(&self) -> bool {
        matches!(self, SplineError::InvariantViolation { .. })
    }
}
