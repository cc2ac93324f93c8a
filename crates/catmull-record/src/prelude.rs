//! Convenience re-exports for packing and uploading spline records.
//!
//! # Example
//!
//! ```
//! use catmull_record::prelude::*;
//!
//! assert_eq!(PackedSplineRecord::byte_size(), RECORD_SIZE);
//! assert_eq!(RootBasis::default().up, Vec3::Z);
//! ```

pub use crate::constants::{
    BINORMAL_COUNT, DISTANCE_LUT_SIZE, RECORD_SIZE, ROOT_BASIS_SIZE, SUB_SPLINE_COUNT,
    WEIGHT_VECTOR_COUNT, offset, record_size,
};
pub use crate::record::PackedSplineRecord;
pub use crate::root_basis::{RootAxes, RootBasis};
pub use crate::upload::{SplineDriver, SplineUpload};

pub use catmull_path::{CatmullRomPath, FrameTable, SplineError};
pub use glam::{Quat, Vec3};
