//! Fixed-layout GPU record for Catmull-Rom spline paths.
//!
//! This crate packs a [`catmull_path::CatmullRomPath`] and its
//! [`catmull_path::FrameTable`] into a flat record that a shading stage can
//! evaluate on its own:
//! - Header with point count and total arc length
//! - Hermite weights for up to six segments
//! - Cumulative distance LUT for constant-speed traversal
//! - Binormal LUT for twist-free orientation
//!
//! # ABI Stability Guarantees
//!
//! [`PackedSplineRecord`] is `#[repr(C)]`, 616 bytes, and made only of
//! 32-bit scalars. Its capacities live in [`constants`] and must match the
//! consumer's static declaration.
//!
//! # Endianness
//!
//! All scalars are stored in little-endian format. The `to_bytes()` and
//! `from_bytes()` methods handle conversion.
//!
//! # Example
//!
//! ```
//! use catmull_record::prelude::*;
//!
//! let path = CatmullRomPath::new(&[Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0)])?;
//! let frames = FrameTable::from_path(&path, Vec3::Y);
//! let record = PackedSplineRecord::pack(&path, &frames)?;
//!
//! let bytes = record.to_bytes();
//! assert_eq!(bytes.len(), RECORD_SIZE);
//! assert_eq!(PackedSplineRecord::from_bytes(&bytes), record);
//! # Ok::<(), SplineError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(missing_debug_implementations)]

pub mod constants;
pub mod prelude;
pub mod record;
pub mod root_basis;
pub mod upload;

pub use constants::{
    BINORMAL_COUNT, DISTANCE_LUT_SIZE, RECORD_SIZE, ROOT_BASIS_SIZE, SUB_SPLINE_COUNT,
    WEIGHT_VECTOR_COUNT, offset, record_size,
};
pub use record::PackedSplineRecord;
pub use root_basis::{RootAxes, RootBasis};
pub use upload::{SplineDriver, SplineUpload};
