//! Catmull-Rom spline paths for GPU-side deformation.
//!
//! This crate turns an ordered set of 3D control points into a smooth
//! piecewise-cubic curve and precomputes the tables a shading stage needs to
//! walk that curve at constant speed.
//!
//! # Overview
//!
//! - **Hermite basis**: closed-form position, velocity and acceleration of a
//!   single cubic segment ([`hermite`])
//! - **Path**: Catmull-Rom tangent estimation, global curve parameter mapping
//!   and distance queries ([`CatmullRomPath`])
//! - **Distance LUT**: fixed-resolution cumulative arc-length table
//!   ([`DistanceLut`])
//! - **Frame table**: parallel-transported binormals sampled along the path
//!   ([`FrameTable`])
//!
//! # Per-frame cost
//!
//! `set_points()` is O(N + R) and reuses the path's buffers. All queries are
//! allocation-free: a segment lookup plus a handful of multiply-adds, and a
//! binary search over the 32-entry LUT for distance queries.
//!
//! # Example
//!
//! ```
//! use catmull_path::{CatmullRomPath, FrameTable};
//! use glam::Vec3;
//!
//! let path = CatmullRomPath::new(&[
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(2.0, 1.0, 0.0),
//!     Vec3::new(3.0, 1.0, 0.0),
//! ])?;
//!
//! let midpoint = path.position_at_distance(path.arc_length() * 0.5);
//! assert!(midpoint.x > 0.0 && midpoint.x < 3.0);
//!
//! let frames = FrameTable::from_path(&path, Vec3::Y);
//! assert!((frames.binormals()[0].length() - 1.0).abs() < 1e-5);
//! # Ok::<(), catmull_path::SplineError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod frame;
pub mod hermite;
pub mod lut;
pub mod path;
pub mod prelude;

pub use error::SplineError;
pub use frame::{FRAME_TABLE_RESOLUTION, FrameTable};
pub use hermite::{HermiteSegment, locate_segment};
pub use lut::{DISTANCE_LUT_RESOLUTION, DistanceLut};
pub use path::CatmullRomPath;
