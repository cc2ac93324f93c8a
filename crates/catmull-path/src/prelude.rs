//! Convenience re-exports for common path types.
//!
//! # Example
//!
//! ```
//! use catmull_path::prelude::*;
//!
//! let path = CatmullRomPath::new(&[Vec3::ZERO, Vec3::X])?;
//! assert_eq!(path.segment_count(), 1);
//! # Ok::<(), SplineError>(())
//! ```

pub use crate::error::SplineError;
pub use crate::frame::{FRAME_TABLE_RESOLUTION, FrameTable};
pub use crate::hermite::{HermiteSegment, locate_segment};
pub use crate::lut::{DISTANCE_LUT_RESOLUTION, DistanceLut};
pub use crate::path::CatmullRomPath;

pub use glam::Vec3;
