//! Per-tick upload payload.

use catmull_path::{CatmullRomPath, FrameTable, SplineError};
use glam::{Quat, Vec3};

use crate::constants::{RECORD_SIZE, ROOT_BASIS_SIZE};
use crate::record::PackedSplineRecord;
use crate::root_basis::{RootAxes, RootBasis};

/// Everything the consumer needs for one tick: the packed record and the
/// world-space root basis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplineUpload {
    /// Packed spline record.
    pub record: PackedSplineRecord,
    /// World-space root axes.
    pub basis: RootBasis,
}

impl SplineUpload {
    /// Byte image of the record.
    #[must_use]
    pub fn record_bytes(&self) -> [u8; RECORD_SIZE] {
        self.record.to_bytes()
    }

    /// Byte image of the root basis.
    #[must_use]
    pub fn basis_bytes(&self) -> [u8; ROOT_BASIS_SIZE] {
        self.basis.to_bytes()
    }
}

/// Rebuilds the path, frame table and upload payload from fresh control
/// points every tick, reusing its buffers.
///
/// # Example
///
/// ```
/// use catmull_record::prelude::*;
///
/// let mut driver = SplineDriver::new(RootAxes::default(), Vec3::Y);
/// let upload = driver.tick(&[Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0)], Quat::IDENTITY)?;
///
/// assert_eq!(upload.record.point_count, 3);
/// assert_eq!(upload.basis.up, Vec3::Z);
/// # Ok::<(), catmull_path::SplineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SplineDriver {
    path: CatmullRomPath,
    frames: FrameTable,
    axes: RootAxes,
    reference_up: Vec3,
}

impl SplineDriver {
    /// Create a driver with no control points yet.
    #[must_use]
    pub fn new(axes: RootAxes, reference_up: Vec3) -> Self {
        Self {
            path: CatmullRomPath::default(),
            frames: FrameTable::default(),
            axes,
            reference_up,
        }
    }

    /// Replace the control points and produce this tick's payload.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvalidInput`] for fewer than two points. The
    /// previous path and frames are kept in that case.
    pub fn tick(&mut self, points: &[Vec3], root_rotation: Quat) -> Result<SplineUpload, SplineError> {
        self.path.set_points(points)?;
        self.frames = FrameTable::from_path(&self.path, self.reference_up);

        Ok(SplineUpload {
            record: PackedSplineRecord::pack(&self.path, &self.frames)?,
            basis: self.axes.to_world(root_rotation),
        })
    }

    /// Current path.
    pub fn path(&self) -> &CatmullRomPath {
        &self.path
    }

    /// Current frame table.
    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// Root axes used for the basis.
    pub fn axes(&self) -> &RootAxes {
        &self.axes
    }
}
