//! Root orientation sent alongside each spline record.
//!
//! The consumer needs the chain root's world-space axes to orient vertices
//! that lie before the start of the curve. Each axis is uploaded as a `vec4`
//! with `w = 0`.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{ROOT_BASIS_SIZE, WORD_SIZE};

/// Root axes in the root bone's local space.
///
/// Defaults match a chain whose rest pose points down local `-Y` with `+Z`
/// as up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootAxes {
    /// Local forward axis.
    pub local_forward: Vec3,
    /// Local right axis.
    pub local_right: Vec3,
    /// Local up axis.
    pub local_up: Vec3,
}

impl Default for RootAxes {
    fn default() -> Self {
        Self {
            local_forward: Vec3::NEG_Y,
            local_right: Vec3::X,
            local_up: Vec3::Z,
        }
    }
}

impl RootAxes {
    /// Rotate the local axes into world space.
    #[must_use]
    pub fn to_world(&self, root_rotation: Quat) -> RootBasis {
        RootBasis {
            forward: root_rotation * self.local_forward,
            right: root_rotation * self.local_right,
            up: root_rotation * self.local_up,
        }
    }
}

/// World-space root axes.
///
/// # Memory Layout
///
/// | Offset | Size | Field   |
/// |--------|------|---------|
/// | 0      | 16   | forward |
/// | 16     | 16   | right   |
/// | 32     | 16   | up      |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootBasis {
    /// World forward direction.
    pub forward: Vec3,
    /// World right direction.
    pub right: Vec3,
    /// World up direction.
    pub up: Vec3,
}

impl Default for RootBasis {
    fn default() -> Self {
        RootAxes::default().to_world(Quat::IDENTITY)
    }
}

impl RootBasis {
    /// Convert to three little-endian `vec4` values with `w = 0`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; ROOT_BASIS_SIZE] {
        let mut bytes = [0u8; ROOT_BASIS_SIZE];
        let floats = [self.forward, self.right, self.up]
            .into_iter()
            .flat_map(|axis| axis.extend(0.0).to_array());
        for (chunk, value) in bytes.chunks_exact_mut(WORD_SIZE).zip(floats) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Decode from three little-endian `vec4` values, dropping `w`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; ROOT_BASIS_SIZE]) -> Self {
        let mut axes = bytes.chunks_exact(4 * WORD_SIZE).map(|vec4| {
            let mut xyz = [0.0f32; 3];
            for (slot, chunk) in xyz.iter_mut().zip(vec4.chunks_exact(WORD_SIZE)) {
                *slot = f32::from_le_bytes(
                    <[u8; WORD_SIZE]>::try_from(chunk).unwrap_or([0; WORD_SIZE]),
                );
            }
            Vec3::from_array(xyz)
        });

        Self {
            forward: axes.next().unwrap_or_default(),
            right: axes.next().unwrap_or_default(),
            up: axes.next().unwrap_or_default(),
        }
    }
}
