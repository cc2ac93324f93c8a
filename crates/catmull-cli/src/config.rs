//! Spline driver configuration loaded from JSON or YAML.

use std::path::Path;

use catmull_path::CatmullRomPath;
use catmull_record::RootAxes;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Control points and root orientation for one spline.
///
/// ```yaml
/// points:
///   - [0.0, 0.0, 0.0]
///   - [1.0, 0.0, 0.0]
///   - [2.0, 1.0, 0.0]
/// reference_up: [0.0, 1.0, 0.0]
/// root_rotation: [0.0, 0.0, 0.0, 1.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineConfig {
    /// Ordered control points in world space.
    pub points: Vec<Vec3>,

    /// Up direction used to seed the frame table.
    #[serde(default = "default_reference_up")]
    pub reference_up: Vec3,

    /// Root axes in the root bone's local space.
    #[serde(default)]
    pub root_axes: RootAxes,

    /// Root bone world rotation as `[x, y, z, w]`.
    #[serde(default)]
    pub root_rotation: Quat,
}

fn default_reference_up() -> Vec3 {
    Vec3::Y
}

impl SplineConfig {
    /// Load from `path`, choosing the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config: Self = match extension.as_deref() {
            Some("json") => serde_json::from_str(&text)?,
            Some("yaml" | "yml") => serde_yaml::from_str(&text)?,
            _ => return Err(CliError::UnsupportedFormat(path.display().to_string())),
        };

        config.validate()?;
        tracing::info!(
            path = %path.display(),
            points = config.points.len(),
            "loaded spline config"
        );
        Ok(config)
    }

    /// Check point count and that every value is finite.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.points.len() < CatmullRomPath::MIN_POINTS {
            return Err(CliError::InvalidConfiguration(format!(
                "need at least {} control points, got {}",
                CatmullRomPath::MIN_POINTS,
                self.points.len()
            )));
        }
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(CliError::InvalidConfiguration(format!(
                "control point {index} is not finite"
            )));
        }
        if !self.reference_up.is_finite() {
            return Err(CliError::InvalidConfiguration(
                "reference_up is not finite".to_string(),
            ));
        }
        if !self.root_rotation.is_finite() || self.root_rotation.length_squared() <= f32::EPSILON {
            return Err(CliError::InvalidConfiguration(
                "root_rotation must be a finite non-zero quaternion".to_string(),
            ));
        }
        Ok(())
    }

    /// Root rotation normalized to a unit quaternion.
    pub fn rotation(&self) -> Quat {
        self.root_rotation.normalize()
    }
}
