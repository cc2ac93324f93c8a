//! Curve sampling, as a debug visualizer would draw it.

use std::path::Path;

use anyhow::Result;
use catmull_path::{CatmullRomPath, FrameTable};
use serde::Serialize;

use crate::config::SplineConfig;
use crate::error::CliError;
use crate::output;

/// Default number of steps along the curve.
pub const DEFAULT_SAMPLES: usize = 64;

/// Upper bound on `--samples`; every step is buffered before printing.
pub const MAX_SAMPLES: usize = 65_536;

/// One evaluated point on the curve.
#[derive(Debug, Clone, Serialize)]
pub struct CurveSample {
    pub index: usize,
    pub t: f32,
    pub distance: Option<f32>,
    pub position: [f32; 3],
    pub tangent: [f32; 3],
    pub binormal: [f32; 3],
}

pub fn execute(config_path: &Path, samples: usize, by_distance: bool, json: bool) -> Result<()> {
    check_samples(samples)?;

    let config = SplineConfig::load(config_path)?;
    let path = CatmullRomPath::new(&config.points).map_err(CliError::from)?;
    let frames = FrameTable::from_path(&path, config.reference_up);

    let curve = sample_curve(&path, &frames, samples, by_distance);
    tracing::debug!(count = curve.len(), by_distance, "sampled curve");

    output::print_samples(&curve, path.arc_length(), json);
    Ok(())
}

/// Reject step counts outside `1..=MAX_SAMPLES`.
pub fn check_samples(samples: usize) -> Result<(), CliError> {
    if samples == 0 {
        return Err(CliError::InvalidConfiguration(
            "--samples must be at least 1".to_string(),
        ));
    }
    if samples > MAX_SAMPLES {
        return Err(CliError::InvalidConfiguration(format!(
            "--samples must be at most {MAX_SAMPLES}, got {samples}"
        )));
    }
    Ok(())
}

/// Evaluate `samples + 1` evenly spaced points, spaced in curve parameter
/// or, with `by_distance`, in arc length.
pub fn sample_curve(
    path: &CatmullRomPath,
    frames: &FrameTable,
    samples: usize,
    by_distance: bool,
) -> Vec<CurveSample> {
    let steps = samples.max(1) as f32;

    (0..=samples)
        .map(|index| {
            let fraction = index as f32 / steps;
            let (t, distance) = if by_distance {
                let distance = fraction * path.arc_length();
                (path.distance_to_t(distance), Some(distance))
            } else {
                (fraction, None)
            };

            CurveSample {
                index,
                t,
                distance,
                position: path.position_at(t).to_array(),
                tangent: path.tangent_at(t).to_array(),
                binormal: frames.binormal_at(t).to_array(),
            }
        })
        .collect()
}
