//! Record packing to files.

use std::path::Path;

use anyhow::{Context, Result};
use catmull_record::{SUB_SPLINE_COUNT, SplineDriver, SplineUpload};
use serde::Serialize;

use crate::config::SplineConfig;
use crate::error::CliError;
use crate::output;

/// What was written by `pack`.
#[derive(Debug, Clone, Serialize)]
pub struct PackSummary {
    pub output: String,
    pub basis_output: Option<String>,
    pub point_count: i32,
    pub segment_count: usize,
    pub source_segments: usize,
    pub truncated: bool,
    pub arc_length: f32,
    pub record_bytes: usize,
}

pub fn execute(
    config_path: &Path,
    output_path: &Path,
    basis_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = SplineConfig::load(config_path)?;

    let mut driver = SplineDriver::new(config.root_axes, config.reference_up);
    let upload = driver
        .tick(&config.points, config.rotation())
        .map_err(CliError::from)?;
    let source_segments = driver.path().segment_count();

    write_upload(&upload, output_path, basis_path)?;

    let summary = PackSummary {
        output: output_path.display().to_string(),
        basis_output: basis_path.map(|p| p.display().to_string()),
        point_count: upload.record.point_count,
        segment_count: upload.record.segment_count(),
        source_segments,
        truncated: source_segments > SUB_SPLINE_COUNT,
        arc_length: upload.record.arc_length,
        record_bytes: upload.record_bytes().len(),
    };
    if summary.truncated {
        tracing::warn!(
            source_segments,
            kept = SUB_SPLINE_COUNT,
            "path has more segments than the record holds"
        );
    }

    output::print_pack_summary(&summary, json);
    Ok(())
}

fn write_upload(upload: &SplineUpload, output_path: &Path, basis_path: Option<&Path>) -> Result<()> {
    std::fs::write(output_path, upload.record_bytes())
        .map_err(CliError::from)
        .with_context(|| format!("writing record to {}", output_path.display()))?;

    if let Some(basis_path) = basis_path {
        std::fs::write(basis_path, upload.basis_bytes())
            .map_err(CliError::from)
            .with_context(|| format!("writing root basis to {}", basis_path.display()))?;
    }
    Ok(())
}
