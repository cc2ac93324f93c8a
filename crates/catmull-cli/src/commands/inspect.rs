//! Decoding of packed record files.

use std::path::Path;

use anyhow::Result;
use catmull_record::{PackedSplineRecord, RECORD_SIZE};

use crate::error::CliError;
use crate::output;

pub fn execute(record_path: &Path, json: bool) -> Result<()> {
    let bytes = std::fs::read(record_path).map_err(CliError::from)?;
    let record = decode(&bytes)?;
    tracing::debug!(
        path = %record_path.display(),
        point_count = record.point_count,
        "decoded spline record"
    );

    output::print_record(&record, json);
    Ok(())
}

/// Decode a record image, rejecting files of the wrong size.
pub fn decode(bytes: &[u8]) -> Result<PackedSplineRecord, CliError> {
    let image: &[u8; RECORD_SIZE] = bytes.try_into().map_err(|_| CliError::InvalidRecord {
        expected: RECORD_SIZE,
        actual: bytes.len(),
    })?;
    Ok(PackedSplineRecord::from_bytes(image))
}
