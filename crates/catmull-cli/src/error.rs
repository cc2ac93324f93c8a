//! Error types for splinectl CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported config format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid record file: expected {expected} bytes, got {actual}")]
    InvalidRecord { expected: usize, actual: usize },

    #[error("Spline error: {0}")]
    Spline(#[from] catmull_path::SplineError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Spline(_) => 3,
            CliError::InvalidConfiguration(_)
            | CliError::UnsupportedFormat(_)
            | CliError::JsonError(_)
            | CliError::YamlError(_) => 4,
            CliError::InvalidRecord { .. } => 5,
            CliError::IoError(_) => 1,
        }
    }
}
