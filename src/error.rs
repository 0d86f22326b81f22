//! Error handling for the workforce analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkforceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Malformed record at row {row} ({name}): {reason}")]
    MalformedRecord {
        row: usize,
        name: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, WorkforceError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for WorkforceError {
    fn from(err: anyhow::Error) -> Self {
        WorkforceError::AnalysisFailed(err.to_string())
    }
}

/// Convert askama render errors to our custom error type
impl From<askama::Error> for WorkforceError {
    fn from(err: askama::Error) -> Self {
        WorkforceError::OutputFormatting(err.to_string())
    }
}
