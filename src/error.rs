use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for BioSplit
#[derive(Error, Debug)]
pub enum BioSplitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write split file {path}: {source}")]
    WriteChunk {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Delimiter cannot be empty.")]
    EmptyDelimiter,

    #[error("Could not auto-detect delimiter (no line starts with '>' or '@'). Pass --delimiter to set one.")]
    DelimiterNotDetected,

    #[error("Failed to get user input: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for BioSplitError {
    fn from(err: dialoguer::Error) -> Self {
        BioSplitError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BioSplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_delimiter_message() {
        assert_eq!(BioSplitError::EmptyDelimiter.to_string(), "Delimiter cannot be empty.");
    }

    #[test]
    fn test_write_chunk_message_names_path() {
        let err = BioSplitError::WriteChunk {
            path: PathBuf::from("reads_splits/reads_part2.fq"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("reads_splits/reads_part2.fq"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: BioSplitError = io.into();
        assert!(matches!(err, BioSplitError::Io(_)));
    }
}
