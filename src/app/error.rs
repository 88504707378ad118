use std::io;
use thiserror::Error;

use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Stock file error: {0}")]
    CsvIo(IoError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid batch size: {0} (must be a positive integer)")]
    InvalidBatchSize(String),
}

impl From<IoError> for AppError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Open { path, source } if source.kind() == io::ErrorKind::NotFound => {
                Self::FileNotFound(path.display().to_string())
            }
            other => Self::CsvIo(other),
        }
    }
}
