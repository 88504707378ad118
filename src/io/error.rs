use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// IO-level errors for reading the stock file and writing the result
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv_async::Error),
}

impl IoError {
    /// True if the error means the input file does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Open { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
