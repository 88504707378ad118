use std::num::NonZeroUsize;
use std::path::PathBuf;

use tracing::Level;

use super::error::AppError;
use crate::io::DEFAULT_BATCH_SIZE;

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "values.csv";

/// Environment variable holding the log level
pub const LOG_ENV: &str = "STOCKMAX_LOG";

/// Settings fixed for the lifetime of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub batch_size: NonZeroUsize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl RunConfig {
    /// Parse `stockmax [--batch-size N | -b N] [PATH]`
    ///
    /// `args` includes the program name as its first element.
    pub fn from_args(args: Vec<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        let mut input = None;
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-b" | "--batch-size" => {
                    let value = args.next().ok_or_else(|| {
                        AppError::InvalidArguments(format!("{arg} requires a value"))
                    })?;
                    config.batch_size = parse_batch_size(&value)?;
                }
                flag if flag.starts_with('-') => {
                    return Err(AppError::InvalidArguments(format!(
                        "unknown option {flag}\nUsage: stockmax [--batch-size N] [PATH]"
                    )));
                }
                _ => {
                    if input.replace(PathBuf::from(&arg)).is_some() {
                        return Err(AppError::InvalidArguments(
                            "Usage: stockmax [--batch-size N] [PATH]".to_string(),
                        ));
                    }
                }
            }
        }

        if let Some(input) = input {
            config.input = input;
        }
        Ok(config)
    }
}

/// Parse a strictly positive batch size
pub fn parse_batch_size(value: &str) -> Result<NonZeroUsize, AppError> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| AppError::InvalidBatchSize(value.to_string()))
}

/// Log level from [`LOG_ENV`], `WARN` when unset or unparseable
pub fn log_level() -> Level {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN)
}
