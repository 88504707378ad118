pub mod cli;
pub mod config;
pub mod error;
pub mod memory;

// Re-export commonly used types
pub use cli::{CliApp, Writers};
pub use config::{DEFAULT_INPUT, LOG_ENV, RunConfig};
pub use error::AppError;
pub use memory::{resident_memory_bytes, to_mib};
