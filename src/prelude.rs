//! Prelude module for convenient imports
//!
//! Import everything you need with: `use stockmax::prelude::*;`

// Domain types
pub use crate::domain::{INCREASED, StockRecord};

// IO types
pub use crate::io::{
    Batch, BatchObserver, BatchingLineReader, DEFAULT_BATCH_SIZE, IoError, NONE_FOUND,
    ReadSummary, parse_line, write_result,
};

// Engine types
pub use crate::engine::MaxValueReducer;

// Streaming types
pub use crate::streaming::{MaxValueSession, SessionOutcome};

// App types
pub use crate::app::{AppError, CliApp, RunConfig, Writers};
