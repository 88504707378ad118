pub mod batch_reader;
pub mod error;
pub mod parse;
pub mod report_writer;

// Re-export commonly used types
pub use batch_reader::{
    Batch, BatchObserver, BatchingLineReader, DEFAULT_BATCH_SIZE, FileSource, ReadSummary,
};
pub use error::IoError;
pub use parse::{parse_leading_float, parse_line};
pub use report_writer::{NONE_FOUND, write_result};
