//! Batched streaming over large stock files.
//!
//! A [`BatchingLineReader`](io::BatchingLineReader) reads a comma-delimited
//! file line by line and hands bounded batches of parsed records to its
//! observers. A [`MaxValueReducer`](engine::MaxValueReducer) folds those
//! batches into the highest-valued record whose change is `INCREASED`,
//! keeping only that one record between batches.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod streaming;
