use std::num::NonZeroUsize;
use std::path::Path;

use futures::io::AsyncRead;
use tracing::info;

use crate::domain::StockRecord;
use crate::engine::MaxValueReducer;
use crate::io::{BatchingLineReader, DEFAULT_BATCH_SIZE, IoError, ReadSummary};

/// Result of one completed max-value run
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    /// Highest-valued valid record, if any record qualified
    pub best: Option<StockRecord>,
    pub summary: ReadSummary,
    /// Records that passed the validity check
    pub accepted: usize,
}

/// Drives a [`MaxValueReducer`] over a batched read of one source
///
/// Every run starts from a fresh reducer, so running the same input twice
/// yields the same outcome.
#[derive(Debug, Clone, Copy)]
pub struct MaxValueSession {
    batch_size: NonZeroUsize,
}

impl Default for MaxValueSession {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl MaxValueSession {
    pub fn new(batch_size: NonZeroUsize) -> Self {
        Self { batch_size }
    }

    pub fn batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }

    /// Reduce an async byte source
    pub async fn run<R>(&self, source: R) -> Result<SessionOutcome, IoError>
    where
        R: AsyncRead + Unpin,
    {
        let mut reducer = MaxValueReducer::new();
        let mut reader = BatchingLineReader::new(source, self.batch_size);
        reader.subscribe(&mut reducer);
        let summary = reader.run().await?;

        Ok(finish(reducer, summary))
    }

    /// Open and reduce a file
    pub async fn run_file(&self, path: impl AsRef<Path>) -> Result<SessionOutcome, IoError> {
        let mut reducer = MaxValueReducer::new();
        let mut reader = BatchingLineReader::from_file(path, self.batch_size).await?;
        reader.subscribe(&mut reducer);
        let summary = reader.run().await?;

        Ok(finish(reducer, summary))
    }
}

fn finish(reducer: MaxValueReducer, summary: ReadSummary) -> SessionOutcome {
    info!(
        records_seen = reducer.records_seen(),
        records_accepted = reducer.records_accepted(),
        found = reducer.result().is_some(),
        "Reduction complete"
    );

    let accepted = reducer.records_accepted();
    SessionOutcome {
        best: reducer.into_result(),
        summary,
        accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    const INPUT: &str = "\
name,date,notes,value,change
X,2020-01-01,,10.5,INCREASED
Y,2020-01-02,,20.1,DECREASED
Z,2020-01-03,,15.0,INCREASED
";

    #[tokio::test]
    async fn run_returns_best_and_summary() {
        let session = MaxValueSession::default();
        let outcome = session.run(Cursor::new(INPUT.as_bytes())).await.unwrap();

        let best = outcome.best.unwrap();
        assert_eq!(best.name, "Z");
        assert_eq!(best.value, Some(15.0));
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.summary.records_read, 3);
        assert_eq!(outcome.summary.batches_emitted, 1);
    }

    #[tokio::test]
    async fn repeated_runs_are_identical() {
        let session = MaxValueSession::new(NonZeroUsize::new(2).unwrap());

        let first = session.run(Cursor::new(INPUT.as_bytes())).await.unwrap();
        let second = session.run(Cursor::new(INPUT.as_bytes())).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn run_file_propagates_open_errors() {
        let dir = tempfile::tempdir().unwrap();
        let session = MaxValueSession::default();

        let err = session
            .run_file(dir.path().join("absent.csv"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn default_uses_default_batch_size() {
        assert_eq!(MaxValueSession::default().batch_size(), DEFAULT_BATCH_SIZE);
    }
}
