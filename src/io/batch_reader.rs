use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::path::Path;

use futures::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::fs::File;
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt};
use tracing::{debug, info, warn};

use super::error::IoError;
use super::parse::parse_line;
use crate::domain::StockRecord;

/// Upper bound on the capacity reserved up front for one batch
const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Records per batch unless configured otherwise
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// Ordered group of parsed records handed to observers in one call
///
/// Never empty. Every batch but the last of a run holds exactly the
/// configured batch size.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    index: usize,
    records: Vec<StockRecord>,
}

impl Batch {
    /// Zero-based position of this batch within its run
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StockRecord> {
        self.records.iter()
    }
}

impl<'b> IntoIterator for &'b Batch {
    type Item = &'b StockRecord;
    type IntoIter = std::slice::Iter<'b, StockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Receives every batch a [`BatchingLineReader`] emits
///
/// Called synchronously from the read loop; the next batch is not filled
/// until this returns. The batch is dropped afterwards, so observers keep
/// individual records (cloned) rather than the batch.
pub trait BatchObserver {
    fn on_batch(&mut self, batch: &Batch);
}

impl<F> BatchObserver for F
where
    F: FnMut(&Batch),
{
    fn on_batch(&mut self, batch: &Batch) {
        self(batch)
    }
}

/// Counters describing a completed read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    /// Lines consumed, header included
    pub lines_read: usize,
    pub records_read: usize,
    pub batches_emitted: usize,
}

/// Async file source used by [`BatchingLineReader::from_file`]
pub type FileSource = Compat<File>;

/// Line reader that groups parsed records into bounded batches
///
/// The first line is a header and is discarded. Batch boundaries count
/// data records only. At most one batch is resident at a time.
pub struct BatchingLineReader<'a, R> {
    source: BufReader<R>,
    batch_size: NonZeroUsize,
    observers: Vec<&'a mut dyn BatchObserver>,
}

impl<'a, R> BatchingLineReader<'a, R>
where
    R: AsyncRead + Unpin,
{
    /// Create a reader over any async byte source
    pub fn new(reader: R, batch_size: NonZeroUsize) -> Self {
        Self {
            source: BufReader::new(reader),
            batch_size,
            observers: Vec::new(),
        }
    }

    pub fn batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }

    /// Register an observer for every batch of the upcoming run
    ///
    /// Observers are borrowed for the reader's lifetime, so their state can
    /// be inspected once [`run`](Self::run) has returned.
    pub fn subscribe(&mut self, observer: &'a mut dyn BatchObserver) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Read the source to the end, emitting batches in source order
    ///
    /// Returning `Ok` is the completion signal: every batch, including a
    /// trailing partial one, has been delivered. On a read failure the
    /// partially filled batch is dropped and the error is returned.
    pub async fn run(self) -> Result<ReadSummary, IoError> {
        let Self {
            mut source,
            batch_size,
            mut observers,
        } = self;
        let batch_size = batch_size.get();
        let capacity = batch_size.min(MAX_PREALLOCATED_RECORDS);

        let mut summary = ReadSummary::default();
        let mut buffer = Vec::with_capacity(capacity);
        let mut raw = Vec::new();

        loop {
            raw.clear();
            match source.read_until(b'\n', &mut raw).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        lines_read = summary.lines_read,
                        discarded = buffer.len(),
                        error = %e,
                        "Read failed, aborting run"
                    );
                    return Err(IoError::from(e));
                }
            }

            summary.lines_read += 1;
            if summary.lines_read == 1 {
                continue;
            }

            buffer.push(parse_line(&decode_line(&raw)));
            summary.records_read += 1;

            if buffer.len() == batch_size {
                let records = std::mem::replace(&mut buffer, Vec::with_capacity(capacity));
                emit(&mut observers, &mut summary, records);
            }
        }

        // Trailing partial batch
        if !buffer.is_empty() {
            emit(&mut observers, &mut summary, buffer);
        }

        info!(
            lines_read = summary.lines_read,
            records_read = summary.records_read,
            batches_emitted = summary.batches_emitted,
            "Finished reading source"
        );

        Ok(summary)
    }
}

impl<'a> BatchingLineReader<'a, FileSource> {
    /// Open a file and create a reader over it
    ///
    /// # Example
    /// ```rust,ignore
    /// let reader = BatchingLineReader::from_file("values.csv", DEFAULT_BATCH_SIZE).await?;
    /// ```
    pub async fn from_file(
        path: impl AsRef<Path>,
        batch_size: NonZeroUsize,
    ) -> Result<Self, IoError> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file.compat(), batch_size))
    }
}

/// Strip `\n` or `\r\n` and decode, replacing invalid UTF-8 sequences
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

fn emit(
    observers: &mut [&mut dyn BatchObserver],
    summary: &mut ReadSummary,
    records: Vec<StockRecord>,
) {
    let batch = Batch {
        index: summary.batches_emitted,
        records,
    };
    debug!(index = batch.index, size = batch.len(), "Emitting batch");

    for observer in observers.iter_mut() {
        observer.on_batch(&batch);
    }
    summary.batches_emitted += 1;
}
