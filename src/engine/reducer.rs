use tracing::trace;

use crate::domain::StockRecord;
use crate::io::{Batch, BatchObserver};

/// Single-pass reduction keeping the highest-valued valid record
///
/// Memory is constant: only the current best record survives a batch.
#[derive(Debug, Default)]
pub struct MaxValueReducer {
    best: Option<StockRecord>,
    records_seen: usize,
    records_accepted: usize,
}

impl MaxValueReducer {
    /// Create a reducer with no running best
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one batch, in record order
    ///
    /// Invalid records are skipped. A valid record replaces the running best
    /// only when its value is strictly greater, so ties keep the earlier one.
    pub fn on_batch(&mut self, batch: &Batch) {
        for record in batch {
            self.records_seen += 1;
            let value = match record.value {
                Some(value) if record.is_increase() => value,
                _ => continue,
            };
            self.records_accepted += 1;

            let replaces = match self.best.as_ref().and_then(|best| best.value) {
                Some(best_value) => value > best_value,
                None => true,
            };
            if replaces {
                trace!(name = %record.name, value, batch = batch.index(), "New running best");
                self.best = Some(record.clone());
            }
        }
    }

    /// Current running best; only meaningful once the reader has completed
    pub fn result(&self) -> Option<&StockRecord> {
        self.best.as_ref()
    }

    pub fn into_result(self) -> Option<StockRecord> {
        self.best
    }

    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Records that passed the validity check
    pub fn records_accepted(&self) -> usize {
        self.records_accepted
    }
}

impl BatchObserver for MaxValueReducer {
    fn on_batch(&mut self, batch: &Batch) {
        MaxValueReducer::on_batch(self, batch)
    }
}
