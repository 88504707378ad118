use serde::Serialize;

/// Category label marking an upward price movement
pub const INCREASED: &str = "INCREASED";

/// One parsed line of the stock file
///
/// `value` is `None` when the numeric column was empty or malformed.
/// Such records stay in the stream but never pass [`StockRecord::is_valid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRecord {
    pub name: String,
    pub date: String,
    pub notes: String,
    pub value: Option<f64>,
    pub change: String,
}

impl StockRecord {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        notes: impl Into<String>,
        value: Option<f64>,
        change: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            notes: notes.into(),
            value: value.filter(|v| !v.is_nan()),
            change: change.into(),
        }
    }

    /// True if the change label is exactly [`INCREASED`]
    pub fn is_increase(&self) -> bool {
        self.change == INCREASED
    }

    /// Whether this record may take part in the max-value reduction
    pub fn is_valid(&self) -> bool {
        self.value.is_some() && self.is_increase()
    }
}
