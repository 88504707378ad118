pub mod stock;

// Re-export commonly used types
pub use stock::{INCREASED, StockRecord};
