pub mod session;

// Re-export commonly used types
pub use session::{MaxValueSession, SessionOutcome};
