pub mod reducer;

// Re-export commonly used types
pub use reducer::MaxValueReducer;
