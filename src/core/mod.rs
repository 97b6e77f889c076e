// Public modules
pub mod casing;
pub mod directive;
pub mod error;
pub mod rewrite;
pub mod walk;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
