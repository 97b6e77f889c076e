//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `paths` - Root directory resolution

pub mod io;
pub mod paths;
