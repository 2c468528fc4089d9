//! IO modules - external system interfaces
//!
//! This module contains all external IO operations:
//! - `snapshot` - cart export to file (CSV format)

pub mod snapshot;

// Re-export commonly used types
pub use snapshot::Snapshot;
