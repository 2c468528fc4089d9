//! Services - business logic and state management
//!
//! This module contains the core business logic:
//! - `engine` - cart validation, total recomputation, and summary projection

pub mod engine;

// Re-export commonly used types
pub use engine::{CartEngine, QuantityError, PROMPT};
