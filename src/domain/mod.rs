//! Domain models - core business types
//!
//! This module contains the canonical data types used throughout the system:
//! - `Cents` - integer money with `$X.XX` formatting
//! - `Catalog` / `CatalogItem` - the fixed menu of purchasable items
//! - `CartState` - per-item quantities and derived totals
//! - `SummaryLine` - one projected line of the cart display

pub mod cart;
pub mod catalog;
pub mod money;

// Re-export commonly used types at module level
pub use cart::{CartState, SummaryLine};
pub use catalog::{Catalog, CatalogItem};
pub use money::Cents;
