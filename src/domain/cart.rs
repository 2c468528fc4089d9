//! Cart state - per-item quantities and derived totals
//!
//! Derived fields (`grand_count`, `total_price`) are only ever replaced
//! wholesale by a successful submission pass, never patched in place.

use crate::domain::money::Cents;
use std::collections::HashMap;

/// Current cart contents
#[derive(Debug, Clone, Default)]
pub struct CartState {
    quantities: HashMap<String, u32>,
    grand_count: u32,
    total_price: Cents,
}

impl CartState {
    /// Stored quantity for an item (0 if never entered)
    pub fn quantity(&self, name: &str) -> u32 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    /// Sum of quantities counted in the last successful submission
    pub fn grand_count(&self) -> u32 {
        self.grand_count
    }

    /// Total price counted in the last successful submission
    pub fn total_price(&self) -> Cents {
        self.total_price
    }

    pub(crate) fn set_quantity(&mut self, name: &str, quantity: u32) {
        self.quantities.insert(name.to_string(), quantity);
    }

    pub(crate) fn set_totals(&mut self, grand_count: u32, total_price: Cents) {
        self.grand_count = grand_count;
        self.total_price = total_price;
    }
}

/// One line of the cart summary projection, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Cents,
    pub line_total: Cents,
}

impl std::fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} x {} = {}", self.name, self.quantity, self.unit_price, self.line_total)
    }
}
