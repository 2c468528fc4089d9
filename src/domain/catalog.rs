//! Item catalog - the fixed menu of purchasable items
//!
//! The catalog is built once at startup (defaults or TOML config) and never
//! changes afterwards. Order is significant: validation, summary projection,
//! and snapshot export all walk the catalog in this order.

use crate::domain::money::Cents;

/// A single menu item with its unit price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    pub unit_price: Cents,
}

impl CatalogItem {
    pub fn new(name: &str, unit_price: Cents) -> Self {
        Self { name: name.to_string(), unit_price }
    }
}

/// Ordered, read-only item catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CatalogItem::new("Cookie", Cents(200)),
            CatalogItem::new("Sandwich", Cents(600)),
            CatalogItem::new("Water", Cents(200)),
            CatalogItem::new("Candy", Cents(100)),
            CatalogItem::new("Soda", Cents(300)),
        ])
    }
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unit price lookup by item name
    pub fn unit_price(&self, name: &str) -> Option<Cents> {
        self.items.iter().find(|i| i.name == name).map(|i| i.unit_price)
    }
}
