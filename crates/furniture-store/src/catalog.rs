//! # Catalog
//!
//! In-memory list of items with linear-scan searches.
//!
//! ## Search Rules
//! ```text
//! search_by_name("sofa")     case-insensitive substring, blank → nothing
//! filter_by_material("Oak")  case-insensitive equality,  blank → nothing
//! filter_by_price(min, max)  inclusive, negative min → 0, max optional
//! filter_by_kind(Chair)      exact kind
//! filter_by_category(Sleeping) every kind in the category (sofa beds count
//!                            as both seating and sleeping)
//! ```

use furniture_core::{Category, Furniture, FurnitureItem, FurnitureKind, Money};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FurnitureItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn add(&mut self, item: impl Into<FurnitureItem>) {
        self.items.push(item.into());
    }

    /// Items in insertion order.
    pub fn list(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<FurnitureItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn search_by_name(&self, query: &str) -> Vec<&FurnitureItem> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| item.name().to_lowercase().contains(&query))
            .collect()
    }

    pub fn filter_by_material(&self, material: &str) -> Vec<&FurnitureItem> {
        let material = material.trim().to_lowercase();
        if material.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| item.material().to_lowercase() == material)
            .collect()
    }

    /// Items priced within `[min, max]`; `None` leaves the top open.
    pub fn filter_by_price(&self, min: Money, max: Option<Money>) -> Vec<&FurnitureItem> {
        let min = min.max(Money::zero());
        self.items
            .iter()
            .filter(|item| {
                let price = item.price();
                price >= min && max.map_or(true, |max| price <= max)
            })
            .collect()
    }

    pub fn filter_by_kind(&self, kind: FurnitureKind) -> Vec<&FurnitureItem> {
        self.items
            .iter()
            .filter(|item| item.kind() == kind)
            .collect()
    }

    pub fn filter_by_category(&self, category: Category) -> Vec<&FurnitureItem> {
        self.items
            .iter()
            .filter(|item| item.kind().in_category(category))
            .collect()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.items.iter().map(|item| item.description()).collect()
    }
}
