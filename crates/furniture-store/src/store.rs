//! # Furniture Store
//!
//! Inventory, dining sets, category discounts and the sales ledger.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add_furniture(item) ──► inventory (price must be > 0)                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  apply_discount(Sofa, 10.0) ──► one active rate per kind               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  sell(id, customer) ──► SaleRecord, item leaves the inventory          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stats() / inventory_report()                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use furniture_core::validation::validate_discount_percentage;
use furniture_core::{
    Category, CoreError, DiningSet, DiscountRate, Furniture, FurnitureItem, FurnitureKind, Money,
};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::report::{render_inventory_report, StoreStats};
use crate::sale::SaleRecord;

#[derive(Debug, Clone, Default)]
pub struct FurnitureStore {
    config: StoreConfig,
    catalog: Catalog,
    dining_sets: Vec<DiningSet>,
    discounts: BTreeMap<FurnitureKind, DiscountRate>,
    sales: Vec<SaleRecord>,
}

impl FurnitureStore {
    pub fn new(config: StoreConfig) -> Self {
        FurnitureStore {
            config,
            ..FurnitureStore::default()
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.store_name
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Adds an item to the inventory and returns its id.
    ///
    /// ## Errors
    /// [`CoreError::InvalidPrice`] when the computed price is not above zero.
    pub fn add_furniture(&mut self, item: impl Into<FurnitureItem>) -> StoreResult<String> {
        let item = item.into();
        let price = item.price();
        if !price.is_positive() {
            return Err(CoreError::InvalidPrice {
                name: item.name().to_string(),
                price,
            }
            .into());
        }

        let id = item.id().to_string();
        info!(id = %id, kind = %item.kind(), price = %price, "Furniture added");
        self.catalog.add(item);
        Ok(id)
    }

    pub fn add_dining_set(&mut self, set: DiningSet) {
        info!(
            name = %set.name(),
            chairs = set.chairs().len(),
            total = %set.total_price(),
            "Dining set added"
        );
        self.dining_sets.push(set);
    }

    pub fn furniture(&self) -> &[FurnitureItem] {
        self.catalog.list()
    }

    pub fn dining_sets(&self) -> &[DiningSet] {
        &self.dining_sets
    }

    pub fn get(&self, id: &str) -> Option<&FurnitureItem> {
        self.catalog.get(id)
    }

    /// Σ item prices + Σ dining-set totals.
    pub fn inventory_value(&self) -> Money {
        let items: Money = self.catalog.list().iter().map(|item| item.price()).sum();
        let sets: Money = self.dining_sets.iter().map(|set| set.total_price()).sum();
        items + sets
    }

    pub fn count_by_kind(&self) -> BTreeMap<FurnitureKind, usize> {
        let mut counts = BTreeMap::new();
        for item in self.catalog.list() {
            *counts.entry(item.kind()).or_insert(0) += 1;
        }
        counts
    }

    // =========================================================================
    // Searches
    // =========================================================================

    pub fn search_by_name(&self, query: &str) -> Vec<&FurnitureItem> {
        let found = self.catalog.search_by_name(query);
        debug!(query = %query, results = found.len(), "search_by_name");
        found
    }

    pub fn filter_by_material(&self, material: &str) -> Vec<&FurnitureItem> {
        let found = self.catalog.filter_by_material(material);
        debug!(material = %material, results = found.len(), "filter_by_material");
        found
    }

    pub fn filter_by_price(&self, min: Money, max: Option<Money>) -> Vec<&FurnitureItem> {
        let found = self.catalog.filter_by_price(min, max);
        debug!(
            min = %min,
            max = ?max.map(|m| m.to_string()),
            results = found.len(),
            "filter_by_price"
        );
        found
    }

    pub fn filter_by_kind(&self, kind: FurnitureKind) -> Vec<&FurnitureItem> {
        let found = self.catalog.filter_by_kind(kind);
        debug!(kind = %kind, results = found.len(), "filter_by_kind");
        found
    }

    /// Items whose kind belongs to `category`; sofa beds match both
    /// [`Category::Seating`] and [`Category::Sleeping`].
    pub fn filter_by_category(&self, category: Category) -> Vec<&FurnitureItem> {
        let found = self.catalog.filter_by_category(category);
        debug!(category = %category, results = found.len(), "filter_by_category");
        found
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.catalog.descriptions()
    }

    // =========================================================================
    // Discounts
    // =========================================================================

    /// Sets the discount for every item of `kind`, replacing any previous one.
    ///
    /// ## Errors
    /// - [`StoreError::InvalidDiscount`] outside 0–100
    /// - [`StoreError::DiscountAboveMaximum`] above the configured ceiling
    pub fn apply_discount(
        &mut self,
        kind: FurnitureKind,
        percentage: f64,
    ) -> StoreResult<DiscountRate> {
        validate_discount_percentage(percentage)
            .map_err(|source| StoreError::InvalidDiscount { kind, source })?;

        if percentage > self.config.max_discount_pct {
            return Err(StoreError::DiscountAboveMaximum {
                kind,
                requested: percentage,
                max: self.config.max_discount_pct,
            });
        }

        let rate = DiscountRate::from_percentage(percentage);
        self.discounts.insert(kind, rate);
        info!(kind = %kind, rate = %rate, "Discount applied");
        Ok(rate)
    }

    /// Active discount for `kind`, zero when none is set.
    pub fn discount_for(&self, kind: FurnitureKind) -> DiscountRate {
        self.discounts.get(&kind).copied().unwrap_or_default()
    }

    pub fn discounts(&self) -> &BTreeMap<FurnitureKind, DiscountRate> {
        &self.discounts
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Sells the item with `id`, applying its kind's discount.
    ///
    /// `customer` falls back to the configured default customer.
    ///
    /// ## Errors
    /// [`StoreError::NotFound`] when `id` is not in the inventory.
    pub fn sell(&mut self, id: &str, customer: Option<&str>) -> StoreResult<SaleRecord> {
        let item = self
            .catalog
            .remove(id)
            .ok_or_else(|| StoreError::not_found("Furniture", id))?;

        let customer = customer
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.config.default_customer);
        let sale = SaleRecord::new(&item, customer, self.discount_for(item.kind()));

        info!(
            sale_id = %sale.id,
            item = %sale.item_name,
            customer = %sale.customer,
            total = %sale.final_price,
            "Sale recorded"
        );
        self.sales.push(sale.clone());
        Ok(sale)
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    pub fn revenue(&self) -> Money {
        self.sales.iter().map(|sale| sale.final_price).sum()
    }

    // =========================================================================
    // Reports
    // =========================================================================

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            furniture_count: self.catalog.len(),
            dining_set_count: self.dining_sets.len(),
            inventory_value: self.inventory_value(),
            sales_count: self.sales.len(),
            revenue: self.revenue(),
            count_by_kind: self.count_by_kind(),
            active_discounts: self.discounts.len(),
        }
    }

    pub fn inventory_report(&self) -> String {
        render_inventory_report(self.name(), &self.stats(), &self.discounts)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use furniture_core::{Bed, Chair, FurnitureDetails, Shape, Sofa, SofaBed, Table};

    fn details(name: &str, major: i64) -> FurnitureDetails {
        FurnitureDetails::new(name, "oak", "natural", Money::from_major(major)).unwrap()
    }

    fn dining_set() -> DiningSet {
        let table = Table::new(details("Nordic", 500), Shape::Rectangular, 1.5).unwrap();
        DiningSet::new("Family", table)
            .unwrap()
            .with_chairs((1..=4).map(|i| Chair::new(details(&format!("Chair {}", i), 150))))
            .unwrap()
    }

    fn stocked_store() -> (FurnitureStore, String, String) {
        let mut store = FurnitureStore::default();
        let chair_id = store.add_furniture(Chair::new(details("Oslo", 150))).unwrap(); // 165
        let sofa_id = store.add_furniture(Sofa::new(details("Milano", 1000))).unwrap(); // 1500
        (store, chair_id, sofa_id)
    }

    #[test]
    fn test_add_furniture_rejects_zero_price() {
        let mut store = FurnitureStore::default();
        let free = Table::new(details("Free", 0), Shape::Square, 1.0).unwrap();
        // 0 + 100 for the area, so the price is still positive
        assert!(store.add_furniture(free).is_ok());

        let err = store
            .add_furniture(Chair::new(details("Gift", 0)))
            .unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::InvalidPrice { .. })));
        assert_eq!(store.furniture().len(), 1);
    }

    #[test]
    fn test_inventory_value_includes_dining_sets() {
        let (mut store, _, _) = stocked_store();
        assert_eq!(store.inventory_value(), Money::from_major(1665));

        store.add_dining_set(dining_set());
        assert_eq!(store.inventory_value().cents(), 166_500 + 124_450);
    }

    #[test]
    fn test_apply_discount_validates_range() {
        let mut store = FurnitureStore::default();
        assert!(matches!(
            store.apply_discount(FurnitureKind::Sofa, 120.0),
            Err(StoreError::InvalidDiscount { .. })
        ));
        assert!(store.apply_discount(FurnitureKind::Sofa, -1.0).is_err());
        assert!(store.discounts().is_empty());
    }

    #[test]
    fn test_apply_discount_replaces_previous() {
        let mut store = FurnitureStore::default();
        store.apply_discount(FurnitureKind::Sofa, 10.0).unwrap();
        store.apply_discount(FurnitureKind::Sofa, 20.0).unwrap();
        assert_eq!(store.discount_for(FurnitureKind::Sofa).bps(), 2_000);
        assert!(store.discount_for(FurnitureKind::Chair).is_zero());
        assert_eq!(store.discounts().len(), 1);
    }

    #[test]
    fn test_apply_discount_respects_configured_maximum() {
        let config = StoreConfig {
            max_discount_pct: 30.0,
            ..StoreConfig::default()
        };
        let mut store = FurnitureStore::new(config);
        assert!(store.apply_discount(FurnitureKind::Bed, 30.0).is_ok());
        assert!(matches!(
            store.apply_discount(FurnitureKind::Bed, 35.0),
            Err(StoreError::DiscountAboveMaximum { .. })
        ));
        assert_eq!(store.discount_for(FurnitureKind::Bed).bps(), 3_000);
    }

    #[test]
    fn test_sell_applies_discount_and_removes_item() {
        let (mut store, chair_id, sofa_id) = stocked_store();
        store.apply_discount(FurnitureKind::Sofa, 10.0).unwrap();

        let sale = store.sell(&sofa_id, Some("Ana")).unwrap();
        assert_eq!(sale.customer, "Ana");
        assert_eq!(sale.original_price, Money::from_major(1500));
        assert_eq!(sale.final_price, Money::from_major(1350));
        assert!(store.get(&sofa_id).is_none());

        let sale = store.sell(&chair_id, None).unwrap();
        assert_eq!(sale.customer, "Anonymous customer");
        assert_eq!(sale.final_price, Money::from_major(165));

        assert_eq!(store.sales().len(), 2);
        assert_eq!(store.revenue(), Money::from_major(1515));
        assert!(store.furniture().is_empty());
    }

    #[test]
    fn test_sell_unknown_or_sold_item() {
        let (mut store, chair_id, _) = stocked_store();
        store.sell(&chair_id, None).unwrap();

        let err = store.sell(&chair_id, None).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(store.sell("missing", None).is_err());
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_searches_delegate_to_catalog() {
        let (store, _, _) = stocked_store();
        assert_eq!(store.search_by_name("mil").len(), 1);
        assert_eq!(store.filter_by_material("OAK").len(), 2);
        assert_eq!(store.filter_by_price(Money::from_major(1000), None).len(), 1);
        assert_eq!(store.filter_by_kind(FurnitureKind::Chair).len(), 1);
        assert_eq!(store.descriptions().len(), 2);
    }

    #[test]
    fn test_filter_by_category_counts_sofa_bed_twice() {
        let (mut store, _, _) = stocked_store();
        let sofa_bed_id = store
            .add_furniture(SofaBed::new(details("Deluxe", 1500)))
            .unwrap();
        store.add_furniture(Bed::new(details("Dream", 800))).unwrap();

        let seating = store.filter_by_category(Category::Seating);
        assert_eq!(seating.len(), 3);
        assert!(seating.iter().any(|item| item.id() == sofa_bed_id));

        let sleeping = store.filter_by_category(Category::Sleeping);
        let names: Vec<&str> = sleeping.iter().map(|item| item.name()).collect();
        assert_eq!(names, vec!["Deluxe", "Dream"]);

        assert!(store.filter_by_category(Category::Storage).is_empty());
    }

    #[test]
    fn test_stats_and_report() {
        let (mut store, chair_id, _) = stocked_store();
        store.add_dining_set(dining_set());
        store.apply_discount(FurnitureKind::Chair, 50.0).unwrap();
        store.sell(&chair_id, None).unwrap();

        let stats = store.stats();
        assert_eq!(stats.furniture_count, 1);
        assert_eq!(stats.dining_set_count, 1);
        assert_eq!(stats.sales_count, 1);
        assert_eq!(stats.revenue.cents(), 8_250);
        assert_eq!(stats.count_by_kind.get(&FurnitureKind::Sofa), Some(&1));
        assert_eq!(stats.count_by_kind.get(&FurnitureKind::Chair), None);
        assert_eq!(stats.active_discounts, 1);

        let report = store.inventory_report();
        assert!(report.starts_with("=== INVENTORY REPORT - OOP Furniture Store ==="));
        assert!(report.contains("  Chair: 50.0%"));
    }
}
