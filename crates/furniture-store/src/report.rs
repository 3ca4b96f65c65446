//! # Store Reports
//!
//! Statistics snapshot and the plain-text inventory report.
//!
//! ## Report Layout
//! ```text
//! === INVENTORY REPORT - OOP Furniture Store ===
//! Furniture items: 6
//! Dining sets: 1
//! Inventory value: $9876.50
//! Sales: 2 (revenue $1234.00)
//!
//! Distribution by kind:
//!   Chair: 2
//!   Sofa: 1
//!
//! Active discounts:
//!   Sofa: 10.0%
//! ```

use std::collections::BTreeMap;

use furniture_core::{DiscountRate, FurnitureKind, Money};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Point-in-time store statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoreStats {
    pub furniture_count: usize,
    pub dining_set_count: usize,
    /// Item prices plus dining-set totals.
    pub inventory_value: Money,
    pub sales_count: usize,
    pub revenue: Money,
    /// Kinds with no items are left out.
    pub count_by_kind: BTreeMap<FurnitureKind, usize>,
    pub active_discounts: usize,
}

/// Renders the text report for `stats` and the active `discounts`.
pub fn render_inventory_report(
    store_name: &str,
    stats: &StoreStats,
    discounts: &BTreeMap<FurnitureKind, DiscountRate>,
) -> String {
    let mut lines = vec![
        format!("=== INVENTORY REPORT - {} ===", store_name),
        format!("Furniture items: {}", stats.furniture_count),
        format!("Dining sets: {}", stats.dining_set_count),
        format!("Inventory value: {}", stats.inventory_value),
        format!("Sales: {} (revenue {})", stats.sales_count, stats.revenue),
        String::new(),
        "Distribution by kind:".to_string(),
    ];

    if stats.count_by_kind.is_empty() {
        lines.push("  (empty)".to_string());
    }
    for (kind, count) in &stats.count_by_kind {
        lines.push(format!("  {}: {}", kind, count));
    }

    lines.push(String::new());
    lines.push("Active discounts:".to_string());
    if discounts.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (kind, rate) in discounts {
        lines.push(format!("  {}: {}", kind, rate));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> StoreStats {
        StoreStats {
            furniture_count: 3,
            dining_set_count: 1,
            inventory_value: Money::from_cents(987_650),
            sales_count: 2,
            revenue: Money::from_major(1234),
            count_by_kind: BTreeMap::from([(FurnitureKind::Chair, 2), (FurnitureKind::Sofa, 1)]),
            active_discounts: 1,
        }
    }

    #[test]
    fn test_report_sections() {
        let discounts = BTreeMap::from([(FurnitureKind::Sofa, DiscountRate::from_bps(1_000))]);
        let report = render_inventory_report("Casa Nova", &stats(), &discounts);

        assert!(report.starts_with("=== INVENTORY REPORT - Casa Nova ==="));
        assert!(report.contains("Inventory value: $9876.50"));
        assert!(report.contains("Sales: 2 (revenue $1234.00)"));
        assert!(report.contains("  Chair: 2\n  Sofa: 1"));
        assert!(report.ends_with("  Sofa: 10.0%"));
    }

    #[test]
    fn test_empty_sections() {
        let mut empty = stats();
        empty.count_by_kind.clear();
        let report = render_inventory_report("Casa Nova", &empty, &BTreeMap::new());
        assert!(report.contains("Distribution by kind:\n  (empty)"));
        assert!(report.ends_with("Active discounts:\n  (none)"));
    }

    #[test]
    fn test_stats_serialize_kind_keys() {
        let json = serde_json::to_value(stats()).unwrap();
        assert_eq!(json["count_by_kind"]["chair"], 2);
    }
}
