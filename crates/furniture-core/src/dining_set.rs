//! # Dining Set
//!
//! One table plus the chairs sold with it, priced as a bundle.
//!
//! ## Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total = table price + Σ chair prices                                   │
//! │  4 or more chairs → 5% bundle discount                                  │
//! │                                                                         │
//! │  Table $650 + 4 × Chair $165 = $1310.00                                 │
//! │  $1310.00 - 5% = $1244.50                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## User Workflow
//! ```text
//! DiningSet::new("Family", table)      table seats 4
//!      │
//!      ▼
//! add_chair(chair) × 4                 5th call → DiningSetFull
//!      │
//!      ▼
//! total_price() / summary()
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::furniture::{Furniture, Seat};
use crate::items::{Chair, Table};
use crate::money::Money;
use crate::types::DiscountRate;
use crate::validation::{validate_name, ValidationResult};

/// Chairs needed for the bundle discount.
pub const BUNDLE_MIN_CHAIRS: usize = 4;

/// 5% off complete sets.
pub const BUNDLE_DISCOUNT: DiscountRate = DiscountRate::from_bps(500);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DiningSetRecord")]
pub struct DiningSet {
    name: String,
    table: Table,
    chairs: Vec<Chair>,
}

/// Wire form, rebuilt through `new` and `add_chair` so the seat limit holds.
#[derive(Deserialize)]
struct DiningSetRecord {
    name: String,
    table: Table,
    chairs: Vec<Chair>,
}

impl TryFrom<DiningSetRecord> for DiningSet {
    type Error = CoreError;

    fn try_from(record: DiningSetRecord) -> Result<Self, Self::Error> {
        DiningSet::new(&record.name, record.table)?.with_chairs(record.chairs)
    }
}

/// Snapshot of a dining set for reports and the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiningSetSummary {
    pub name: String,
    /// Table plus chairs.
    pub piece_count: usize,
    pub table_price: Money,
    pub chairs_price: Money,
    pub total_price: Money,
    /// One person per chair.
    pub seats: usize,
    /// Sorted, without duplicates.
    pub materials: Vec<String>,
}

impl DiningSet {
    /// Creates a set around `table` with no chairs yet.
    pub fn new(name: &str, table: Table) -> ValidationResult<Self> {
        Ok(DiningSet {
            name: validate_name("dining set name", name)?,
            table,
            chairs: Vec::new(),
        })
    }

    /// Adds every chair in order, stopping at the first one that does not fit.
    pub fn with_chairs(mut self, chairs: impl IntoIterator<Item = Chair>) -> CoreResult<Self> {
        for chair in chairs {
            self.add_chair(chair)?;
        }
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn chairs(&self) -> &[Chair] {
        &self.chairs
    }

    /// Maximum chairs, as seated by the table.
    pub fn max_chairs(&self) -> usize {
        self.table.seats() as usize
    }

    /// ## Errors
    /// [`CoreError::DiningSetFull`] when every table seat already has a chair.
    pub fn add_chair(&mut self, chair: Chair) -> CoreResult<()> {
        let max = self.max_chairs();
        if self.chairs.len() >= max {
            return Err(CoreError::DiningSetFull {
                set: self.name.clone(),
                max,
            });
        }
        self.chairs.push(chair);
        Ok(())
    }

    /// Removes the chair at `index`, or the last one when `index` is `None`.
    pub fn remove_chair(&mut self, index: Option<usize>) -> CoreResult<Chair> {
        if self.chairs.is_empty() {
            return Err(CoreError::NoChairs {
                set: self.name.clone(),
            });
        }

        let len = self.chairs.len();
        let index = index.unwrap_or(len - 1);
        if index >= len {
            return Err(CoreError::ChairIndexOutOfRange { index, len });
        }
        Ok(self.chairs.remove(index))
    }

    pub fn has_bundle_discount(&self) -> bool {
        self.chairs.len() >= BUNDLE_MIN_CHAIRS
    }

    pub fn chairs_price(&self) -> Money {
        self.chairs.iter().map(|chair| chair.price()).sum()
    }

    pub fn total_price(&self) -> Money {
        let total = self.table.price() + self.chairs_price();
        if self.has_bundle_discount() {
            total.apply_discount(BUNDLE_DISCOUNT)
        } else {
            total
        }
    }

    /// Table and chairs in one block, ending with the total.
    pub fn full_description(&self) -> String {
        let mut lines = vec![
            format!("=== DINING SET {} ===", self.name.to_uppercase()),
            String::new(),
            "TABLE:".to_string(),
            self.table.description(),
            String::new(),
        ];

        if self.chairs.is_empty() {
            lines.push("CHAIRS: none included".to_string());
        } else {
            lines.push(format!("CHAIRS ({} units):", self.chairs.len()));
            for (i, chair) in self.chairs.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, chair.description()));
            }
        }

        lines.push(String::new());
        lines.push(format!("--- TOTAL PRICE: {} ---", self.total_price()));
        if self.has_bundle_discount() {
            lines.push(format!("(Includes {} complete set discount)", BUNDLE_DISCOUNT));
        }
        lines.join("\n")
    }

    pub fn summary(&self) -> DiningSetSummary {
        DiningSetSummary {
            name: self.name.clone(),
            piece_count: self.len(),
            table_price: self.table.price(),
            chairs_price: self.chairs_price(),
            total_price: self.total_price(),
            seats: self.chairs.len(),
            materials: self.materials(),
        }
    }

    /// Table and chair materials plus chair upholstery.
    fn materials(&self) -> Vec<String> {
        let mut materials = BTreeSet::new();
        materials.insert(self.table.material().to_string());
        for chair in &self.chairs {
            materials.insert(chair.material().to_string());
            if let Some(upholstery) = chair.seating().upholstery() {
                materials.insert(upholstery.name().to_string());
            }
        }
        materials.into_iter().collect()
    }

    /// Pieces in the set: the table plus every chair.
    pub fn len(&self) -> usize {
        1 + self.chairs.len()
    }

    /// A set always holds its table.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for DiningSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dining set {}: table + {} chairs",
            self.name,
            self.chairs.len()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::test_details;
    use crate::types::{Shape, Upholstery};

    fn table() -> Table {
        Table::new(test_details("Nordic", 500), Shape::Rectangular, 1.5).unwrap()
    }

    fn chair(name: &str) -> Chair {
        Chair::new(test_details(name, 150))
    }

    fn family_set() -> DiningSet {
        DiningSet::new("Family", table())
            .unwrap()
            .with_chairs((1..=4).map(|i| chair(&format!("Chair {}", i))))
            .unwrap()
    }

    #[test]
    fn test_bundle_discount_applies_at_four_chairs() {
        let set = family_set();
        assert!(set.has_bundle_discount());
        assert_eq!(set.total_price().cents(), 124_450);
    }

    #[test]
    fn test_no_discount_below_four_chairs() {
        let mut set = family_set();
        set.remove_chair(None).unwrap();
        // 650 + 3 × 165
        assert_eq!(set.total_price(), Money::from_major(1145));
    }

    #[test]
    fn test_table_seats_limit_chairs() {
        let mut set = family_set();
        let err = set.add_chair(chair("Extra")).unwrap_err();
        assert!(matches!(err, CoreError::DiningSetFull { max: 4, .. }));
        assert_eq!(set.chairs().len(), 4);
    }

    #[test]
    fn test_deserialize_enforces_seat_limit() {
        let set = family_set();
        let json = serde_json::to_value(&set).unwrap();
        let restored: DiningSet = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(restored, set);

        let mut overfull = json;
        let extra = serde_json::to_value(chair("Extra")).unwrap();
        overfull["chairs"].as_array_mut().unwrap().push(extra);
        let err = serde_json::from_value::<DiningSet>(overfull).unwrap_err();
        assert!(err.to_string().contains("Family"));
    }

    #[test]
    fn test_remove_chair_by_index() {
        let mut set = family_set();
        let removed = set.remove_chair(Some(0)).unwrap();
        assert_eq!(removed.name(), "Chair 1");
        assert_eq!(set.chairs()[0].name(), "Chair 2");

        assert!(matches!(
            set.remove_chair(Some(10)),
            Err(CoreError::ChairIndexOutOfRange { index: 10, len: 3 })
        ));
    }

    #[test]
    fn test_remove_from_empty_set() {
        let mut set = DiningSet::new("Empty", table()).unwrap();
        assert!(matches!(
            set.remove_chair(None),
            Err(CoreError::NoChairs { .. })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(DiningSet::new("  ", table()).is_err());
    }

    #[test]
    fn test_summary() {
        let mut set = DiningSet::new("Mixed", table()).unwrap();
        set.add_chair(chair("Plain")).unwrap();
        set.add_chair(chair("Soft").with_upholstery(Upholstery::Fabric))
            .unwrap();

        let summary = set.summary();
        assert_eq!(summary.piece_count, 3);
        assert_eq!(summary.seats, 2);
        assert_eq!(summary.table_price, Money::from_major(650));
        assert_eq!(summary.chairs_price, set.chairs_price());
        assert_eq!(summary.total_price, summary.table_price + summary.chairs_price);
        assert_eq!(summary.materials, vec!["fabric".to_string(), "oak".to_string()]);
    }

    #[test]
    fn test_full_description() {
        let description = family_set().full_description();
        assert!(description.starts_with("=== DINING SET FAMILY ==="));
        assert!(description.contains("CHAIRS (4 units):"));
        assert!(description.contains("4. Chair Chair 4"));
        assert!(description.contains("--- TOTAL PRICE: $1244.50 ---"));
        assert!(description.ends_with("(Includes 5.0% complete set discount)"));

        let empty = DiningSet::new("Bare", table()).unwrap();
        assert!(empty.full_description().contains("CHAIRS: none included"));
    }

    #[test]
    fn test_len_and_display() {
        let set = family_set();
        assert_eq!(set.len(), 5);
        assert!(!set.is_empty());
        assert_eq!(set.to_string(), "Dining set Family: table + 4 chairs");
    }
}
