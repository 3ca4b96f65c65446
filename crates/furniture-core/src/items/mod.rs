//! # Concrete Items
//!
//! The nine items the store sells, and [`FurnitureItem`], the closed enum a
//! store keeps in its inventory.
//!
//! ```text
//! Seating:  Chair, Armchair, Sofa, SofaBed
//! Surface:  Table, Desk
//! Storage:  Wardrobe, DrawerUnit
//! Sleeping: Bed, SofaBed
//! ```

pub mod armchair;
pub mod bed;
pub mod chair;
pub mod desk;
pub mod drawer_unit;
pub mod sofa;
pub mod sofa_bed;
pub mod table;
pub mod wardrobe;

pub use armchair::Armchair;
pub use bed::Bed;
pub use chair::Chair;
pub use desk::Desk;
pub use drawer_unit::DrawerUnit;
pub use sofa::Sofa;
pub use sofa_bed::{Capacities, Conversion, SofaBed};
pub use table::Table;
pub use wardrobe::Wardrobe;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::furniture::{Furniture, FurnitureDetails};
use crate::money::Money;
use crate::types::FurnitureKind;

// =============================================================================
// Inventory Item
// =============================================================================

/// Any concrete item, as held by a store inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FurnitureItem {
    Chair(Chair),
    Armchair(Armchair),
    Sofa(Sofa),
    SofaBed(SofaBed),
    Table(Table),
    Desk(Desk),
    Wardrobe(Wardrobe),
    DrawerUnit(DrawerUnit),
    Bed(Bed),
}

impl FurnitureItem {
    pub fn as_furniture(&self) -> &dyn Furniture {
        match self {
            FurnitureItem::Chair(item) => item,
            FurnitureItem::Armchair(item) => item,
            FurnitureItem::Sofa(item) => item,
            FurnitureItem::SofaBed(item) => item,
            FurnitureItem::Table(item) => item,
            FurnitureItem::Desk(item) => item,
            FurnitureItem::Wardrobe(item) => item,
            FurnitureItem::DrawerUnit(item) => item,
            FurnitureItem::Bed(item) => item,
        }
    }

    pub fn as_furniture_mut(&mut self) -> &mut dyn Furniture {
        match self {
            FurnitureItem::Chair(item) => item,
            FurnitureItem::Armchair(item) => item,
            FurnitureItem::Sofa(item) => item,
            FurnitureItem::SofaBed(item) => item,
            FurnitureItem::Table(item) => item,
            FurnitureItem::Desk(item) => item,
            FurnitureItem::Wardrobe(item) => item,
            FurnitureItem::DrawerUnit(item) => item,
            FurnitureItem::Bed(item) => item,
        }
    }
}

impl Furniture for FurnitureItem {
    fn details(&self) -> &FurnitureDetails {
        self.as_furniture().details()
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        self.as_furniture_mut().details_mut()
    }

    fn kind(&self) -> FurnitureKind {
        self.as_furniture().kind()
    }

    fn price(&self) -> Money {
        self.as_furniture().price()
    }

    fn description(&self) -> String {
        self.as_furniture().description()
    }
}

impl fmt::Display for FurnitureItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FurnitureItem::Chair(item) => fmt::Display::fmt(item, f),
            FurnitureItem::Armchair(item) => fmt::Display::fmt(item, f),
            FurnitureItem::Sofa(item) => fmt::Display::fmt(item, f),
            FurnitureItem::SofaBed(item) => fmt::Display::fmt(item, f),
            FurnitureItem::Table(item) => fmt::Display::fmt(item, f),
            FurnitureItem::Desk(item) => fmt::Display::fmt(item, f),
            FurnitureItem::Wardrobe(item) => fmt::Display::fmt(item, f),
            FurnitureItem::DrawerUnit(item) => fmt::Display::fmt(item, f),
            FurnitureItem::Bed(item) => fmt::Display::fmt(item, f),
        }
    }
}

impl From<Chair> for FurnitureItem {
    fn from(item: Chair) -> Self {
        FurnitureItem::Chair(item)
    }
}

impl From<Armchair> for FurnitureItem {
    fn from(item: Armchair) -> Self {
        FurnitureItem::Armchair(item)
    }
}

impl From<Sofa> for FurnitureItem {
    fn from(item: Sofa) -> Self {
        FurnitureItem::Sofa(item)
    }
}

impl From<SofaBed> for FurnitureItem {
    fn from(item: SofaBed) -> Self {
        FurnitureItem::SofaBed(item)
    }
}

impl From<Table> for FurnitureItem {
    fn from(item: Table) -> Self {
        FurnitureItem::Table(item)
    }
}

impl From<Desk> for FurnitureItem {
    fn from(item: Desk) -> Self {
        FurnitureItem::Desk(item)
    }
}

impl From<Wardrobe> for FurnitureItem {
    fn from(item: Wardrobe) -> Self {
        FurnitureItem::Wardrobe(item)
    }
}

impl From<DrawerUnit> for FurnitureItem {
    fn from(item: DrawerUnit) -> Self {
        FurnitureItem::DrawerUnit(item)
    }
}

impl From<Bed> for FurnitureItem {
    fn from(item: Bed) -> Self {
        FurnitureItem::Bed(item)
    }
}

/// Oak, natural color, base price in whole dollars.
#[cfg(test)]
pub(crate) fn test_details(name: &str, major: i64) -> FurnitureDetails {
    FurnitureDetails::new(name, "oak", "natural", Money::from_major(major))
        .expect("test details are valid")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BedSize, Shape};

    #[test]
    fn test_dispatch_matches_concrete_item() {
        let chair = Chair::new(test_details("Oslo", 150));
        let expected_price = chair.price();
        let expected_id = chair.id().to_string();

        let item = FurnitureItem::from(chair);
        assert_eq!(item.kind(), FurnitureKind::Chair);
        assert_eq!(item.price(), expected_price);
        assert_eq!(item.id(), expected_id);
        assert!(item.to_string().starts_with("Chair Oslo"));
    }

    #[test]
    fn test_every_kind_is_reported() {
        let items: Vec<FurnitureItem> = vec![
            Chair::new(test_details("a", 1)).into(),
            Armchair::new(test_details("b", 1)).into(),
            Sofa::new(test_details("c", 1)).into(),
            SofaBed::new(test_details("d", 1)).into(),
            Table::new(test_details("e", 1), Shape::Square, 1.0).unwrap().into(),
            Desk::new(test_details("f", 1), Shape::Corner, 1.0).unwrap().into(),
            Wardrobe::new(test_details("g", 1), 1.0).unwrap().into(),
            DrawerUnit::new(test_details("h", 1), 1.0).unwrap().into(),
            Bed::new(test_details("i", 1)).with_size(BedSize::King).into(),
        ];
        let kinds: Vec<FurnitureKind> = items.iter().map(|item| item.kind()).collect();
        assert_eq!(kinds, FurnitureKind::ALL.to_vec());
    }

    #[test]
    fn test_details_mut_through_enum() {
        let mut item = FurnitureItem::from(Bed::new(test_details("Dream", 800)));
        item.details_mut().set_name("Dream XL").unwrap();
        assert_eq!(item.name(), "Dream XL");
    }

    #[test]
    fn test_serde_tagged_by_kind() {
        let item = FurnitureItem::from(Bed::new(test_details("Dream", 800)));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "bed");

        let back: FurnitureItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
