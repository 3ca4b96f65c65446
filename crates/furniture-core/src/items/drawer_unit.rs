//! # Drawer Unit
//!
//! Storage made only of drawers: no doors and no mirrors.
//!
//! ```text
//! base + capacity_m3 × 80
//!   + 60 per drawer
//!   + 40 push-open drawers
//!   + 50 wheels
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Storage;
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails};
use crate::money::Money;
use crate::types::FurnitureKind;
use crate::validation::ValidationResult;

pub const DEFAULT_DRAWER_COUNT: u32 = 3;

const PRICE_PER_M3: Money = Money::from_major(80);
const DRAWER_SURCHARGE: Money = Money::from_major(60);
const PUSH_OPEN_SURCHARGE: Money = Money::from_major(40);
const WHEELS_SURCHARGE: Money = Money::from_major(50);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerUnit {
    details: FurnitureDetails,
    storage: Storage,
    push_open: bool,
    has_wheels: bool,
}

impl DrawerUnit {
    pub fn new(details: FurnitureDetails, capacity_m3: f64) -> ValidationResult<Self> {
        Ok(DrawerUnit {
            details,
            storage: Storage::new(capacity_m3)?.with_drawers(DEFAULT_DRAWER_COUNT),
            push_open: false,
            has_wheels: false,
        })
    }

    pub fn with_drawers(mut self, drawers: u32) -> Self {
        self.storage.set_drawers(drawers);
        self
    }

    pub fn with_push_open(mut self, push_open: bool) -> Self {
        self.push_open = push_open;
        self
    }

    pub fn with_wheels(mut self, has_wheels: bool) -> Self {
        self.has_wheels = has_wheels;
        self
    }

    /// Read-only: doors and mirrors must stay at zero.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn drawers(&self) -> u32 {
        self.storage.drawers()
    }

    pub fn is_push_open(&self) -> bool {
        self.push_open
    }

    pub fn has_wheels(&self) -> bool {
        self.has_wheels
    }

    pub fn set_drawers(&mut self, drawers: u32) {
        self.storage.set_drawers(drawers);
    }

    pub fn set_capacity_m3(&mut self, capacity_m3: f64) -> ValidationResult<()> {
        self.storage.set_capacity_m3(capacity_m3)
    }

    pub fn set_push_open(&mut self, push_open: bool) {
        self.push_open = push_open;
    }

    pub fn set_wheels(&mut self, has_wheels: bool) {
        self.has_wheels = has_wheels;
    }
}

impl Furniture for DrawerUnit {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::DrawerUnit
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price() + PRICE_PER_M3.times(self.storage.capacity_m3());
        price += DRAWER_SURCHARGE * self.storage.drawers();

        if self.push_open {
            price += PUSH_OPEN_SURCHARGE;
        }
        if self.has_wheels {
            price += WHEELS_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Drawer unit", &self.details),
            self.storage.info(),
            format!(
                "Push-open: {}, Wheels: {}",
                yes_no(self.push_open),
                yes_no(self.has_wheels)
            ),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl fmt::Display for DrawerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drawer unit {} with {} drawers",
            self.details.name(),
            self.storage.drawers()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::test_details;

    #[test]
    fn test_push_open_unit_price() {
        // 150 + 0.5 × 80 + 4 × 60 + 40
        let unit = DrawerUnit::new(test_details("Compact", 150), 0.5)
            .unwrap()
            .with_drawers(4)
            .with_push_open(true);
        assert_eq!(unit.price(), Money::from_major(470));
    }

    #[test]
    fn test_wheels_surcharge() {
        // 150 + 40 + 3 × 60 + 50
        let unit = DrawerUnit::new(test_details("Rolling", 150), 0.5)
            .unwrap()
            .with_wheels(true);
        assert_eq!(unit.drawers(), DEFAULT_DRAWER_COUNT);
        assert_eq!(unit.price(), Money::from_major(420));
    }

    #[test]
    fn test_has_no_doors_or_mirrors() {
        let unit = DrawerUnit::new(test_details("Compact", 150), 0.5).unwrap();
        assert_eq!(unit.storage().doors(), 0);
        assert!(!unit.storage().has_mirrors());
        assert!(unit.description().contains("Doors: 0"));
    }

    #[test]
    fn test_display() {
        let unit = DrawerUnit::new(test_details("Compact", 150), 0.5).unwrap();
        assert_eq!(unit.to_string(), "Drawer unit Compact with 3 drawers");
    }
}
