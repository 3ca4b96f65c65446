//! # Wardrobe
//!
//! ```text
//! base + capacity_m3 × 90
//!   + 100 per door
//!   + 250 mirrors
//!   + 120 sliding doors
//!
//! $400, 2.0 m³, 3 doors, mirrors, sliding:
//!   400 + 180 + 300 + 250 + 120 = $1250.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Storage;
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails};
use crate::money::Money;
use crate::types::FurnitureKind;
use crate::validation::ValidationResult;

pub const DEFAULT_WARDROBE_DOORS: u32 = 2;

const PRICE_PER_M3: Money = Money::from_major(90);
const DOOR_SURCHARGE: Money = Money::from_major(100);
const MIRROR_SURCHARGE: Money = Money::from_major(250);
const SLIDING_SURCHARGE: Money = Money::from_major(120);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wardrobe {
    details: FurnitureDetails,
    storage: Storage,
    sliding_doors: bool,
}

impl Wardrobe {
    /// Two hinged doors, no mirrors.
    pub fn new(details: FurnitureDetails, capacity_m3: f64) -> ValidationResult<Self> {
        Ok(Wardrobe {
            details,
            storage: Storage::new(capacity_m3)?.with_doors(DEFAULT_WARDROBE_DOORS),
            sliding_doors: false,
        })
    }

    pub fn with_doors(mut self, doors: u32) -> Self {
        self.storage.set_doors(doors);
        self
    }

    pub fn with_drawers(mut self, drawers: u32) -> Self {
        self.storage.set_drawers(drawers);
        self
    }

    pub fn with_mirrors(mut self, has_mirrors: bool) -> Self {
        self.storage.set_mirrors(has_mirrors);
        self
    }

    pub fn with_sliding_doors(mut self, sliding_doors: bool) -> Self {
        self.sliding_doors = sliding_doors;
        self
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    pub fn has_sliding_doors(&self) -> bool {
        self.sliding_doors
    }

    pub fn set_sliding_doors(&mut self, sliding_doors: bool) {
        self.sliding_doors = sliding_doors;
    }
}

impl Furniture for Wardrobe {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::Wardrobe
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price() + PRICE_PER_M3.times(self.storage.capacity_m3());
        price += DOOR_SURCHARGE * self.storage.doors();

        if self.storage.has_mirrors() {
            price += MIRROR_SURCHARGE;
        }
        if self.sliding_doors {
            price += SLIDING_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Wardrobe", &self.details),
            self.storage.info(),
            format!("Sliding doors: {}", yes_no(self.sliding_doors)),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl fmt::Display for Wardrobe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wardrobe {} with {} doors",
            self.details.name(),
            self.storage.doors()
        )
    }
}
