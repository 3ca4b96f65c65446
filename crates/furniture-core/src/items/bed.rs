//! # Bed
//!
//! ```text
//! base + size surcharge (single 0 / double 200 / queen 400 / king 600)
//!   + 350 mattress included
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails, Sleeper};
use crate::money::Money;
use crate::types::{BedSize, FurnitureKind};

const MATTRESS_SURCHARGE: Money = Money::from_major(350);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    details: FurnitureDetails,
    size: BedSize,
    includes_mattress: bool,
}

impl Bed {
    /// Double bed sold with its mattress.
    pub fn new(details: FurnitureDetails) -> Self {
        Bed {
            details,
            size: BedSize::default(),
            includes_mattress: true,
        }
    }

    pub fn with_size(mut self, size: BedSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_mattress(mut self, includes_mattress: bool) -> Self {
        self.includes_mattress = includes_mattress;
        self
    }

    pub fn set_size(&mut self, size: BedSize) {
        self.size = size;
    }

    pub fn set_mattress(&mut self, includes_mattress: bool) {
        self.includes_mattress = includes_mattress;
    }
}

impl Furniture for Bed {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::Bed
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price() + self.size.surcharge();
        if self.includes_mattress {
            price += MATTRESS_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Bed", &self.details),
            format!(
                "Size: {}, Sleeps: {}, Mattress included: {}",
                self.size,
                self.sleepers(),
                yes_no(self.includes_mattress)
            ),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl Sleeper for Bed {
    fn bed_size(&self) -> BedSize {
        self.size
    }

    fn includes_mattress(&self) -> bool {
        self.includes_mattress
    }
}

impl fmt::Display for Bed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bed {} {}", self.size, self.details.name())
    }
}
