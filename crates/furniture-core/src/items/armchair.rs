//! # Armchair
//!
//! Upholstered single seat.
//!
//! ```text
//! base × comfort_factor
//!   + 300 leather / + 100 fabric
//!   +  50 backrest
//!   + 200 reclining
//!   + 100 footrest
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Seating;
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails, Seat};
use crate::money::Money;
use crate::types::{FurnitureKind, Upholstery};

const LEATHER_SURCHARGE: Money = Money::from_major(300);
const FABRIC_SURCHARGE: Money = Money::from_major(100);
const BACKREST_SURCHARGE: Money = Money::from_major(50);
const RECLINING_SURCHARGE: Money = Money::from_major(200);
const FOOTREST_SURCHARGE: Money = Money::from_major(100);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armchair {
    details: FurnitureDetails,
    #[serde(deserialize_with = "Seating::deserialize_single")]
    seating: Seating,
    reclining: bool,
    has_footrest: bool,
}

impl Armchair {
    /// Fabric armchair with backrest, fixed, without footrest.
    pub fn new(details: FurnitureDetails) -> Self {
        Armchair {
            details,
            seating: Seating::preset(1, true, Some(Upholstery::Fabric)),
            reclining: false,
            has_footrest: false,
        }
    }

    pub fn with_backrest(mut self, has_backrest: bool) -> Self {
        self.seating.set_backrest(has_backrest);
        self
    }

    pub fn with_upholstery(mut self, upholstery: Option<Upholstery>) -> Self {
        self.seating.set_upholstery(upholstery);
        self
    }

    pub fn with_reclining(mut self, reclining: bool) -> Self {
        self.reclining = reclining;
        self
    }

    pub fn with_footrest(mut self, has_footrest: bool) -> Self {
        self.has_footrest = has_footrest;
        self
    }

    pub fn is_reclining(&self) -> bool {
        self.reclining
    }

    pub fn has_footrest(&self) -> bool {
        self.has_footrest
    }

    pub fn set_reclining(&mut self, reclining: bool) {
        self.reclining = reclining;
    }

    pub fn set_footrest(&mut self, has_footrest: bool) {
        self.has_footrest = has_footrest;
    }
}

impl Furniture for Armchair {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::Armchair
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price().scale(self.comfort_factor());
        price += self
            .seating
            .upholstery_surcharge(LEATHER_SURCHARGE, FABRIC_SURCHARGE);

        if self.seating.has_backrest() {
            price += BACKREST_SURCHARGE;
        }
        if self.reclining {
            price += RECLINING_SURCHARGE;
        }
        if self.has_footrest {
            price += FOOTREST_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Armchair", &self.details),
            self.seating.info(),
            format!(
                "Reclining: {}, Footrest: {}",
                yes_no(self.reclining),
                yes_no(self.has_footrest)
            ),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl Seat for Armchair {
    fn seating(&self) -> &Seating {
        &self.seating
    }
}

impl fmt::Display for Armchair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if self.reclining { "reclining" } else { "fixed" };
        write!(f, "Armchair {} ({})", self.details, style)
    }
}
