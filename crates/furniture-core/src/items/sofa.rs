//! # Sofa
//!
//! Multi-seat sofa.
//!
//! ```text
//! base × comfort_factor
//!   + 500 leather / + 200 fabric
//!   + 150 × (seats − 3)   when seats > 3
//!   + 400 modular
//!   + 100 cushions included
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Seating;
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails, Seat};
use crate::money::Money;
use crate::types::{FurnitureKind, Upholstery};
use crate::validation::ValidationResult;

pub const DEFAULT_SOFA_SEATS: u32 = 3;

const LEATHER_SURCHARGE: Money = Money::from_major(500);
const FABRIC_SURCHARGE: Money = Money::from_major(200);
const EXTRA_SEAT_SURCHARGE: Money = Money::from_major(150);
const MODULAR_SURCHARGE: Money = Money::from_major(400);
const CUSHIONS_SURCHARGE: Money = Money::from_major(100);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sofa {
    details: FurnitureDetails,
    seating: Seating,
    modular: bool,
    includes_cushions: bool,
}

impl Sofa {
    /// Three-seat fabric sofa with backrest.
    pub fn new(details: FurnitureDetails) -> Self {
        Sofa {
            details,
            seating: Seating::preset(DEFAULT_SOFA_SEATS, true, Some(Upholstery::Fabric)),
            modular: false,
            includes_cushions: false,
        }
    }

    pub fn with_seats(mut self, seats: u32) -> ValidationResult<Self> {
        self.seating.set_capacity(seats)?;
        Ok(self)
    }

    pub fn with_backrest(mut self, has_backrest: bool) -> Self {
        self.seating.set_backrest(has_backrest);
        self
    }

    pub fn with_upholstery(mut self, upholstery: Option<Upholstery>) -> Self {
        self.seating.set_upholstery(upholstery);
        self
    }

    pub fn with_modular(mut self, modular: bool) -> Self {
        self.modular = modular;
        self
    }

    pub fn with_cushions(mut self, includes_cushions: bool) -> Self {
        self.includes_cushions = includes_cushions;
        self
    }

    pub fn seating_mut(&mut self) -> &mut Seating {
        &mut self.seating
    }

    pub fn is_modular(&self) -> bool {
        self.modular
    }

    pub fn includes_cushions(&self) -> bool {
        self.includes_cushions
    }

    pub fn set_modular(&mut self, modular: bool) {
        self.modular = modular;
    }

    pub fn set_cushions(&mut self, includes_cushions: bool) {
        self.includes_cushions = includes_cushions;
    }

    /// Sofa-specific lines shared with the sofa bed description.
    pub(crate) fn feature_line(&self) -> String {
        format!(
            "Modular: {}, Cushions included: {}",
            yes_no(self.modular),
            yes_no(self.includes_cushions)
        )
    }
}

impl Furniture for Sofa {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::Sofa
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price().scale(self.comfort_factor());
        price += self
            .seating
            .upholstery_surcharge(LEATHER_SURCHARGE, FABRIC_SURCHARGE);

        let seats = self.seating.capacity();
        if seats > DEFAULT_SOFA_SEATS {
            price += EXTRA_SEAT_SURCHARGE * (seats - DEFAULT_SOFA_SEATS);
        }
        if self.modular {
            price += MODULAR_SURCHARGE;
        }
        if self.includes_cushions {
            price += CUSHIONS_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Sofa", &self.details),
            self.seating.info(),
            self.feature_line(),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl Seat for Sofa {
    fn seating(&self) -> &Seating {
        &self.seating
    }
}

impl fmt::Display for Sofa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if self.modular { "modular" } else { "traditional" };
        write!(
            f,
            "Sofa {} for {} people ({})",
            self.details.name(),
            self.seating.capacity(),
            style
        )
    }
}
