//! # Table
//!
//! ```text
//! base + area × 100
//!   + 150 round top
//!   + 200 extensible
//!   +  50 taller than 80 cm
//!
//! $500, rectangular, 1.5 m², 75 cm:  500 + 150 = $650.00
//! ```
//!
//! The seat count does not change the price; it caps how many chairs a
//! [`DiningSet`](crate::dining_set::DiningSet) built around the table accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Surface;
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails};
use crate::money::Money;
use crate::types::{FurnitureKind, Shape};
use crate::validation::{validate_capacity, ValidationResult};

pub const DEFAULT_TABLE_SEATS: u32 = 4;

const PRICE_PER_M2: Money = Money::from_major(100);
const ROUND_SURCHARGE: Money = Money::from_major(150);
const EXTENSIBLE_SURCHARGE: Money = Money::from_major(200);
const TALL_SURCHARGE: Money = Money::from_major(50);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    details: FurnitureDetails,
    surface: Surface,
    seats: u32,
    extensible: bool,
}

impl Table {
    /// Four-seat fixed table at the standard height.
    pub fn new(details: FurnitureDetails, shape: Shape, area_m2: f64) -> ValidationResult<Self> {
        Ok(Table {
            details,
            surface: Surface::new(shape, area_m2)?,
            seats: DEFAULT_TABLE_SEATS,
            extensible: false,
        })
    }

    pub fn with_seats(mut self, seats: u32) -> ValidationResult<Self> {
        self.set_seats(seats)?;
        Ok(self)
    }

    pub fn with_extensible(mut self, extensible: bool) -> Self {
        self.extensible = extensible;
        self
    }

    pub fn with_height(mut self, height_cm: u32) -> Self {
        self.surface.set_height_cm(height_cm);
        self
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// How many chairs fit around the table.
    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    pub fn set_seats(&mut self, seats: u32) -> ValidationResult<()> {
        validate_capacity("table seats", seats)?;
        self.seats = seats;
        Ok(())
    }

    pub fn set_extensible(&mut self, extensible: bool) {
        self.extensible = extensible;
    }
}

impl Furniture for Table {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::Table
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price() + PRICE_PER_M2.times(self.surface.area_m2());

        if self.surface.shape() == Shape::Round {
            price += ROUND_SURCHARGE;
        }
        if self.extensible {
            price += EXTENSIBLE_SURCHARGE;
        }
        if self.surface.is_tall() {
            price += TALL_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Table", &self.details),
            self.surface.info(),
            format!(
                "Seats: {}, Extensible: {}",
                self.seats,
                yes_no(self.extensible)
            ),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table {} {} for {} people",
            self.details.name(),
            self.surface.shape(),
            self.seats
        )
    }
}
