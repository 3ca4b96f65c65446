//! # Desk
//!
//! ```text
//! base + area × 120
//!   + 200 corner (L-shaped) top
//!   +  80 per drawer
//!   + 150 built-in lighting
//!   +  40 taller than 80 cm
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Surface;
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails};
use crate::money::Money;
use crate::types::{FurnitureKind, Shape};
use crate::validation::ValidationResult;

const PRICE_PER_M2: Money = Money::from_major(120);
const CORNER_SURCHARGE: Money = Money::from_major(200);
const DRAWER_SURCHARGE: Money = Money::from_major(80);
const LIGHTING_SURCHARGE: Money = Money::from_major(150);
const TALL_SURCHARGE: Money = Money::from_major(40);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Desk {
    details: FurnitureDetails,
    surface: Surface,
    has_drawers: bool,
    drawers: u32,
    has_lighting: bool,
}

impl Desk {
    /// Plain desk without drawers or lighting.
    pub fn new(details: FurnitureDetails, shape: Shape, area_m2: f64) -> ValidationResult<Self> {
        Ok(Desk {
            details,
            surface: Surface::new(shape, area_m2)?,
            has_drawers: false,
            drawers: 0,
            has_lighting: false,
        })
    }

    /// `count` is ignored when `has_drawers` is false.
    pub fn with_drawers(mut self, has_drawers: bool, count: u32) -> Self {
        self.set_drawers(has_drawers, count);
        self
    }

    pub fn with_lighting(mut self, has_lighting: bool) -> Self {
        self.has_lighting = has_lighting;
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

    pub fn has_drawers(&self) -> bool {
        self.has_drawers
    }

    pub fn drawers(&self) -> u32 {
        self.drawers
    }

    pub fn has_lighting(&self) -> bool {
        self.has_lighting
    }

    pub fn set_drawers(&mut self, has_drawers: bool, count: u32) {
        self.has_drawers = has_drawers;
        self.drawers = if has_drawers { count } else { 0 };
    }

    pub fn set_lighting(&mut self, has_lighting: bool) {
        self.has_lighting = has_lighting;
    }
}

impl Furniture for Desk {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::Desk
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price() + PRICE_PER_M2.times(self.surface.area_m2());

        if self.surface.shape() == Shape::Corner {
            price += CORNER_SURCHARGE;
        }
        price += DRAWER_SURCHARGE * self.drawers;
        if self.has_lighting {
            price += LIGHTING_SURCHARGE;
        }
        if self.surface.is_tall() {
            price += TALL_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Desk", &self.details),
            self.surface.info(),
            format!(
                "Drawers: {}, Lighting: {}",
                self.drawers,
                yes_no(self.has_lighting)
            ),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl fmt::Display for Desk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Desk {} ({})", self.details.name(), self.surface.shape())
    }
}
