//! # Furniture Base Type
//!
//! Every item in the store shares the same identity and pricing contract.
//!
//! ## Composition Instead of Inheritance
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   FurnitureDetails  (id, name, material, color, base price)            │
//! │          │                                                              │
//! │          ├── + Seating ──► Chair, Armchair, Sofa ──┐                   │
//! │          │                                          ├──► SofaBed        │
//! │          ├── + (bed) ────► Bed ─────────────────────┘                   │
//! │          │                                                              │
//! │          ├── + Surface ──► Table, Desk                                 │
//! │          │                                                              │
//! │          └── + Storage ──► Wardrobe, DrawerUnit                        │
//! │                                                                         │
//! │   trait Furniture   price(), description(), kind()                     │
//! │   trait Seat        comfort_factor()       (seating capability)        │
//! │   trait Sleeper     bed_size(), sleepers() (sleeping capability)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::category::Seating;
use crate::money::Money;
use crate::types::{BedSize, Factor, FurnitureKind};
use crate::validation::{validate_base_price, validate_name, ValidationResult};

// =============================================================================
// Furniture Details
// =============================================================================

/// Identity and base price shared by every item.
///
/// Fields are private so every change goes through a validating setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDetails {
    id: String,
    name: String,
    material: String,
    color: String,
    base_price: Money,
}

impl FurnitureDetails {
    /// Creates validated details with a fresh UUID v4.
    ///
    /// ## Example
    /// ```rust
    /// use furniture_core::{FurnitureDetails, Money};
    ///
    /// let details =
    ///     FurnitureDetails::new("Oslo", "oak", "natural", Money::from_major(150)).unwrap();
    /// assert_eq!(details.name(), "Oslo");
    /// assert!(FurnitureDetails::new(" ", "oak", "natural", Money::zero()).is_err());
    /// ```
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        validate_base_price(base_price)?;
        Ok(FurnitureDetails {
            id: Uuid::new_v4().to_string(),
            name: validate_name("name", name)?,
            material: validate_name("material", material)?,
            color: validate_name("color", color)?,
            base_price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = validate_name("name", name)?;
        Ok(())
    }

    pub fn set_material(&mut self, material: &str) -> ValidationResult<()> {
        self.material = validate_name("material", material)?;
        Ok(())
    }

    pub fn set_color(&mut self, color: &str) -> ValidationResult<()> {
        self.color = validate_name("color", color)?;
        Ok(())
    }

    pub fn set_base_price(&mut self, base_price: Money) -> ValidationResult<()> {
        validate_base_price(base_price)?;
        self.base_price = base_price;
        Ok(())
    }
}

/// `Oslo of oak in natural`
impl fmt::Display for FurnitureDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} in {}", self.name, self.material, self.color)
    }
}

// =============================================================================
// Traits
// =============================================================================

/// The pricing and description contract every item implements.
pub trait Furniture {
    fn details(&self) -> &FurnitureDetails;

    fn details_mut(&mut self) -> &mut FurnitureDetails;

    fn kind(&self) -> FurnitureKind;

    /// Final price, rounded to cents.
    fn price(&self) -> Money;

    /// Multi-line description ending in a `Price: $x.xx` line.
    fn description(&self) -> String;

    fn id(&self) -> &str {
        self.details().id()
    }

    fn name(&self) -> &str {
        self.details().name()
    }

    fn material(&self) -> &str {
        self.details().material()
    }

    fn color(&self) -> &str {
        self.details().color()
    }

    fn base_price(&self) -> Money {
        self.details().base_price()
    }
}

/// Items people sit on.
pub trait Seat: Furniture {
    fn seating(&self) -> &Seating;

    fn comfort_factor(&self) -> Factor {
        self.seating().comfort_factor()
    }

    fn seats(&self) -> u32 {
        self.seating().capacity()
    }
}

/// Items people sleep on.
pub trait Sleeper: Furniture {
    fn bed_size(&self) -> BedSize;

    fn includes_mattress(&self) -> bool;

    fn sleepers(&self) -> u32 {
        self.bed_size().sleepers()
    }
}

// =============================================================================
// Description Helpers
// =============================================================================

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// First description line: `Chair Oslo made of oak, color natural.`
pub(crate) fn headline(label: &str, details: &FurnitureDetails) -> String {
    format!(
        "{} {} made of {}, color {}.",
        label, details.name, details.material, details.color
    )
}

pub(crate) fn price_line(price: Money) -> String {
    format!("Price: {}", price)
}

// =============================================================================
// Unit Tests
// =============================================================================
