//! # Seating
//!
//! Attributes of chairs, armchairs and sofas, and the comfort factor that
//! multiplies their base price.
//!
//! ## Comfort Factor
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  factor = 1.00                                                          │
//! │         + 0.10  if the seat has a backrest                              │
//! │         + 0.20  leather upholstery  /  + 0.10 fabric upholstery         │
//! │         + 0.05  per seat beyond the first                               │
//! │                                                                         │
//! │  Chair, backrest, leather:            1.00 + 0.10 + 0.20       = ×1.30  │
//! │  Sofa for 3, backrest, fabric:        1.00 + 0.10 + 0.10 + 0.10 = ×1.30 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::furniture::yes_no;
use crate::money::Money;
use crate::types::{Factor, Upholstery};
use crate::validation::{validate_capacity, ValidationResult};

const BACKREST_BPS: u32 = 1_000;
const LEATHER_BPS: u32 = 2_000;
const FABRIC_BPS: u32 = 1_000;
const EXTRA_SEAT_BPS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeatingRecord")]
pub struct Seating {
    capacity: u32,
    has_backrest: bool,
    upholstery: Option<Upholstery>,
}

/// Unchecked wire form; every decoded `Seating` goes through `Seating::new`.
#[derive(Deserialize)]
struct SeatingRecord {
    capacity: u32,
    has_backrest: bool,
    upholstery: Option<Upholstery>,
}

impl TryFrom<SeatingRecord> for Seating {
    type Error = ValidationError;

    fn try_from(record: SeatingRecord) -> Result<Self, Self::Error> {
        Seating::new(record.capacity, record.has_backrest, record.upholstery)
    }
}

impl Seating {
    pub fn new(
        capacity: u32,
        has_backrest: bool,
        upholstery: Option<Upholstery>,
    ) -> ValidationResult<Self> {
        validate_capacity("seat capacity", capacity)?;
        Ok(Seating {
            capacity,
            has_backrest,
            upholstery,
        })
    }

    /// Built-in layouts of the concrete items; `capacity` is at least 1.
    pub(crate) fn preset(
        capacity: u32,
        has_backrest: bool,
        upholstery: Option<Upholstery>,
    ) -> Self {
        debug_assert!(capacity >= 1);
        Seating {
            capacity,
            has_backrest,
            upholstery,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn has_backrest(&self) -> bool {
        self.has_backrest
    }

    pub fn upholstery(&self) -> Option<&Upholstery> {
        self.upholstery.as_ref()
    }

    pub fn set_capacity(&mut self, capacity: u32) -> ValidationResult<()> {
        validate_capacity("seat capacity", capacity)?;
        self.capacity = capacity;
        Ok(())
    }

    pub fn set_backrest(&mut self, has_backrest: bool) {
        self.has_backrest = has_backrest;
    }

    pub fn set_upholstery(&mut self, upholstery: Option<Upholstery>) {
        self.upholstery = upholstery;
    }

    pub fn comfort_factor(&self) -> Factor {
        let mut factor = Factor::ONE;

        if self.has_backrest {
            factor = factor.plus_bps(BACKREST_BPS);
        }

        match self.upholstery {
            Some(Upholstery::Leather) => factor = factor.plus_bps(LEATHER_BPS),
            Some(Upholstery::Fabric) => factor = factor.plus_bps(FABRIC_BPS),
            Some(Upholstery::Other(_)) | None => {}
        }

        let extra_seats = self.capacity.saturating_sub(1);
        factor.plus_bps(EXTRA_SEAT_BPS.saturating_mul(extra_seats))
    }

    /// Picks the leather or fabric surcharge; other materials add nothing.
    pub fn upholstery_surcharge(&self, leather: Money, fabric: Money) -> Money {
        match self.upholstery {
            Some(Upholstery::Leather) => leather,
            Some(Upholstery::Fabric) => fabric,
            Some(Upholstery::Other(_)) | None => Money::zero(),
        }
    }

    /// Serde hook for single-seat items: decodes a `Seating` and rejects
    /// any capacity other than one.
    pub(crate) fn deserialize_single<'de, D>(deserializer: D) -> Result<Seating, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seating = Seating::deserialize(deserializer)?;
        if seating.capacity != 1 {
            return Err(serde::de::Error::custom(ValidationError::OutOfRange {
                field: "seat capacity".to_string(),
                min: 1,
                max: 1,
            }));
        }
        Ok(seating)
    }

    /// `Capacity: 3 people, Backrest: Yes, Upholstery: fabric`
    pub fn info(&self) -> String {
        let mut info = format!(
            "Capacity: {} people, Backrest: {}",
            self.capacity,
            yes_no(self.has_backrest)
        );
        if let Some(upholstery) = &self.upholstery {
            info.push_str(&format!(", Upholstery: {}", upholstery));
        }
        info
    }
}
