//! # Chair
//!
//! Single seat, optionally with an office mechanism (height + wheels).
//!
//! ## Price
//! ```text
//! base × comfort_factor
//!   + 150 leather / + 50 fabric
//!   +  80 adjustable height
//!   +  60 wheels
//!
//! $300, backrest, leather, adjustable, wheels:
//!   300 × 1.30 = 390 + 150 + 80 + 60 = $680.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Seating;
use crate::error::{CoreError, CoreResult};
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails, Seat};
use crate::money::Money;
use crate::types::{FurnitureKind, Upholstery};

pub const MIN_SEAT_HEIGHT_CM: u32 = 35;
pub const MAX_SEAT_HEIGHT_CM: u32 = 65;
pub const DEFAULT_SEAT_HEIGHT_CM: u32 = 45;

const LEATHER_SURCHARGE: Money = Money::from_major(150);
const FABRIC_SURCHARGE: Money = Money::from_major(50);
const ADJUSTABLE_SURCHARGE: Money = Money::from_major(80);
const WHEELS_SURCHARGE: Money = Money::from_major(60);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chair {
    details: FurnitureDetails,
    #[serde(deserialize_with = "Seating::deserialize_single")]
    seating: Seating,
    adjustable_height: bool,
    has_wheels: bool,
    seat_height_cm: u32,
}

impl Chair {
    /// A chair with backrest, no upholstery and no office mechanism.
    pub fn new(details: FurnitureDetails) -> Self {
        Chair {
            details,
            seating: Seating::preset(1, true, None),
            adjustable_height: false,
            has_wheels: false,
            seat_height_cm: DEFAULT_SEAT_HEIGHT_CM,
        }
    }

    pub fn with_backrest(mut self, has_backrest: bool) -> Self {
        self.seating.set_backrest(has_backrest);
        self
    }

    pub fn with_upholstery(mut self, upholstery: Upholstery) -> Self {
        self.seating.set_upholstery(Some(upholstery));
        self
    }

    pub fn with_adjustable_height(mut self, adjustable: bool) -> Self {
        self.adjustable_height = adjustable;
        self
    }

    pub fn with_wheels(mut self, has_wheels: bool) -> Self {
        self.has_wheels = has_wheels;
        self
    }

    pub fn adjustable_height(&self) -> bool {
        self.adjustable_height
    }

    pub fn has_wheels(&self) -> bool {
        self.has_wheels
    }

    pub fn seat_height_cm(&self) -> u32 {
        self.seat_height_cm
    }

    pub fn set_adjustable_height(&mut self, adjustable: bool) {
        self.adjustable_height = adjustable;
    }

    pub fn set_wheels(&mut self, has_wheels: bool) {
        self.has_wheels = has_wheels;
    }

    /// Moves the seat to `height_cm`.
    ///
    /// ## Errors
    /// - [`CoreError::HeightNotAdjustable`] when the chair has no mechanism
    /// - [`CoreError::HeightOutOfRange`] outside 35–65 cm
    pub fn adjust_height(&mut self, height_cm: u32) -> CoreResult<u32> {
        if !self.adjustable_height {
            return Err(CoreError::HeightNotAdjustable {
                name: self.details.name().to_string(),
            });
        }

        if !(MIN_SEAT_HEIGHT_CM..=MAX_SEAT_HEIGHT_CM).contains(&height_cm) {
            return Err(CoreError::HeightOutOfRange {
                requested: height_cm,
                min: MIN_SEAT_HEIGHT_CM,
                max: MAX_SEAT_HEIGHT_CM,
            });
        }

        self.seat_height_cm = height_cm;
        Ok(height_cm)
    }

    /// Wheels and an adjustable height make an office chair.
    pub fn is_office_chair(&self) -> bool {
        self.has_wheels && self.adjustable_height
    }
}

impl Furniture for Chair {
    fn details(&self) -> &FurnitureDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        &mut self.details
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::Chair
    }

    fn price(&self) -> Money {
        let mut price = self.details.base_price().scale(self.comfort_factor());
        price += self
            .seating
            .upholstery_surcharge(LEATHER_SURCHARGE, FABRIC_SURCHARGE);

        if self.adjustable_height {
            price += ADJUSTABLE_SURCHARGE;
        }
        if self.has_wheels {
            price += WHEELS_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Chair", &self.details),
            self.seating.info(),
            format!(
                "Adjustable height: {}, Wheels: {}",
                yes_no(self.adjustable_height),
                yes_no(self.has_wheels)
            ),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl Seat for Chair {
    fn seating(&self) -> &Seating {
        &self.seating
    }
}

impl fmt::Display for Chair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if self.is_office_chair() { "office" } else { "standard" };
        write!(f, "Chair {} ({})", self.details, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::test_details;

    fn basic_chair() -> Chair {
        Chair::new(test_details("Basic Chair", 150))
    }

    fn office_chair() -> Chair {
        Chair::new(test_details("Office Chair", 300))
            .with_upholstery(Upholstery::Leather)
            .with_adjustable_height(true)
            .with_wheels(true)
    }

    #[test]
    fn test_basic_chair_price() {
        // 150 × 1.10 (backrest)
        assert_eq!(basic_chair().price(), Money::from_major(165));
    }

    #[test]
    fn test_leather_chair_price() {
        // 100 × 1.20 = 120 + 150 leather
        let chair = Chair::new(test_details("Club", 100))
            .with_backrest(false)
            .with_upholstery(Upholstery::Leather);
        assert_eq!(chair.comfort_factor().bps(), 12_000);
        assert_eq!(chair.price(), Money::from_major(270));
    }

    #[test]
    fn test_office_chair_price() {
        assert_eq!(office_chair().price(), Money::from_major(680));
    }

    #[test]
    fn test_fabric_chair_price() {
        // 100 × 1.20 = 120 + 50 fabric + 80 + 60
        let chair = Chair::new(test_details("Task", 100))
            .with_upholstery(Upholstery::Fabric)
            .with_adjustable_height(true)
            .with_wheels(true);
        assert_eq!(chair.price(), Money::from_major(310));
    }

    #[test]
    fn test_is_office_chair() {
        assert!(office_chair().is_office_chair());
        assert!(!basic_chair().is_office_chair());
        assert!(!basic_chair().with_wheels(true).is_office_chair());
    }

    #[test]
    fn test_adjust_height_without_mechanism() {
        let mut chair = basic_chair();
        assert!(matches!(
            chair.adjust_height(50),
            Err(CoreError::HeightNotAdjustable { .. })
        ));
        assert_eq!(chair.seat_height_cm(), DEFAULT_SEAT_HEIGHT_CM);
    }

    #[test]
    fn test_adjust_height_with_mechanism() {
        let mut chair = office_chair();
        assert_eq!(chair.adjust_height(55).unwrap(), 55);
        assert_eq!(chair.seat_height_cm(), 55);

        let err = chair.adjust_height(100).unwrap_err();
        assert!(err.to_string().contains("between 35 and 65"));
        assert_eq!(chair.seat_height_cm(), 55);
    }

    #[test]
    fn test_description() {
        let description = basic_chair().description();
        assert!(description.starts_with("Chair Basic Chair made of oak"));
        assert!(description.contains("Capacity: 1 people"));
        assert!(description.ends_with("Price: $165.00"));
    }

    #[test]
    fn test_always_seats_one() {
        let chair = Chair::new(test_details("Club", 100))
            .with_backrest(false)
            .with_upholstery(Upholstery::Fabric)
            .with_upholstery(Upholstery::Leather);
        assert_eq!(chair.seats(), 1);
        assert_eq!(chair.comfort_factor().bps(), 12_000);

        let mut json = serde_json::to_value(&chair).unwrap();
        json["seating"]["capacity"] = 4.into();
        let err = serde_json::from_value::<Chair>(json.clone()).unwrap_err();
        assert!(err.to_string().contains("seat capacity must be between 1 and 1"));

        json["seating"]["capacity"] = 0.into();
        assert!(serde_json::from_value::<Chair>(json).is_err());
    }

    #[test]
    fn test_display_and_seats() {
        let chair = office_chair();
        assert_eq!(chair.seats(), 1);
        assert!(chair.to_string().contains("Office Chair"));
        assert!(chair.to_string().ends_with("(office)"));
    }
}
