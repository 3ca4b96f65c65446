//! # Sofa Bed
//!
//! A sofa by day and a bed by night. It wraps a full [`Sofa`] and adds the
//! bed attributes, so it implements both [`Seat`] and [`Sleeper`].
//!
//! ## Price
//! ```text
//! base × comfort_factor × 1.5
//!   + conversion mechanism (electric 200 / hydraulic 150 / manual, folding 100)
//!   + 300 mattress included
//!
//! $1500, 3 seats, fabric, double, mattress, folding:
//!   1500 × 1.30 = 1950
//!   1950 × 1.5 = 2925 + 100 + 300 = $3325.00
//!
//! The plain sofa surcharges (upholstery, extra seats, modular, cushions)
//! do not apply to the sofa bed.
//! ```
//!
//! ## Modes
//! ```text
//!          convert_to_bed()
//!   Sofa ───────────────────► Bed
//!    ▲                         │
//!    └─────────────────────────┘
//!          convert_to_sofa()
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Seating;
use crate::furniture::{headline, price_line, yes_no, Furniture, FurnitureDetails, Seat, Sleeper};
use crate::items::Sofa;
use crate::money::Money;
use crate::types::{BedSize, ConversionMechanism, Factor, FurnitureKind, SofaBedMode};

/// Dual-use premium over the comfort-adjusted base price.
const DUAL_USE_FACTOR: Factor = Factor::from_bps(15_000);
const MATTRESS_SURCHARGE: Money = Money::from_major(300);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SofaBed {
    sofa: Sofa,
    bed_size: BedSize,
    includes_mattress: bool,
    mechanism: ConversionMechanism,
    mode: SofaBedMode,
}

/// Outcome of a mode change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Converted {
        to: SofaBedMode,
        mechanism: ConversionMechanism,
    },
    AlreadyInMode(SofaBedMode),
}

impl Conversion {
    pub fn changed(&self) -> bool {
        matches!(self, Conversion::Converted { .. })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Converted {
                to: SofaBedMode::Bed,
                mechanism,
            } => write!(f, "Sofa converted to bed using the {} mechanism", mechanism),
            Conversion::Converted {
                to: SofaBedMode::Sofa,
                mechanism,
            } => write!(f, "Bed converted to sofa using the {} mechanism", mechanism),
            Conversion::AlreadyInMode(mode) => {
                write!(f, "The sofa bed is already in {} mode", mode)
            }
        }
    }
}

/// People served in each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacities {
    pub as_sofa: u32,
    pub as_bed: u32,
}

impl SofaBed {
    /// Default sofa layout, double bed with mattress, folding mechanism.
    pub fn new(details: FurnitureDetails) -> Self {
        SofaBed::from_sofa(Sofa::new(details))
    }

    /// Turns an existing sofa configuration into a sofa bed.
    pub fn from_sofa(sofa: Sofa) -> Self {
        SofaBed {
            sofa,
            bed_size: BedSize::default(),
            includes_mattress: true,
            mechanism: ConversionMechanism::default(),
            mode: SofaBedMode::Sofa,
        }
    }

    pub fn with_bed_size(mut self, bed_size: BedSize) -> Self {
        self.bed_size = bed_size;
        self
    }

    pub fn with_mattress(mut self, includes_mattress: bool) -> Self {
        self.includes_mattress = includes_mattress;
        self
    }

    pub fn with_mechanism(mut self, mechanism: ConversionMechanism) -> Self {
        self.mechanism = mechanism;
        self
    }

    /// The sofa this item behaves as during the day.
    pub fn as_sofa(&self) -> &Sofa {
        &self.sofa
    }

    pub fn sofa_mut(&mut self) -> &mut Sofa {
        &mut self.sofa
    }

    pub fn mechanism(&self) -> ConversionMechanism {
        self.mechanism
    }

    pub fn mode(&self) -> SofaBedMode {
        self.mode
    }

    pub fn set_bed_size(&mut self, bed_size: BedSize) {
        self.bed_size = bed_size;
    }

    pub fn set_mattress(&mut self, includes_mattress: bool) {
        self.includes_mattress = includes_mattress;
    }

    pub fn convert_to_bed(&mut self) -> Conversion {
        self.convert(SofaBedMode::Bed)
    }

    pub fn convert_to_sofa(&mut self) -> Conversion {
        self.convert(SofaBedMode::Sofa)
    }

    fn convert(&mut self, to: SofaBedMode) -> Conversion {
        if self.mode == to {
            return Conversion::AlreadyInMode(to);
        }
        self.mode = to;
        Conversion::Converted {
            to,
            mechanism: self.mechanism,
        }
    }

    pub fn can_use_as_bed(&self) -> bool {
        self.mode == SofaBedMode::Bed
    }

    pub fn can_use_as_sofa(&self) -> bool {
        self.mode == SofaBedMode::Sofa
    }

    pub fn capacities(&self) -> Capacities {
        Capacities {
            as_sofa: self.seats(),
            as_bed: self.sleepers(),
        }
    }
}

impl Furniture for SofaBed {
    fn details(&self) -> &FurnitureDetails {
        self.sofa.details()
    }

    fn details_mut(&mut self) -> &mut FurnitureDetails {
        self.sofa.details_mut()
    }

    fn kind(&self) -> FurnitureKind {
        FurnitureKind::SofaBed
    }

    fn price(&self) -> Money {
        let mut price = self
            .base_price()
            .scale(self.comfort_factor())
            .scale(DUAL_USE_FACTOR);
        price += self.mechanism.surcharge();
        if self.includes_mattress {
            price += MATTRESS_SURCHARGE;
        }
        price
    }

    fn description(&self) -> String {
        [
            headline("Sofa bed", self.details()),
            self.sofa.seating().info(),
            self.sofa.feature_line(),
            format!(
                "Bed size: {}, Mechanism: {}, Mattress included: {}",
                self.bed_size,
                self.mechanism,
                yes_no(self.includes_mattress)
            ),
            format!("Current mode: {}", self.mode),
            price_line(self.price()),
        ]
        .join("\n")
    }
}

impl Seat for SofaBed {
    fn seating(&self) -> &Seating {
        self.sofa.seating()
    }
}

impl Sleeper for SofaBed {
    fn bed_size(&self) -> BedSize {
        self.bed_size
    }

    fn includes_mattress(&self) -> bool {
        self.includes_mattress
    }
}

impl fmt::Display for SofaBed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sofa bed {} (mode: {})", self.name(), self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::test_details;
    use crate::types::Upholstery;

    fn deluxe() -> SofaBed {
        SofaBed::new(test_details("Deluxe", 1500))
    }

    #[test]
    fn test_defaults() {
        let sofa_bed = deluxe();
        assert_eq!(sofa_bed.seats(), 3);
        assert_eq!(sofa_bed.bed_size(), BedSize::Double);
        assert!(sofa_bed.includes_mattress());
        assert_eq!(sofa_bed.mechanism(), ConversionMechanism::Folding);
        assert_eq!(sofa_bed.mode(), SofaBedMode::Sofa);
        assert_eq!(sofa_bed.kind(), FurnitureKind::SofaBed);
    }

    #[test]
    fn test_default_price() {
        assert_eq!(deluxe().price(), Money::from_major(3325));
    }

    #[test]
    fn test_sofa_surcharges_do_not_carry_over() {
        let plain = deluxe().with_mattress(false);
        let loaded = SofaBed::from_sofa(
            Sofa::new(test_details("Deluxe", 1500))
                .with_modular(true)
                .with_cushions(true),
        )
        .with_mattress(false);

        assert!(loaded.as_sofa().price() > plain.as_sofa().price());
        assert_eq!(loaded.price(), plain.price());
        // 1500 × 1.30 × 1.5 + 100 folding
        assert_eq!(plain.price(), Money::from_major(3025));
    }

    #[test]
    fn test_electric_leather_price() {
        // 1000 × 1.45 = 1450
        // 1450 × 1.5 = 2175 + 200 electric
        let sofa = Sofa::new(test_details("Power", 1000))
            .with_seats(4)
            .unwrap()
            .with_upholstery(Some(Upholstery::Leather));
        let sofa_bed = SofaBed::from_sofa(sofa)
            .with_mechanism(ConversionMechanism::Electric)
            .with_mattress(false);
        assert_eq!(sofa_bed.price(), Money::from_major(2375));
    }

    #[test]
    fn test_mode_conversions() {
        let mut sofa_bed = deluxe();
        assert!(sofa_bed.can_use_as_sofa());

        let first = sofa_bed.convert_to_bed();
        assert!(first.changed());
        assert!(first.to_string().contains("converted to bed"));
        assert!(sofa_bed.can_use_as_bed());

        let again = sofa_bed.convert_to_bed();
        assert_eq!(again, Conversion::AlreadyInMode(SofaBedMode::Bed));
        assert!(again.to_string().contains("already in bed mode"));

        let back = sofa_bed.convert_to_sofa();
        assert!(back.to_string().contains("converted to sofa"));
        assert_eq!(sofa_bed.mode(), SofaBedMode::Sofa);
    }

    #[test]
    fn test_capacities() {
        assert_eq!(
            deluxe().capacities(),
            Capacities {
                as_sofa: 3,
                as_bed: 2
            }
        );
        let narrow = deluxe().with_bed_size(BedSize::Single);
        assert_eq!(narrow.capacities().as_bed, 1);
    }

    #[test]
    fn test_is_both_seat_and_sleeper() {
        fn seats_of(item: &impl Seat) -> u32 {
            item.seats()
        }
        fn sleepers_of(item: &impl Sleeper) -> u32 {
            item.sleepers()
        }
        let sofa_bed = deluxe();
        assert_eq!(seats_of(&sofa_bed), 3);
        assert_eq!(sleepers_of(&sofa_bed), 2);
    }

    #[test]
    fn test_description() {
        let mut sofa_bed = deluxe();
        sofa_bed.convert_to_bed();
        let description = sofa_bed.description();
        assert!(description.starts_with("Sofa bed Deluxe"));
        assert!(description.contains("Bed size: double"));
        assert!(description.contains("Current mode: bed"));
        assert!(description.ends_with("Price: $3325.00"));
        assert_eq!(sofa_bed.to_string(), "Sofa bed Deluxe (mode: bed)");
    }
}
