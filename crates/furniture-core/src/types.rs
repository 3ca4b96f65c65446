//! # Domain Types
//!
//! Small value types shared by every furniture item.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Factor      │   │  DiscountRate   │   │  FurnitureKind  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  bps (u32)      │   │  Chair, Table,  │       │
//! │  │  12000 = ×1.2   │   │  1000 = 10%     │   │  Sofa, Bed ...  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Upholstery    │   │     Shape       │   │    BedSize      │       │
//! │  │  Leather        │   │  Rectangular    │   │  Single  +0     │       │
//! │  │  Fabric         │   │  Round  Corner  │   │  Double  +200   │       │
//! │  │  Other(name)    │   │  Square  Oval   │   │  Queen +400 ... │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text parsing accepts both English and the Spanish catalog spellings
//! (`cuero`, `tela`, `redonda`, `matrimonial`...), trimmed and
//! case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Factor
// =============================================================================

/// A price multiplier in basis points (10000 = ×1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Factor(u32);

impl Factor {
    /// ×1.0
    pub const ONE: Factor = Factor(10_000);

    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Factor(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns a factor increased by `bps` basis points, saturating at `u32::MAX`.
    #[inline]
    pub const fn plus_bps(self, bps: u32) -> Self {
        Factor(self.0.saturating_add(bps))
    }

    /// Returns the factor as a float (for display only).
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

impl Default for Factor {
    fn default() -> Self {
        Factor::ONE
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{:.2}", self.as_f64())
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage discount in basis points (1000 = 10%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    ///
    /// Use [`crate::validation::validate_discount_percentage`] first; negative
    /// input saturates to zero.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round().max(0.0) as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percentage())
    }
}

// =============================================================================
// Furniture Kind & Category
// =============================================================================

/// The concrete kind of a furniture item.
///
/// Used for type filters, per-kind statistics and category discounts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureKind {
    Chair,
    Armchair,
    Sofa,
    SofaBed,
    Table,
    Desk,
    Wardrobe,
    DrawerUnit,
    Bed,
}

impl FurnitureKind {
    pub const ALL: [FurnitureKind; 9] = [
        FurnitureKind::Chair,
        FurnitureKind::Armchair,
        FurnitureKind::Sofa,
        FurnitureKind::SofaBed,
        FurnitureKind::Table,
        FurnitureKind::Desk,
        FurnitureKind::Wardrobe,
        FurnitureKind::DrawerUnit,
        FurnitureKind::Bed,
    ];

    /// The intermediate categories this kind belongs to.
    ///
    /// A sofa bed is both a seat and a bed, so it sits in two.
    pub const fn categories(&self) -> &'static [Category] {
        match self {
            FurnitureKind::Chair | FurnitureKind::Armchair | FurnitureKind::Sofa => {
                &[Category::Seating]
            }
            FurnitureKind::SofaBed => &[Category::Seating, Category::Sleeping],
            FurnitureKind::Table | FurnitureKind::Desk => &[Category::Surface],
            FurnitureKind::Wardrobe | FurnitureKind::DrawerUnit => &[Category::Storage],
            FurnitureKind::Bed => &[Category::Sleeping],
        }
    }

    pub fn in_category(&self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            FurnitureKind::Chair => "Chair",
            FurnitureKind::Armchair => "Armchair",
            FurnitureKind::Sofa => "Sofa",
            FurnitureKind::SofaBed => "Sofa bed",
            FurnitureKind::Table => "Table",
            FurnitureKind::Desk => "Desk",
            FurnitureKind::Wardrobe => "Wardrobe",
            FurnitureKind::DrawerUnit => "Drawer unit",
            FurnitureKind::Bed => "Bed",
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FurnitureKind {
    type Err = ValidationError;

    /// Parses labels like `"chair"`, `"Sofa bed"` or `"drawer_unit"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();
        FurnitureKind::ALL
            .into_iter()
            .find(|kind| kind.label().to_lowercase().replace(' ', "") == normalized)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "furniture kind".to_string(),
                allowed: FurnitureKind::ALL
                    .iter()
                    .map(|k| k.label().to_string())
                    .collect(),
            })
    }
}

/// Intermediate furniture categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Seating,
    Storage,
    Surface,
    Sleeping,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Seating => "seating",
            Category::Storage => "storage",
            Category::Surface => "surface",
            Category::Sleeping => "sleeping",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Upholstery
// =============================================================================

/// Seat upholstery material.
///
/// Only leather and fabric change prices; any other material is kept by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Upholstery {
    Leather,
    Fabric,
    Other(String),
}

impl Upholstery {
    pub fn name(&self) -> &str {
        match self {
            Upholstery::Leather => "leather",
            Upholstery::Fabric => "fabric",
            Upholstery::Other(name) => name,
        }
    }
}

impl From<&str> for Upholstery {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "leather" | "cuero" => Upholstery::Leather,
            "fabric" | "tela" => Upholstery::Fabric,
            _ => Upholstery::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Upholstery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Surface Shape
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Rectangular,
    Square,
    Round,
    Oval,
    /// L-shaped corner desk.
    Corner,
}

impl Shape {
    pub const fn name(&self) -> &'static str {
        match self {
            Shape::Rectangular => "rectangular",
            Shape::Square => "square",
            Shape::Round => "round",
            Shape::Oval => "oval",
            Shape::Corner => "corner",
        }
    }
}

impl FromStr for Shape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" => Ok(Shape::Rectangular),
            "square" | "cuadrada" => Ok(Shape::Square),
            "round" | "circular" | "redonda" => Ok(Shape::Round),
            "oval" => Ok(Shape::Oval),
            "corner" | "esquinero" => Ok(Shape::Corner),
            _ => Err(ValidationError::NotAllowed {
                field: "shape".to_string(),
                allowed: ["rectangular", "square", "round", "oval", "corner"]
                    .map(String::from)
                    .to_vec(),
            }),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Bed Size
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedSize {
    Single,
    #[default]
    Double,
    Queen,
    King,
}

impl BedSize {
    /// Size surcharge added to a bed's base price.
    pub const fn surcharge(&self) -> Money {
        match self {
            BedSize::Single => Money::zero(),
            BedSize::Double => Money::from_major(200),
            BedSize::Queen => Money::from_major(400),
            BedSize::King => Money::from_major(600),
        }
    }

    /// How many people sleep on this size.
    pub const fn sleepers(&self) -> u32 {
        match self {
            BedSize::Single => 1,
            BedSize::Double | BedSize::Queen | BedSize::King => 2,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BedSize::Single => "single",
            BedSize::Double => "double",
            BedSize::Queen => "queen",
            BedSize::King => "king",
        }
    }
}

impl FromStr for BedSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "individual" => Ok(BedSize::Single),
            "double" | "matrimonial" => Ok(BedSize::Double),
            "queen" => Ok(BedSize::Queen),
            "king" => Ok(BedSize::King),
            "" => Err(ValidationError::Required {
                field: "bed size".to_string(),
            }),
            _ => Err(ValidationError::NotAllowed {
                field: "bed size".to_string(),
                allowed: ["single", "double", "queen", "king"]
                    .map(String::from)
                    .to_vec(),
            }),
        }
    }
}

impl fmt::Display for BedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Sofa Bed Mechanism & Mode
// =============================================================================

/// How a sofa bed unfolds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMechanism {
    Electric,
    Hydraulic,
    Manual,
    #[default]
    Folding,
}

impl ConversionMechanism {
    pub const fn surcharge(&self) -> Money {
        match self {
            ConversionMechanism::Electric => Money::from_major(200),
            ConversionMechanism::Hydraulic => Money::from_major(150),
            ConversionMechanism::Manual | ConversionMechanism::Folding => Money::from_major(100),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ConversionMechanism::Electric => "electric",
            ConversionMechanism::Hydraulic => "hydraulic",
            ConversionMechanism::Manual => "manual",
            ConversionMechanism::Folding => "folding",
        }
    }
}

impl fmt::Display for ConversionMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a sofa bed is currently being used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SofaBedMode {
    #[default]
    Sofa,
    Bed,
}

impl fmt::Display for SofaBedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SofaBedMode::Sofa => f.write_str("sofa"),
            SofaBedMode::Bed => f.write_str("bed"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_percentage() {
        let rate = DiscountRate::from_percentage(12.5);
        assert_eq!(rate.bps(), 1250);
        assert!((rate.percentage() - 12.5).abs() < 0.001);
        assert_eq!(rate.to_string(), "12.5%");
    }

    #[test]
    fn test_factor_display() {
        assert_eq!(Factor::ONE.plus_bps(2000).to_string(), "×1.20");
    }

    #[test]
    fn test_factor_plus_bps_saturates() {
        let top = Factor::from_bps(u32::MAX);
        assert_eq!(top.plus_bps(500), top);
    }

    #[test]
    fn test_kind_categories() {
        assert_eq!(
            FurnitureKind::SofaBed.categories(),
            &[Category::Seating, Category::Sleeping]
        );
        assert_eq!(FurnitureKind::Desk.categories(), &[Category::Surface]);
        assert_eq!(FurnitureKind::DrawerUnit.categories(), &[Category::Storage]);
        assert!(FurnitureKind::Bed.in_category(Category::Sleeping));
        assert!(!FurnitureKind::Sofa.in_category(Category::Sleeping));
        assert_eq!(Category::Sleeping.to_string(), "sleeping");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("chair".parse::<FurnitureKind>().unwrap(), FurnitureKind::Chair);
        assert_eq!(" Sofa bed ".parse::<FurnitureKind>().unwrap(), FurnitureKind::SofaBed);
        assert_eq!("drawer_unit".parse::<FurnitureKind>().unwrap(), FurnitureKind::DrawerUnit);
        assert!("lamp".parse::<FurnitureKind>().is_err());
    }

    #[test]
    fn test_upholstery_parsing() {
        assert_eq!(Upholstery::from("Cuero"), Upholstery::Leather);
        assert_eq!(Upholstery::from(" fabric "), Upholstery::Fabric);
        assert_eq!(Upholstery::from("velvet"), Upholstery::Other("velvet".to_string()));
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!("circular".parse::<Shape>().unwrap(), Shape::Round);
        assert_eq!("Esquinero".parse::<Shape>().unwrap(), Shape::Corner);
        assert!("triangle".parse::<Shape>().is_err());
    }

    #[test]
    fn test_bed_size() {
        assert_eq!("matrimonial".parse::<BedSize>().unwrap(), BedSize::Double);
        assert_eq!("KING".parse::<BedSize>().unwrap(), BedSize::King);
        assert!(matches!(
            "".parse::<BedSize>(),
            Err(ValidationError::Required { .. })
        ));
        assert!("bunk".parse::<BedSize>().is_err());

        assert_eq!(BedSize::Single.surcharge(), Money::zero());
        assert_eq!(BedSize::Queen.surcharge(), Money::from_major(400));
        assert_eq!(BedSize::Single.sleepers(), 1);
        assert_eq!(BedSize::King.sleepers(), 2);
    }

    #[test]
    fn test_mechanism_surcharges() {
        assert_eq!(ConversionMechanism::Electric.surcharge(), Money::from_major(200));
        assert_eq!(ConversionMechanism::Hydraulic.surcharge(), Money::from_major(150));
        assert_eq!(ConversionMechanism::Manual.surcharge(), Money::from_major(100));
        assert_eq!(ConversionMechanism::default().surcharge(), Money::from_major(100));
    }
}
