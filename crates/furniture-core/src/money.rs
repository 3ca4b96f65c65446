//! # Money Module
//!
//! Provides the `Money` type for prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price formula ends with "round to two decimals".                 │
//! │                                                                         │
//! │  With floats:   100.0 × 1.15 = 114.99999999999999  ❌                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Multipliers are basis points (10000 = ×1.0), so                      │
//! │    10000 cents × 11500 bps / 10000 = 11500 cents exactly               │
//! │    Rounding happens once, explicitly, to the nearest cent              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use furniture_core::money::Money;
//! use furniture_core::types::Factor;
//!
//! let base = Money::from_major(100);             // $100.00
//! let seated = base.scale(Factor::from_bps(12000)); // ×1.2
//! assert_eq!(seated + Money::from_major(150), Money::from_major(270));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::{DiscountRate, Factor};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// FurnitureDetails.base_price ──► Furniture::price() ──► Catalog filters
///                                        │
///                                        ├──► DiningSet::total_price()
///                                        │
///                                        └──► Store::sell() ──► SaleRecord
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use furniture_core::money::Money;
    ///
    /// let price = Money::from_cents(124450); // $1244.50
    /// assert_eq!(price.cents(), 124450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Surcharges are whole amounts (`+150`, `+80`), so this is the usual
    /// way to spell them.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a basis-point factor, rounding half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use furniture_core::money::Money;
    /// use furniture_core::types::Factor;
    ///
    /// // $2150.00 × 1.5 = $3225.00
    /// let dual = Money::from_major(2150).scale(Factor::from_bps(15000));
    /// assert_eq!(dual, Money::from_major(3225));
    ///
    /// // 1 cent × 1.5 = 1.5 cents → 2 cents
    /// assert_eq!(Money::from_cents(1).scale(Factor::from_bps(15000)).cents(), 2);
    /// ```
    pub fn scale(&self, factor: Factor) -> Money {
        Money(round_div(self.0 as i128 * factor.bps() as i128, 10_000))
    }

    /// Multiplies by a fractional quantity (square meters, cubic meters).
    ///
    /// ## Example
    /// ```rust
    /// use furniture_core::money::Money;
    ///
    /// // $100 per m² over 1.5 m²
    /// assert_eq!(Money::from_major(100).times(1.5), Money::from_major(150));
    /// ```
    pub fn times(&self, quantity: f64) -> Money {
        // f64::round rounds half away from zero, same as `round_div`
        Money((self.0 as f64 * quantity).round() as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use furniture_core::money::Money;
    /// use furniture_core::types::DiscountRate;
    ///
    /// let total = Money::from_major(1310);
    /// let discounted = total.apply_discount(DiscountRate::from_bps(500)); // 5% off
    /// assert_eq!(discounted.cents(), 124450); // $1244.50
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let discount = round_div(self.0 as i128 * rate.bps() as i128, 10_000);
        Money(self.0 - discount)
    }
}

/// Integer division rounding half away from zero.
fn round_div(numerator: i128, denominator: i128) -> i64 {
    let half = denominator / 2;
    let magnitude = (numerator.abs() + half) / denominator;
    let signed = if numerator < 0 { -magnitude } else { magnitude };
    signed as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$1244.50` (negative as `-$5.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (doors, drawers, extra seats).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
