//! # Validation Module
//!
//! Attribute validation shared by constructors and setters.
//!
//! ## Usage
//! ```rust
//! use furniture_core::validation::{validate_name, validate_area};
//!
//! assert!(validate_name("name", "Oslo Chair").is_ok());
//! assert!(validate_area(0.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted name for items and dining sets.
pub const MAX_NAME_LEN: usize = 120;

/// Most people a single seat or table may be rated for.
pub const MAX_CAPACITY: u32 = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display text (name, material, color) and returns it trimmed.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most [`MAX_NAME_LEN`] characters
///
/// ```rust
/// use furniture_core::validation::validate_name;
///
/// assert_eq!(validate_name("name", "  Oslo  ").unwrap(), "Oslo");
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed while cataloguing)
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "base price".to_string(),
        });
    }

    Ok(())
}

/// Validates a seat capacity.
///
/// ## Rules
/// - At least one person
/// - At most [`MAX_CAPACITY`] people
pub fn validate_capacity(field: &str, people: u32) -> ValidationResult<()> {
    if people == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if people > MAX_CAPACITY {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::from(MAX_CAPACITY),
        });
    }

    Ok(())
}

/// Validates a surface area in square meters.
///
/// ## Rules
/// - Must be a finite number greater than zero
pub fn validate_area(area_m2: f64) -> ValidationResult<()> {
    if !area_m2.is_finite() || area_m2 <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "surface area".to_string(),
        });
    }

    Ok(())
}

/// Validates a storage volume in cubic meters (zero allowed).
pub fn validate_volume(volume_m3: f64) -> ValidationResult<()> {
    if !volume_m3.is_finite() || volume_m3 < 0.0 {
        return Err(ValidationError::Negative {
            field: "storage capacity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 (inclusive)
///
/// ```rust
/// use furniture_core::validation::validate_discount_percentage;
///
/// assert!(validate_discount_percentage(10.0).is_ok());
/// assert!(validate_discount_percentage(100.0).is_ok());
/// assert!(validate_discount_percentage(-5.0).is_err());
/// assert!(validate_discount_percentage(120.0).is_err());
/// ```
pub fn validate_discount_percentage(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "discount percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("name", "Oslo Chair").unwrap(), "Oslo Chair");
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("color", "   ").is_err());
        assert!(validate_name("name", &"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::zero()).is_ok());
        assert!(validate_base_price(Money::from_major(100)).is_ok());
        assert!(validate_base_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_capacity() {
        assert!(validate_capacity("capacity", 1).is_ok());
        assert!(validate_capacity("capacity", 0).is_err());
        assert!(validate_capacity("capacity", MAX_CAPACITY).is_ok());

        let err = validate_capacity("table seats", MAX_CAPACITY + 1).unwrap_err();
        assert_eq!(err.to_string(), "table seats must be between 1 and 100");
    }

    #[test]
    fn test_validate_area_and_volume() {
        assert!(validate_area(1.5).is_ok());
        assert!(validate_area(0.0).is_err());
        assert!(validate_area(f64::NAN).is_err());

        assert!(validate_volume(0.0).is_ok());
        assert!(validate_volume(-0.5).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert!(validate_discount_percentage(0.0).is_ok());
        assert!(validate_discount_percentage(12.5).is_ok());
        assert!(validate_discount_percentage(100.1).is_err());
        assert!(validate_discount_percentage(f64::INFINITY).is_err());
    }
}
