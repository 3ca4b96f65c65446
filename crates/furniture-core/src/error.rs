//! # Error Types
//!
//! Domain-specific error types for furniture-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  furniture-core errors (this file)                                     │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Attribute validation failures                  │
//! │                                                                         │
//! │  furniture-store errors (separate crate)                               │
//! │  └── StoreError       - Inventory, discount and sale failures          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (names, limits, indexes)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The dining set already has as many chairs as its table seats.
    ///
    /// ## User Workflow
    /// ```text
    /// Table seats 4, set has 4 chairs
    ///      │
    ///      ▼
    /// add_chair(chair)
    ///      │
    ///      ▼
    /// DiningSetFull { set: "Family", max: 4 }
    /// ```
    #[error("Dining set {set} cannot hold more chairs (maximum {max})")]
    DiningSetFull { set: String, max: usize },

    /// Tried to remove a chair from a set without chairs.
    #[error("Dining set {set} has no chairs to remove")]
    NoChairs { set: String },

    /// Chair index does not exist in the set.
    #[error("Invalid chair index {index} (set has {len} chairs)")]
    ChairIndexOutOfRange { index: usize, len: usize },

    /// The chair has no height mechanism.
    #[error("Chair {name} does not allow adjusting its height")]
    HeightNotAdjustable { name: String },

    /// Requested chair height outside the mechanism's travel.
    #[error("Chair height must be between {min} and {max} cm (requested {requested})")]
    HeightOutOfRange { requested: u32, min: u32, max: u32 },

    /// Item price is not sellable (must be greater than zero).
    #[error("Furniture {name} must have a price greater than zero (got {price})")]
    InvalidPrice { name: String, price: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Attribute validation errors.
///
/// Raised by constructors and setters before an invalid value can be stored.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value cannot be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DiningSetFull {
            set: "Family".to_string(),
            max: 4,
        };
        assert_eq!(
            err.to_string(),
            "Dining set Family cannot hold more chairs (maximum 4)"
        );

        let err = CoreError::InvalidPrice {
            name: "Stool".to_string(),
            price: Money::zero(),
        };
        assert_eq!(
            err.to_string(),
            "Furniture Stool must have a price greater than zero (got $0.00)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "base price".to_string(),
        };
        assert_eq!(err.to_string(), "base price cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
