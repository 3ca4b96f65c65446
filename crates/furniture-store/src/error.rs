//! # Store Error Types
//!
//! Errors raised by the store service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (furniture-core)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds inventory and discount context        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  showroom binary prints the message                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use furniture_core::{CoreError, FurnitureKind, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the inventory.
    ///
    /// ## When This Occurs
    /// - Selling an id that was never added
    /// - Selling the same item twice
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Discount percentage outside 0–100.
    ///
    /// ## When This Occurs
    /// - `apply_discount(kind, 120.0)`
    /// - `apply_discount(kind, -5.0)`
    #[error("Invalid discount for {kind}: {source}")]
    InvalidDiscount {
        kind: FurnitureKind,
        #[source]
        source: ValidationError,
    },

    /// Discount above the configured ceiling.
    #[error("Discount of {requested}% for {kind} exceeds the store maximum of {max}%")]
    DiscountAboveMaximum {
        kind: FurnitureKind,
        requested: f64,
        max: f64,
    },

    /// Domain rule violation from furniture-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid environment configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
