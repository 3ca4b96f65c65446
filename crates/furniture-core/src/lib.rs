//! # furniture-core: Pure Catalog Logic for the Furniture Store
//!
//! Every item the store sells, its pricing formula, and the dining-set
//! bundle. Nothing in this crate touches I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Furniture Store Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 showroom (binary)                               │   │
//! │  │    seed demo inventory ──► discounts ──► sales ──► report       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            furniture-store (service layer)                      │   │
//! │  │    Catalog, FurnitureStore, SaleRecord, StoreConfig             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ furniture-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ furniture │  │   items   │  │dining_set │  │   │
//! │  │   │   Money   │  │  traits   │  │ Chair ... │  │ DiningSet │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents
//! - [`types`] - Kinds, shapes, bed sizes, factors and discount rates
//! - [`furniture`] - Shared details and the `Furniture`, `Seat`, `Sleeper` traits
//! - [`category`] - Seating, storage and surface components
//! - [`items`] - The nine concrete items and the `FurnitureItem` enum
//! - [`dining_set`] - Table + chairs bundle
//! - [`error`], [`validation`] - Typed errors and attribute rules
//!
//! ## Example Usage
//!
//! ```rust
//! use furniture_core::{Chair, Furniture, FurnitureDetails, Money, Upholstery};
//!
//! let details = FurnitureDetails::new("Club", "oak", "natural", Money::from_major(100)).unwrap();
//! let chair = Chair::new(details)
//!     .with_backrest(false)
//!     .with_upholstery(Upholstery::Leather);
//!
//! // 100 × 1.20 + 150 leather
//! assert_eq!(chair.price(), Money::from_major(270));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod category;
pub mod dining_set;
pub mod error;
pub mod furniture;
pub mod items;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use category::{Seating, Storage, Surface};
pub use dining_set::{DiningSet, DiningSetSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use furniture::{Furniture, FurnitureDetails, Seat, Sleeper};
pub use items::*;
pub use money::Money;
pub use types::*;
