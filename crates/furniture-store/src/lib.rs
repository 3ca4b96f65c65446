//! # furniture-store: Store Service
//!
//! Owns the inventory state on top of the pure types in `furniture-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  showroom binary                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                furniture-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ FurnitureStore│    │    Catalog    │    │  SaleRecord  │  │   │
//! │  │   │  (store.rs)   │───►│ (catalog.rs)  │    │  (sale.rs)   │  │   │
//! │  │   │ discounts     │    │ linear search │    │  ledger      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  furniture-core (items, prices, dining sets)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `FurnitureStore`: inventory, discounts, sales
//! - [`catalog`] - Item list and search filters
//! - [`sale`] - Sale records
//! - [`report`] - Statistics and the inventory report
//! - [`config`] - Environment configuration
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use furniture_store::{FurnitureStore, StoreConfig};
//! use furniture_core::{Chair, FurnitureDetails, FurnitureKind, Money};
//!
//! let mut store = FurnitureStore::new(StoreConfig::default());
//! let details = FurnitureDetails::new("Oslo", "oak", "natural", Money::from_major(150)).unwrap();
//! let id = store.add_furniture(Chair::new(details)).unwrap();
//!
//! store.apply_discount(FurnitureKind::Chair, 10.0).unwrap();
//! let sale = store.sell(&id, Some("Ana")).unwrap();
//! assert_eq!(sale.final_price.cents(), 14_850);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod report;
pub mod sale;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use config::{ConfigError, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use report::StoreStats;
pub use sale::SaleRecord;
pub use store::FurnitureStore;
