//! # Sales Ledger
//!
//! One [`SaleRecord`] per item sold. Records are immutable once written.
//!
//! ## Sale Flow
//! ```text
//! ┌──────────────┐   price × (1 − discount)   ┌──────────────┐
//! │ FurnitureItem│ ─────────────────────────► │  SaleRecord  │
//! │ (inventory)  │   removed from inventory   │  (ledger)    │
//! └──────────────┘                            └──────────────┘
//! ```

use chrono::{DateTime, Utc};
use furniture_core::{DiscountRate, Furniture, FurnitureItem, FurnitureKind, Money};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A completed sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleRecord {
    pub id: String,
    pub item_id: String,
    pub item_name: String,
    pub kind: FurnitureKind,
    pub customer: String,
    /// Item price before the category discount.
    pub original_price: Money,
    pub discount: DiscountRate,
    pub final_price: Money,
    #[ts(as = "String")]
    pub sold_at: DateTime<Utc>,
}

impl SaleRecord {
    /// Prices `item` with `discount` and stamps the current time.
    pub fn new(item: &FurnitureItem, customer: &str, discount: DiscountRate) -> Self {
        let original_price = item.price();
        SaleRecord {
            id: Uuid::new_v4().to_string(),
            item_id: item.id().to_string(),
            item_name: item.name().to_string(),
            kind: item.kind(),
            customer: customer.to_string(),
            original_price,
            discount,
            final_price: original_price.apply_discount(discount),
            sold_at: Utc::now(),
        }
    }

    /// Amount taken off by the discount.
    pub fn savings(&self) -> Money {
        self.original_price - self.final_price
    }
}
