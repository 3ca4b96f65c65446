//! # Category Components
//!
//! Attributes shared by a family of items. Concrete items embed one of these
//! next to their [`FurnitureDetails`](crate::FurnitureDetails).

pub mod seating;
pub mod storage;
pub mod surface;

pub use seating::Seating;
pub use storage::Storage;
pub use surface::Surface;
