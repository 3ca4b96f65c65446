//! # Storage
//!
//! Doors, drawers, mirrors and inner volume of wardrobes and drawer units.

use serde::{Deserialize, Serialize};

use crate::furniture::yes_no;
use crate::validation::{validate_volume, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    /// Inner volume in cubic meters.
    capacity_m3: f64,
    doors: u32,
    drawers: u32,
    has_mirrors: bool,
}

impl Storage {
    /// Storage of `capacity_m3` with no doors, drawers or mirrors.
    pub fn new(capacity_m3: f64) -> ValidationResult<Self> {
        validate_volume(capacity_m3)?;
        Ok(Storage {
            capacity_m3,
            doors: 0,
            drawers: 0,
            has_mirrors: false,
        })
    }

    pub fn with_doors(mut self, doors: u32) -> Self {
        self.doors = doors;
        self
    }

    pub fn with_drawers(mut self, drawers: u32) -> Self {
        self.drawers = drawers;
        self
    }

    pub fn with_mirrors(mut self, has_mirrors: bool) -> Self {
        self.has_mirrors = has_mirrors;
        self
    }

    pub fn capacity_m3(&self) -> f64 {
        self.capacity_m3
    }

    pub fn doors(&self) -> u32 {
        self.doors
    }

    pub fn drawers(&self) -> u32 {
        self.drawers
    }

    pub fn has_mirrors(&self) -> bool {
        self.has_mirrors
    }

    pub fn set_capacity_m3(&mut self, capacity_m3: f64) -> ValidationResult<()> {
        validate_volume(capacity_m3)?;
        self.capacity_m3 = capacity_m3;
        Ok(())
    }

    pub fn set_doors(&mut self, doors: u32) {
        self.doors = doors;
    }

    pub fn set_drawers(&mut self, drawers: u32) {
        self.drawers = drawers;
    }

    pub fn set_mirrors(&mut self, has_mirrors: bool) {
        self.has_mirrors = has_mirrors;
    }

    /// `Capacity: 2.00 m³, Doors: 3, Drawers: 0, Mirrors: Yes`
    pub fn info(&self) -> String {
        format!(
            "Capacity: {:.2} m³, Doors: {}, Drawers: {}, Mirrors: {}",
            self.capacity_m3,
            self.doors,
            self.drawers,
            yes_no(self.has_mirrors)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_info() {
        let storage = Storage::new(2.0)
            .unwrap()
            .with_doors(3)
            .with_mirrors(true);
        assert_eq!(storage.doors(), 3);
        assert_eq!(storage.drawers(), 0);
        assert_eq!(
            storage.info(),
            "Capacity: 2.00 m³, Doors: 3, Drawers: 0, Mirrors: Yes"
        );
    }

    #[test]
    fn test_negative_volume_rejected() {
        assert!(Storage::new(-1.0).is_err());

        let mut storage = Storage::new(1.0).unwrap();
        assert!(storage.set_capacity_m3(f64::NAN).is_err());
        assert_eq!(storage.capacity_m3(), 1.0);
    }
}
