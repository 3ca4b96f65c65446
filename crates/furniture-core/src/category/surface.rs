//! # Surface
//!
//! Shape, top area and height of tables and desks.

use serde::{Deserialize, Serialize};

use crate::types::Shape;
use crate::validation::{validate_area, ValidationResult};

/// Standard working height.
pub const DEFAULT_HEIGHT_CM: u32 = 75;

/// Surfaces above this height carry a surcharge.
pub const TALL_SURFACE_CM: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    shape: Shape,
    /// Top area in square meters.
    area_m2: f64,
    height_cm: u32,
}

impl Surface {
    pub fn new(shape: Shape, area_m2: f64) -> ValidationResult<Self> {
        validate_area(area_m2)?;
        Ok(Surface {
            shape,
            area_m2,
            height_cm: DEFAULT_HEIGHT_CM,
        })
    }

    pub fn with_height(mut self, height_cm: u32) -> Self {
        self.height_cm = height_cm;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn height_cm(&self) -> u32 {
        self.height_cm
    }

    pub fn is_tall(&self) -> bool {
        self.height_cm > TALL_SURFACE_CM
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn set_area_m2(&mut self, area_m2: f64) -> ValidationResult<()> {
        validate_area(area_m2)?;
        self.area_m2 = area_m2;
        Ok(())
    }

    pub fn set_height_cm(&mut self, height_cm: u32) {
        self.height_cm = height_cm;
    }

    /// `Shape: round, Area: 1.50 m², Height: 75 cm`
    pub fn info(&self) -> String {
        format!(
            "Shape: {}, Area: {:.2} m², Height: {} cm",
            self.shape, self.area_m2, self.height_cm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_info() {
        let surface = Surface::new(Shape::Round, 1.5).unwrap();
        assert_eq!(surface.height_cm(), DEFAULT_HEIGHT_CM);
        assert!(!surface.is_tall());
        assert_eq!(surface.info(), "Shape: round, Area: 1.50 m², Height: 75 cm");
    }

    #[test]
    fn test_tall_threshold_is_exclusive() {
        assert!(!Surface::new(Shape::Square, 1.0).unwrap().with_height(80).is_tall());
        assert!(Surface::new(Shape::Square, 1.0).unwrap().with_height(81).is_tall());
    }

    #[test]
    fn test_area_must_be_positive() {
        assert!(Surface::new(Shape::Rectangular, 0.0).is_err());

        let mut surface = Surface::new(Shape::Rectangular, 1.0).unwrap();
        assert!(surface.set_area_m2(-2.0).is_err());
        assert_eq!(surface.area_m2(), 1.0);
    }
}
