//! Shape hierarchy: the `Shape` capability and its two variants.
//!
//! `Shape` has no default methods, so every implementor must provide both
//! operations. `AnyShape` is the closed sum type over the variants, used
//! where shapes need to be stored together or serialized.

pub mod circle;
pub mod rectangle;

use serde::{Deserialize, Serialize};

pub use circle::Circle;
pub use rectangle::Rectangle;

use crate::error::ShapeError;

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyShape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape for AnyShape {
    fn area(&self) -> f64 {
        match self {
            AnyShape::Rectangle(r) => r.area(),
            AnyShape::Circle(c) => c.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            AnyShape::Rectangle(r) => r.perimeter(),
            AnyShape::Circle(c) => c.perimeter(),
        }
    }
}

impl From<Rectangle> for AnyShape {
    fn from(r: Rectangle) -> Self {
        AnyShape::Rectangle(r)
    }
}

impl From<Circle> for AnyShape {
    fn from(c: Circle) -> Self {
        AnyShape::Circle(c)
    }
}

/// Sum of the areas of a mixed collection.
pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { name, value })
    }
}
