use serde::{Deserialize, Serialize};

use super::{check_dimension, Shape};
use crate::error::ShapeError;

/// Axis-aligned rectangle; both sides strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawRectangle {
    width: f64,
    height: f64,
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = ShapeError;

    fn try_from(raw: RawRectangle) -> Result<Self, Self::Error> {
        Rectangle::new(raw.width, raw.height)
    }
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}
