use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{check_dimension, Shape};
use crate::error::ShapeError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    radius: f64,
}

#[derive(Deserialize)]
struct RawCircle {
    radius: f64,
}

impl TryFrom<RawCircle> for Circle {
    type Error = ShapeError;

    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        Circle::new(raw.radius)
    }
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self { radius: check_dimension("radius", radius)? })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}
