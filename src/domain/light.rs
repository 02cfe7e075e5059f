//! The movable light source.

use super::Point;

/// State of the point light. The position is written once per frame from the
/// mover's result; the remaining fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct LightSource {
    position: Point,
    radius: f64,
    ray_count: usize,
}

impl LightSource {
    pub fn new(position: Point, radius: f64, ray_count: usize) -> Self {
        Self {
            position,
            radius,
            ray_count,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
