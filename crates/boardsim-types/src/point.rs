//! Board-space coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Position in 2D board space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic() {
        let a = Point::new(30.0, 40.0);
        let b = Point::new(10.0, 15.0);
        assert_eq!(a + b, Point::new(40.0, 55.0));
        assert_eq!(a - b, Point::new(20.0, 25.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::zero();
        assert_relative_eq!(a.distance_to(Point::new(3.0, 4.0)), 5.0);
    }
}
