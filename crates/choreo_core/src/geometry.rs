//! Geometry primitives
//!
//! Plain value types shared by the animation core and the stage backend:
//! points, sizes, and axis-aligned bounds. Screen coordinates have their
//! origin at the top-left corner with y growing downward.

use serde::{Deserialize, Serialize};

/// A position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset by (dx, dy).
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square of the given side length.
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// An axis-aligned rectangle given by its min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Bounds spanning from the origin to `size`.
    pub fn of_size(size: Size) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(size.width, size.height),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp a point into the bounds.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_translate() {
        let p = Point::new(10.0, 20.0).translate(-5.0, 2.5);
        assert_eq!(p, Point::new(5.0, 22.5));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_bounds_center_and_extent() {
        let bounds = Bounds::new(Point::new(10.0, 10.0), Point::new(30.0, 50.0));
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 40.0);
        assert_eq!(bounds.center(), Point::new(20.0, 30.0));
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::of_size(Size::new(100.0, 100.0));
        assert_eq!(
            bounds.clamp(Point::new(-5.0, 150.0)),
            Point::new(0.0, 100.0)
        );
        assert!(bounds.contains(Point::new(50.0, 50.0)));
        assert!(!bounds.contains(Point::new(50.0, 101.0)));
    }
}
