//! Rectangles.

use cgmath::{Point2, Vector2};
use std::ops;

/// A rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Creates a rectangle of the given size at the origin.
    pub fn from_size(size: Vector2<f64>) -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size,
        }
    }

    /// Returns the center point.
    pub fn center(&self) -> Point2<f64> {
        self.origin + self.size / 2.
    }

    /// Returns true if the point is inside the rectangle.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.size.x
            && point.y < self.origin.y + self.size.y
    }
}

/// Translates the rectangle.
impl ops::Add<Vector2<f64>> for Rect {
    type Output = Rect;
    fn add(self, offset: Vector2<f64>) -> Rect {
        Rect {
            origin: self.origin + offset,
            size: self.size,
        }
    }
}

#[test]
fn test_rect_contains() {
    let rect = Rect::from_size(Vector2::new(10., 20.)) + Vector2::new(5., 5.);
    assert!(rect.contains(Point2::new(5., 5.)));
    assert!(rect.contains(Point2::new(14.9, 24.9)));
    assert!(!rect.contains(Point2::new(15., 10.)), "far edge is exclusive");
    assert!(!rect.contains(Point2::new(4., 10.)));
    assert_eq!(rect.center(), Point2::new(10., 15.));
}
