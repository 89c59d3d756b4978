//! Fractional-or-absolute sizes.
//!
//! A dimension below 1 is a proportion of the parent extent; anything at or above 1 is a
//! pixel count. Both interpretations center the sized box inside the parent.

use cgmath::Vector2;

/// A single width or height value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(pub f64);

impl Dimension {
    /// Returns true if this is a proportion of the parent extent.
    pub fn is_fractional(self) -> bool {
        self.0 < 1.
    }

    /// Absolute size within a parent extent.
    pub fn resolved_size(self, parent: f64) -> f64 {
        if self.is_fractional() {
            (parent * self.0).round()
        } else {
            self.0
        }
    }

    /// Offset that centers the resolved size within a parent extent.
    ///
    /// May be negative if the dimension is larger than the parent.
    pub fn resolved_offset(self, parent: f64) -> f64 {
        if self.is_fractional() {
            (parent * (1. - self.0) / 2.).round()
        } else {
            ((parent - self.0) / 2.).round()
        }
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension(value)
    }
}

/// A width and a height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

impl Size {
    /// 80% of the parent width by 60% of the parent height.
    pub const DEFAULT: Size = Size {
        width: Dimension(0.8),
        height: Dimension(0.6),
    };

    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Size {
        Size {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Resolved box size within the parent extent.
    pub fn resolved_size(self, parent: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            self.width.resolved_size(parent.x),
            self.height.resolved_size(parent.y),
        )
    }

    /// Resolved centering offset within the parent extent.
    pub fn resolved_offset(self, parent: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            self.width.resolved_offset(parent.x),
            self.height.resolved_offset(parent.y),
        )
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_size_in_700x600() {
        let parent = Vector2::new(700., 600.);
        assert_eq!(Size::DEFAULT.resolved_size(parent), Vector2::new(560., 360.));
        assert_eq!(Size::DEFAULT.resolved_offset(parent), Vector2::new(70., 120.));
    }

    #[test]
    fn absolute_size_in_700x600() {
        let parent = Vector2::new(700., 600.);
        let size = Size::new(200., 150.);
        assert_eq!(size.resolved_size(parent), Vector2::new(200., 150.));
        assert_eq!(size.resolved_offset(parent), Vector2::new(250., 225.));
    }

    #[test]
    fn one_is_absolute() {
        assert!(!Dimension(1.).is_fractional());
        assert_eq!(Dimension(1.).resolved_size(500.), 1.);
        assert_eq!(Dimension(1.).resolved_offset(500.), 250.);
    }

    #[test]
    fn oversized_content_has_negative_offset() {
        assert_eq!(Dimension(900.).resolved_offset(700.), -100.);
    }

    proptest! {
        #[test]
        fn fractional_dimensions(v in 0.001f64..0.999, p in 0f64..10_000.) {
            let d = Dimension(v);
            prop_assert_eq!(d.resolved_size(p), (p * v).round());
            prop_assert_eq!(d.resolved_offset(p), (p * (1. - v) / 2.).round());
        }

        #[test]
        fn absolute_dimensions(v in 1f64..10_000., p in 0f64..10_000.) {
            let d = Dimension(v);
            prop_assert_eq!(d.resolved_size(p), v);
            prop_assert_eq!(d.resolved_offset(p), ((p - v) / 2.).round());
        }
    }
}
