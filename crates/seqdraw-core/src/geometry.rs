//! Geometric primitives for diagram layout and drawing.
//!
//! # Coordinate System
//!
//! seqdraw uses a coordinate system consistent with SVG and the HTML canvas:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use seqdraw_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a copy of this point with a different y-coordinate.
    pub fn with_y(self, y: f32) -> Self {
        Self { x: self.x, y }
    }

    /// Adds another point component-wise.
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts another point component-wise.
    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns the negated point, useful for undoing a translation.
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_sub_and_negate() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 1.5);

        let diff = a.sub_point(b);
        assert_approx_eq!(f32, diff.x(), 2.0);
        assert_approx_eq!(f32, diff.y(), 2.5);

        let back = diff.add_point(b);
        assert_eq!(back, a);

        assert_eq!(a.negate(), Point::new(-3.0, -4.0));
    }

    #[test]
    fn test_point_with_y() {
        let p = Point::new(7.0, 1.0).with_y(42.0);
        assert_approx_eq!(f32, p.x(), 7.0);
        assert_approx_eq!(f32, p.y(), 42.0);
    }

    #[test]
    fn test_size_accessors() {
        let size = Size::new(120.0, 80.0);
        assert_approx_eq!(f32, size.width(), 120.0);
        assert_approx_eq!(f32, size.height(), 80.0);
        assert_eq!(Size::default(), Size::new(0.0, 0.0));
    }
}
