//! Arrow drawing primitive.

use std::f32::consts::FRAC_PI_6;

use crate::{draw::DrawingSurface, geometry::Point};

/// Shape of the open arrowhead drawn at an arrow's destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Length of each of the two head strokes.
    length: f32,
    /// Angle between the shaft and each head stroke, in radians.
    angle: f32,
}

impl ArrowHead {
    pub fn new(length: f32, angle: f32) -> Self {
        Self { length, angle }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The two outer points of the head for an arrow from `from` to `to`.
    fn barbs(&self, from: Point, to: Point) -> (Point, Point) {
        let shaft = to.sub_point(from);
        let heading = shaft.y().atan2(shaft.x());

        let barb = |theta: f32| {
            to.sub_point(Point::new(
                self.length * theta.cos(),
                self.length * theta.sin(),
            ))
        };

        (barb(heading - self.angle), barb(heading + self.angle))
    }
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self::new(10.0, FRAC_PI_6)
    }
}

/// Draw a line from `from` to `to` with an open arrowhead at `to`.
///
/// The shaft is drawn first, then the two head strokes, always in the same
/// order so recorded call sequences are stable.
pub fn draw_arrow<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    head: &ArrowHead,
) {
    surface.draw_line(from, to);

    let (left, right) = head.barbs(from, to);
    surface.draw_line(to, left);
    surface.draw_line(to, right);
}
