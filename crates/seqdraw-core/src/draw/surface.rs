//! The drawing surface capability set.

use crate::geometry::{Point, Size};

/// A target that primitive drawing operations are issued against.
///
/// All coordinates are relative to the surface's current origin, which starts
/// at `(0, 0)` and is moved with [`translate_origin`](Self::translate_origin).
/// The active font size is scratch state: callers that change it are expected
/// to restore it before the next independent text operation.
pub trait DrawingSurface {
    /// Stroke the outline of a rectangle whose top-left corner is `origin`.
    fn stroke_rect(&mut self, origin: Point, size: Size);

    /// Measure the rendered width of `text` at the active font size.
    fn measure_text_width(&mut self, text: &str) -> f32;

    /// Draw `text` starting at `position`, never wider than `max_width`.
    ///
    /// `position.y()` is the vertical center of the text line.
    fn draw_text(&mut self, text: &str, position: Point, max_width: f32);

    /// Set the active font size in pixels.
    fn set_font(&mut self, size_px: f32);

    /// Draw a straight line segment.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Move the origin by `offset` for all subsequent operations.
    fn translate_origin(&mut self, offset: Point);
}
