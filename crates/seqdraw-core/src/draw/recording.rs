//! A headless drawing surface that records every call it receives.
//!
//! [`RecordingSurface`] lets the layout engine run without a graphics backend.
//! Tests compare the recorded [`DrawCall`] sequence against an expected one;
//! hosts can also replay a recording onto another surface.

use crate::{
    draw::DrawingSurface,
    geometry::{Point, Size},
};

/// Average glyph width as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

/// One recorded drawing operation.
///
/// Text measurement is a query, not a drawing operation, and is not recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    StrokeRect { origin: Point, size: Size },
    Text { text: String, position: Point, max_width: f32 },
    SetFont { size: f32 },
    Line { from: Point, to: Point },
    Translate { offset: Point },
}

/// A [`DrawingSurface`] that stores calls instead of rasterizing them.
///
/// Text is measured with a fixed per-character width of half the font size,
/// which makes layouts fully deterministic.
///
/// # Examples
///
/// ```
/// # use seqdraw_core::draw::{DrawCall, DrawingSurface, RecordingSurface};
/// # use seqdraw_core::geometry::Point;
/// let mut surface = RecordingSurface::new();
/// surface.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
///
/// assert_eq!(surface.calls().len(), 1);
/// assert!(matches!(surface.calls()[0], DrawCall::Line { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    font_size: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, in issue order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Consume the surface and return the recorded calls.
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// The currently active font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Issue every recorded call, in order, against another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) {
        for call in &self.calls {
            match call {
                DrawCall::StrokeRect { origin, size } => target.stroke_rect(*origin, *size),
                DrawCall::Text {
                    text,
                    position,
                    max_width,
                } => target.draw_text(text, *position, *max_width),
                DrawCall::SetFont { size } => target.set_font(*size),
                DrawCall::Line { from, to } => target.draw_line(*from, *to),
                DrawCall::Translate { offset } => target.translate_origin(*offset),
            }
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            font_size: 14.0,
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn stroke_rect(&mut self, origin: Point, size: Size) {
        self.calls.push(DrawCall::StrokeRect { origin, size });
    }

    fn measure_text_width(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_size * GLYPH_WIDTH_RATIO
    }

    fn draw_text(&mut self, text: &str, position: Point, max_width: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            max_width,
        });
    }

    fn set_font(&mut self, size_px: f32) {
        self.font_size = size_px;
        self.calls.push(DrawCall::SetFont { size: size_px });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.calls.push(DrawCall::Line { from, to });
    }

    fn translate_origin(&mut self, offset: Point) {
        self.calls.push(DrawCall::Translate { offset });
    }
}
