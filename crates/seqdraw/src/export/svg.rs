//! SVG drawing surface.

use log::debug;
use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use seqdraw_core::{
    color::Color,
    draw::{DrawingSurface, TextMeasurer},
    geometry::{Point, Size},
};

use crate::config::StyleConfig;

/// Space left around the drawn content.
const MARGIN: f32 = 20.0;

/// Smallest box containing everything drawn so far.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extents {
    min: Point,
    max: Point,
}

impl Extents {
    fn around(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    fn include(self, point: Point) -> Self {
        Self {
            min: Point::new(self.min.x().min(point.x()), self.min.y().min(point.y())),
            max: Point::new(self.max.x().max(point.x()), self.max.y().max(point.y())),
        }
    }

    fn size(&self) -> Size {
        Size::new(self.max.x() - self.min.x(), self.max.y() - self.min.y())
    }
}

/// A [`DrawingSurface`] that builds an SVG document.
///
/// Coordinates passed to the surface are relative to the current origin;
/// elements are stored at absolute positions. The document produced by
/// [`into_document`](Self::into_document) is sized to what was drawn, plus a
/// margin.
#[derive(Debug)]
pub struct SvgSurface {
    group: svg_element::Group,
    origin: Point,
    font_size: f32,
    measurer: TextMeasurer,
    stroke_color: Color,
    text_color: Color,
    background_color: Option<Color>,
    extents: Option<Extents>,
}

impl SvgSurface {
    /// Create an empty surface drawing with `style`, starting at `font_size`.
    pub fn new(style: &StyleConfig, font_size: f32) -> Self {
        Self {
            group: svg_element::Group::new(),
            origin: Point::default(),
            font_size,
            measurer: TextMeasurer::new(style.font_family()),
            stroke_color: style.stroke_color(),
            text_color: style.text_color(),
            background_color: style.background_color(),
            extents: None,
        }
    }

    fn absolute(&self, point: Point) -> Point {
        self.origin.add_point(point)
    }

    fn grow(&mut self, point: Point) {
        self.extents = Some(match self.extents {
            Some(extents) => extents.include(point),
            None => Extents::around(point),
        });
    }

    fn add(&mut self, node: impl Into<Box<dyn svg::Node>>) {
        let group = std::mem::replace(&mut self.group, svg_element::Group::new());
        self.group = group.add(node);
    }

    /// Finish drawing and return the SVG document.
    pub fn into_document(self) -> Document {
        let extents = self.extents.unwrap_or(Extents::around(Point::default()));
        let content = extents.size();
        let width = MARGIN.mul_add(2.0, content.width());
        let height = MARGIN.mul_add(2.0, content.height());
        debug!(width, height; "SVG dimensions");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", width, height))
            .set("width", width)
            .set("height", height);

        if let Some(background) = self.background_color {
            let bg = svg_element::Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", &background)
                .set("fill-opacity", background.alpha());
            doc = doc.add(bg);
        }

        let group = self.group.set(
            "transform",
            format!(
                "translate({}, {})",
                MARGIN - extents.min.x(),
                MARGIN - extents.min.y()
            ),
        );
        doc.add(group)
    }
}

impl DrawingSurface for SvgSurface {
    fn stroke_rect(&mut self, origin: Point, size: Size) {
        let origin = self.absolute(origin);
        self.grow(origin);
        self.grow(Point::new(
            origin.x() + size.width(),
            origin.y() + size.height(),
        ));

        let rect = svg_element::Rectangle::new()
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", "none")
            .set("stroke", &self.stroke_color)
            .set("stroke-opacity", self.stroke_color.alpha());
        self.add(rect);
    }

    fn measure_text_width(&mut self, text: &str) -> f32 {
        self.measurer.measure_width(text, self.font_size)
    }

    fn draw_text(&mut self, text: &str, position: Point, max_width: f32) {
        let position = self.absolute(position);
        let width = self.measure_text_width(text);
        let half_height = self.font_size / 2.0;
        self.grow(Point::new(position.x(), position.y() - half_height));
        self.grow(Point::new(
            position.x() + width.min(max_width.max(0.0)),
            position.y() + half_height,
        ));

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("dominant-baseline", "central")
            .set("font-family", self.measurer.font_family())
            .set("font-size", self.font_size)
            .set("fill", &self.text_color)
            .set("fill-opacity", self.text_color.alpha());

        // Squeeze text that is still too wide at the smallest font size.
        if width > max_width && max_width > 0.0 {
            rendered_text = rendered_text
                .set("textLength", max_width)
                .set("lengthAdjust", "spacingAndGlyphs");
        }

        self.add(rendered_text.add(SvgText::new(text)));
    }

    fn set_font(&mut self, size_px: f32) {
        self.font_size = size_px;
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let from = self.absolute(from);
        let to = self.absolute(to);
        self.grow(from);
        self.grow(to);

        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y())
            .set("stroke", &self.stroke_color)
            .set("stroke-opacity", self.stroke_color.alpha());
        self.add(line);
    }

    fn translate_origin(&mut self, offset: Point) {
        self.origin = self.origin.add_point(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SvgSurface {
        SvgSurface::new(&StyleConfig::default(), 14.0)
    }

    #[test]
    fn test_empty_document_is_margin_only() {
        let svg = surface().into_document().to_string();

        assert!(svg.contains("viewBox=\"0 0 40 40\""));
    }

    #[test]
    fn test_shapes_are_placed_relative_to_origin() {
        let mut surface = surface();
        surface.translate_origin(Point::new(100.0, 0.0));
        surface.stroke_rect(Point::new(0.0, 0.0), Size::new(50.0, 20.0));
        surface.draw_line(Point::new(25.0, 20.0), Point::new(25.0, 120.0));

        let svg = surface.into_document().to_string();

        assert!(svg.contains("<rect"));
        assert!(svg.contains("x=\"100\""));
        assert!(svg.contains("x1=\"125\""));
        // Content spans 50 x 120 plus the margin on each side.
        assert!(svg.contains("viewBox=\"0 0 90 160\""));
        assert!(svg.contains("translate(-80, 20)"));
    }

    #[test]
    fn test_text_uses_active_font_size() {
        let mut surface = surface();
        surface.set_font(9.0);
        surface.draw_text("hello", Point::new(0.0, 10.0), 100.0);

        let svg = surface.into_document().to_string();

        assert!(svg.contains("font-size=\"9\""));
        assert!(svg.contains("hello"));
        assert!(!svg.contains("textLength"));
    }

    #[test]
    fn test_text_wider_than_max_is_squeezed() {
        let mut surface = surface();
        surface.draw_text("much too long for the space", Point::new(0.0, 0.0), 5.0);

        let svg = surface.into_document().to_string();
        assert!(svg.contains("textLength=\"5\""));
    }

    #[test]
    fn test_no_background_by_default() {
        let svg = surface().into_document().to_string();
        assert!(!svg.contains("100%"));
    }
}
