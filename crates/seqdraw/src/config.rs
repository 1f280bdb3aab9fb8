//! Configuration types for seqdraw diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] and
//! every field has a default, so a configuration file only needs to list the
//! values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Box sizes, spacing and font sizing used by the layout engine.
//! - [`StyleConfig`] - Colors and font family used when exporting.
//!
//! # Example
//!
//! ```
//! # use seqdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().width(), 1200.0);
//! assert_eq!(config.style().font_family(), "Arial");
//! ```

use serde::Deserialize;

use seqdraw_core::color::Color;

use crate::layout::{Engine, EngineBuilder};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns this configuration with a different available width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.layout = self.layout.with_width(width);
        self
    }
}

/// Largest font size a layout may ask for, in pixels.
const MAX_FONT_SIZE: f32 = 512.0;

/// Layout constants for the sequence diagram engine.
///
/// Font sizes are in pixels. `min_font_size` is the floor labels shrink to
/// when they do not fit; it is never below one pixel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    max_box_width: f32,
    box_height: f32,
    spacing: f32,
    vertical_spacing: f32,
    lifeline_increment: f32,
    label_padding: f32,
    label_gap: f32,
    default_font_size: f32,
    font_size_step: f32,
    min_font_size: f32,
    /// Width available to the diagram.
    width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_box_width: 200.0,
            box_height: 80.0,
            spacing: 100.0,
            vertical_spacing: 50.0,
            lifeline_increment: 100.0,
            label_padding: 40.0,
            label_gap: 3.0,
            default_font_size: 14.0,
            font_size_step: 1.0,
            min_font_size: 6.0,
            width: 1200.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the width available to the diagram.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns a copy of this configuration with a different available width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Check that every constant is usable.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first field that is not a finite number,
    /// or the first font size outside `0 < size <= 512`.
    pub fn validate(&self) -> Result<(), String> {
        let lengths = [
            ("max_box_width", self.max_box_width),
            ("box_height", self.box_height),
            ("spacing", self.spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("lifeline_increment", self.lifeline_increment),
            ("label_padding", self.label_padding),
            ("label_gap", self.label_gap),
        ];
        if let Some((name, value)) = lengths.iter().find(|(_, value)| !value.is_finite()) {
            return Err(format!("layout.{name} must be a finite number, got {value}"));
        }

        let font_sizes = [
            ("default_font_size", self.default_font_size),
            ("font_size_step", self.font_size_step),
            ("min_font_size", self.min_font_size),
        ];
        for (name, size) in font_sizes {
            if !(size > 0.0 && size <= MAX_FONT_SIZE) {
                return Err(format!(
                    "layout.{name} must be above 0 and at most {MAX_FONT_SIZE} pixels, got {size}"
                ));
            }
        }

        Ok(())
    }

    pub fn box_height(&self) -> f32 {
        self.box_height
    }

    pub fn default_font_size(&self) -> f32 {
        self.default_font_size
    }

    /// Build a layout engine with these constants.
    pub fn engine(&self) -> Engine {
        EngineBuilder::new()
            .with_max_box_width(self.max_box_width)
            .with_box_height(self.box_height)
            .with_spacing(self.spacing)
            .with_vertical_spacing(self.vertical_spacing)
            .with_lifeline_increment(self.lifeline_increment)
            .with_label_padding(self.label_padding)
            .with_label_gap(self.label_gap)
            .with_font_sizes(
                self.default_font_size,
                self.font_size_step,
                self.min_font_size,
            )
            .build()
    }
}

/// Visual styling configuration for exported diagrams.
///
/// Colors are CSS color strings such as `"navy"` or `"#f0f0f0"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill behind the whole diagram; transparent when unset.
    background_color: Option<Color>,
    /// Color of boxes, lifelines and arrows.
    stroke_color: Color,
    /// Color of labels; the stroke color when unset.
    text_color: Option<Color>,
    font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            stroke_color: Color::default(),
            text_color: None,
            font_family: "Arial".to_string(),
        }
    }
}

impl StyleConfig {
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Returns the label color, falling back to the stroke color.
    pub fn text_color(&self) -> Color {
        self.text_color.unwrap_or(self.stroke_color)
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}
