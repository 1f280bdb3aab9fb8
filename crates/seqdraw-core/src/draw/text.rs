//! Text measurement and shrink-to-fit font sizing.
//!
//! - [`FontFit`] - the font sizing policy (default size, decrement, floor)
//! - [`fit_text`] - shrinks the surface font until a label fits a width
//! - [`TextMeasurer`] - cosmic-text based measurement for real backends

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{info, trace};

use crate::draw::DrawingSurface;

/// Smallest font size any fit policy may shrink to.
const ABSOLUTE_MIN_FONT_SIZE: f32 = 1.0;

/// Largest font size any fit policy may start from.
const MAX_FONT_SIZE: f32 = 512.0;

/// Smallest decrement.
const MIN_FONT_STEP: f32 = 0.5;

/// Policy for fitting a label into a fixed width by shrinking its font.
///
/// # Examples
///
/// ```
/// # use seqdraw_core::draw::FontFit;
/// let fit = FontFit::new(14.0, 1.0, 6.0);
/// assert_eq!(fit.default_size(), 14.0);
///
/// // A floor below one pixel is raised to one pixel.
/// let fit = FontFit::new(14.0, 1.0, -3.0);
/// assert_eq!(fit.min_size(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFit {
    default_size: f32,
    step: f32,
    min_size: f32,
}

impl FontFit {
    /// Creates a fit policy.
    ///
    /// Sizes are clamped to between one and 512 pixels, with the default never
    /// below the floor. The step is clamped to between half a pixel and the
    /// largest size. NaN falls to the lower bound.
    pub fn new(default_size: f32, step: f32, min_size: f32) -> Self {
        let min_size = bounded(min_size, ABSOLUTE_MIN_FONT_SIZE, MAX_FONT_SIZE);
        Self {
            default_size: bounded(default_size, min_size, MAX_FONT_SIZE),
            step: bounded(step, MIN_FONT_STEP, MAX_FONT_SIZE),
            min_size,
        }
    }

    /// How many steps fit between the default size and the floor.
    fn max_steps(&self) -> u32 {
        ((self.default_size - self.min_size) / self.step).floor() as u32
    }

    /// The size after `steps` decrements, never below the floor.
    fn size_after(&self, steps: u32) -> f32 {
        (self.default_size - steps as f32 * self.step).max(self.min_size)
    }

    pub fn default_size(&self) -> f32 {
        self.default_size
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    /// Put the surface back to the default font size.
    pub fn restore<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_font(self.default_size);
    }
}

impl Default for FontFit {
    fn default() -> Self {
        Self::new(14.0, 1.0, 6.0)
    }
}

/// The outcome of [`fit_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedText {
    /// The font size the label will be drawn at.
    pub font_size: f32,
    /// The measured width at that font size.
    pub width: f32,
}

/// Shrink the surface font until `text` fits within `max_width`.
///
/// The surface font is first reset to the policy's default, so the decision
/// never depends on whatever size a previous label left behind. The font is
/// then lowered by the policy step until the text fits or the next step would
/// go below the floor. A label that never fits stays at the smallest size
/// reached. The number of steps is bounded by the policy, whatever the input.
///
/// The surface is left at the returned font size; call [`FontFit::restore`]
/// once the text has been drawn.
pub fn fit_text<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    max_width: f32,
    fit: &FontFit,
) -> FittedText {
    let mut font_size = fit.default_size();
    surface.set_font(font_size);
    let mut width = surface.measure_text_width(text);

    for steps in 1..=fit.max_steps() {
        if width <= max_width {
            break;
        }
        font_size = fit.size_after(steps);
        surface.set_font(font_size);
        width = surface.measure_text_width(text);
    }

    trace!(text, font_size, width, max_width; "Fitted text");
    FittedText { font_size, width }
}

/// Measures text with real font metrics using cosmic-text.
///
/// The underlying `FontSystem` is expensive to build, so a single instance is
/// shared by every measurer in the process.
#[derive(Debug, Clone)]
pub struct TextMeasurer {
    font_family: String,
}

impl TextMeasurer {
    /// Creates a measurer for the given font family (e.g. "Arial", "monospace").
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Calculate the rendered width of a single line of text in pixels.
    ///
    /// Falls back to an average glyph width estimate when no font could shape
    /// the text (for instance on a machine without any installed fonts).
    pub fn measure_width(&self, text: &str, font_size_px: f32) -> f32 {
        if text.is_empty() || font_size_px <= 0.0 {
            return 0.0;
        }

        let mut font_system = font_system()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(&self.font_family));

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|last| last.x + last.w))
            .fold(0.0_f32, f32::max);

        if width > 0.0 {
            width
        } else {
            text.chars().count() as f32 * font_size_px * 0.55
        }
    }
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self::new("Arial")
    }
}

/// Clamp `value` into `low..=high`; NaN becomes `low`.
fn bounded(value: f32, low: f32, high: f32) -> f32 {
    if value.is_nan() {
        low
    } else {
        value.clamp(low, high)
    }
}

fn font_system() -> &'static Mutex<FontSystem> {
    static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();
    FONT_SYSTEM.get_or_init(|| {
        info!("Initializing FontSystem");
        Mutex::new(FontSystem::new())
    })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::draw::{DrawCall, RecordingSurface};

    #[test]
    fn test_font_fit_clamps() {
        let fit = FontFit::new(4.0, 0.0, 0.0);
        assert_approx_eq!(f32, fit.min_size(), 1.0);
        assert_approx_eq!(f32, fit.step(), 0.5);
        assert_approx_eq!(f32, fit.default_size(), 4.0);

        let fit = FontFit::new(3.0, 1.0, 8.0);
        assert_approx_eq!(f32, fit.default_size(), 8.0);
    }

    #[test]
    fn test_font_fit_bounds_extreme_sizes() {
        let fit = FontFit::new(1.0e8, 1.0, 6.0);
        assert_approx_eq!(f32, fit.default_size(), 512.0);

        let fit = FontFit::new(f32::INFINITY, f32::NAN, f32::NEG_INFINITY);
        assert_approx_eq!(f32, fit.default_size(), 512.0);
        assert_approx_eq!(f32, fit.step(), 0.5);
        assert_approx_eq!(f32, fit.min_size(), 1.0);

        let fit = FontFit::new(f32::NAN, f32::INFINITY, 6.0);
        assert_approx_eq!(f32, fit.default_size(), 6.0);
        assert_approx_eq!(f32, fit.step(), 512.0);
    }

    #[test]
    fn test_fit_text_huge_default_reaches_floor() {
        let mut surface = RecordingSurface::new();
        let fit = FontFit::new(1.0e8, 1.0, 6.0);

        let fitted = fit_text(&mut surface, "label", 10.0, &fit);

        assert_approx_eq!(f32, fitted.font_size, 6.0);
        // One reset plus one call per step from 512 down to 6.
        assert_eq!(surface.calls().len(), 1 + 506);
    }

    #[test]
    fn test_fit_text_uneven_step_stops_above_floor() {
        let mut surface = RecordingSurface::new();
        let fit = FontFit::new(14.0, 3.0, 6.0);

        let fitted = fit_text(&mut surface, "never fits", 0.0, &fit);

        // 14, 11, 8; another step would go below 6.
        assert_approx_eq!(f32, fitted.font_size, 8.0);
    }

    #[test]
    fn test_fit_text_keeps_default_when_it_fits() {
        let mut surface = RecordingSurface::new();
        let fit = FontFit::default();

        let fitted = fit_text(&mut surface, "ok", 1000.0, &fit);

        assert_approx_eq!(f32, fitted.font_size, 14.0);
        assert_eq!(surface.calls(), &[DrawCall::SetFont { size: 14.0 }]);
    }

    #[test]
    fn test_fit_text_shrinks_until_it_fits() {
        let mut surface = RecordingSurface::new();
        let fit = FontFit::new(14.0, 1.0, 6.0);

        // 10 chars at half the font size per char: fits once size <= 10.
        let fitted = fit_text(&mut surface, "abcdefghij", 50.0, &fit);

        assert_approx_eq!(f32, fitted.font_size, 10.0);
        assert!(fitted.width <= 50.0);
        assert_approx_eq!(f32, surface.font_size(), 10.0);
    }

    #[test]
    fn test_fit_text_stops_at_floor() {
        let mut surface = RecordingSurface::new();
        let fit = FontFit::new(14.0, 1.0, 6.0);

        let fitted = fit_text(&mut surface, "this label will never fit", 0.0, &fit);

        assert_approx_eq!(f32, fitted.font_size, 6.0);
        assert!(fitted.width > 0.0);
    }

    #[test]
    fn test_fit_text_resets_before_measuring() {
        let mut surface = RecordingSurface::new();
        let fit = FontFit::default();

        surface.set_font(3.0);
        fit_text(&mut surface, "x", 100.0, &fit);

        assert_eq!(surface.calls()[1], DrawCall::SetFont { size: 14.0 });
    }

    #[test]
    fn test_restore_sets_default() {
        let mut surface = RecordingSurface::new();
        let fit = FontFit::new(20.0, 2.0, 6.0);

        fit_text(&mut surface, "shrink me please", 10.0, &fit);
        fit.restore(&mut surface);

        assert_approx_eq!(f32, surface.font_size(), 20.0);
    }

    #[test]
    fn test_measurer_empty_text() {
        let measurer = TextMeasurer::default();
        assert_approx_eq!(f32, measurer.measure_width("", 14.0), 0.0);
        assert_approx_eq!(f32, measurer.measure_width("abc", 0.0), 0.0);
    }

    #[test]
    fn test_measurer_larger_font_is_wider() {
        let measurer = TextMeasurer::default();
        let small = measurer.measure_width("Sequence", 10.0);
        let large = measurer.measure_width("Sequence", 20.0);
        assert!(small > 0.0);
        assert!(large > small);
    }

    proptest! {
        #[test]
        fn prop_fit_text_never_below_floor(
            text in "[a-z ]{0,40}",
            max_width in -10.0f32..400.0,
            default_size in prop_oneof![1.0f32..40.0, Just(1.0e8f32), Just(f32::INFINITY)],
            step in -1.0f32..5.0,
            min_size in -5.0f32..20.0,
        ) {
            let mut surface = RecordingSurface::new();
            let fit = FontFit::new(default_size, step, min_size);

            let fitted = fit_text(&mut surface, &text, max_width, &fit);

            prop_assert!(fitted.font_size >= fit.min_size());
            prop_assert!(fitted.font_size <= fit.default_size());
        }
    }
}
