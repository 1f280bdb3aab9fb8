//! Drawing capability set and primitives.
//!
//! The layout engine never talks to a concrete graphics backend. Everything it
//! draws goes through the [`DrawingSurface`] trait, which hosts implement
//! (the SVG exporter in the `seqdraw` crate, a canvas in an editor, ...).
//!
//! # Overview
//!
//! - [`DrawingSurface`] - the six primitive operations a host must provide
//! - [`ArrowHead`] / [`draw_arrow`] - a line with an arrowhead at its destination
//! - [`FontFit`] / [`fit_text`] - shrink-to-fit font sizing with an explicit floor
//! - [`RecordingSurface`] / [`DrawCall`] - a headless surface that records calls
//! - [`TextMeasurer`] - font-metric based text measurement for real backends

mod arrow;
mod recording;
mod surface;
mod text;

pub use arrow::{ArrowHead, draw_arrow};
pub use recording::{DrawCall, RecordingSurface};
pub use surface::DrawingSurface;
pub use text::{FittedText, FontFit, TextMeasurer, fit_text};
