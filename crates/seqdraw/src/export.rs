//! Export backends for rendered diagrams.
//!
//! The layout engine only talks to a [`DrawingSurface`]. An export backend is
//! a surface that turns those calls into an output format.
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`SvgSurface`]
//!
//! [`DrawingSurface`]: seqdraw_core::draw::DrawingSurface

pub mod svg;

pub use svg::SvgSurface;
