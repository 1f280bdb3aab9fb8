//! Seqdraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by the seqdraw parser,
//! layout engine and export backends. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: The [`draw::DrawingSurface`] capability set and the primitives
//!   built on top of it ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
