//! Layout and drawing of sequence diagrams.
//!
//! - [`ActorRegistry`] - declared actors and their column indices
//! - [`Engine`] / [`EngineBuilder`] - the two-pass layout engine

mod engine;
mod registry;

pub use engine::{Engine, EngineBuilder};
pub use registry::{Actor, ActorRegistry};
