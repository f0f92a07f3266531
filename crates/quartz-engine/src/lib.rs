//! Quartz engine crate.
//!
//! This crate owns the OpenGL device layer, the clock geometry model, and the
//! per-frame render engine used by the `quartz-clock` binary.

pub mod gfx;
pub mod model;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
pub mod world;

pub mod logging;

mod error;

pub use error::EngineError;
