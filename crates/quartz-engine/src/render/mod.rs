//! The render engine.
//!
//! [`RenderEngine`] performs one-time GPU setup on its first `display` call
//! and then replays the same four-draw sequence every frame, reading geometry
//! from the world's model and orientation from the world's time.

mod engine;

pub mod transforms;

pub use engine::RenderEngine;
