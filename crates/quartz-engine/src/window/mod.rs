//! Windowed runtime.
//!
//! Owns the platform pieces the engine itself stays ignorant of: the event
//! loop, the GL window/context pair, and the frame-driving loop.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
