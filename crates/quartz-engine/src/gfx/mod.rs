//! Graphics device layer.
//!
//! This module is the seam between the render engine and the GPU:
//! - [`GfxDevice`] is the narrow interface the engine draws through
//! - [`GlowDevice`] implements it over a live OpenGL context via `glow`
//!
//! Everything above this module is testable without a driver by substituting
//! the trait.

mod device;
mod glow_device;
mod version;

pub use device::{DrawMode, GfxDevice, GfxError};
pub(crate) use device::gl_error_name;
pub use glow_device::GlowDevice;
pub use version::GlVersion;
