use thiserror::Error;

use crate::gfx::{GfxError, GlVersion};
use crate::shader::ShaderError;

/// Errors produced by the render engine.
///
/// `UnsupportedDriver` replaces the classic print-and-exit path: the engine
/// reports the probed version and leaves the decision to terminate to the
/// caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("OpenGL is not supported by this driver (reported version {version})")]
    UnsupportedDriver { version: GlVersion },

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Gfx(#[from] GfxError),
}
