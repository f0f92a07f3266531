use std::fmt;

use glam::Mat4;
use thiserror::Error;

use crate::shader::ShaderSources;

use super::GlVersion;

/// Errors raised by a graphics device.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("failed to allocate {what}: {detail}")]
    Allocation { what: &'static str, detail: String },

    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("shader program failed to link: {log}")]
    Link { log: String },

    #[error("shader program has no `{name}` attribute")]
    MissingAttribute { name: &'static str },
}

/// Primitive assembly mode for a draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawMode {
    Lines,
    LineLoop,
}

/// The narrow graphics interface the render engine draws through.
///
/// A real implementation wraps a live OpenGL context ([`super::GlowDevice`]);
/// tests substitute a recording stub. Handle types are associated so each
/// backend keeps its native representation.
///
/// Error reporting is split in two: resource creation returns [`GfxError`],
/// while per-call driver errors accumulate in the device's error state and are
/// drained with [`poll_error`](GfxDevice::poll_error).
pub trait GfxDevice {
    type Program: Copy + fmt::Debug;
    type VertexArray: Copy + fmt::Debug;
    type Buffer: Copy + fmt::Debug;
    type Uniform: Clone + fmt::Debug;

    /// Version reported by the driver once the function loader is live.
    fn driver_version(&self) -> GlVersion;

    /// Compiles and links a program from a vertex/fragment source pair.
    fn create_program(&mut self, sources: &ShaderSources) -> Result<Self::Program, GfxError>;
    fn delete_program(&mut self, program: Self::Program);
    fn use_program(&mut self, program: Option<Self::Program>);

    /// Looks up a vertex attribute location by name. `None` if the linked
    /// program has no active attribute under that name.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;

    /// Looks up a uniform location by name. Drivers may eliminate unused
    /// uniforms, so `None` here is not necessarily a defect.
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::Uniform>;

    fn create_vertex_array(&mut self) -> Result<Self::VertexArray, GfxError>;
    fn delete_vertex_array(&mut self, array: Self::VertexArray);
    fn bind_vertex_array(&mut self, array: Option<Self::VertexArray>);

    fn create_buffer(&mut self) -> Result<Self::Buffer, GfxError>;
    fn delete_buffer(&mut self, buffer: Self::Buffer);

    /// Uploads `bytes` into `buffer` as static draw data.
    fn upload_static(&mut self, buffer: Self::Buffer, bytes: &[u8]);

    /// Points attribute `location` at `buffer` as tightly packed f32 data
    /// with `components` components per vertex, and enables it on the bound
    /// vertex array.
    fn float_attribute(&mut self, buffer: Self::Buffer, location: u32, components: i32);

    fn set_uniform_f32(&mut self, location: &Self::Uniform, value: f32);
    fn set_uniform_mat4(&mut self, location: &Self::Uniform, value: &Mat4);

    /// Clears the color buffer to `color` (RGBA).
    fn clear(&mut self, color: [f32; 4]);

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32);

    fn set_viewport(&mut self, width: i32, height: i32);

    /// Pops one pending driver error, or `None` when the error state is clean.
    fn poll_error(&mut self) -> Option<u32>;
}

/// Human-readable name for a GL error code, for diagnostics.
pub(crate) fn gl_error_name(code: u32) -> &'static str {
    match code {
        0x0500 => "INVALID_ENUM",
        0x0501 => "INVALID_VALUE",
        0x0502 => "INVALID_OPERATION",
        0x0503 => "STACK_OVERFLOW",
        0x0504 => "STACK_UNDERFLOW",
        0x0505 => "OUT_OF_MEMORY",
        0x0506 => "INVALID_FRAMEBUFFER_OPERATION",
        _ => "UNKNOWN",
    }
}
