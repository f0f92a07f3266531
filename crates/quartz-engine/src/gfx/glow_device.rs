use std::ffi::c_void;

use glam::Mat4;
use glow::HasContext;

use crate::shader::ShaderSources;

use super::{DrawMode, GfxDevice, GfxError, GlVersion};

/// [`GfxDevice`] implementation over a live OpenGL context.
///
/// All raw GL calls live here; the rest of the engine goes through the trait.
/// The context behind the loader must stay current on the calling thread for
/// the lifetime of the device.
pub struct GlowDevice {
    gl: glow::Context,
}

impl GlowDevice {
    /// Builds the device from a GL function loader.
    ///
    /// # Safety
    ///
    /// `loader` must resolve symbols against a context that is current on this
    /// thread and stays current while the device is in use.
    pub unsafe fn from_loader_function<F>(loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        let gl = glow::Context::from_loader_function(loader);
        Self { gl }
    }
}

impl GfxDevice for GlowDevice {
    type Program = glow::Program;
    type VertexArray = glow::VertexArray;
    type Buffer = glow::Buffer;
    type Uniform = glow::UniformLocation;

    fn driver_version(&self) -> GlVersion {
        let raw = unsafe { self.gl.get_parameter_string(glow::VERSION) };
        parse_gl_version(&raw).unwrap_or(GlVersion::new(0, 0))
    }

    fn create_program(&mut self, sources: &ShaderSources) -> Result<Self::Program, GfxError> {
        let stages = [
            (glow::VERTEX_SHADER, "vertex", sources.vertex.as_str()),
            (glow::FRAGMENT_SHADER, "fragment", sources.fragment.as_str()),
        ];

        unsafe {
            let program = self
                .gl
                .create_program()
                .map_err(|detail| GfxError::Allocation { what: "program", detail })?;

            let mut shaders = Vec::with_capacity(stages.len());
            for (kind, stage, source) in stages {
                let shader = self
                    .gl
                    .create_shader(kind)
                    .map_err(|detail| GfxError::Allocation { what: "shader", detail })?;

                self.gl.shader_source(shader, source);
                self.gl.compile_shader(shader);

                if !self.gl.get_shader_compile_status(shader) {
                    let log = self.gl.get_shader_info_log(shader);
                    self.gl.delete_shader(shader);
                    self.gl.delete_program(program);
                    return Err(GfxError::Compile { stage, log });
                }

                self.gl.attach_shader(program, shader);
                shaders.push(shader);
            }

            self.gl.link_program(program);

            // Shaders are no longer needed once the program is linked.
            for shader in shaders {
                self.gl.detach_shader(program, shader);
                self.gl.delete_shader(shader);
            }

            if !self.gl.get_program_link_status(program) {
                let log = self.gl.get_program_info_log(program);
                self.gl.delete_program(program);
                return Err(GfxError::Link { log });
            }

            Ok(program)
        }
    }

    fn delete_program(&mut self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) };
    }

    fn use_program(&mut self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) };
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::Uniform> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn create_vertex_array(&mut self) -> Result<Self::VertexArray, GfxError> {
        unsafe {
            self.gl
                .create_vertex_array()
                .map_err(|detail| GfxError::Allocation { what: "vertex array", detail })
        }
    }

    fn delete_vertex_array(&mut self, array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(array) };
    }

    fn bind_vertex_array(&mut self, array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(array) };
    }

    fn create_buffer(&mut self) -> Result<Self::Buffer, GfxError> {
        unsafe {
            self.gl
                .create_buffer()
                .map_err(|detail| GfxError::Allocation { what: "buffer", detail })
        }
    }

    fn delete_buffer(&mut self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) };
    }

    fn upload_static(&mut self, buffer: Self::Buffer, bytes: &[u8]) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    fn float_attribute(&mut self, buffer: Self::Buffer, location: u32, components: i32) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.enable_vertex_attrib_array(location);
            self.gl
                .vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, 0, 0);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    fn set_uniform_f32(&mut self, location: &Self::Uniform, value: f32) {
        unsafe { self.gl.uniform_1_f32(Some(location), value) };
    }

    fn set_uniform_mat4(&mut self, location: &Self::Uniform, value: &Mat4) {
        // glam matrices are column-major, as GL expects; no transposition.
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(location), false, &value.to_cols_array())
        };
    }

    fn clear(&mut self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) {
        let mode = match mode {
            DrawMode::Lines => glow::LINES,
            DrawMode::LineLoop => glow::LINE_LOOP,
        };
        unsafe { self.gl.draw_arrays(mode, first, count) };
    }

    fn set_viewport(&mut self, width: i32, height: i32) {
        unsafe { self.gl.viewport(0, 0, width, height) };
    }

    fn poll_error(&mut self) -> Option<u32> {
        let code = unsafe { self.gl.get_error() };
        if code == glow::NO_ERROR { None } else { Some(code) }
    }
}

/// Parses the leading "major.minor" out of a GL_VERSION string.
///
/// Desktop drivers report e.g. "3.3.0 NVIDIA 535.86"; GLES prepends
/// "OpenGL ES" before the number.
fn parse_gl_version(raw: &str) -> Option<GlVersion> {
    let numeric = raw
        .split_whitespace()
        .find(|tok| tok.starts_with(|c: char| c.is_ascii_digit()))?;

    let mut parts = numeric.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts
        .next()
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);

    Some(GlVersion::new(major, minor))
}
