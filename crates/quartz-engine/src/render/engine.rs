use log::{info, warn};

use crate::error::EngineError;
use crate::gfx::{gl_error_name, GfxDevice, GfxError};
use crate::model::{ClockPart, Model};
use crate::shader::{ShaderPaths, ShaderSources};
use crate::world::WorldState;

use super::transforms;

/// GPU resources owned by an initialized engine.
///
/// Created as a unit by the first `display` call and released as a unit by
/// `destroy`; the buffers are retained here so they can be freed instead of
/// leaking with the context.
struct GpuState<D: GfxDevice> {
    program: D::Program,
    vertex_array: D::VertexArray,
    position_buffer: D::Buffer,
    color_buffer: D::Buffer,
    time_uniform: Option<D::Uniform>,
    transform_uniform: Option<D::Uniform>,
}

/// Draws the clock model once per frame.
///
/// Two states only: uninitialized (`gpu` is `None`) and ready. The first
/// `display` call performs one-time setup — driver probe, shader compile,
/// buffer upload — and the transition is irreversible for the instance's
/// lifetime. GPU errors detected between pipeline stages are logged by stage
/// name and rendering continues; only setup failures propagate.
pub struct RenderEngine<D: GfxDevice> {
    shader_paths: ShaderPaths,
    clear_color: [f32; 4],
    gpu: Option<GpuState<D>>,
}

impl<D: GfxDevice> RenderEngine<D> {
    pub fn new(shader_paths: ShaderPaths) -> Self {
        Self {
            shader_paths,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            gpu: None,
        }
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Whether one-time setup has completed.
    pub fn is_ready(&self) -> bool {
        self.gpu.is_some()
    }

    /// Renders one frame of `world`.
    ///
    /// On the first call this performs one-time setup using the world's model;
    /// an unsupported driver or a setup failure is returned to the caller and
    /// leaves the engine uninitialized.
    pub fn display(&mut self, device: &mut D, world: &WorldState) -> Result<(), EngineError> {
        if self.gpu.is_none() {
            self.gpu = Some(initialize(device, &self.shader_paths, world.model())?);
        }
        let state = self.gpu.as_ref().expect("gpu state initialized above");

        let model = world.model();
        let time = world.current_time();

        device.clear(self.clear_color);
        report_stage_errors(device, "clear");

        device.use_program(Some(state.program));
        device.bind_vertex_array(Some(state.vertex_array));

        if let Some(location) = &state.time_uniform {
            device.set_uniform_f32(location, time);
        }
        report_stage_errors(device, "uniform");

        for part in ClockPart::ALL {
            if let Some(location) = &state.transform_uniform {
                device.set_uniform_mat4(location, &transforms::part_transform(part, time));
            }
            let range = model.part_range(part);
            device.draw_arrays(part.draw_mode(), range.first, range.count);
        }
        report_stage_errors(device, "draw");

        device.bind_vertex_array(None);
        device.use_program(None);
        report_stage_errors(device, "render");

        Ok(())
    }

    /// Releases the GPU resources. Safe to call repeatedly; only the first
    /// call after initialization does anything.
    pub fn destroy(&mut self, device: &mut D) {
        if let Some(state) = self.gpu.take() {
            device.delete_program(state.program);
            device.delete_vertex_array(state.vertex_array);
            device.delete_buffer(state.position_buffer);
            device.delete_buffer(state.color_buffer);
        }
    }
}

impl<D: GfxDevice> Drop for RenderEngine<D> {
    fn drop(&mut self) {
        // Freeing needs the device, so Drop can only report the leak.
        if self.gpu.is_some() {
            warn!("render engine dropped while still holding GPU resources; call destroy() first");
        }
    }
}

/// One-time setup: driver probe, shader compile/link, location lookup, vertex
/// array and buffer upload.
fn initialize<D: GfxDevice>(
    device: &mut D,
    shader_paths: &ShaderPaths,
    model: &Model,
) -> Result<GpuState<D>, EngineError> {
    let version = device.driver_version();
    if !version.is_supported() {
        return Err(EngineError::UnsupportedDriver { version });
    }
    info!("OpenGL version {version} is supported");

    let sources = ShaderSources::load(shader_paths)?;
    let program = device.create_program(&sources)?;
    report_stage_errors(device, "shader");

    let position_attrib = require_attrib(device, program, "pos")?;
    let color_attrib = require_attrib(device, program, "color")?;

    let time_uniform = device.uniform_location(program, "time");
    if time_uniform.is_none() {
        warn!("shader has no active `time` uniform; time uploads will be skipped");
    }
    let transform_uniform = device.uniform_location(program, "T");
    if transform_uniform.is_none() {
        warn!("shader has no active `T` uniform; transform uploads will be skipped");
    }

    let vertex_array = device.create_vertex_array()?;
    device.bind_vertex_array(Some(vertex_array));

    let position_buffer = device.create_buffer()?;
    device.upload_static(position_buffer, model.position_bytes());
    device.float_attribute(position_buffer, position_attrib, 2);

    let color_buffer = device.create_buffer()?;
    device.upload_static(color_buffer, model.color_bytes());
    device.float_attribute(color_buffer, color_attrib, 4);

    device.bind_vertex_array(None);
    report_stage_errors(device, "setup");

    Ok(GpuState {
        program,
        vertex_array,
        position_buffer,
        color_buffer,
        time_uniform,
        transform_uniform,
    })
}

fn require_attrib<D: GfxDevice>(
    device: &mut D,
    program: D::Program,
    name: &'static str,
) -> Result<u32, EngineError> {
    match device.attrib_location(program, name) {
        Some(location) => Ok(location),
        None => {
            device.delete_program(program);
            Err(GfxError::MissingAttribute { name }.into())
        }
    }
}

/// Drains the device error state and logs each code under `stage`.
///
/// Non-fatal by design: the frame proceeds regardless of what the driver
/// queued up.
fn report_stage_errors<D: GfxDevice>(device: &mut D, stage: &str) {
    let mut drained = 0;
    while let Some(code) = device.poll_error() {
        warn!("GL error after {stage}: {} (0x{code:04x})", gl_error_name(code));
        drained += 1;
        if drained >= 8 {
            // A broken driver can report errors forever.
            break;
        }
    }
}
