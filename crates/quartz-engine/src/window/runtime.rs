use anyhow::{Context as _, Result};
use glutin::dpi::LogicalSize;
use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest};

use crate::gfx::{GfxDevice, GlowDevice};
use crate::render::RenderEngine;
use crate::time::FrameClock;
use crate::world::WorldState;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub vsync: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quartz".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            vsync: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, makes a 3.3 core context current, and drives the
    /// tick → advance → display → swap loop until the window closes.
    ///
    /// Returns only on pre-loop failure; once started, the event loop owns
    /// the process and exits it. A `display` error — including an unsupported
    /// driver on the very first frame — is logged and ends the loop.
    pub fn run(
        config: RuntimeConfig,
        mut world: WorldState,
        mut engine: RenderEngine<GlowDevice>,
    ) -> Result<()> {
        let RuntimeConfig {
            title,
            initial_size,
            vsync,
        } = config;

        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(initial_size);

        let windowed = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(vsync)
            .build_windowed(window_builder, &event_loop)
            .context("failed to create the GL window")?;

        // Safety: the context stays current on this thread for the lifetime
        // of the loop below.
        let context = unsafe { windowed.make_current() }
            .map_err(|(_, err)| err)
            .context("failed to make the GL context current")?;

        let mut device = unsafe {
            GlowDevice::from_loader_function(|name| context.get_proc_address(name) as *const _)
        };

        log::debug!("GL context ready, driver reports {}", device.driver_version());

        let mut clock = FrameClock::new();

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }

                Event::WindowEvent {
                    event: WindowEvent::Resized(size),
                    ..
                } => {
                    context.resize(size);
                    device.set_viewport(size.width as i32, size.height as i32);
                }

                Event::MainEventsCleared => context.window().request_redraw(),

                Event::RedrawRequested(_) => {
                    let frame = clock.tick();
                    world.advance(frame.dt);

                    if let Err(err) = engine.display(&mut device, &world) {
                        log::error!("render failed: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }

                    if let Err(err) = context.swap_buffers() {
                        log::error!("failed to swap buffers: {err}");
                        *control_flow = ControlFlow::Exit;
                    }
                }

                Event::LoopDestroyed => engine.destroy(&mut device),

                _ => {}
            }
        })
    }
}
