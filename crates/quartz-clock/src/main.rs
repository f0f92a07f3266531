//! Analog clock demo: builds the clock model and hands it to the runtime.
//!
//! Shader sources are read from `shaders/` relative to the working directory,
//! so run this from the workspace root.

use anyhow::Result;

use quartz_engine::logging::{init_logging, LoggingConfig};
use quartz_engine::model::clock_model;
use quartz_engine::render::RenderEngine;
use quartz_engine::shader::ShaderPaths;
use quartz_engine::window::{Runtime, RuntimeConfig};
use quartz_engine::world::WorldState;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("starting quartz clock");

    let world = WorldState::new(clock_model());
    let engine = RenderEngine::new(ShaderPaths::new("shaders/clock.vert", "shaders/clock.frag"));

    Runtime::run(
        RuntimeConfig {
            title: "quartz clock".to_string(),
            ..RuntimeConfig::default()
        },
        world,
        engine,
    )
}
