//! World state.
//!
//! The world owns the geometry model and the scalar clock time the render
//! engine reads each frame. Time is advanced by the caller-owned frame clock;
//! nothing in here touches the GPU.

use crate::model::Model;

/// Model plus current time, advanced once per frame.
#[derive(Debug, Clone)]
pub struct WorldState {
    model: Model,
    time: f32,
}

impl WorldState {
    pub fn new(model: Model) -> Self {
        Self { model, time: 0.0 }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Current time in seconds since the world was created.
    pub fn current_time(&self) -> f32 {
        self.time
    }

    /// Advances the world clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }
}
