//! Frame timing.
//!
//! One [`FrameClock`] per render loop; `tick()` once per presented frame. The
//! resulting deltas feed [`crate::world::WorldState::advance`].

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
