//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Length of one loop of the scripted demo ride, in seconds.
pub const DEMO_RIDE_SECS: f32 = 40.0;

/// Pitch change per key press in manual mode, in degrees.
pub const MANUAL_STEP_DEG: f32 = 5.0;
