//! Simulated accelerometer and wall clock for the desktop build.
//!
//! The simulated IMU produces the gravity vector the real sensor would see at
//! a target pitch, so the full averaging path runs exactly as on hardware.

use std::convert::Infallible;
use std::time::Instant;

use wheelie_common::config::MOUNT_ANGLE_DEG;
use wheelie_common::{AccelSample, AccelSource, Clock};

/// Peak sensor jitter in degrees.
const JITTER_DEG: f32 = 0.6;

/// Accelerometer that reports a configurable pitch.
pub struct SimulatedImu {
    pitch: f32,
    stalled: bool,
    sample_count: u32,
}

impl SimulatedImu {
    pub const fn new() -> Self {
        Self {
            pitch: 0.0,
            stalled: false,
            sample_count: 0,
        }
    }

    /// Pitch the next samples should average to (before jitter).
    pub const fn set_pitch(
        &mut self,
        pitch: f32,
    ) {
        self.pitch = pitch;
    }

    /// Stop or resume producing samples.
    pub const fn set_stalled(
        &mut self,
        stalled: bool,
    ) {
        self.stalled = stalled;
    }

    pub const fn is_stalled(&self) -> bool { self.stalled }
}

impl AccelSource for SimulatedImu {
    type Error = Infallible;

    fn available(&mut self) -> Result<bool, Self::Error> { Ok(!self.stalled) }

    fn read(&mut self) -> Result<AccelSample, Self::Error> {
        self.sample_count = self.sample_count.wrapping_add(1);
        let jitter = (self.sample_count as f32 * 1.7).sin() * JITTER_DEG;

        // Inverse of atan2(-x, sqrt(y² + z²)) - mount
        let raw = (self.pitch + jitter + MOUNT_ANGLE_DEG).to_radians();
        Ok(AccelSample::new(-raw.sin(), 0.0, raw.cos()))
    }
}

/// Milliseconds since the simulator started, truncated to `u32`.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 { self.start.elapsed().as_millis() as u32 }
}
