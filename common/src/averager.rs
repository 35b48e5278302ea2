//! Burst averaging of accelerometer samples into one pitch reading.
//!
//! Each reading consumes exactly [`SAMPLES_PER_READING`] fresh samples. Every
//! sample is converted to pitch on its own and the pitch values are averaged
//! (averaging angles rather than raw vectors keeps the arithmetic identical to
//! a per-sample readout).
//!
//! The wait for each sample is bounded by a timeout measured with the
//! wrap-safe [`Clock`], so a sensor that stops reporting data surfaces as
//! [`SensorError::Timeout`] instead of stalling the control loop.

use core::f32::consts::PI;

use crate::clock::{Clock, elapsed_ms};
use crate::config::{MOUNT_ANGLE_DEG, SAMPLE_TIMEOUT_MS, SAMPLES_PER_READING};
use crate::sensor::{AccelSample, AccelSource, SensorError};

const RAD_TO_DEG: f32 = 180.0 / PI;

/// Pitch in degrees of a single gravity sample, corrected for the mount angle.
///
/// Degenerate input (all-zero or NaN components) yields NaN or an arbitrary
/// angle; it is not filtered here.
#[inline]
pub fn pitch_from_accel(
    sample: AccelSample,
    mount_angle_deg: f32,
) -> f32 {
    let AccelSample { x, y, z } = sample;
    libm::atan2f(-x, libm::sqrtf(y * y + z * z)) * RAD_TO_DEG - mount_angle_deg
}

/// Reduces a burst of samples to one filtered pitch value.
#[derive(Clone, Copy, Debug)]
pub struct SampleAverager {
    mount_angle_deg: f32,
    timeout_ms: u32,
}

impl SampleAverager {
    pub const fn new() -> Self { Self::with_settings(MOUNT_ANGLE_DEG, SAMPLE_TIMEOUT_MS) }

    pub const fn with_settings(
        mount_angle_deg: f32,
        timeout_ms: u32,
    ) -> Self {
        Self {
            mount_angle_deg,
            timeout_ms,
        }
    }

    #[inline]
    pub const fn mount_angle_deg(&self) -> f32 { self.mount_angle_deg }

    /// Read [`SAMPLES_PER_READING`] samples and return their mean pitch.
    ///
    /// `available()` is polled before each read. If no sample shows up within
    /// the timeout the partial reading is discarded and
    /// `SensorError::Timeout { collected }` is returned.
    pub fn compute_pitch<S, C>(
        &self,
        sensor: &mut S,
        clock: &C,
    ) -> Result<f32, SensorError<S::Error>>
    where
        S: AccelSource,
        C: Clock,
    {
        let mut sum = 0.0f32;
        let mut collected = 0usize;
        let mut wait_start = clock.now_ms();

        while collected < SAMPLES_PER_READING {
            if sensor.available().map_err(SensorError::Bus)? {
                let sample = sensor.read().map_err(SensorError::Bus)?;
                sum += pitch_from_accel(sample, self.mount_angle_deg);
                collected += 1;
                wait_start = clock.now_ms();
            } else if elapsed_ms(wait_start, clock.now_ms()) >= self.timeout_ms {
                return Err(SensorError::Timeout { collected });
            } else {
                core::hint::spin_loop();
            }
        }

        Ok(sum / SAMPLES_PER_READING as f32)
    }
}

impl Default for SampleAverager {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
