//! Core logic and widgets for the wheelie display.
//!
//! This crate contains platform-agnostic code shared between the simulator
//! and the RP2040 firmware:
//!
//! - [`averager`]: Burst averaging of accelerometer samples into a pitch reading
//! - [`event_timer`]: Stoppie/wheelie stopwatch with a top-3 leaderboard
//! - [`session`]: Ride time and cumulative wheelie time
//! - [`engine`]: One control cycle over all of the above
//! - [`gauge`]: Pitch-to-bar mapping and colour policy
//! - [`format`]: Time, pitch and percentage text formatting
//! - [`render`]: Conditional redraw tracking
//! - [`widgets`]: Drawing routines generic over `DrawTarget<Color = Rgb565>`
//! - [`imu`]: LSM6DSOX accelerometer driver over `embedded-hal` I2C
//! - [`colors`], [`config`], [`styles`], [`thresholds`]: Compile-time configuration
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and avoids `std::time`; time enters
//! only through the [`clock::Clock`] trait as a wrapping millisecond counter.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p wheelie-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod averager;
pub mod clock;
pub mod colors;
pub mod config;
pub mod engine;
pub mod event_timer;
pub mod format;
pub mod gauge;
pub mod imu;
pub mod render;
pub mod sensor;
pub mod session;
pub mod styles;
pub mod thresholds;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use averager::{SampleAverager, pitch_from_accel};
pub use clock::{Clock, elapsed_ms};
pub use engine::{CycleReport, DisplayEngine};
pub use event_timer::{BestTimes, EventKind, EventTimer, TimerTransition};
pub use render::RenderState;
pub use sensor::{AccelSample, AccelSource, SensorError};
pub use session::{SessionAccumulator, SessionSnapshot};
