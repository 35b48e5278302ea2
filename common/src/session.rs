//! Ride clock and cumulative wheelie time.
//!
//! The accumulator is the only owner of cumulative wheelie time. It is ticked
//! once per cycle after the timers have updated: while the wheelie timer runs,
//! the wall time since the previous tick is added. The engine calls
//! [`SessionAccumulator::mark_wheelie_start`] on the wheelie start edge so the
//! first running tick adds nothing from before the wheelie began.

use crate::clock::elapsed_ms;
use crate::format::{RideTimeText, format_ride_time};

/// Session values for one cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    /// Whole seconds since the first tick.
    pub ride_elapsed_secs: u32,
    /// `ride_elapsed_secs` as `HH:MM:SS`.
    pub ride_time: RideTimeText,
    /// Milliseconds spent in a wheelie this session.
    pub wheelie_total_ms: u32,
    /// Share of the ride spent in a wheelie, `0..=100`.
    pub wheelie_percentage: f32,
}

/// Accumulates ride time and time spent in a wheelie.
#[derive(Clone, Debug, Default)]
pub struct SessionAccumulator {
    ride_start_ms: Option<u32>,
    wheelie_total_ms: u32,
    last_edge_ms: u32,
}

impl SessionAccumulator {
    pub const fn new() -> Self {
        Self {
            ride_start_ms: None,
            wheelie_total_ms: 0,
            last_edge_ms: 0,
        }
    }

    /// Wheelie start edge: accounting restarts from `now_ms`.
    pub fn mark_wheelie_start(
        &mut self,
        now_ms: u32,
    ) {
        self.last_edge_ms = now_ms;
    }

    /// Account one cycle and return the current session values.
    ///
    /// The first call latches the ride start.
    pub fn tick(
        &mut self,
        now_ms: u32,
        wheelie_running: bool,
    ) -> SessionSnapshot {
        let ride_start = *self.ride_start_ms.get_or_insert(now_ms);

        if wheelie_running {
            self.wheelie_total_ms = self.wheelie_total_ms.saturating_add(elapsed_ms(self.last_edge_ms, now_ms));
        }
        self.last_edge_ms = now_ms;

        let ride_elapsed_secs = elapsed_ms(ride_start, now_ms) / 1000;
        SessionSnapshot {
            ride_elapsed_secs,
            ride_time: format_ride_time(ride_elapsed_secs),
            wheelie_total_ms: self.wheelie_total_ms,
            wheelie_percentage: wheelie_percentage(self.wheelie_total_ms, ride_elapsed_secs),
        }
    }

    #[inline]
    pub const fn ride_start_ms(&self) -> Option<u32> { self.ride_start_ms }

    #[inline]
    pub const fn wheelie_total_ms(&self) -> u32 { self.wheelie_total_ms }

    /// Forget the ride; the next tick starts a new one.
    pub fn reset(&mut self) { *self = Self::new(); }
}

/// `total_ms / (secs * 10)`, i.e. percent of the ride, clamped to `0..=100`.
pub fn wheelie_percentage(
    wheelie_total_ms: u32,
    ride_elapsed_secs: u32,
) -> f32 {
    if ride_elapsed_secs == 0 {
        return 0.0;
    }
    (wheelie_total_ms as f32 / (ride_elapsed_secs as f32 * 10.0)).clamp(0.0, 100.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
