//! Millisecond clock backed by the embassy time driver.

use embassy_time::Instant;
use wheelie_common::Clock;

/// Milliseconds since boot, truncated to `u32` (wraps after ~49.7 days).
#[derive(Clone, Copy)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 { Instant::now().as_millis() as u32 }
}
