//! Millisecond tick source.
//!
//! Time enters the core only as a `u32` millisecond counter that is allowed to
//! wrap (about every 49.7 days). All durations are computed with
//! [`elapsed_ms`], which uses wrapping subtraction so a wrap between two
//! timestamps still yields the correct difference.

/// Monotonic millisecond counter.
pub trait Clock {
    /// Current tick in milliseconds. May wrap at `u32::MAX`.
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> u32 { (**self).now_ms() }
}

/// Milliseconds from `start` to `now`, correct across counter wrap.
#[inline]
pub const fn elapsed_ms(
    start: u32,
    now: u32,
) -> u32 {
    now.wrapping_sub(start)
}

// =============================================================================
// Unit Tests
// =============================================================================
