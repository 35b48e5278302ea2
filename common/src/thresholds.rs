//! Centralized pitch threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions, so
//! the gauge colours, the event triggers and the overflow bar agree on the
//! same numbers.
//!
//! # Sign Convention
//!
//! Pitch is negative when the front wheel rises (wheelie) and positive when
//! the rear rises. Stoppie detection uses the magnitude so a sensor mounted
//! the other way round still triggers.

// =============================================================================
// Event Triggers
// =============================================================================

/// Magnitude at or above which the stoppie timer runs.
pub const STOPPIE_PITCH: f32 = 80.0;

/// Pitch below which the wheelie timer runs.
pub const WHEELIE_PITCH: f32 = -10.0;

/// Stoppie trigger: `|pitch| >= 80`.
#[inline]
pub fn is_stoppie(pitch: f32) -> bool { pitch.abs() >= STOPPIE_PITCH }

/// Wheelie trigger: `pitch < -10`.
#[inline]
pub fn is_wheelie(pitch: f32) -> bool { pitch < WHEELIE_PITCH }

// =============================================================================
// Gauge Ranges
// =============================================================================

/// Full-scale value of the main bar.
pub const MAX_PITCH: f32 = 75.0;

/// Full-scale value of the overflow bar.
pub const ABSOLUTE_MAX_PITCH: f32 = 110.0;

/// Overflow bar starts filling above this magnitude.
pub const OVERFLOW_PITCH: f32 = 80.0;

/// Lower edge of the balance-point window (GREEN).
pub const BALANCE_LOW: f32 = 45.0;

/// Upper edge of the balance-point window; YELLOW from here.
pub const BALANCE_HIGH: f32 = 60.0;

/// Magnitude at which the main bar turns RED.
pub const CRITICAL_PITCH: f32 = 80.0;

// Compile-time validation: ranges must nest
const _: () = assert!(WHEELIE_PITCH < 0.0);
const _: () = assert!(BALANCE_LOW < BALANCE_HIGH);
const _: () = assert!(BALANCE_HIGH < MAX_PITCH);
const _: () = assert!(MAX_PITCH < OVERFLOW_PITCH);
const _: () = assert!(OVERFLOW_PITCH < ABSOLUTE_MAX_PITCH);
const _: () = assert!(BALANCE_HIGH < CRITICAL_PITCH);

// =============================================================================
// Unit Tests
// =============================================================================
