//! Pitch-to-bar mapping and gauge colour policy.
//!
//! The gauge has two vertical bars of [`BAR_HEIGHT`] pixels:
//!
//! - **Main bar**: `|pitch|` over `0..=MAX_PITCH`, coloured by how close the
//!   rider is to the balance point.
//! - **Overflow bar**: only filled past [`OVERFLOW_PITCH`], covering
//!   `OVERFLOW_PITCH..=ABSOLUTE_MAX_PITCH`.
//!
//! Scaling truncates the pitch to whole degrees before an integer linear map,
//! so fill heights move in whole-degree steps.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, GREEN, MAGENTA, RED, YELLOW};
use crate::config::{BAR_BOTTOM, BAR_HEIGHT};
use crate::thresholds::{ABSOLUTE_MAX_PITCH, BALANCE_HIGH, BALANCE_LOW, CRITICAL_PITCH, MAX_PITCH, OVERFLOW_PITCH};

/// Colour of the overflow fill.
pub const OVERFLOW_COLOR: Rgb565 = MAGENTA;

/// Filled part of a bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarFill {
    /// Pixels filled from the bottom, `0..=BAR_HEIGHT`.
    pub height: u32,
    pub color: Rgb565,
}

impl BarFill {
    /// Y coordinate of the top of the fill.
    #[inline]
    pub const fn top(&self) -> i32 { BAR_BOTTOM - self.height as i32 }
}

/// Integer linear map of `value` (truncated toward zero) from
/// `in_min..in_max` to `out_min..out_max`. Does not clamp.
#[inline]
pub fn map_range(
    value: f32,
    in_min: i32,
    in_max: i32,
    out_min: i32,
    out_max: i32,
) -> i32 {
    let x = value as i32;
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Fill height for a magnitude over `0..=MAX_PITCH`, clamped.
#[inline]
pub fn main_fill_height(magnitude: f32) -> u32 {
    map_range(magnitude.clamp(0.0, MAX_PITCH), 0, MAX_PITCH as i32, 0, BAR_HEIGHT).max(0) as u32
}

/// Main bar colour, first match wins.
///
/// | Condition              | Colour |
/// |------------------------|--------|
/// | `pitch > 0`            | RED    |
/// | `\|pitch\| >= 80`      | RED    |
/// | `\|pitch\| >= 60`      | YELLOW |
/// | `45 <= \|pitch\| < 60` | GREEN  |
/// | otherwise              | BLUE   |
pub fn main_bar_color(pitch: f32) -> Rgb565 {
    let magnitude = pitch.abs();
    if pitch > 0.0 || magnitude >= CRITICAL_PITCH {
        RED
    } else if magnitude >= BALANCE_HIGH {
        YELLOW
    } else if magnitude >= BALANCE_LOW {
        GREEN
    } else {
        BLUE
    }
}

/// Main bar fill for `pitch`.
///
/// A positive pitch (rear up) is drawn from the signed value, which gives the
/// same height as the magnitude.
pub fn main_fill(pitch: f32) -> BarFill {
    let height = if pitch > 0.0 {
        main_fill_height(pitch)
    } else {
        main_fill_height(pitch.abs())
    };
    BarFill {
        height,
        color: main_bar_color(pitch),
    }
}

/// Overflow bar fill, present only when `|pitch| > OVERFLOW_PITCH`.
pub fn overflow_fill(pitch: f32) -> Option<BarFill> {
    let magnitude = pitch.abs();
    if magnitude <= OVERFLOW_PITCH || magnitude.is_nan() {
        return None;
    }
    let clamped = magnitude.clamp(OVERFLOW_PITCH, ABSOLUTE_MAX_PITCH);
    let height = map_range(clamped, OVERFLOW_PITCH as i32, ABSOLUTE_MAX_PITCH as i32, 0, BAR_HEIGHT).max(0) as u32;
    Some(BarFill {
        height,
        color: OVERFLOW_COLOR,
    })
}

/// Y coordinate of the balance tick for `angle` degrees on the main bar.
#[inline]
pub fn tick_y(angle: f32) -> i32 { BAR_BOTTOM - map_range(angle, 0, MAX_PITCH as i32, 0, BAR_HEIGHT) }

// =============================================================================
// Unit Tests
// =============================================================================
