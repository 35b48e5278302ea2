//! Color constants for the wheelie display.
//!
//! The ST7735 panel takes RGB565 natively, so every color is an `Rgb565`.
//! Standard colors come from the `RgbColor` trait constants.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Background and clear color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Bar outlines, stoppie timer and stoppie leaderboard text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Gauge fill when the front wheel is down or pitch is past the stoppie threshold.
pub const RED: Rgb565 = Rgb565::RED;

/// Gauge fill inside the balance-point window (45-60 degrees).
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Gauge fill for shallow wheelies.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Gauge fill above the balance point; wheelie timer and leaderboard text.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Overflow bar fill (pitch past 80 degrees).
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;
