//! Display layout and control-loop configuration constants.
//!
//! # Layout
//!
//! The ST7735 panel is 128x160 and used rotated, giving a 160x128 landscape
//! canvas:
//!
//! ```text
//!  +-----------------------------------------+
//!  | -45°                      stoppie top-3 |
//!  | +--+ +-+                                |
//!  | |  | | |               stoppie live time|
//!  | |  | | |                                |
//!  | |  | | |               wheelie live time|
//!  | |  | | |                                |
//!  | +--+ +-+                 wheelie top-3  |
//!  | /_ 00:12:34  12.5%                      |
//!  +-----------------------------------------+
//! ```
//!
//! Positions are pre-computed as `const` so the render path does no layout
//! arithmetic per cycle.

// =============================================================================
// Display Configuration
// =============================================================================

/// Canvas width in pixels (ST7735 rotated to landscape).
pub const SCREEN_WIDTH: u32 = 160;

/// Canvas height in pixels.
pub const SCREEN_HEIGHT: u32 = 128;

/// Canvas center Y coordinate. The gauge bars are centered on this row.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Sampling
// =============================================================================

/// Raw accelerometer samples averaged into one pitch reading.
pub const SAMPLES_PER_READING: usize = 6;

/// Sensor mounting tilt subtracted from every raw pitch value, in degrees.
pub const MOUNT_ANGLE_DEG: f32 = 25.0;

/// Longest wait for a single sample before the reading is abandoned.
///
/// The LSM6DSOX runs at 104 Hz (~10 ms per sample), so this only expires
/// when the sensor has stopped producing data.
pub const SAMPLE_TIMEOUT_MS: u32 = 250;

/// Entries kept on each leaderboard.
pub const BEST_TIMES_LEN: usize = 3;

// =============================================================================
// Gauge Geometry
// =============================================================================

/// Height of both vertical bars.
pub const BAR_HEIGHT: i32 = 80;

/// Top edge of both bars.
pub const BAR_TOP: i32 = CENTER_Y - BAR_HEIGHT / 2;

/// Bottom edge of both bars; fills grow upward from here.
pub const BAR_BOTTOM: i32 = CENTER_Y + BAR_HEIGHT / 2;

/// Main (0-75 degree) bar.
pub const MAIN_BAR_X: i32 = 10;
pub const MAIN_BAR_WIDTH: u32 = 20;

/// Overflow (80-110 degree) bar.
pub const OVERFLOW_BAR_X: i32 = 35;
pub const OVERFLOW_BAR_WIDTH: u32 = 10;

/// Balance-point tick marks extend this far left of the main bar.
pub const TICK_OFFSET: i32 = 3;
pub const TICK_LENGTH: u32 = 5;

// =============================================================================
// Readouts
// =============================================================================

/// Pitch readout box (top-left, above the bars).
pub const PITCH_X: i32 = 10;
pub const PITCH_Y: i32 = 4;
pub const PITCH_CLEAR_WIDTH: u32 = 60;
pub const PITCH_CLEAR_HEIGHT: u32 = 20;

/// Padding between right-aligned text and the right canvas edge.
pub const RIGHT_PADDING: i32 = 5;

/// Extra width cleared around a live timer value.
pub const TIMER_CLEAR_PADDING: u32 = 10;

/// Height of a live timer row (cleared when a timer starts).
pub const TIMER_ROW_HEIGHT: u32 = 20;

/// Left edge of the cleared timer row; everything left of it is gauge.
pub const TIMER_AREA_X: i32 = OVERFLOW_BAR_X + OVERFLOW_BAR_WIDTH as i32 + 5;

/// Live stoppie timer row.
pub const STOPPIE_TIMER_Y: i32 = 35;

/// Live wheelie timer row.
pub const WHEELIE_TIMER_Y: i32 = 65;

/// Leaderboard column width (right-aligned block).
pub const BOARD_WIDTH: u32 = 90;

/// Leaderboard line pitch.
pub const BOARD_LINE_HEIGHT: i32 = 10;

/// First stoppie leaderboard row.
pub const STOPPIE_BOARD_Y: i32 = 0;

/// First wheelie leaderboard row.
pub const WHEELIE_BOARD_Y: i32 = 90;

/// Ride-status line along the bottom edge.
pub const STATUS_Y: i32 = SCREEN_HEIGHT as i32 - 10;
pub const STATUS_HEIGHT: u32 = 10;
pub const RIDE_TIME_X: i32 = 15;
pub const RIDE_TIME_WIDTH: u32 = 70;
pub const PERCENT_X: i32 = 85;
pub const PERCENT_WIDTH: u32 = 45;

/// Logo anchor (bottom-left corner).
pub const LOGO_X: i32 = 7;
pub const LOGO_Y: i32 = 125;
pub const LOGO_SIZE: i32 = 5;

// Compile-time layout validation
const _: () = assert!(BAR_TOP > PITCH_Y);
const _: () = assert!(BAR_BOTTOM < STATUS_Y);
const _: () = assert!(OVERFLOW_BAR_X > MAIN_BAR_X + MAIN_BAR_WIDTH as i32);
const _: () = assert!(BOARD_WIDTH < SCREEN_WIDTH);
const _: () = assert!(PITCH_X + PITCH_CLEAR_WIDTH as i32 <= SCREEN_WIDTH as i32 - BOARD_WIDTH as i32);
const _: () = assert!(STOPPIE_TIMER_Y + TIMER_ROW_HEIGHT as i32 <= WHEELIE_TIMER_Y);
