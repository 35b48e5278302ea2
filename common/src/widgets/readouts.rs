//! Pitch readout and live event timers.
//!
//! Live timers are right-aligned; each redraw clears only the text width plus
//! [`TIMER_CLEAR_PADDING`], which is enough because the value only grows
//! while a timer runs. The whole row is cleared once when a timer starts.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{clear_rect, draw_text, right_aligned_x, text_width};
use crate::config::{
    PITCH_CLEAR_HEIGHT,
    PITCH_CLEAR_WIDTH,
    PITCH_X,
    PITCH_Y,
    SCREEN_WIDTH,
    STOPPIE_TIMER_Y,
    TIMER_AREA_X,
    TIMER_CLEAR_PADDING,
    TIMER_ROW_HEIGHT,
    WHEELIE_TIMER_Y,
};
use crate::event_timer::EventKind;
use crate::format::{format_pitch, format_time};
use crate::styles::{FAULT_STYLE, PITCH_STYLE, TIMER_FONT, timer_style};

/// Text shown in place of the pitch while the sensor is not delivering data.
pub const FAULT_TEXT: &str = "IMU!";

/// Top edge of the live timer row for `kind`.
pub const fn timer_row_y(kind: EventKind) -> i32 {
    match kind {
        EventKind::Stoppie => STOPPIE_TIMER_Y,
        EventKind::Wheelie => WHEELIE_TIMER_Y,
    }
}

/// Draw the pitch readout, e.g. `"45°"` for a 45 degree wheelie.
pub fn draw_pitch_readout<D>(
    display: &mut D,
    pitch: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_rect(display, PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT);
    draw_text(display, &format_pitch(pitch), PITCH_X, PITCH_Y, PITCH_STYLE);
}

/// Replace the pitch readout with the sensor fault indicator.
pub fn draw_sensor_fault<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    clear_rect(display, PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT);
    draw_text(display, FAULT_TEXT, PITCH_X, PITCH_Y, FAULT_STYLE);
}

/// Blank the live timer row of `kind` right of the gauge.
pub fn clear_timer_row<D>(
    display: &mut D,
    kind: EventKind,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_rect(
        display,
        TIMER_AREA_X,
        timer_row_y(kind),
        SCREEN_WIDTH - TIMER_AREA_X as u32,
        TIMER_ROW_HEIGHT,
    );
}

/// Draw the running time of `kind`, right-aligned in its row.
pub fn draw_live_timer<D>(
    display: &mut D,
    kind: EventKind,
    elapsed: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = timer_style(kind);
    let text = format_time(elapsed);
    let width = text_width(&text, &style);
    let height = TIMER_FONT.character_size.height;
    let y = timer_row_y(kind);

    let clear_width = width + TIMER_CLEAR_PADDING;
    clear_rect(display, SCREEN_WIDTH as i32 - clear_width as i32, y, clear_width, height + 4);
    draw_text(display, &text, right_aligned_x(width), y + 2, style);
}
