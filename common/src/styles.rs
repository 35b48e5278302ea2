//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! All text is anchored at its top-left corner (`Baseline::Top`), the same
//! way the layout in [`crate::config`] is measured. Right-aligned text is
//! positioned from its measured width instead of `Alignment::Right`, so the
//! cleared box and the glyphs come from the same number.
//!
//! # Fonts
//!
//! | Use | Font | Glyph |
//! |-----|------|-------|
//! | Leaderboards, ride status | `FONT_6X10` | 6x10 |
//! | Live timers | `ProFont` 14pt | 10x18 |
//! | Pitch readout | `FONT_10X20` (ISO 8859-1, has `°`) | 10x20 |

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10, iso_8859_1::FONT_10X20},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{RED, WHITE, YELLOW};
use crate::event_timer::EventKind;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned, top-anchored text. Used for every text widget.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Live timer font.
pub const TIMER_FONT: &MonoFont<'static> = &PROFONT_14_POINT;

/// Pitch readout font. Latin-1 so the degree sign renders.
pub const PITCH_FONT: &MonoFont<'static> = &FONT_10X20;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, WHITE);

pub const LABEL_STYLE_YELLOW: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, YELLOW);

pub const TIMER_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(TIMER_FONT, WHITE);

pub const TIMER_STYLE_YELLOW: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(TIMER_FONT, YELLOW);

pub const PITCH_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(PITCH_FONT, WHITE);

/// Sensor fault indicator, drawn in place of the pitch value.
pub const FAULT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(PITCH_FONT, RED);

/// Leaderboard text style for `kind`.
pub const fn board_style(kind: EventKind) -> MonoTextStyle<'static, Rgb565> {
    match kind {
        EventKind::Stoppie => LABEL_STYLE_WHITE,
        EventKind::Wheelie => LABEL_STYLE_YELLOW,
    }
}

/// Live timer text style for `kind`.
pub const fn timer_style(kind: EventKind) -> MonoTextStyle<'static, Rgb565> {
    match kind {
        EventKind::Stoppie => TIMER_STYLE_WHITE,
        EventKind::Wheelie => TIMER_STYLE_YELLOW,
    }
}
