//! Text formatting for timers, ride time, percentage and pitch.
//!
//! All formatters write into fixed-capacity `heapless` strings; the
//! capacities cover the widest value each field can show.

use core::fmt::Write;

use heapless::String;

/// Stopwatch text, e.g. `"5.50"`, `"1:05.25"`, `"10:05"`.
pub type TimeText = String<16>;

/// Ride clock text, `"HH:MM:SS"`.
pub type RideTimeText = String<12>;

/// Percentage text, e.g. `"12.5%"`.
pub type PercentText = String<12>;

/// Pitch readout text, e.g. `" 5°"`, `"-45°"`.
pub type PitchText = String<8>;

/// Format an event duration in seconds.
///
/// - `>= 600 s`: `M:SS`
/// - `>= 60 s`: `M:SS.CC`
/// - otherwise: `S.CC`
///
/// Centiseconds are truncated, not rounded.
pub fn format_time(seconds: f32) -> TimeText {
    let whole = seconds as i32;
    let minutes = (seconds / 60.0) as i32;
    let secs = whole % 60;
    let centis = ((seconds - whole as f32) * 100.0) as i32;

    let mut s = TimeText::new();
    if minutes > 0 {
        if seconds >= 600.0 {
            write!(s, "{minutes}:{secs:02}").ok();
        } else {
            write!(s, "{minutes}:{secs:02}.{centis:02}").ok();
        }
    } else {
        write!(s, "{secs}.{centis:02}").ok();
    }
    s
}

/// Format whole seconds as `HH:MM:SS`.
pub fn format_ride_time(total_secs: u32) -> RideTimeText {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut s = RideTimeText::new();
    write!(s, "{hours:02}:{minutes:02}:{secs:02}").ok();
    s
}

/// Format a percentage with one decimal below 100 and none from 100 up.
pub fn format_percentage(percent: f32) -> PercentText {
    let mut s = PercentText::new();
    if percent < 100.0 {
        write!(s, "{percent:.1}%").ok();
    } else {
        write!(s, "{percent:.0}%").ok();
    }
    s
}

/// Value shown by the pitch readout: rounded, sign flipped so a wheelie
/// reads positive.
#[inline]
pub fn display_pitch(pitch: f32) -> i32 { libm::roundf(-pitch) as i32 }

/// Format the pitch readout: leading space for single digits, sign,
/// magnitude and a degree sign.
pub fn format_pitch(pitch: f32) -> PitchText {
    let value = display_pitch(pitch);

    let mut s = PitchText::new();
    if value.abs() < 10 {
        s.push(' ').ok();
    }
    if value < 0 {
        s.push('-').ok();
    }
    write!(s, "{}\u{b0}", value.unsigned_abs()).ok();
    s
}

// =============================================================================
// Unit Tests
// =============================================================================
