//! Render state tracking for conditional redraws.
//!
//! The ST7735 is driven over a slow SPI link, so each element is only
//! redrawn when what it shows has changed:
//!
//! | Element | Strategy |
//! |---------|----------|
//! | Bar outlines, logo | Draw once (again after a display clear) |
//! | Gauge fills, ticks | When either fill changes |
//! | Pitch readout | When the rounded value or the fault state changes |
//! | Live timers | Every running cycle (row cleared on start) |
//! | Leaderboards | When a timer of that kind stops |
//! | Ride status | When the text changes |
//!
//! Comparisons use the exact values the widgets format, so the dirty check
//! never disagrees with what would be drawn.

use crate::event_timer::EventKind;
use crate::format::{PercentText, format_percentage};
use crate::gauge::BarFill;

/// What the pitch readout currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchReadout {
    /// Rounded, sign-flipped pitch.
    Value(i32),
    /// Sensor fault indicator.
    Fault,
}

/// Tracks render state for optimized display updates.
pub struct RenderState {
    /// Whether the static frame (bar outlines, logo) has been drawn.
    static_drawn: bool,

    /// Gauge fills drawn last.
    prev_gauge: Option<(BarFill, Option<BarFill>)>,

    /// Pitch readout drawn last.
    prev_readout: Option<PitchReadout>,

    /// Ride seconds and percentage text drawn last.
    prev_status: Option<(u32, PercentText)>,

    /// Leaderboards needing a redraw, indexed by [`EventKind::index`].
    boards_dirty: [bool; 2],

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally (e.g. statistics reset).
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            static_drawn: false,
            prev_gauge: None,
            prev_readout: None,
            prev_status: None,
            boards_dirty: [true; 2],
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the static frame needs drawing.
    #[inline]
    pub const fn need_static(&self) -> bool { !self.static_drawn || self.first_frame || self.display_cleared }

    #[inline]
    pub const fn mark_static_drawn(&mut self) { self.static_drawn = true; }

    /// Check if the gauge fills need redrawing.
    pub fn check_gauge_dirty(
        &mut self,
        main: BarFill,
        overflow: Option<BarFill>,
    ) -> bool {
        let current = Some((main, overflow));
        let dirty = self.first_frame || self.display_cleared || current != self.prev_gauge;
        self.prev_gauge = current;
        dirty
    }

    /// Check if the pitch readout needs redrawing.
    pub fn check_readout_dirty(
        &mut self,
        readout: PitchReadout,
    ) -> bool {
        let dirty = self.first_frame || self.display_cleared || Some(readout) != self.prev_readout;
        self.prev_readout = Some(readout);
        dirty
    }

    /// Check if the ride status line needs redrawing.
    pub fn check_status_dirty(
        &mut self,
        ride_elapsed_secs: u32,
        wheelie_percentage: f32,
    ) -> bool {
        let percent = format_percentage(wheelie_percentage);
        let dirty = self.first_frame
            || self.display_cleared
            || self
                .prev_status
                .as_ref()
                .is_none_or(|(secs, text)| *secs != ride_elapsed_secs || *text != percent);

        self.prev_status = Some((ride_elapsed_secs, percent));
        dirty
    }

    /// Flag the leaderboard of `kind` for redraw.
    #[inline]
    pub const fn mark_board_dirty(
        &mut self,
        kind: EventKind,
    ) {
        self.boards_dirty[kind.index()] = true;
    }

    /// Check if the leaderboard of `kind` needs redrawing.
    #[inline]
    pub const fn board_dirty(
        &self,
        kind: EventKind,
    ) -> bool {
        self.boards_dirty[kind.index()] || self.first_frame || self.display_cleared
    }

    #[inline]
    pub const fn mark_board_drawn(
        &mut self,
        kind: EventKind,
    ) {
        self.boards_dirty[kind.index()] = false;
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Mark that the display was cleared externally.
    ///
    /// Everything is redrawn on the next frame.
    /// Cached element values are dropped as well, so an element skipped by a
    /// fault frame is still redrawn on the next full frame.
    pub fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
        self.static_drawn = false;
        self.prev_gauge = None;
        self.prev_readout = None;
        self.prev_status = None;
        self.boards_dirty = [true; 2];
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::{main_fill, overflow_fill};

    fn past_first_frame() -> RenderState {
        let mut state = RenderState::new();
        state.end_frame();
        state
    }

    #[test]
    fn test_render_state_new() {
        let state = RenderState::new();
        assert!(state.is_first_frame());
        assert!(state.need_static());
        assert!(state.board_dirty(EventKind::Stoppie));
        assert!(state.board_dirty(EventKind::Wheelie));
    }

    #[test]
    fn test_static_drawn_once() {
        let mut state = past_first_frame();
        assert!(state.need_static());

        state.mark_static_drawn();
        assert!(!state.need_static());

        state.mark_display_cleared();
        assert!(state.need_static(), "display clear forces a redraw");
    }

    #[test]
    fn test_gauge_dirty_on_fill_change() {
        let mut state = past_first_frame();
        assert!(state.check_gauge_dirty(main_fill(-30.0), overflow_fill(-30.0)));
        assert!(!state.check_gauge_dirty(main_fill(-30.0), overflow_fill(-30.0)));
        assert!(
            !state.check_gauge_dirty(main_fill(-30.4), overflow_fill(-30.4)),
            "same whole degree"
        );
        assert!(state.check_gauge_dirty(main_fill(-46.0), overflow_fill(-46.0)), "color and height change");
        assert!(state.check_gauge_dirty(main_fill(-85.0), overflow_fill(-85.0)));
    }

    #[test]
    fn test_readout_dirty() {
        let mut state = RenderState::new();
        assert!(state.check_readout_dirty(PitchReadout::Value(12)), "first frame");
        state.end_frame();

        assert!(!state.check_readout_dirty(PitchReadout::Value(12)));
        assert!(state.check_readout_dirty(PitchReadout::Value(13)));
        assert!(state.check_readout_dirty(PitchReadout::Fault));
        assert!(!state.check_readout_dirty(PitchReadout::Fault));
        assert!(state.check_readout_dirty(PitchReadout::Value(13)));
    }

    #[test]
    fn test_status_dirty_uses_displayed_text() {
        let mut state = past_first_frame();
        assert!(state.check_status_dirty(5, 10.0));
        assert!(!state.check_status_dirty(5, 10.01), "both print 10.0%");
        assert!(state.check_status_dirty(5, 10.2));
        assert!(state.check_status_dirty(6, 10.2));
    }

    #[test]
    fn test_board_dirty_cycle() {
        let mut state = past_first_frame();
        state.mark_board_drawn(EventKind::Stoppie);
        state.mark_board_drawn(EventKind::Wheelie);
        assert!(!state.board_dirty(EventKind::Stoppie));

        state.mark_board_dirty(EventKind::Wheelie);
        assert!(state.board_dirty(EventKind::Wheelie));
        assert!(!state.board_dirty(EventKind::Stoppie));
    }

    #[test]
    fn test_display_cleared_redraws_everything_once() {
        let mut state = past_first_frame();
        state.mark_static_drawn();
        state.check_readout_dirty(PitchReadout::Value(1));
        state.check_status_dirty(1, 0.0);
        state.mark_board_drawn(EventKind::Stoppie);

        state.mark_display_cleared();
        assert!(state.check_readout_dirty(PitchReadout::Value(1)));
        assert!(state.check_status_dirty(1, 0.0));
        assert!(state.board_dirty(EventKind::Stoppie));

        state.mark_static_drawn();
        state.mark_board_drawn(EventKind::Stoppie);
        state.end_frame();
        assert!(!state.need_static());
        assert!(!state.check_readout_dirty(PitchReadout::Value(1)));
        assert!(!state.board_dirty(EventKind::Stoppie));
    }

    #[test]
    fn test_gauge_dirty_after_clear_survives_skipped_frame() {
        let mut state = past_first_frame();
        let (main, overflow) = (main_fill(-30.0), overflow_fill(-30.0));
        state.check_gauge_dirty(main, overflow);

        state.mark_display_cleared();
        // A fault frame ends without checking the gauge
        state.end_frame();

        assert!(state.check_gauge_dirty(main, overflow));
        assert!(!state.check_gauge_dirty(main, overflow));
    }
}
