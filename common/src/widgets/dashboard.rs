//! Full-screen composition of all widgets for one cycle.
//!
//! Both front ends call these after every engine cycle and finish the frame
//! with [`RenderState::end_frame`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::gauge::draw_gauge;
use super::leaderboard::draw_leaderboard;
use super::readouts::{clear_timer_row, draw_live_timer, draw_pitch_readout, draw_sensor_fault};
use super::status::{draw_logo, draw_ride_status};
use crate::engine::{CycleReport, DisplayEngine};
use crate::event_timer::{EventKind, TimerTransition};
use crate::format::display_pitch;
use crate::gauge::{main_fill, overflow_fill};
use crate::render::{PitchReadout, RenderState};
use crate::session::SessionSnapshot;

/// Draw everything that changed in `report`.
pub fn draw_dashboard<D>(
    display: &mut D,
    state: &mut RenderState,
    engine: &DisplayEngine,
    report: &CycleReport,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_static(display, state);

    let main = main_fill(report.pitch);
    let overflow = overflow_fill(report.pitch);
    if state.check_gauge_dirty(main, overflow) {
        draw_gauge(display, main, overflow);
    }

    if state.check_readout_dirty(PitchReadout::Value(display_pitch(report.pitch))) {
        draw_pitch_readout(display, report.pitch);
    }

    for kind in EventKind::ALL {
        match report.transition(kind) {
            TimerTransition::Started => {
                clear_timer_row(display, kind);
                draw_live_timer(display, kind, 0.0);
            }
            TimerTransition::Running { elapsed } => draw_live_timer(display, kind, elapsed),
            TimerTransition::Stopped { .. } => state.mark_board_dirty(kind),
            TimerTransition::Idle => {}
        }
    }

    draw_boards(display, state, engine);
    draw_status(display, state, &report.session);
}

/// Frame for a cycle without a pitch reading: the fault indicator replaces
/// the readout and the ride status keeps updating.
pub fn draw_fault_frame<D>(
    display: &mut D,
    state: &mut RenderState,
    engine: &DisplayEngine,
    session: &SessionSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_static(display, state);

    if state.check_readout_dirty(PitchReadout::Fault) {
        draw_sensor_fault(display);
    }

    draw_boards(display, state, engine);
    draw_status(display, state, session);
}

fn draw_static<D>(
    display: &mut D,
    state: &mut RenderState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if state.need_static() {
        draw_logo(display);
        state.mark_static_drawn();
    }
}

fn draw_boards<D>(
    display: &mut D,
    state: &mut RenderState,
    engine: &DisplayEngine,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for kind in EventKind::ALL {
        if state.board_dirty(kind) {
            draw_leaderboard(display, kind, engine.timer(kind).best_times());
            state.mark_board_drawn(kind);
        }
    }
}

fn draw_status<D>(
    display: &mut D,
    state: &mut RenderState,
    session: &SessionSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if state.check_status_dirty(session.ride_elapsed_secs, session.wheelie_percentage) {
        draw_ride_status(display, session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, MAGENTA, RED, WHITE, YELLOW};
    use crate::config::{
        BAR_TOP,
        BOARD_WIDTH,
        MAIN_BAR_X,
        PITCH_CLEAR_HEIGHT,
        PITCH_CLEAR_WIDTH,
        PITCH_X,
        PITCH_Y,
        SCREEN_WIDTH,
        STOPPIE_BOARD_Y,
        WHEELIE_BOARD_Y,
        WHEELIE_TIMER_Y,
    };
    use crate::testing::TestDisplay;

    struct Rig {
        display: TestDisplay,
        state: RenderState,
        engine: DisplayEngine,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                display: TestDisplay::new(),
                state: RenderState::new(),
                engine: DisplayEngine::new(),
            }
        }

        fn frame(
            &mut self,
            pitch: f32,
            now: u32,
        ) -> CycleReport {
            let report = self.engine.step(pitch, now);
            draw_dashboard(&mut self.display, &mut self.state, &self.engine, &report);
            self.state.end_frame();
            report
        }
    }

    const BOARD_X: i32 = (SCREEN_WIDTH - BOARD_WIDTH) as i32;

    #[test]
    fn test_first_frame_draws_static_and_status() {
        let mut rig = Rig::new();
        rig.frame(0.0, 0);

        assert!(rig.display.count(WHITE) > 0);
        assert!(!rig.state.need_static());
        assert!(rig.display.count_in(PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT, WHITE) > 0);
    }

    #[test]
    fn test_wheelie_shows_live_timer_then_board() {
        let mut rig = Rig::new();
        rig.frame(0.0, 0);
        rig.frame(-30.0, 100);
        rig.frame(-30.0, 1600);

        assert!(rig.display.count_in(100, WHEELIE_TIMER_Y, 60, 22, YELLOW) > 0);
        assert_eq!(rig.display.count_in(BOARD_X, WHEELIE_BOARD_Y, BOARD_WIDTH, 10, YELLOW), 0);

        rig.frame(0.0, 1700);
        assert!(rig.display.count_in(BOARD_X, WHEELIE_BOARD_Y, BOARD_WIDTH, 10, YELLOW) > 0);
        assert!(!rig.state.board_dirty(EventKind::Wheelie));
    }

    #[test]
    fn test_stoppie_board_is_white() {
        let mut rig = Rig::new();
        rig.frame(85.0, 0);
        rig.frame(85.0, 500);
        rig.frame(0.0, 1000);

        assert!(rig.display.count_in(BOARD_X, STOPPIE_BOARD_Y, BOARD_WIDTH, 10, WHITE) > 0);
        assert_eq!(rig.engine.stoppie().best_times().as_slice(), &[0.5]);
    }

    #[test]
    fn test_deep_wheelie_fills_overflow() {
        let mut rig = Rig::new();
        rig.frame(-95.0, 0);

        assert!(rig.display.count(MAGENTA) > 0);
        assert!(rig.display.count(RED) > 0, "main bar critical");
    }

    #[test]
    fn test_fault_frame_replaces_readout() {
        let mut rig = Rig::new();
        rig.frame(-20.0, 0);

        let session = rig.engine.hold(1000);
        draw_fault_frame(&mut rig.display, &mut rig.state, &rig.engine, &session);
        rig.state.end_frame();

        assert_eq!(
            rig.display.count_in(PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT, WHITE),
            0
        );
        assert!(rig.display.count_in(PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT, RED) > 0);

        rig.frame(-20.0, 1100);
        assert_eq!(rig.display.count_in(PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT, RED), 0);
    }

    #[test]
    fn test_unchanged_frame_draws_nothing_new() {
        let mut rig = Rig::new();
        rig.frame(-20.0, 0);
        rig.frame(0.0, 100);

        // Scribble over the readout; an identical frame must leave it alone
        crate::widgets::primitives::clear_rect(&mut rig.display, PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT);
        rig.frame(0.0, 200);
        assert_eq!(
            rig.display.count_in(PITCH_X, PITCH_Y, PITCH_CLEAR_WIDTH, PITCH_CLEAR_HEIGHT, WHITE),
            0
        );
        assert_eq!(rig.display.pixel(PITCH_X, PITCH_Y), BLACK);
    }

    #[test]
    fn test_reset_during_fault_restores_gauge() {
        let mut rig = Rig::new();
        rig.frame(-30.0, 0);
        rig.frame(-30.0, 100);
        assert_eq!(rig.display.pixel(MAIN_BAR_X, BAR_TOP), WHITE);

        rig.engine.reset(200);
        rig.display.clear(BLACK).ok();
        rig.state.mark_display_cleared();

        let session = rig.engine.hold(300);
        draw_fault_frame(&mut rig.display, &mut rig.state, &rig.engine, &session);
        rig.state.end_frame();

        // Sensor comes back at the pitch it had before the clear
        rig.frame(-30.0, 400);
        assert_eq!(rig.display.pixel(MAIN_BAR_X, BAR_TOP), WHITE);
        assert!(rig.display.count(crate::colors::BLUE) > 0, "main fill redrawn");
    }
}
