//! Top-3 best times per event, right-aligned in a column on the right edge.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{clear_rect, draw_text_right};
use crate::config::{
    BEST_TIMES_LEN,
    BOARD_LINE_HEIGHT,
    BOARD_WIDTH,
    SCREEN_WIDTH,
    STATUS_Y,
    STOPPIE_BOARD_Y,
    WHEELIE_BOARD_Y,
};
use crate::event_timer::{BestTimes, EventKind};
use crate::format::format_time;
use crate::styles::board_style;

/// Top edge of the leaderboard for `kind`.
pub const fn board_y(kind: EventKind) -> i32 {
    match kind {
        EventKind::Stoppie => STOPPIE_BOARD_Y,
        EventKind::Wheelie => WHEELIE_BOARD_Y,
    }
}

/// Rows cleared before a redraw. The wheelie board stops above the status
/// line, which shares its last text row.
pub const fn board_clear_height(kind: EventKind) -> u32 {
    let top = board_y(kind);
    let full = BEST_TIMES_LEN as i32 * BOARD_LINE_HEIGHT;
    let room = STATUS_Y - top;
    if full < room { full as u32 } else { room as u32 }
}

/// Redraw the leaderboard of `kind`, longest time first.
pub fn draw_leaderboard<D>(
    display: &mut D,
    kind: EventKind,
    best: &BestTimes,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let top = board_y(kind);
    clear_rect(
        display,
        (SCREEN_WIDTH - BOARD_WIDTH) as i32,
        top,
        BOARD_WIDTH,
        board_clear_height(kind),
    );

    let style = board_style(kind);
    for (row, &time) in best.as_slice().iter().enumerate() {
        draw_text_right(display, &format_time(time), top + row as i32 * BOARD_LINE_HEIGHT, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{WHITE, YELLOW};
    use crate::testing::TestDisplay;

    const COLUMN_X: i32 = (SCREEN_WIDTH - BOARD_WIDTH) as i32;

    fn board(times: &[f32]) -> BestTimes {
        let mut best = BestTimes::new();
        for &t in times {
            best.record(t);
        }
        best
    }

    fn row_has(
        display: &TestDisplay,
        y: i32,
        color: Rgb565,
    ) -> bool {
        display.count_in(COLUMN_X, y, BOARD_WIDTH, BOARD_LINE_HEIGHT as u32, color) > 0
    }

    #[test]
    fn test_rows_follow_entry_count() {
        let mut display = TestDisplay::new();
        draw_leaderboard(&mut display, EventKind::Stoppie, &board(&[1.0, 2.0]));

        assert!(row_has(&display, 0, WHITE));
        assert!(row_has(&display, 10, WHITE));
        assert!(!row_has(&display, 20, WHITE));
    }

    #[test]
    fn test_wheelie_board_is_yellow_at_bottom() {
        let mut display = TestDisplay::new();
        draw_leaderboard(&mut display, EventKind::Wheelie, &board(&[3.0]));

        assert!(row_has(&display, WHEELIE_BOARD_Y, YELLOW));
        assert_eq!(display.count(WHITE), 0);
    }

    #[test]
    fn test_redraw_clears_old_rows() {
        let mut display = TestDisplay::new();
        draw_leaderboard(&mut display, EventKind::Stoppie, &board(&[1.0, 2.0, 3.0]));
        draw_leaderboard(&mut display, EventKind::Stoppie, &BestTimes::new());

        assert_eq!(display.count(WHITE), 0);
    }

    #[test]
    fn test_board_redraw_keeps_status_line() {
        let mut display = TestDisplay::new();
        let session = crate::session::SessionSnapshot {
            ride_elapsed_secs: 40,
            ride_time: crate::format::format_ride_time(40),
            wheelie_total_ms: 5000,
            wheelie_percentage: 12.5,
        };
        crate::widgets::draw_ride_status(&mut display, &session);
        let status_pixels = display.count_in(0, STATUS_Y, SCREEN_WIDTH, 10, WHITE);
        assert!(status_pixels > 0);

        draw_leaderboard(&mut display, EventKind::Wheelie, &board(&[3.0, 2.0, 1.0]));
        assert_eq!(display.count_in(0, STATUS_Y, SCREEN_WIDTH, 10, WHITE), status_pixels);
    }

    #[test]
    fn test_clear_height() {
        assert_eq!(board_clear_height(EventKind::Stoppie), 30);
        assert_eq!(board_clear_height(EventKind::Wheelie), (STATUS_Y - WHEELIE_BOARD_Y) as u32);
    }

    #[test]
    fn test_longest_on_top() {
        let mut display = TestDisplay::new();
        // "10:05" is wider than "1.00", so the top row reaches further left
        draw_leaderboard(&mut display, EventKind::Stoppie, &board(&[1.0, 605.0]));

        let left_of_short = COLUMN_X + BOARD_WIDTH as i32 - 5 - 24;
        assert!(display.count_in(COLUMN_X, 0, (left_of_short - COLUMN_X) as u32, 10, WHITE) > 0);
        assert_eq!(display.count_in(COLUMN_X, 10, (left_of_short - COLUMN_X) as u32, 10, WHITE), 0);
    }
}
