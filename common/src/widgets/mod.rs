//! Widget components for the wheelie display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod dashboard;
mod gauge;
mod leaderboard;
mod primitives;
mod readouts;
mod status;

pub use dashboard::{draw_dashboard, draw_fault_frame};
pub use gauge::{draw_balance_ticks, draw_bar_outlines, draw_gauge};
pub use leaderboard::{board_y, draw_leaderboard};
pub use primitives::{clear_rect, draw_text, draw_text_right, fill_rect, right_aligned_x, text_width};
pub use readouts::{FAULT_TEXT, clear_timer_row, draw_live_timer, draw_pitch_readout, draw_sensor_fault, timer_row_y};
pub use status::{draw_logo, draw_ride_status};
