//! Ride status line and logo along the bottom edge.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use super::primitives::{clear_rect, draw_text};
use crate::colors::WHITE;
use crate::config::{LOGO_SIZE, LOGO_X, LOGO_Y, PERCENT_WIDTH, PERCENT_X, RIDE_TIME_WIDTH, RIDE_TIME_X, STATUS_HEIGHT, STATUS_Y};
use crate::format::format_percentage;
use crate::session::SessionSnapshot;
use crate::styles::LABEL_STYLE_WHITE;

const LOGO_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

/// Ride time (`HH:MM:SS`) and wheelie percentage.
pub fn draw_ride_status<D>(
    display: &mut D,
    session: &SessionSnapshot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_rect(display, RIDE_TIME_X, STATUS_Y, RIDE_TIME_WIDTH, STATUS_HEIGHT);
    draw_text(display, &session.ride_time, RIDE_TIME_X, STATUS_Y, LABEL_STYLE_WHITE);

    clear_rect(display, PERCENT_X, STATUS_Y, PERCENT_WIDTH, STATUS_HEIGHT);
    draw_text(
        display,
        &format_percentage(session.wheelie_percentage),
        PERCENT_X,
        STATUS_Y,
        LABEL_STYLE_WHITE,
    );
}

/// Small wheel-and-ramp glyph in the bottom-left corner.
pub fn draw_logo<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(Point::new(LOGO_X + 1, LOGO_Y - 2), 5)
        .into_styled(LOGO_STROKE)
        .draw(display)
        .ok();

    let origin = Point::new(LOGO_X - LOGO_SIZE, LOGO_Y);
    Line::new(origin, Point::new(LOGO_X + LOGO_SIZE - 3, LOGO_Y - 12))
        .into_styled(LOGO_STROKE)
        .draw(display)
        .ok();
    Line::new(origin, Point::new(LOGO_X + LOGO_SIZE, LOGO_Y))
        .into_styled(LOGO_STROKE)
        .draw(display)
        .ok();
}
