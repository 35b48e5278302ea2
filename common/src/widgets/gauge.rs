//! Main and overflow pitch bars with balance-point ticks.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use super::primitives::{clear_rect, fill_rect};
use crate::colors::WHITE;
use crate::config::{
    BAR_HEIGHT,
    BAR_TOP,
    MAIN_BAR_WIDTH,
    MAIN_BAR_X,
    OVERFLOW_BAR_WIDTH,
    OVERFLOW_BAR_X,
    TICK_LENGTH,
    TICK_OFFSET,
};
use crate::gauge::{BarFill, tick_y};
use crate::thresholds::{BALANCE_HIGH, BALANCE_LOW};

const OUTLINE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);
const TICK: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

const MAIN_OUTLINE_POS: Point = Point::new(MAIN_BAR_X, BAR_TOP);
const MAIN_OUTLINE_SIZE: Size = Size::new(MAIN_BAR_WIDTH, BAR_HEIGHT as u32);
const OVERFLOW_OUTLINE_POS: Point = Point::new(OVERFLOW_BAR_X, BAR_TOP);
const OVERFLOW_OUTLINE_SIZE: Size = Size::new(OVERFLOW_BAR_WIDTH, BAR_HEIGHT as u32);

/// Draw both bar outlines.
pub fn draw_bar_outlines<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(MAIN_OUTLINE_POS, MAIN_OUTLINE_SIZE)
        .into_styled(OUTLINE)
        .draw(display)
        .ok();
    Rectangle::new(OVERFLOW_OUTLINE_POS, OVERFLOW_OUTLINE_SIZE)
        .into_styled(OUTLINE)
        .draw(display)
        .ok();
}

/// Draw the balance window ticks left of the main bar.
pub fn draw_balance_ticks<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    for angle in [BALANCE_LOW, BALANCE_HIGH] {
        let y = tick_y(angle);
        let start = Point::new(MAIN_BAR_X - TICK_OFFSET, y);
        Line::new(start, start + Point::new(TICK_LENGTH as i32 - 1, 0))
            .into_styled(TICK)
            .draw(display)
            .ok();
    }
}

/// Redraw the gauge: clear both bars, fill, then outlines and ticks on top.
pub fn draw_gauge<D>(
    display: &mut D,
    main: BarFill,
    overflow: Option<BarFill>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_rect(display, MAIN_BAR_X + 1, BAR_TOP, MAIN_BAR_WIDTH - 2, BAR_HEIGHT as u32);
    clear_rect(display, OVERFLOW_BAR_X + 1, BAR_TOP, OVERFLOW_BAR_WIDTH - 2, BAR_HEIGHT as u32);

    if main.height > 0 {
        fill_rect(display, MAIN_BAR_X + 1, main.top(), MAIN_BAR_WIDTH - 2, main.height, main.color);
    }
    if let Some(fill) = overflow.filter(|f| f.height > 0) {
        fill_rect(display, OVERFLOW_BAR_X + 1, fill.top(), OVERFLOW_BAR_WIDTH - 2, fill.height, fill.color);
    }

    draw_bar_outlines(display);
    draw_balance_ticks(display);
}
