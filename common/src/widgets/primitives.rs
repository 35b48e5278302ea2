//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::colors::BLACK;
use crate::config::{RIGHT_PADDING, SCREEN_WIDTH};
use crate::styles::TOP_LEFT;

const BLACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Fill a rectangle with a solid colour.
pub fn fill_rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Blank a rectangle to the background colour.
pub fn clear_rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(BLACK_FILL)
        .draw(display)
        .ok();
}

/// Rendered width of `text` in pixels.
pub fn text_width(
    text: &str,
    style: &MonoTextStyle<'_, Rgb565>,
) -> u32 {
    style
        .measure_string(text, Point::zero(), Baseline::Top)
        .bounding_box
        .size
        .width
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, Point::new(x, y), style, TOP_LEFT)
        .draw(display)
        .ok();
}

/// X coordinate that right-aligns a `width`-pixel text against the right
/// canvas edge, leaving [`RIGHT_PADDING`].
#[inline]
pub const fn right_aligned_x(width: u32) -> i32 { SCREEN_WIDTH as i32 - RIGHT_PADDING - width as i32 }

/// Draw `text` right-aligned at row `y`. Returns the text width.
pub fn draw_text_right<D>(
    display: &mut D,
    text: &str,
    y: i32,
    style: MonoTextStyle<'_, Rgb565>,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = text_width(text, &style);
    draw_text(display, text, right_aligned_x(width), y, style);
    width
}
