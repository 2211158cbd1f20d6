//! Header bar: logo, title, link badge and clock.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │ [logo] SOLAR BOT                   ┌──────────┐      12:34:56  │
//! │        Autonomous Cleaning System  │ ) ONLINE │  Saturday, ... │
//! └────────────────────────────────────┴──────────┴────────────────┘
//! ```
//!
//! The header only changes once per second (clock) or when the link toggles,
//! so the frame loop redraws it conditionally via
//! [`RenderState::check_header_dirty`](crate::render::RenderState::check_header_dirty).
//! Redrawing the panel wipes the previous text first.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use super::icons::{ICON_SIZE, draw_logo, draw_wifi_icon};
use super::primitives::draw_panel;
use crate::clock::Clock;
use crate::colors::{GRAY_600, GREEN_600, RED_600, WHITE};
use crate::config::{HEADER_HEIGHT, HEADER_WIDTH, HEADER_X, HEADER_Y};
use crate::styles::{
    LABEL_STYLE_LIGHT,
    LABEL_STYLE_WHITE,
    RIGHT_ALIGNED,
    SMALL_STYLE_LIGHT,
    TITLE_STYLE_WHITE,
    VALUE_STYLE_MEDIUM,
};

// =============================================================================
// Header Layout Constants
// =============================================================================

const HEADER_AREA: Rectangle = Rectangle::new(
    Point::new(HEADER_X as i32, HEADER_Y as i32),
    Size::new(HEADER_WIDTH, HEADER_HEIGHT),
);

const LOGO_POS: Point = Point::new(HEADER_X as i32 + 6, HEADER_Y as i32 + 6);
const TITLE_POS: Point = Point::new(58, 26);
const SUBTITLE_POS: Point = Point::new(58, 44);

/// Right edge for the clock text.
const CLOCK_RIGHT: i32 = (HEADER_X + HEADER_WIDTH) as i32 - 6;
const TIME_POS: Point = Point::new(CLOCK_RIGHT, 28);
const DATE_POS: Point = Point::new(CLOCK_RIGHT, 46);

/// Link badge geometry.
pub const BADGE_AREA: Rectangle = Rectangle::new(Point::new(224, 16), Size::new(88, 24));
const BADGE_ICON_POS: Point = Point::new(228, 20);
const BADGE_TEXT_POS: Point = Point::new(228 + ICON_SIZE as i32 + 4, 32);

const BADGE_ONLINE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GREEN_600);
const BADGE_OFFLINE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED_600);

/// Draw the complete header.
pub fn draw_header<D>(display: &mut D, clock: &Clock, connected: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, HEADER_AREA, GRAY_600);
    draw_logo(display, LOGO_POS);

    Text::new("SOLAR BOT", TITLE_POS, TITLE_STYLE_WHITE).draw(display).ok();
    Text::new("Autonomous Cleaning System", SUBTITLE_POS, LABEL_STYLE_LIGHT)
        .draw(display)
        .ok();

    draw_link_badge(display, connected);

    Text::with_text_style(clock.time(), TIME_POS, VALUE_STYLE_MEDIUM, RIGHT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(clock.date(), DATE_POS, SMALL_STYLE_LIGHT, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// ONLINE (green) or OFFLINE (red) pill with a signal icon.
fn draw_link_badge<D>(display: &mut D, connected: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = if connected { BADGE_ONLINE_FILL } else { BADGE_OFFLINE_FILL };
    RoundedRectangle::with_equal_corners(BADGE_AREA, Size::new(4, 4))
        .into_styled(fill)
        .draw(display)
        .ok();

    draw_wifi_icon(display, BADGE_ICON_POS, WHITE, connected);

    let label = if connected { "ONLINE" } else { "OFFLINE" };
    Text::new(label, BADGE_TEXT_POS, LABEL_STYLE_WHITE).draw(display).ok();
}
