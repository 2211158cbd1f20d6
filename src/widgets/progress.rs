//! Cleaning progress panel (center column).
//!
//! A ring gauge filled clockwise from 12 o'clock by the cleaning percentage,
//! with the percentage and "COMPLETE" in the middle. Below it: robot position,
//! ACTIVE/PAUSED status and panels cleaned today.
//!
//! The ring is driven by the eased percentage from
//! [`ValueTransition`](crate::animations::ValueTransition), so a 1% step sweeps
//! smoothly instead of jumping. The centre text shows the snapshot value.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::{draw_dot, draw_panel, draw_progress_ring};
use crate::colors::{BLUE_500, GREEN_400, ORANGE_400, PINK_500, PURPLE_500};
use crate::config::{BODY_TOP, CENTER_COL_WIDTH, CENTER_COL_X, PROGRESS_HEIGHT};
use crate::styles::{
    CENTERED,
    LABEL_FONT,
    LABEL_STYLE_LIGHT,
    LABEL_STYLE_MUTED,
    TITLE_STYLE_WHITE,
    VALUE_STYLE_LARGE,
};
use crate::telemetry::BotTelemetrySnapshot;

// =============================================================================
// Layout Constants
// =============================================================================

pub const PROGRESS_AREA: Rectangle = Rectangle::new(
    Point::new(CENTER_COL_X as i32, BODY_TOP as i32),
    Size::new(CENTER_COL_WIDTH, PROGRESS_HEIGHT),
);

const MID_X: i32 = (CENTER_COL_X + CENTER_COL_WIDTH / 2) as i32;

const TITLE_POS: Point = Point::new(MID_X, BODY_TOP as i32 + 22);

/// Ring geometry.
pub const RING_CENTER: Point = Point::new(MID_X, BODY_TOP as i32 + 86);
pub const RING_DIAMETER: u32 = 100;
pub const RING_STROKE: u32 = 10;

/// Blue → purple → pink.
pub const RING_GRADIENT: [Rgb565; 3] = [BLUE_500, PURPLE_500, PINK_500];

const PERCENT_POS: Point = Point::new(MID_X, RING_CENTER.y + 6);
const COMPLETE_POS: Point = Point::new(MID_X, RING_CENTER.y + 20);

const POSITION_POS: Point = Point::new(CENTER_COL_X as i32 + 12, BODY_TOP as i32 + 164);
const STATUS_DOT: Point = Point::new(CENTER_COL_X as i32 + 150, BODY_TOP as i32 + 161);
const STATUS_POS: Point = Point::new(CENTER_COL_X as i32 + 158, BODY_TOP as i32 + 164);
const PANELS_POS: Point = Point::new(MID_X, BODY_TOP as i32 + 184);

/// Percentage printed in the ring.
pub fn percent_text(snapshot: &BotTelemetrySnapshot) -> String<8> {
    let mut pct = String::new();
    let _ = write!(pct, "{}%", snapshot.cleaning_percentage.min(100));
    pct
}

/// Draw the cleaning progress panel.
///
/// `displayed_percent` is the eased cleaning percentage (0-100) used for the
/// ring fill.
pub fn draw_progress_panel<D>(display: &mut D, snapshot: &BotTelemetrySnapshot, displayed_percent: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, PROGRESS_AREA, PURPLE_500);

    Text::with_text_style("CLEANING PROGRESS", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    draw_progress_ring(
        display,
        RING_CENTER,
        RING_DIAMETER,
        RING_STROKE,
        displayed_percent.clamp(0.0, 100.0) / 100.0,
        RING_GRADIENT,
    );

    Text::with_text_style(&percent_text(snapshot), PERCENT_POS, VALUE_STYLE_LARGE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("COMPLETE", COMPLETE_POS, LABEL_STYLE_LIGHT, CENTERED)
        .draw(display)
        .ok();

    let mut position: String<24> = String::new();
    let _ = write!(position, "X:{}m Y:{}m", snapshot.position.x, snapshot.position.y);
    Text::new(&position, POSITION_POS, LABEL_STYLE_LIGHT).draw(display).ok();

    let (status, color) = if snapshot.is_active { ("ACTIVE", GREEN_400) } else { ("PAUSED", ORANGE_400) };
    draw_dot(display, STATUS_DOT, 6, color);
    Text::new(status, STATUS_POS, MonoTextStyle::new(LABEL_FONT, color))
        .draw(display)
        .ok();

    let mut panels: String<24> = String::new();
    let _ = write!(panels, "PANELS {}/{}", snapshot.panels_cleaned_today, snapshot.total_panels);
    Text::with_text_style(&panels, PANELS_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();
}
