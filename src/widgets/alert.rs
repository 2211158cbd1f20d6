//! System alert overlay.
//!
//! Shown along the bottom of the screen whenever the alert list is non-empty,
//! on top of the body panels. The fill pulses between two reds at ~1 Hz.
//! When the last alert is cleared the frame loop clears the whole display,
//! since the panels under the overlay are only redrawn where they own pixels.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment};
use embedded_graphics::text::Text;

use super::icons::draw_alert_icon;
use super::primitives::draw_dot;
use crate::animations::lerp_rgb565;
use crate::colors::{BLACK, RED_400, RED_600, WHITE};
use crate::config::SCREEN_WIDTH;
use crate::styles::{LABEL_STYLE_WHITE, TITLE_STYLE_WHITE};
use crate::telemetry::BotTelemetrySnapshot;

/// Overlay rectangle.
pub const ALERT_AREA: Rectangle = Rectangle::new(Point::new(12, 216), Size::new(SCREEN_WIDTH - 24, 96));

const BORDER_WIDTH: u32 = 3;
const ICON_POS: Point = Point::new(24, 226);
const TITLE_POS: Point = Point::new(48, 240);
const FIRST_LINE_Y: i32 = 258;
const LINE_HEIGHT: i32 = 14;
const BULLET_X: i32 = 28;
const TEXT_X: i32 = 36;

/// Fill on the dim half of the pulse.
const DIM_AMOUNT: f32 = 0.3;

/// Draw the overlay listing every alert, oldest first.
pub fn draw_alert_overlay<D>(display: &mut D, snapshot: &BotTelemetrySnapshot, pulse_on: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = if pulse_on { RED_600 } else { lerp_rgb565(RED_600, BLACK, DIM_AMOUNT) };
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(RED_400)
        .stroke_width(BORDER_WIDTH)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    RoundedRectangle::with_equal_corners(ALERT_AREA, Size::new(10, 10))
        .into_styled(style)
        .draw(display)
        .ok();

    draw_alert_icon(display, ICON_POS, WHITE);
    Text::new("SYSTEM ALERT", TITLE_POS, TITLE_STYLE_WHITE)
        .draw(display)
        .ok();

    let mut y = FIRST_LINE_Y;
    for line in snapshot.errors() {
        draw_dot(display, Point::new(BULLET_X, y - 3), 4, WHITE);
        Text::new(line, Point::new(TEXT_X, y), LABEL_STYLE_WHITE)
            .draw(display)
            .ok();
        y += LINE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::SCREEN_HEIGHT;
    use crate::telemetry::{ALERT_LINE_LENGTH, MAX_ALERTS};

    /// Inside the overlay, right of the title, clear of text.
    const FILL_PROBE: Point = Point::new(440, 232);

    fn snapshot_with_alert() -> BotTelemetrySnapshot {
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        snap.push_error("Brush motor stall detected");
        snap
    }

    #[test]
    fn test_overlay_fits_screen_with_all_lines() {
        let last_baseline = FIRST_LINE_Y + (MAX_ALERTS as i32 - 1) * LINE_HEIGHT;
        let bottom = ALERT_AREA.top_left.y + ALERT_AREA.size.height as i32;
        assert!(last_baseline + 2 < bottom - BORDER_WIDTH as i32, "Last alert line should fit");
        assert!(bottom <= SCREEN_HEIGHT as i32);

        let longest = TEXT_X + ALERT_LINE_LENGTH as i32 * 6;
        assert!(longest < ALERT_AREA.top_left.x + ALERT_AREA.size.width as i32, "Longest alert should fit");
    }

    #[test]
    fn test_overlay_pulses() {
        let snap = snapshot_with_alert();
        let mut on = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut off = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_alert_overlay(&mut on, &snap, true);
        draw_alert_overlay(&mut off, &snap, false);

        assert_eq!(on.get_pixel(FILL_PROBE), RED_600, "Bright phase uses the alert red");
        assert_ne!(off.get_pixel(FILL_PROBE), RED_600, "Dim phase should darken the fill");
        assert_eq!(on.get_pixel(Point::new(240, ALERT_AREA.top_left.y)), RED_400, "Border is light red");
    }

    #[test]
    fn test_one_bullet_per_alert() {
        let mut snap = snapshot_with_alert();
        snap.push_error("Water tank low");

        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_alert_overlay(&mut display, &snap, true);

        assert_eq!(display.get_pixel(Point::new(BULLET_X, FIRST_LINE_Y - 3)), WHITE);
        assert_eq!(display.get_pixel(Point::new(BULLET_X, FIRST_LINE_Y + LINE_HEIGHT - 3)), WHITE);
        assert_eq!(
            display.get_pixel(Point::new(BULLET_X, FIRST_LINE_Y + 2 * LINE_HEIGHT - 3)),
            RED_600,
            "No bullet without a third alert"
        );
    }
}
