//! Environment strip under the progress panel: temperature and humidity.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::draw_panel;
use crate::colors::ORANGE_400;
use crate::config::{CENTER_COL_WIDTH, CENTER_COL_X, ENV_HEIGHT, ENV_Y};
use crate::styles::{DEGREE_STYLE_MUTED, LABEL_STYLE_LIGHT, LABEL_STYLE_MUTED, VALUE_STYLE_MEDIUM};
use crate::telemetry::BotTelemetrySnapshot;

pub const ENV_AREA: Rectangle = Rectangle::new(
    Point::new(CENTER_COL_X as i32, ENV_Y as i32),
    Size::new(CENTER_COL_WIDTH, ENV_HEIGHT),
);

const HALF_WIDTH: i32 = (CENTER_COL_WIDTH / 2) as i32;
const LABEL_Y: i32 = ENV_Y as i32 + 16;
const VALUE_Y: i32 = ENV_Y as i32 + 42;
const LEFT_X: i32 = CENTER_COL_X as i32 + 12;
const RIGHT_X: i32 = LEFT_X + HALF_WIDTH;

/// Draw the environment strip.
pub fn draw_environment_panel<D>(display: &mut D, snapshot: &BotTelemetrySnapshot)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, ENV_AREA, ORANGE_400);

    let mut temp: String<8> = String::new();
    let _ = write!(temp, "{:.1}", snapshot.temperature);
    draw_reading(display, LEFT_X, "TEMPERATURE", &temp, "°C", true);

    let mut humidity: String<8> = String::new();
    let _ = write!(humidity, "{:.1}", snapshot.humidity);
    draw_reading(display, RIGHT_X, "HUMIDITY", &humidity, "%", false);
}

/// Label over a value with its unit. Units containing `°` need the Latin-1 font.
fn draw_reading<D>(display: &mut D, x: i32, label: &str, value: &str, unit: &str, degree_unit: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new(label, Point::new(x, LABEL_Y), LABEL_STYLE_LIGHT)
        .draw(display)
        .ok();

    let value_pos = Point::new(x, VALUE_Y);
    let next = Text::new(value, value_pos, VALUE_STYLE_MEDIUM)
        .draw(display)
        .unwrap_or(value_pos);
    let unit_style = if degree_unit { DEGREE_STYLE_MUTED } else { LABEL_STYLE_MUTED };
    Text::new(unit, next + Point::new(3, 0), unit_style).draw(display).ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::GRAY_800;
    use crate::config::{BODY_HEIGHT, BODY_TOP, SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_strip_fills_column_bottom() {
        assert_eq!(
            ENV_AREA.top_left.y + ENV_AREA.size.height as i32,
            (BODY_TOP + BODY_HEIGHT) as i32,
            "Environment strip should end at the body bottom"
        );
    }

    #[test]
    fn test_draws_orange_panel_with_text() {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_environment_panel(&mut display, &BotTelemetrySnapshot::seeded(0.0));

        let mid_top = ENV_AREA.top_left + Point::new(HALF_WIDTH, 0);
        assert_eq!(display.get_pixel(mid_top), ORANGE_400, "Strip border should be orange");

        // Some pixel on the value row differs from the panel fill
        let painted = (LEFT_X..LEFT_X + 40)
            .flat_map(|x| (VALUE_Y - 12..VALUE_Y).map(move |y| Point::new(x, y)))
            .any(|p| display.get_pixel(p) != GRAY_800);
        assert!(painted, "Temperature value should be rendered");
    }
}
