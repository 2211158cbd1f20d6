//! Status cards for the left column: battery, speed and power.
//!
//! Each card follows the same layout inside its panel:
//!
//! ```text
//! ┌────────────────┐
//! │ [icon]       ● │  icon + pulsing accent dot
//! │ BATTERY        │  title
//! │ 85 %           │  value + unit
//! │ Discharging    │  subtitle
//! └────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use super::icons::{draw_battery_icon, draw_navigation_icon, draw_zap_icon};
use super::primitives::{draw_dot, draw_panel};
use crate::animations::lerp_rgb565;
use crate::colors::{BLUE_500, GRAY_800, GREEN_500, YELLOW_500};
use crate::config::{BODY_TOP, CARD_COUNT, CARD_HEIGHT, GAP, LEFT_COL_X, SIDE_COL_WIDTH};
use crate::styles::{LABEL_STYLE_LIGHT, LABEL_STYLE_MUTED, VALUE_STYLE_MEDIUM};
use crate::telemetry::BotTelemetrySnapshot;

/// Pulse dot diameter.
const DOT_SIZE: u32 = 8;

/// How far the dot fades toward the panel color on the "off" phase.
const DOT_DIM: f32 = 0.6;

/// Icon drawn in a card's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIcon {
    Battery,
    Navigation,
    Zap,
}

/// Content of one status card.
pub struct StatusCard<'a> {
    pub icon: CardIcon,
    pub title: &'a str,
    pub value: &'a str,
    pub unit: &'a str,
    pub accent: Rgb565,
    pub subtitle: &'a str,
}

/// Panel rectangle of the card at `index` (0 = top).
pub const fn card_area(index: u32) -> Rectangle {
    Rectangle::new(
        Point::new(LEFT_COL_X as i32, (BODY_TOP + index * (CARD_HEIGHT + GAP)) as i32),
        Size::new(SIDE_COL_WIDTH, CARD_HEIGHT),
    )
}

/// Draw one status card into `area`.
pub fn draw_status_card<D>(display: &mut D, area: Rectangle, card: &StatusCard<'_>, pulse_on: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, area, card.accent);

    let origin = area.top_left;
    let icon_pos = origin + Point::new(8, 8);
    match card.icon {
        CardIcon::Battery => draw_battery_icon(display, icon_pos, card.accent),
        CardIcon::Navigation => draw_navigation_icon(display, icon_pos, card.accent),
        CardIcon::Zap => draw_zap_icon(display, icon_pos, card.accent),
    }

    let dot_color = if pulse_on { card.accent } else { lerp_rgb565(card.accent, GRAY_800, DOT_DIM) };
    draw_dot(
        display,
        origin + Point::new(area.size.width as i32 - 12, 16),
        DOT_SIZE,
        dot_color,
    );

    Text::new(card.title, origin + Point::new(8, 38), LABEL_STYLE_LIGHT)
        .draw(display)
        .ok();

    let value_pos = origin + Point::new(8, 60);
    let next = Text::new(card.value, value_pos, VALUE_STYLE_MEDIUM)
        .draw(display)
        .unwrap_or(value_pos);
    Text::new(card.unit, next + Point::new(3, 0), LABEL_STYLE_MUTED)
        .draw(display)
        .ok();

    Text::new(card.subtitle, origin + Point::new(8, 75), LABEL_STYLE_MUTED)
        .draw(display)
        .ok();
}

/// Draw the three status cards from the snapshot.
///
/// Returns the number of cards drawn (for profiling).
pub fn draw_status_cards<D>(display: &mut D, snapshot: &BotTelemetrySnapshot, pulse_on: bool) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut battery: String<8> = String::new();
    let _ = write!(battery, "{}", snapshot.battery_level);
    let mut speed: String<8> = String::new();
    let _ = write!(speed, "{:.1}", snapshot.speed);
    let mut power: String<8> = String::new();
    let _ = write!(power, "{:.1}", snapshot.power_generation);

    let cards = [
        StatusCard {
            icon: CardIcon::Battery,
            title: "BATTERY",
            value: &battery,
            unit: "%",
            accent: GREEN_500,
            subtitle: snapshot.battery_status(),
        },
        StatusCard {
            icon: CardIcon::Navigation,
            title: "SPEED",
            value: &speed,
            unit: "m/s",
            accent: BLUE_500,
            subtitle: "Current velocity",
        },
        StatusCard {
            icon: CardIcon::Zap,
            title: "POWER",
            value: &power,
            unit: "kW",
            accent: YELLOW_500,
            subtitle: "Generation rate",
        },
    ];

    for (index, card) in (0..CARD_COUNT).zip(cards.iter()) {
        draw_status_card(display, card_area(index), card, pulse_on);
    }
    CARD_COUNT
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn display() -> SimulatorDisplay<Rgb565> {
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    fn dot_center(index: u32) -> Point {
        let area = card_area(index);
        area.top_left + Point::new(area.size.width as i32 - 12, 16)
    }

    #[test]
    fn test_card_areas_stack_without_overlap() {
        for i in 1..CARD_COUNT {
            let above = card_area(i - 1);
            let below = card_area(i);
            let above_bottom = above.top_left.y + above.size.height as i32;
            assert!(above_bottom < below.top_left.y, "Card {i} overlaps the card above");
        }
    }

    #[test]
    fn test_cards_use_accent_borders() {
        let mut d = display();
        let snap = BotTelemetrySnapshot::seeded(0.0);
        assert_eq!(draw_status_cards(&mut d, &snap, true), 3);

        let accents = [GREEN_500, BLUE_500, YELLOW_500];
        for (i, accent) in (0..CARD_COUNT).zip(accents) {
            let area = card_area(i);
            let top_mid = area.top_left + Point::new(area.size.width as i32 / 2, 0);
            assert_eq!(d.get_pixel(top_mid), accent, "Card {i} border should use its accent");
            assert_eq!(d.get_pixel(dot_center(i)), accent, "Card {i} dot should be lit");
        }
    }

    #[test]
    fn test_dot_dims_off_phase() {
        let mut d = display();
        let snap = BotTelemetrySnapshot::seeded(0.0);
        draw_status_cards(&mut d, &snap, false);

        let dimmed = d.get_pixel(dot_center(0));
        assert_ne!(dimmed, GREEN_500, "Dot should fade on the off phase");
        assert_ne!(dimmed, GRAY_800, "Dot should stay visible on the off phase");
    }
}
