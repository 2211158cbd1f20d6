//! Non-modal popup overlays for operator commands.
//!
//! Popups appear centered on screen with a white border. Only one displays at
//! a time (most recent wins) and input is still processed while one is up.
//!
//! | Popup | Trigger | Text | Fill |
//! |-------|---------|------|------|
//! | Mode | `A` | ACTIVE / PAUSED | green / orange |
//! | Link | `B` | ONLINE / OFFLINE | green / red |
//! | Fault | `X` | FAULT INJECTED | red |
//! | Cleared | `R` | ALERTS CLEARED | purple |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{GREEN_600, ORANGE_400, PURPLE_500, RED_600, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::Popup;
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

const POPUP_WIDTH: u32 = 180;
const POPUP_HEIGHT: u32 = 50;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

const TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 5);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Draw a single-line popup with the given fill.
pub fn draw_popup<D>(display: &mut D, text: &str, fill: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
    Text::with_text_style(text, TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Text and fill for a popup, given the state it reports.
pub const fn popup_content(popup: &Popup, active: bool, connected: bool) -> (&'static str, Rgb565) {
    match popup {
        Popup::Mode(_) if active => ("ACTIVE", GREEN_600),
        Popup::Mode(_) => ("PAUSED", ORANGE_400),
        Popup::Link(_) if connected => ("ONLINE", GREEN_600),
        Popup::Link(_) => ("OFFLINE", RED_600),
        Popup::Fault(_) => ("FAULT INJECTED", RED_600),
        Popup::Cleared(_) => ("ALERTS CLEARED", PURPLE_500),
    }
}

/// Draw the popup for the current command state.
pub fn draw_command_popup<D>(display: &mut D, popup: &Popup, active: bool, connected: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let (text, fill) = popup_content(popup, active, connected);
    draw_popup(display, text, fill);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_popup_content() {
        let now = Instant::now();
        assert_eq!(popup_content(&Popup::Mode(now), true, true).0, "ACTIVE");
        assert_eq!(popup_content(&Popup::Mode(now), false, true).0, "PAUSED");
        assert_eq!(popup_content(&Popup::Link(now), true, false), ("OFFLINE", RED_600));
        assert_eq!(popup_content(&Popup::Cleared(now), true, true).0, "ALERTS CLEARED");
    }

    #[test]
    fn test_longest_text_fits() {
        // FONT_10X20 is 10px per glyph
        for text in ["FAULT INJECTED", "ALERTS CLEARED", "OFFLINE"] {
            assert!(text.len() as u32 * 10 < POPUP_WIDTH, "{text} should fit the popup");
        }
    }

    #[test]
    fn test_popup_centered_with_border() {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_command_popup(&mut display, &Popup::Fault(Instant::now()), true, true);

        assert_eq!(display.get_pixel(BORDER_POS), WHITE, "Border corner should be white");
        assert_eq!(display.get_pixel(BG_POS + Point::new(2, 2)), RED_600, "Fault popup should be red");
        assert_eq!(
            POPUP_X * 2 + POPUP_WIDTH as i32,
            SCREEN_WIDTH as i32,
            "Popup should be horizontally centered"
        );
    }
}
