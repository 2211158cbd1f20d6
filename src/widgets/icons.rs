//! Line icons and the header logo.
//!
//! Icons are drawn from primitives into a 16x16 box whose top-left corner is
//! `origin`, using a single stroke color. The logo is a 40x40 sprite: a sun
//! over a tilted grid of solar panels.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc,
    Circle,
    Line,
    Polyline,
    PrimitiveStyle,
    Rectangle,
    RoundedRectangle,
    Triangle,
};

use crate::colors::{BLACK, BLUE_400, BLUE_900, YELLOW_500};

/// Icon box edge length in pixels.
pub const ICON_SIZE: u32 = 16;

/// Logo sprite edge length in pixels.
pub const LOGO_SIZE: u32 = 40;

#[inline]
fn at(origin: Point, x: i32, y: i32) -> Point {
    origin + Point::new(x, y)
}

/// Battery outline with terminal nub.
pub fn draw_battery_icon<D>(display: &mut D, origin: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(at(origin, 0, 4), Size::new(14, 9))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
    Rectangle::new(at(origin, 14, 6), Size::new(2, 5))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    Rectangle::new(at(origin, 2, 6), Size::new(7, 5))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Lightning bolt.
pub fn draw_zap_icon<D>(display: &mut D, origin: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    Triangle::new(at(origin, 10, 0), at(origin, 2, 9), at(origin, 9, 9))
        .into_styled(fill)
        .draw(display)
        .ok();
    Triangle::new(at(origin, 6, 15), at(origin, 14, 6), at(origin, 7, 6))
        .into_styled(fill)
        .draw(display)
        .ok();
}

/// Navigation arrow pointing up and right.
pub fn draw_navigation_icon<D>(display: &mut D, origin: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let points = [
        at(origin, 1, 7),
        at(origin, 15, 1),
        at(origin, 9, 15),
        at(origin, 8, 8),
        at(origin, 1, 7),
    ];
    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Warning triangle with exclamation mark.
pub fn draw_alert_icon<D>(display: &mut D, origin: Point, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = PrimitiveStyle::with_stroke(color, 1);
    Triangle::new(at(origin, 8, 1), at(origin, 0, 15), at(origin, 15, 15))
        .into_styled(stroke)
        .draw(display)
        .ok();
    Line::new(at(origin, 8, 6), at(origin, 8, 10))
        .into_styled(stroke)
        .draw(display)
        .ok();
    Pixel(at(origin, 8, 12), color).draw(display).ok();
}

/// Signal arcs. With `connected == false` a slash is drawn across them.
pub fn draw_wifi_icon<D>(display: &mut D, origin: Point, color: Rgb565, connected: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = PrimitiveStyle::with_stroke(color, 1);
    let center = at(origin, 8, 13);
    for diameter in [6, 12, 18] {
        Arc::with_center(center, diameter, (-135.0_f32).deg(), 90.0_f32.deg())
            .into_styled(stroke)
            .draw(display)
            .ok();
    }
    Circle::with_center(center, 3)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();

    if !connected {
        Line::new(at(origin, 1, 1), at(origin, 15, 15))
            .into_styled(PrimitiveStyle::with_stroke(color, 2))
            .draw(display)
            .ok();
    }
}

/// Header logo: a sun above a grid of solar panels on a black tile.
pub fn draw_logo<D>(display: &mut D, origin: Point)
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::new(origin, Size::new(LOGO_SIZE, LOGO_SIZE)),
        Size::new(6, 6),
    )
    .into_styled(PrimitiveStyle::with_fill(BLACK))
    .draw(display)
    .ok();

    // Sun with four rays
    let sun = at(origin, 27, 11);
    Circle::with_center(sun, 9)
        .into_styled(PrimitiveStyle::with_fill(YELLOW_500))
        .draw(display)
        .ok();
    let ray = PrimitiveStyle::with_stroke(YELLOW_500, 1);
    for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
        Line::new(sun + Point::new(dx * 6, dy * 6), sun + Point::new(dx * 9, dy * 9))
            .into_styled(ray)
            .draw(display)
            .ok();
    }

    // 3x2 panel grid
    let cell = PrimitiveStyle::with_fill(BLUE_400);
    for row in 0..2 {
        for col in 0..3 {
            Rectangle::new(at(origin, 5 + col * 10, 22 + row * 7), Size::new(9, 6))
                .into_styled(cell)
                .draw(display)
                .ok();
        }
    }
    Line::new(at(origin, 5, 35), at(origin, 34, 35))
        .into_styled(PrimitiveStyle::with_stroke(BLUE_900, 1))
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::ContainsPoint;
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{GREEN_500, RED_500};

    const ORIGIN: Point = Point::new(8, 8);

    /// Count pixels of `color` inside and outside the box at ORIGIN.
    fn count(display: &SimulatorDisplay<Rgb565>, size: u32, color: Rgb565) -> (usize, usize) {
        let area = Rectangle::new(ORIGIN, Size::new(size, size));
        let mut inside = 0;
        let mut outside = 0;
        for y in 0..64 {
            for x in 0..64 {
                let p = Point::new(x, y);
                if display.get_pixel(p) == color {
                    if area.contains(p) {
                        inside += 1;
                    } else {
                        outside += 1;
                    }
                }
            }
        }
        (inside, outside)
    }

    #[test]
    fn test_icons_stay_in_box() {
        type Draw = fn(&mut SimulatorDisplay<Rgb565>, Point, Rgb565);
        let icons: [(&str, Draw); 4] = [
            ("battery", draw_battery_icon),
            ("zap", draw_zap_icon),
            ("navigation", draw_navigation_icon),
            ("alert", draw_alert_icon),
        ];

        for (name, draw) in icons {
            let mut display = SimulatorDisplay::new(Size::new(64, 64));
            draw(&mut display, ORIGIN, GREEN_500);
            let (inside, outside) = count(&display, ICON_SIZE, GREEN_500);
            assert!(inside > 0, "{name} icon should paint pixels");
            assert_eq!(outside, 0, "{name} icon should stay inside its 16x16 box");
        }
    }

    #[test]
    fn test_wifi_off_adds_slash() {
        let mut online = SimulatorDisplay::new(Size::new(64, 64));
        let mut offline = SimulatorDisplay::new(Size::new(64, 64));
        draw_wifi_icon(&mut online, ORIGIN, RED_500, true);
        draw_wifi_icon(&mut offline, ORIGIN, RED_500, false);

        let (on, _) = count(&online, ICON_SIZE, RED_500);
        let (off, _) = count(&offline, ICON_SIZE, RED_500);
        assert!(off > on, "Offline icon should add a slash ({off} vs {on} pixels)");
        assert_eq!(offline.get_pixel(at(ORIGIN, 2, 2)), RED_500);
    }

    #[test]
    fn test_logo_sprite() {
        let mut display = SimulatorDisplay::new(Size::new(64, 64));
        draw_logo(&mut display, ORIGIN);

        assert_eq!(display.get_pixel(at(ORIGIN, 27, 11)), YELLOW_500, "Sun should be yellow");
        assert_eq!(display.get_pixel(at(ORIGIN, 8, 24)), BLUE_400, "Panels should be blue");
        assert_eq!(display.get_pixel(at(ORIGIN, 36, 36)), BLACK, "Tile corner area should be black");
    }
}
