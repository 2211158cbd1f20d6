//! Low-level drawing primitives shared across widgets.
//!
//! Everything here is generic over any RGB565 [`DrawTarget`], so the same code
//! renders into the simulator window, the headless snapshot buffer and test
//! displays.
//!
//! # Panels
//!
//! Every dashboard section sits on a [`draw_panel`]: a rounded dark fill with a
//! 1px accent border. Panels are redrawn every frame, which also wipes the
//! previous frame's values inside them.
//!
//! # Progress Ring
//!
//! [`draw_progress_ring`] strokes a gray track circle, then sweeps clockwise
//! from 12 o'clock in short arc segments, each colored by its position along a
//! three-stop gradient. Both ends get a filled circle so the stroke looks
//! round-capped.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc,
    Circle,
    Line,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    Rectangle,
    RoundedRectangle,
    StrokeAlignment,
};

use crate::animations::gradient3;
use crate::colors::{BLUE_900, GRAY_700, GRAY_800, GRAY_900, PURPLE_900};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Corner radius of dashboard panels.
const PANEL_RADIUS: u32 = 6;

/// Number of arc segments in a full progress ring.
const RING_SEGMENTS: u32 = 60;

/// Track style for empty gauges and bars.
pub const TRACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY_700);

/// Draw a rounded panel with a 1px border.
pub fn draw_panel<D>(display: &mut D, area: Rectangle, border: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(GRAY_800)
        .stroke_color(border)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    RoundedRectangle::with_equal_corners(area, Size::new(PANEL_RADIUS, PANEL_RADIUS))
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Fill the whole screen with the vertical backdrop gradient.
///
/// Dark gray at the top, deep blue in the middle, deep purple at the bottom.
pub fn draw_backdrop<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let last_row = (SCREEN_HEIGHT - 1) as f32;
    for y in 0..SCREEN_HEIGHT as i32 {
        let color = gradient3(GRAY_900, BLUE_900, PURPLE_900, y as f32 / last_row);
        Line::new(Point::new(0, y), Point::new(SCREEN_WIDTH as i32 - 1, y))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(display)
            .ok();
    }
}

/// Filled circle centered on `center`.
pub fn draw_dot<D>(display: &mut D, center: Point, diameter: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Vertical meter filled from the bottom.
///
/// `area` is the full track; `percent` (0-100) sets the filled height.
pub fn draw_vertical_meter<D>(display: &mut D, area: Rectangle, percent: f32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(TRACK_FILL).draw(display).ok();

    let fill_h = (area.size.height as f32 * percent.clamp(0.0, 100.0) / 100.0) as u32;
    if fill_h == 0 {
        return;
    }
    let top = area.top_left.y + (area.size.height - fill_h) as i32;
    Rectangle::new(Point::new(area.top_left.x, top), Size::new(area.size.width, fill_h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Horizontal bar filled from the left with a three-stop gradient.
///
/// The gradient spans the whole track width, so a short bar only shows the
/// first stop's colors.
pub fn draw_gradient_bar<D>(display: &mut D, area: Rectangle, percent: f32, stops: [Rgb565; 3])
where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(TRACK_FILL).draw(display).ok();

    let width = area.size.width;
    let fill_w = (width as f32 * percent.clamp(0.0, 100.0) / 100.0) as u32;
    let bottom = area.top_left.y + area.size.height as i32 - 1;

    for dx in 0..fill_w {
        let t = dx as f32 / (width.max(2) - 1) as f32;
        let x = area.top_left.x + dx as i32;
        Line::new(Point::new(x, area.top_left.y), Point::new(x, bottom))
            .into_styled(PrimitiveStyle::with_stroke(gradient3(stops[0], stops[1], stops[2], t), 1))
            .draw(display)
            .ok();
    }
}

/// Point on a circle of `radius` around `center`, `degrees` clockwise from 3 o'clock.
fn point_on_circle(center: Point, radius: f32, degrees: f32) -> Point {
    let rad = degrees.to_radians();
    Point::new(
        center.x + (radius * rad.cos()).round() as i32,
        center.y + (radius * rad.sin()).round() as i32,
    )
}

/// Circular progress gauge.
///
/// `fraction` (0.0-1.0) of the ring is swept clockwise from the top with a
/// gradient through `stops`.
pub fn draw_progress_ring<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    stroke: u32,
    fraction: f32,
    stops: [Rgb565; 3],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let track = PrimitiveStyleBuilder::new()
        .stroke_color(GRAY_700)
        .stroke_width(stroke)
        .stroke_alignment(StrokeAlignment::Center)
        .build();
    Circle::with_center(center, diameter).into_styled(track).draw(display).ok();

    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return;
    }

    let total_sweep = 360.0 * fraction;
    let segment_sweep = 360.0 / RING_SEGMENTS as f32;
    let radius = diameter as f32 / 2.0;

    let mut start = -90.0_f32;
    let end = start + total_sweep;
    while start < end {
        let sweep = segment_sweep.min(end - start);
        let t = (start + sweep / 2.0 + 90.0) / 360.0;
        let color = gradient3(stops[0], stops[1], stops[2], t);

        // Overlap by a degree so rounding never leaves gaps between segments
        Arc::with_center(center, diameter, start.deg(), (sweep + 1.0).min(end - start).deg())
            .into_styled(PrimitiveStyle::with_stroke(color, stroke))
            .draw(display)
            .ok();
        start += sweep;
    }

    // Round caps
    draw_dot(display, point_on_circle(center, radius, -90.0), stroke, stops[0]);
    draw_dot(
        display,
        point_on_circle(center, radius, end),
        stroke,
        gradient3(stops[0], stops[1], stops[2], fraction),
    );
}
