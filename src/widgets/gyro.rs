//! Gyroscope panel (right column).
//!
//! Three vertical bars for the X (red), Y (green) and Z (blue) tilt angles,
//! each filled from the bottom by [`gyro_fill_percent`] with the angle printed
//! on top. Below them, the stability score and a red → yellow → green bar.
//!
//! Bar heights and the stability bar follow the eased values; the printed
//! numbers are always the latest reading.
//!
//! ```text
//! ┌──────────────┐
//! │  GYROSCOPE   │
//! │  X   Y   Z   │
//! │ ┌─┐ ┌─┐ ┌─┐  │
//! │ │ │ │█│ │ │  │
//! │ │█│ │█│ │█│  │
//! │ └─┘ └─┘ └─┘  │
//! │  STABILITY   │
//! │    94.0%     │
//! │ ▓▓▓▓▓▓▓▓░░░  │
//! └──────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use heapless::String;

use super::primitives::{draw_gradient_bar, draw_panel, draw_vertical_meter};
use crate::colors::{BLUE_400, GRAY_600, GREEN_500, RED_500, WHITE, YELLOW_500};
use crate::config::{BODY_HEIGHT, BODY_TOP, RIGHT_COL_X, SIDE_COL_WIDTH};
use crate::styles::{
    BAR_VALUE_FONT,
    CENTERED,
    LABEL_STYLE_LIGHT,
    LABEL_STYLE_WHITE,
    TITLE_STYLE_WHITE,
    VALUE_STYLE_MEDIUM,
};
use crate::telemetry::{Gyroscope, gyro_fill_percent, stability_bar_percent};

// =============================================================================
// Layout Constants
// =============================================================================

pub const GYRO_AREA: Rectangle = Rectangle::new(
    Point::new(RIGHT_COL_X as i32, BODY_TOP as i32),
    Size::new(SIDE_COL_WIDTH, BODY_HEIGHT),
);

const MID_X: i32 = (RIGHT_COL_X + SIDE_COL_WIDTH / 2) as i32;
const TITLE_POS: Point = Point::new(MID_X, BODY_TOP as i32 + 22);

/// Bar geometry.
const BAR_WIDTH: u32 = 32;
const BAR_HEIGHT: u32 = 100;
const BAR_SPACING: i32 = 40;
const BAR_TOP: i32 = BODY_TOP as i32 + 46;
const AXIS_LABEL_Y: i32 = BAR_TOP - 4;

/// Bar centers, left to right.
pub const BAR_CENTERS: [i32; 3] = [MID_X - BAR_SPACING, MID_X, MID_X + BAR_SPACING];

/// Axis labels and colors in display order.
const AXES: [(&str, Rgb565); 3] = [("X", RED_500), ("Y", GREEN_500), ("Z", BLUE_400)];

const STABILITY_LABEL_POS: Point = Point::new(MID_X, BAR_TOP + BAR_HEIGHT as i32 + 24);
const STABILITY_VALUE_POS: Point = Point::new(MID_X, BAR_TOP + BAR_HEIGHT as i32 + 46);

/// Stability bar track.
pub const STABILITY_BAR: Rectangle = Rectangle::new(
    Point::new(RIGHT_COL_X as i32 + 10, BAR_TOP + BAR_HEIGHT as i32 + 60),
    Size::new(SIDE_COL_WIDTH - 20, 8),
);

/// Red → yellow → green.
const STABILITY_GRADIENT: [Rgb565; 3] = [RED_500, YELLOW_500, GREEN_500];

/// Angle printed across the middle of each bar.
const BAR_VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(BAR_VALUE_FONT, WHITE);
const BAR_VALUE_TEXT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

const BAR_BORDER: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY_600, 1);

/// Track rectangle of bar `index` (0 = X).
pub const fn bar_area(index: usize) -> Rectangle {
    Rectangle::new(
        Point::new(BAR_CENTERS[index] - (BAR_WIDTH / 2) as i32, BAR_TOP),
        Size::new(BAR_WIDTH, BAR_HEIGHT),
    )
}

/// Angle text printed on a bar.
pub fn angle_text(angle: f32) -> String<12> {
    let mut s = String::new();
    let _ = write!(s, "{angle:.1}°");
    s
}

/// Stability score text.
pub fn stability_text(stability: f32) -> String<12> {
    let mut s = String::new();
    let _ = write!(s, "{stability:.1}%");
    s
}

/// Draw the gyroscope panel.
///
/// `reading` supplies the printed values. `eased_axes` and `eased_stability`
/// set the bar fills.
pub fn draw_gyro_panel<D>(display: &mut D, reading: &Gyroscope, eased_axes: [f32; 3], eased_stability: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, GYRO_AREA, GREEN_500);

    Text::with_text_style("GYROSCOPE", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let bars = eased_axes.into_iter().zip(reading.axes());
    for (index, ((label, color), (eased, angle))) in AXES.iter().zip(bars).enumerate() {
        let area = bar_area(index);
        let center_x = BAR_CENTERS[index];

        Text::with_text_style(label, Point::new(center_x, AXIS_LABEL_Y), LABEL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();

        draw_vertical_meter(display, area, gyro_fill_percent(eased), *color);
        area.into_styled(BAR_BORDER).draw(display).ok();

        let mid = Point::new(center_x, area.top_left.y + (BAR_HEIGHT / 2) as i32);
        Text::with_text_style(&angle_text(angle), mid, BAR_VALUE_STYLE, BAR_VALUE_TEXT)
            .draw(display)
            .ok();
    }

    Text::with_text_style("STABILITY", STABILITY_LABEL_POS, LABEL_STYLE_LIGHT, CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style(
        &stability_text(reading.stability()),
        STABILITY_VALUE_POS,
        VALUE_STYLE_MEDIUM,
        CENTERED,
    )
    .draw(display)
    .ok();

    draw_gradient_bar(
        display,
        STABILITY_BAR,
        stability_bar_percent(eased_stability),
        STABILITY_GRADIENT,
    );
}
