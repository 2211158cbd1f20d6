//! Debug/profiling page rendering.
//!
//! Displays frame timing, redraw counters, simulator statistics and the event
//! log. Accessible by pressing `Y` to toggle from the dashboard.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DEBUG VIEW                         UP 00:12:34            50 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ TIMING              │ RENDER            │ SIMULATOR              │
//! │ Frame:  20.0ms      │ Frames: 12847     │ Ticks:  312            │
//! │ Render: 0.5ms       │ Headers: 642      │ Held:   14             │
//! │ Sleep:  19.5ms      │ Panels: 64235     │ Clock:  642            │
//! │ Min:    19.8ms      │ Clears: 5         │ Alerts: 1/4            │
//! │ Max:    25.1ms      │ Alerts: 310       │ Mode:   ACTIVE         │
//! │ Avg:    20.1ms      │ Log:    3/8       │ Link:   ONLINE         │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > Dashboard started                                              │
//! │ > Brush motor stall detected                                     │
//! │ > _                                                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, GRAY_400, GREEN_400, ORANGE_400, WHITE, YELLOW_500, rgb};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::profiling::{DebugLog, LOG_BUFFER_SIZE, ProfilingMetrics};
use crate::styles::LABEL_FONT;
use crate::telemetry::MAX_ALERTS;

// =============================================================================
// Layout Constants
// =============================================================================

/// Baseline of the title row (DEBUG VIEW, uptime, FPS).
const HEADER_Y: i32 = 14;
/// Rule under the title row.
const HEADER_DIVIDER_Y: i32 = 22;
/// Baseline of the TIMING / RENDER / SIMULATOR headings.
const SECTION_HEADER_Y: i32 = 36;
/// Baseline of the first stat row.
const STATS_Y: i32 = 52;
/// Stat row pitch. Six rows end above [`LOG_DIVIDER_Y`].
const STAT_LINE_HEIGHT: i32 = 14;
/// Rule above the log terminal.
const LOG_DIVIDER_Y: i32 = 148;
/// Baseline of the first log line.
const LOG_Y: i32 = 164;
/// Log line pitch.
const LOG_LINE_HEIGHT: i32 = 14;

/// Left edge of the timing column and of the log text.
const COL1_X: i32 = 8;
/// Left edge of the render column.
const COL2_X: i32 = 168;
/// Left edge of the simulator column.
const COL3_X: i32 = 328;

/// Gap between the `>` prompt and the log text.
const LOG_TEXT_INDENT: i32 = 12;

// =============================================================================
// Colors
// =============================================================================

/// Page background above the log.
const DEBUG_BG: Rgb565 = BLACK;
/// Title row text.
const HEADER_COLOR: Rgb565 = GREEN_400;
/// Column headings and the empty-log note.
const SECTION_COLOR: Rgb565 = GRAY_400;
/// Regular stat values.
const VALUE_COLOR: Rgb565 = WHITE;
/// Stat values worth a look (min/max/avg, held ticks, alerts, offline).
const HIGHLIGHT_COLOR: Rgb565 = YELLOW_500;
/// `>` prompt and cursor.
const LOG_PROMPT_COLOR: Rgb565 = GREEN_400;
/// Log entries.
const LOG_TEXT_COLOR: Rgb565 = ORANGE_400;
/// Dark green terminal background.
const LOG_BG: Rgb565 = rgb(8, 16, 8);

/// Title row.
const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
/// Column headings.
const SECTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);
/// Regular stat rows and the title values.
const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
/// Highlighted stat rows.
const HIGHLIGHT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
/// 1px horizontal rules.
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY_400, 1);
/// `>` prompt and cursor.
const PROMPT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
/// Log entries.
const LOG_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

/// Simulator and robot state shown in the right column.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatorStats {
    pub applied_ticks: u64,
    pub held_ticks: u64,
    pub clock_ticks: u64,
    pub alerts: usize,
    pub active: bool,
    pub connected: bool,
}

/// Fixed-capacity line buffer for one stat row.
type Line24 = String<24>;

/// Draw the debug/profiling page over a cleared display.
pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    stats: &SimulatorStats,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(DEBUG_BG).ok();

    draw_title(display, metrics, fps);
    draw_divider(display, HEADER_DIVIDER_Y);

    for (title, x) in [("TIMING", COL1_X), ("RENDER", COL2_X), ("SIMULATOR", COL3_X)] {
        Text::new(title, Point::new(x, SECTION_HEADER_Y), SECTION_STYLE)
            .draw(display)
            .ok();
    }

    draw_column(display, COL1_X, &timing_lines(metrics));
    draw_column(display, COL2_X, &render_lines(metrics, log));
    draw_column(display, COL3_X, &simulator_lines(stats));

    draw_divider(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_title<D>(display: &mut D, metrics: &ProfilingMetrics, fps: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), HEADER_STYLE)
        .draw(display)
        .ok();

    let mut uptime: Line24 = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::new(&uptime, Point::new(200, HEADER_Y), VALUE_STYLE)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(400, HEADER_Y), VALUE_STYLE)
        .draw(display)
        .ok();
}

/// Draw stat rows; a `true` flag selects the highlight color.
fn draw_column<D>(display: &mut D, x: i32, lines: &[(Line24, bool)])
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut y = STATS_Y;
    for (text, highlight) in lines {
        let style = if *highlight { HIGHLIGHT_STYLE } else { VALUE_STYLE };
        Text::new(text, Point::new(x, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn ms(us: u32) -> f32 {
    us as f32 / 1000.0
}

fn line(args: core::fmt::Arguments<'_>) -> Line24 {
    let mut s = String::new();
    let _ = s.write_fmt(args);
    s
}

fn timing_lines(metrics: &ProfilingMetrics) -> [(Line24, bool); 6] {
    let min_us = if metrics.frame_time_min_us == u32::MAX { 0 } else { metrics.frame_time_min_us };
    [
        (line(format_args!("Frame:  {:.1}ms", ms(metrics.frame_time_us))), false),
        (line(format_args!("Render: {:.1}ms", ms(metrics.render_time_us))), false),
        (line(format_args!("Sleep:  {:.1}ms", ms(metrics.sleep_time_us))), false),
        (line(format_args!("Min:    {:.1}ms", ms(min_us))), true),
        (line(format_args!("Max:    {:.1}ms", ms(metrics.frame_time_max_us))), true),
        (line(format_args!("Avg:    {:.1}ms", ms(metrics.frame_time_avg_us()))), true),
    ]
}

fn render_lines(metrics: &ProfilingMetrics, log: &DebugLog) -> [(Line24, bool); 6] {
    [
        (line(format_args!("Frames: {}", metrics.total_frames)), false),
        (line(format_args!("Headers: {}", metrics.header_redraws)), false),
        (line(format_args!("Panels: {}", metrics.panel_draws)), false),
        (line(format_args!("Clears: {}", metrics.full_clears)), false),
        (line(format_args!("Alerts: {}", metrics.alert_draws)), false),
        (line(format_args!("Log:    {}/{LOG_BUFFER_SIZE}", log.len())), false),
    ]
}

fn simulator_lines(stats: &SimulatorStats) -> [(Line24, bool); 6] {
    [
        (line(format_args!("Ticks:  {}", stats.applied_ticks)), false),
        (line(format_args!("Held:   {}", stats.held_ticks)), stats.held_ticks > 0),
        (line(format_args!("Clock:  {}", stats.clock_ticks)), false),
        (line(format_args!("Alerts: {}/{MAX_ALERTS}", stats.alerts)), stats.alerts > 0),
        (line(format_args!("Mode:   {}", if stats.active { "ACTIVE" } else { "PAUSED" })), false),
        (line(format_args!("Link:   {}", if stats.connected { "ONLINE" } else { "OFFLINE" })), !stats.connected),
    ]
}

fn draw_log_terminal<D>(display: &mut D, log: &DebugLog)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    if log.is_empty() {
        Text::new("(no events)", Point::new(COL1_X + LOG_TEXT_INDENT, y), SECTION_STYLE)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    for entry in log.iter() {
        Text::new(">", Point::new(COL1_X, y), PROMPT_STYLE).draw(display).ok();
        Text::new(entry, Point::new(COL1_X + LOG_TEXT_INDENT, y), LOG_TEXT_STYLE)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), PROMPT_STYLE).draw(display).ok();
}

fn draw_divider<D>(display: &mut D, y: i32)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 3, y))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
