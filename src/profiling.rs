//! Frame timing, redraw counters and the on-screen event log.
//!
//! [`ProfilingMetrics`] is updated once per frame by the main loop and read by
//! the debug page. [`DebugLog`] keeps the last few dashboard events (mode
//! changes, faults, link drops) for the same page. Both are independent of the
//! `tracing` output, which goes to stderr.
//!
//! ```ignore
//! let frame_start = Instant::now();
//! // ... update + draw ...
//! let render_time = frame_start.elapsed();
//! // ... sleep to FRAME_TIME ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::{Deque, String};

use crate::text::{line_capacity, truncate_line};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Number of log lines kept (and shown on the debug page).
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

/// Log line buffer size in bytes.
const LOG_LINE_CAPACITY: usize = line_capacity(LOG_LINE_LENGTH);

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and render statistics.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent updating state and drawing
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    /// Exponential moving average of the frame time
    frame_time_avg_us: f32,

    // Counters
    /// Total frames since startup
    pub total_frames: u64,
    /// Header redraws (one per clock second when dirty tracking works)
    pub header_redraws: u32,
    /// Full display clears (first frame, overlay close, page switch)
    pub full_clears: u32,
    /// Body panel draws (6 per dashboard frame)
    pub panel_draws: u32,
    /// Alert overlay draws
    pub alert_draws: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Moving average weight of the newest frame.
    const EMA_ALPHA: f32 = 0.1;

    /// Create new metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            header_redraws: 0,
            full_clears: 0,
            panel_draws: 0,
            alert_draws: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one frame.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        let total_us = saturating_micros(total_time);

        self.frame_time_us = total_us;
        self.render_time_us = saturating_micros(render_time);
        self.sleep_time_us = saturating_micros(sleep_time);

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        self.frame_time_avg_us = if self.total_frames == 0 {
            total_us as f32
        } else {
            Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us)
        };

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Frames per second derived from the average frame time.
    #[inline]
    pub fn fps(&self) -> f32 {
        if self.frame_time_avg_us <= 0.0 { 0.0 } else { 1_000_000.0 / self.frame_time_avg_us }
    }

    /// Time since the metrics were created.
    #[inline]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> {
        format_uptime(self.uptime())
    }

    #[inline]
    pub const fn inc_header_redraws(&mut self) {
        self.header_redraws += 1;
    }

    #[inline]
    pub const fn inc_full_clears(&mut self) {
        self.full_clears += 1;
    }

    #[inline]
    pub const fn inc_panel_draws(&mut self, n: u32) {
        self.panel_draws += n;
    }

    #[inline]
    pub const fn inc_alert_draws(&mut self) {
        self.alert_draws += 1;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a duration as `HH:MM:SS`. Hours keep counting past 99.
pub fn format_uptime(uptime: Duration) -> String<12> {
    let secs = uptime.as_secs();
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}

fn saturating_micros(d: Duration) -> u32 {
    u32::try_from(d.as_micros()).unwrap_or(u32::MAX)
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of recent dashboard events.
///
/// Holds the last [`LOG_BUFFER_SIZE`] lines; older lines are dropped.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_CAPACITY>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Append a line, truncating it to [`LOG_LINE_LENGTH`] characters.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        self.buffer.push_back(truncate_line(msg, LOG_LINE_LENGTH)).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn us(n: u64) -> Duration {
        Duration::from_micros(n)
    }

    #[test]
    fn test_profiling_metrics_new() {
        let metrics = ProfilingMetrics::new();
        assert_eq!(metrics.total_frames, 0);
        assert_eq!(metrics.frame_time_min_us, u32::MAX);
        assert_eq!(metrics.frame_time_max_us, 0);
        assert!(metrics.fps().abs() < f32::EPSILON, "No frames means no FPS");
    }

    #[test]
    fn test_record_frame() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(us(20_000), us(4_000), us(16_000));

        assert_eq!(metrics.total_frames, 1);
        assert_eq!(metrics.frame_time_us, 20_000);
        assert_eq!(metrics.render_time_us, 4_000);
        assert_eq!(metrics.sleep_time_us, 16_000);
        assert_eq!(metrics.frame_time_avg_us(), 20_000, "First frame seeds the average");
        assert!((metrics.fps() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_frame_min_max() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(us(20_000), us(5_000), us(15_000));
        metrics.record_frame(us(15_000), us(5_000), us(10_000));
        metrics.record_frame(us(25_000), us(20_000), us(5_000));

        assert_eq!(metrics.frame_time_min_us, 15_000);
        assert_eq!(metrics.frame_time_max_us, 25_000);
    }

    #[test]
    fn test_average_moves_toward_new_frames() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(us(20_000), us(0), us(0));
        metrics.record_frame(us(30_000), us(0), us(0));
        // 0.1 * 30000 + 0.9 * 20000
        assert_eq!(metrics.frame_time_avg_us(), 21_000);
    }

    #[test]
    fn test_counters() {
        let mut metrics = ProfilingMetrics::new();
        metrics.inc_header_redraws();
        metrics.inc_full_clears();
        metrics.inc_panel_draws(5);
        metrics.inc_panel_draws(5);
        metrics.inc_alert_draws();
        assert_eq!(
            (metrics.header_redraws, metrics.full_clears, metrics.panel_draws, metrics.alert_draws),
            (1, 1, 10, 1)
        );
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::ZERO).as_str(), "00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 25 * 60 + 7)).as_str(), "03:25:07");
        assert_eq!(format_uptime(Duration::from_secs(120 * 3600)).as_str(), "120:00:00");
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        for i in 0..LOG_BUFFER_SIZE {
            log.push(&format!("Message {i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("New message");
        assert_eq!(log.len(), LOG_BUFFER_SIZE, "Full log should stay at capacity");
        assert_eq!(log.iter().next(), Some("Message 1"), "Oldest line should be dropped");
        assert_eq!(log.iter().last(), Some("New message"));
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push(&"y".repeat(LOG_LINE_LENGTH * 2));
        assert_eq!(log.iter().next().map(str::len), Some(LOG_LINE_LENGTH));
    }

    #[test]
    fn test_debug_log_multibyte_truncation() {
        let mut log = DebugLog::new();
        log.push(&"ü".repeat(LOG_LINE_LENGTH + 3));
        assert_eq!(
            log.iter().next().map(|line| line.chars().count()),
            Some(LOG_LINE_LENGTH),
            "Log lines are limited by characters, not bytes"
        );
    }
}
