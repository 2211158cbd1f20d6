//! Telemetry snapshot for the Solar Bot.
//!
//! [`BotTelemetrySnapshot`] is the single record every widget renders from. It
//! is created once with the seed values below, then mutated in place by the
//! [`TelemetrySimulator`](crate::simulator::TelemetrySimulator) on each
//! telemetry tick. Widgets only ever read it.
//!
//! # Derived Values
//!
//! | Value | Formula |
//! |-------|---------|
//! | Gyroscope baseline | `x = sin(t/1000)·10`, `y = cos(t/1200)·8`, `z = sin(t/800)·6` (`t` in epoch ms) |
//! | Gyroscope bar fill | `clamp((v + 15) / 30 · 100, 5, 95)` percent |
//! | Stability | `100 − |x + y + z| · 1.5` (may be negative) |
//! | Stability bar | `clamp(stability, 0, 100)` percent |
//!
//! # Alert List
//!
//! The alert list is a fixed-capacity ring: pushing into a full list drops the
//! oldest entry, and messages longer than [`ALERT_LINE_LENGTH`] characters are
//! truncated.

use heapless::{Deque, String};

use crate::text::{line_capacity, truncate_line};

// =============================================================================
// Seed Values
// =============================================================================

/// Cleaning progress at startup (percent).
pub const SEED_CLEANING_PERCENT: u8 = 78;

/// Travel speed while active (m/s).
pub const SEED_SPEED: f32 = 2.3;

/// Battery level at startup (percent).
pub const SEED_BATTERY_PERCENT: u8 = 85;

/// Position on the array at startup (metres).
pub const SEED_POSITION: Position = Position { x: 125, y: 78 };

/// Baseline power generation (kW).
pub const SEED_POWER_KW: f32 = 3.2;

/// Panels already cleaned today.
pub const SEED_PANELS_CLEANED: u16 = 24;

/// Panels in the array.
pub const SEED_TOTAL_PANELS: u16 = 50;

/// Baseline ambient temperature (°C).
pub const SEED_TEMPERATURE_C: f32 = 28.5;

/// Baseline relative humidity (%).
pub const SEED_HUMIDITY: f32 = 65.0;

// =============================================================================
// Alert List Configuration
// =============================================================================

/// Maximum number of alerts kept (and shown in the overlay).
pub const MAX_ALERTS: usize = 4;

/// Maximum characters per alert line.
pub const ALERT_LINE_LENGTH: usize = 48;

/// Alert line buffer size in bytes.
const ALERT_LINE_CAPACITY: usize = line_capacity(ALERT_LINE_LENGTH);

// =============================================================================
// Gyroscope Display Range
// =============================================================================

/// Lowest angle mapped onto the gyroscope bar (empty end).
const GYRO_RANGE_MIN: f32 = -15.0;

/// Span of angles mapped onto the bar.
const GYRO_RANGE_SPAN: f32 = 30.0;

/// Bars never render fully empty or fully full.
const GYRO_FILL_MIN: f32 = 5.0;
const GYRO_FILL_MAX: f32 = 95.0;

/// Stability penalty per degree of summed tilt.
const STABILITY_PENALTY: f32 = 1.5;

/// Robot position on the panel array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Tilt angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Gyroscope {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Gyroscope {
    /// Sinusoidal baseline the simulator jitters around.
    pub fn baseline(epoch_ms: f64) -> Self {
        Self {
            x: ((epoch_ms / 1000.0).sin() * 10.0) as f32,
            y: ((epoch_ms / 1200.0).cos() * 8.0) as f32,
            z: ((epoch_ms / 800.0).sin() * 6.0) as f32,
        }
    }

    /// Axes in display order (X, Y, Z).
    #[inline]
    pub const fn axes(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Stability score from the summed tilt.
    #[inline]
    pub fn stability(&self) -> f32 {
        stability_from_axes(self.x, self.y, self.z)
    }
}

/// Stability score: `100 − |x + y + z| · 1.5`.
#[inline]
pub fn stability_from_axes(x: f32, y: f32, z: f32) -> f32 {
    (x + y + z).abs().mul_add(-STABILITY_PENALTY, 100.0)
}

/// Fill percentage of a gyroscope bar for an angle.
#[inline]
pub fn gyro_fill_percent(angle: f32) -> f32 {
    ((angle - GYRO_RANGE_MIN) / GYRO_RANGE_SPAN * 100.0).clamp(GYRO_FILL_MIN, GYRO_FILL_MAX)
}

/// Width percentage of the stability bar.
#[inline]
pub fn stability_bar_percent(stability: f32) -> f32 {
    stability.clamp(0.0, 100.0)
}

/// The in-memory record of simulated robot sensor values.
#[derive(Clone, Debug)]
pub struct BotTelemetrySnapshot {
    pub cleaning_percentage: u8,
    pub speed: f32,
    pub battery_level: u8,
    pub is_connected: bool,
    pub is_active: bool,
    pub position: Position,
    pub gyroscope: Gyroscope,
    pub power_generation: f32,
    pub panels_cleaned_today: u16,
    pub total_panels: u16,
    pub temperature: f32,
    pub humidity: f32,
    errors: Deque<String<ALERT_LINE_CAPACITY>, MAX_ALERTS>,
}

impl BotTelemetrySnapshot {
    /// Create the startup snapshot from seed values.
    ///
    /// The gyroscope starts on its baseline for `epoch_ms` so the first frame
    /// already shows tilt.
    pub fn seeded(epoch_ms: f64) -> Self {
        Self {
            cleaning_percentage: SEED_CLEANING_PERCENT,
            speed: SEED_SPEED,
            battery_level: SEED_BATTERY_PERCENT,
            is_connected: true,
            is_active: true,
            position: SEED_POSITION,
            gyroscope: Gyroscope::baseline(epoch_ms),
            power_generation: SEED_POWER_KW,
            panels_cleaned_today: SEED_PANELS_CLEANED,
            total_panels: SEED_TOTAL_PANELS,
            temperature: SEED_TEMPERATURE_C,
            humidity: SEED_HUMIDITY,
            errors: Deque::new(),
        }
    }

    /// Switch between active (cleaning) and paused (charging).
    ///
    /// Speed follows the flag immediately so the card does not wait for the
    /// next telemetry tick.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.speed = if active { SEED_SPEED } else { 0.0 };
    }

    /// Stability score of the current gyroscope reading.
    #[inline]
    pub fn stability(&self) -> f32 {
        self.gyroscope.stability()
    }

    /// Battery card subtitle.
    #[inline]
    pub const fn battery_status(&self) -> &'static str {
        if self.is_active { "Discharging" } else { "Charging" }
    }

    /// Push an alert. If the list is full, the oldest alert is dropped.
    pub fn push_error(&mut self, msg: &str) {
        if self.errors.is_full() {
            self.errors.pop_front();
        }

        self.errors
            .push_back(truncate_line(msg, ALERT_LINE_LENGTH))
            .ok();
    }

    /// Remove all alerts. Returns how many were cleared.
    pub fn clear_errors(&mut self) -> usize {
        let cleared = self.errors.len();
        self.errors.clear();
        cleared
    }

    /// Iterate over alerts (oldest first).
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|line| line.as_str())
    }

    /// Number of active alerts.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether the alert overlay should be shown.
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_seeded_values() {
        let snap = BotTelemetrySnapshot::seeded(0.0);
        assert_eq!(snap.cleaning_percentage, 78);
        assert_eq!(snap.battery_level, 85);
        assert!((snap.speed - 2.3).abs() < EPS);
        assert!((snap.power_generation - 3.2).abs() < EPS);
        assert_eq!(snap.position, Position { x: 125, y: 78 });
        assert_eq!((snap.panels_cleaned_today, snap.total_panels), (24, 50));
        assert!(snap.is_connected && snap.is_active, "Robot should start online and active");
        assert!(!snap.has_errors(), "Alert list should start empty");
    }

    #[test]
    fn test_gyro_baseline_at_zero() {
        // sin(0) = 0, cos(0) = 1
        let gyro = Gyroscope::baseline(0.0);
        assert!(gyro.x.abs() < EPS);
        assert!((gyro.y - 8.0).abs() < EPS);
        assert!(gyro.z.abs() < EPS);
    }

    #[test]
    fn test_gyro_baseline_bounded() {
        for step in 0..500 {
            let gyro = Gyroscope::baseline(f64::from(step) * 137.0);
            assert!(gyro.x.abs() <= 10.0 + EPS);
            assert!(gyro.y.abs() <= 8.0 + EPS);
            assert!(gyro.z.abs() <= 6.0 + EPS);
        }
    }

    #[test]
    fn test_stability_formula() {
        assert!((stability_from_axes(0.0, 0.0, 0.0) - 100.0).abs() < EPS);
        // |2 + 3 - 1| * 1.5 = 6
        assert!((stability_from_axes(2.0, 3.0, -1.0) - 94.0).abs() < EPS);
        // Opposite tilts cancel out
        assert!((stability_from_axes(5.0, -5.0, 0.0) - 100.0).abs() < EPS);
        // Large tilt goes negative, bar clamps to zero
        let s = stability_from_axes(30.0, 30.0, 20.0);
        assert!(s < 0.0, "Stability can go negative: {s}");
        assert!(stability_bar_percent(s).abs() < EPS);
    }

    #[test]
    fn test_gyro_fill_clamped() {
        assert!((gyro_fill_percent(0.0) - 50.0).abs() < EPS, "Zero tilt is half full");
        assert!((gyro_fill_percent(-15.0) - 5.0).abs() < EPS, "Bottom of range clamps to 5%");
        assert!((gyro_fill_percent(15.0) - 95.0).abs() < EPS, "Top of range clamps to 95%");
        assert!((gyro_fill_percent(-90.0) - 5.0).abs() < EPS);
        assert!((gyro_fill_percent(90.0) - 95.0).abs() < EPS);
        // (6 + 15) / 30 * 100 = 70
        assert!((gyro_fill_percent(6.0) - 70.0).abs() < EPS);
    }

    #[test]
    fn test_set_active_drives_speed_and_subtitle() {
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        assert_eq!(snap.battery_status(), "Discharging");

        snap.set_active(false);
        assert!(snap.speed.abs() < EPS, "Paused robot should not move");
        assert_eq!(snap.battery_status(), "Charging");

        snap.set_active(true);
        assert!((snap.speed - SEED_SPEED).abs() < EPS);
    }

    #[test]
    fn test_push_error_ring() {
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        for i in 0..MAX_ALERTS {
            snap.push_error(&format!("Fault {i}"));
        }
        assert_eq!(snap.error_count(), MAX_ALERTS);

        // One more drops the oldest
        snap.push_error("Fault new");
        assert_eq!(snap.error_count(), MAX_ALERTS);
        assert_eq!(snap.errors().next(), Some("Fault 1"));
        assert_eq!(snap.errors().last(), Some("Fault new"));
    }

    #[test]
    fn test_push_error_truncates() {
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        let long_msg = "x".repeat(ALERT_LINE_LENGTH + 20);
        snap.push_error(&long_msg);

        let stored = snap.errors().next().unwrap();
        assert_eq!(stored.len(), ALERT_LINE_LENGTH);
    }

    #[test]
    fn test_push_error_keeps_multibyte_message() {
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        let accented = "é".repeat(40);
        snap.push_error(&accented);
        assert_eq!(
            snap.errors().last(),
            Some(accented.as_str()),
            "A 40-character message is within the alert line limit"
        );

        snap.push_error(&"°".repeat(ALERT_LINE_LENGTH + 5));
        assert_eq!(
            snap.errors().last().map(|line| line.chars().count()),
            Some(ALERT_LINE_LENGTH),
            "Long multibyte messages are cut at the character limit"
        );
    }

    #[test]
    fn test_clear_errors() {
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        snap.push_error("Brush motor stall");
        snap.push_error("Water tank low");
        assert!(snap.has_errors());

        assert_eq!(snap.clear_errors(), 2);
        assert!(!snap.has_errors());
        assert_eq!(snap.clear_errors(), 0, "Clearing an empty list clears nothing");
    }
}
