//! Telemetry simulator: random jitter around seed values.
//!
//! Each telemetry tick regenerates the noisy sensor fields of a
//! [`BotTelemetrySnapshot`] in place. With `r` a fresh uniform sample in
//! `[0, 1)` and `jitter(span) = (r − 0.5) · span`:
//!
//! | Field | Rule |
//! |-------|------|
//! | gyroscope | baseline(now) + `jitter(2)` per axis |
//! | power | 3.2 + `jitter(0.8)` kW |
//! | temperature | 28.5 + `jitter(2)` °C |
//! | humidity | 65 + `jitter(5)` % |
//! | cleaning | +1 when `r > 0.8`, capped at 100, active only |
//! | battery | −1 at p=0.1 while active, +1 at p=0.3 while paused |
//!
//! While the link is down the tick is held: the snapshot keeps its last
//! values, matching what an operator would see from a silent robot.

use rand::Rng;

use crate::telemetry::{
    BotTelemetrySnapshot,
    Gyroscope,
    SEED_HUMIDITY,
    SEED_POWER_KW,
    SEED_SPEED,
    SEED_TEMPERATURE_C,
};

// =============================================================================
// Jitter Spans (full width, centered on the base value)
// =============================================================================

const GYRO_JITTER: f32 = 2.0;
const POWER_JITTER: f32 = 0.8;
const TEMPERATURE_JITTER: f32 = 2.0;
const HUMIDITY_JITTER: f32 = 5.0;

// =============================================================================
// Step Probabilities
// =============================================================================

/// Cleaning advances when a uniform sample exceeds this value (20% per tick).
const CLEANING_STEP_THRESHOLD: f32 = 0.8;

/// Chance per tick that the battery drops 1% while cleaning.
const BATTERY_DRAIN_PROBABILITY: f64 = 0.1;

/// Chance per tick that the battery gains 1% while parked.
const BATTERY_CHARGE_PROBABILITY: f64 = 0.3;

/// Result of a telemetry tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// New values were written into the snapshot.
    Applied {
        /// Cleaning percentage advanced this tick.
        cleaning_advanced: bool,
    },
    /// Link is down; snapshot left untouched.
    Held,
}

/// Periodic sensor value generator.
///
/// Generic over the RNG so tests can use a seeded generator.
pub struct TelemetrySimulator<R: Rng> {
    rng: R,
    applied_ticks: u64,
    held_ticks: u64,
}

impl<R: Rng> TelemetrySimulator<R> {
    /// Create a simulator drawing from `rng`.
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            applied_ticks: 0,
            held_ticks: 0,
        }
    }

    /// Regenerate simulated sensor values.
    ///
    /// `epoch_ms` is wall-clock milliseconds, used for the gyroscope baseline.
    pub fn tick(&mut self, snapshot: &mut BotTelemetrySnapshot, epoch_ms: f64) -> TickOutcome {
        if !snapshot.is_connected {
            self.held_ticks += 1;
            return TickOutcome::Held;
        }

        let base = Gyroscope::baseline(epoch_ms);
        snapshot.gyroscope = Gyroscope {
            x: base.x + self.jitter(GYRO_JITTER),
            y: base.y + self.jitter(GYRO_JITTER),
            z: base.z + self.jitter(GYRO_JITTER),
        };
        snapshot.power_generation = SEED_POWER_KW + self.jitter(POWER_JITTER);
        snapshot.temperature = SEED_TEMPERATURE_C + self.jitter(TEMPERATURE_JITTER);
        snapshot.humidity = SEED_HUMIDITY + self.jitter(HUMIDITY_JITTER);

        let mut cleaning_advanced = false;
        if snapshot.is_active {
            snapshot.speed = SEED_SPEED;
            if self.rng.r#gen::<f32>() > CLEANING_STEP_THRESHOLD && snapshot.cleaning_percentage < 100 {
                snapshot.cleaning_percentage += 1;
                cleaning_advanced = true;
            }
            if self.rng.gen_bool(BATTERY_DRAIN_PROBABILITY) {
                snapshot.battery_level = snapshot.battery_level.saturating_sub(1);
            }
        } else {
            snapshot.speed = 0.0;
            if self.rng.gen_bool(BATTERY_CHARGE_PROBABILITY) {
                snapshot.battery_level = snapshot.battery_level.saturating_add(1).min(100);
            }
        }

        self.applied_ticks += 1;
        TickOutcome::Applied { cleaning_advanced }
    }

    /// Ticks that wrote new values.
    #[inline]
    pub const fn applied_ticks(&self) -> u64 {
        self.applied_ticks
    }

    /// Ticks skipped while offline.
    #[inline]
    pub const fn held_ticks(&self) -> u64 {
        self.held_ticks
    }

    /// Uniform noise in `[-span/2, span/2)`.
    fn jitter(&mut self, span: f32) -> f32 {
        (self.rng.r#gen::<f32>() - 0.5) * span
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const EPS: f32 = 1e-4;

    fn simulator(seed: u64) -> TelemetrySimulator<StdRng> {
        TelemetrySimulator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_cleaning_monotonic_and_capped() {
        let mut sim = simulator(7);
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        let mut prev = snap.cleaning_percentage;

        for tick in 0..500 {
            sim.tick(&mut snap, f64::from(tick) * 2000.0);
            assert!(
                snap.cleaning_percentage >= prev,
                "Tick {tick}: cleaning went backwards {prev} -> {}",
                snap.cleaning_percentage
            );
            assert!(snap.cleaning_percentage <= 100, "Tick {tick}: cleaning above 100");
            prev = snap.cleaning_percentage;
        }

        // 500 ticks at 20% each is far more than the 22 steps needed
        assert_eq!(snap.cleaning_percentage, 100, "Cleaning should reach 100 and stay there");
    }

    #[test]
    fn test_jittered_fields_bounded() {
        let mut sim = simulator(11);
        let mut snap = BotTelemetrySnapshot::seeded(0.0);

        for tick in 0..300 {
            let now = f64::from(tick) * 2000.0;
            sim.tick(&mut snap, now);

            assert!((2.8 - EPS..=3.6 + EPS).contains(&snap.power_generation));
            assert!((27.5 - EPS..=29.5 + EPS).contains(&snap.temperature));
            assert!((62.5 - EPS..=67.5 + EPS).contains(&snap.humidity));

            let base = Gyroscope::baseline(now);
            assert!((snap.gyroscope.x - base.x).abs() <= 1.0 + EPS);
            assert!((snap.gyroscope.y - base.y).abs() <= 1.0 + EPS);
            assert!((snap.gyroscope.z - base.z).abs() <= 1.0 + EPS);
        }
    }

    #[test]
    fn test_battery_bounded() {
        let mut sim = simulator(3);
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        snap.battery_level = 1;

        for _ in 0..200 {
            sim.tick(&mut snap, 0.0);
        }
        assert_eq!(snap.battery_level, 0, "Active robot should drain to an empty battery");

        snap.set_active(false);
        snap.battery_level = 99;
        for _ in 0..200 {
            sim.tick(&mut snap, 0.0);
            assert!(snap.battery_level <= 100);
        }
        assert_eq!(snap.battery_level, 100, "Parked robot should charge to full");
    }

    #[test]
    fn test_paused_holds_cleaning() {
        let mut sim = simulator(5);
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        snap.set_active(false);
        let start_battery = snap.battery_level;

        for _ in 0..100 {
            let outcome = sim.tick(&mut snap, 0.0);
            assert_eq!(outcome, TickOutcome::Applied { cleaning_advanced: false });
        }
        assert_eq!(snap.cleaning_percentage, 78, "Paused robot should not clean");
        assert!(snap.speed.abs() < EPS);
        assert!(snap.battery_level >= start_battery, "Paused robot only charges");
    }

    #[test]
    fn test_offline_holds_snapshot() {
        let mut sim = simulator(9);
        let mut snap = BotTelemetrySnapshot::seeded(0.0);
        snap.is_connected = false;
        let before = snap.clone();

        for tick in 0..20 {
            assert_eq!(sim.tick(&mut snap, f64::from(tick) * 2000.0), TickOutcome::Held);
        }

        assert_eq!(snap.cleaning_percentage, before.cleaning_percentage);
        assert_eq!(snap.battery_level, before.battery_level);
        assert_eq!(snap.gyroscope, before.gyroscope);
        assert!((snap.power_generation - before.power_generation).abs() < EPS);
        assert_eq!(sim.held_ticks(), 20);
        assert_eq!(sim.applied_ticks(), 0);
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut a = simulator(42);
        let mut b = simulator(42);
        let mut snap_a = BotTelemetrySnapshot::seeded(1000.0);
        let mut snap_b = BotTelemetrySnapshot::seeded(1000.0);

        for tick in 0..10 {
            let now = 1000.0 + f64::from(tick) * 2000.0;
            a.tick(&mut snap_a, now);
            b.tick(&mut snap_b, now);
        }

        assert_eq!(snap_a.gyroscope, snap_b.gyroscope);
        assert_eq!(snap_a.cleaning_percentage, snap_b.cleaning_percentage);
        assert_eq!(a.applied_ticks(), 10);
    }
}
