//! Command-line and environment settings.
//!
//! Every option has a compiled-in default from [`crate::config`], so running the
//! binary with no arguments reproduces the stock dashboard: 1 s clock, 2 s
//! telemetry, random seed, robot active and online.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{
    CLOCK_INTERVAL_MS,
    DEFAULT_RUN_SECS,
    DEFAULT_SCALE,
    DEFAULT_SNAPSHOT,
    TELEMETRY_INTERVAL_MS,
};
use crate::error::ConfigError;
use crate::telemetry::MAX_ALERTS;

/// Solar Bot telemetry dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "solar-bot", version, about = "Solar Bot telemetry dashboard simulator")]
pub struct Settings {
    /// Window pixel scale
    #[arg(long, env = "SOLAR_BOT_SCALE", default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Clock updater period in milliseconds
    #[arg(long, env = "SOLAR_BOT_CLOCK_MS", default_value_t = CLOCK_INTERVAL_MS)]
    pub clock_interval_ms: u64,

    /// Telemetry simulator period in milliseconds
    #[arg(long, env = "SOLAR_BOT_TELEMETRY_MS", default_value_t = TELEMETRY_INTERVAL_MS)]
    pub telemetry_interval_ms: u64,

    /// Seed for the telemetry RNG (random when omitted)
    #[arg(long, env = "SOLAR_BOT_SEED")]
    pub seed: Option<u64>,

    /// Render without a window and save the final frame as PNG
    #[arg(long)]
    pub headless: bool,

    /// Output path for the headless snapshot
    #[arg(long, env = "SOLAR_BOT_SNAPSHOT", default_value = DEFAULT_SNAPSHOT)]
    pub snapshot: PathBuf,

    /// Headless run length in seconds
    #[arg(long, default_value_t = DEFAULT_RUN_SECS)]
    pub run_secs: u64,

    /// Seed the alert list with a simulated fault (repeatable)
    #[arg(long = "fault", value_name = "MESSAGE")]
    pub faults: Vec<String>,

    /// Start with the robot paused (charging)
    #[arg(long)]
    pub paused: bool,

    /// Start with the link down
    #[arg(long)]
    pub offline: bool,

    /// Verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Settings {
    /// Reject settings the dashboard cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "clock" });
        }
        if self.telemetry_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "telemetry" });
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.run_secs == 0 {
            return Err(ConfigError::ZeroRunTime);
        }
        if self.faults.len() > MAX_ALERTS {
            return Err(ConfigError::TooManyFaults {
                given: self.faults.len(),
                max: MAX_ALERTS,
            });
        }
        Ok(())
    }

    /// Clock updater period.
    #[inline]
    pub const fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    /// Telemetry simulator period.
    #[inline]
    pub const fn telemetry_interval(&self) -> Duration {
        Duration::from_millis(self.telemetry_interval_ms)
    }

    /// Headless run length.
    #[inline]
    pub const fn run_time(&self) -> Duration {
        Duration::from_secs(self.run_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            clock_interval_ms: CLOCK_INTERVAL_MS,
            telemetry_interval_ms: TELEMETRY_INTERVAL_MS,
            seed: None,
            headless: false,
            snapshot: PathBuf::from(DEFAULT_SNAPSHOT),
            run_secs: DEFAULT_RUN_SECS,
            faults: Vec::new(),
            paused: false,
            offline: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CLOCK_INTERVAL, TELEMETRY_INTERVAL};

    #[test]
    fn test_defaults_match_config() {
        let settings = Settings::default();
        assert_eq!(settings.clock_interval(), CLOCK_INTERVAL);
        assert_eq!(settings.telemetry_interval(), TELEMETRY_INTERVAL);
        assert!(settings.validate().is_ok(), "Default settings should validate");
    }

    #[test]
    fn test_empty_command_line_matches_default() {
        let parsed = Settings::try_parse_from(["solar-bot"]).expect("no flags should parse");
        let default = Settings::default();

        assert_eq!(parsed.scale, default.scale, "CLI and Default scale should agree");
        assert_eq!(parsed.clock_interval(), default.clock_interval());
        assert_eq!(parsed.telemetry_interval(), default.telemetry_interval());
        assert_eq!(parsed.run_time(), default.run_time());
        assert_eq!(parsed.snapshot, default.snapshot);
        assert!(parsed.seed.is_none() && parsed.faults.is_empty());
    }

    #[test]
    fn test_parse_flags() {
        let settings = Settings::try_parse_from([
            "solar-bot",
            "--seed",
            "42",
            "--telemetry-interval-ms",
            "500",
            "--fault",
            "Brush motor stall",
            "--fault",
            "Panel 12 obstructed",
            "--paused",
            "--headless",
        ])
        .expect("flags should parse");

        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.telemetry_interval(), Duration::from_millis(500));
        assert_eq!(settings.faults, vec!["Brush motor stall", "Panel 12 obstructed"]);
        assert!(settings.paused);
        assert!(settings.headless);
        assert!(!settings.offline);
    }

    #[test]
    fn test_reject_zero_intervals() {
        let settings = Settings {
            clock_interval_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::ZeroInterval { name: "clock" }));

        let settings = Settings {
            telemetry_interval_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::ZeroInterval { name: "telemetry" }));
    }

    #[test]
    fn test_reject_zero_scale_and_run_time() {
        let settings = Settings {
            scale: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::ZeroScale));

        let settings = Settings {
            run_secs: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::ZeroRunTime));
    }

    #[test]
    fn test_reject_too_many_faults() {
        let settings = Settings {
            faults: vec!["fault".into(); MAX_ALERTS + 1],
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ConfigError::TooManyFaults {
                given: MAX_ALERTS + 1,
                max: MAX_ALERTS
            })
        );
    }
}
