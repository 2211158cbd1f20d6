//! Error types for configuration and output.
//!
//! Drawing into the frame buffer cannot fail, so draw results are discarded
//! with `.ok()` throughout the widgets. Only settings validation and writing
//! the headless snapshot produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid command-line or environment settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} interval must be greater than zero")]
    ZeroInterval { name: &'static str },

    #[error("window scale must be at least 1")]
    ZeroScale,

    #[error("headless run length must be at least one second")]
    ZeroRunTime,

    #[error("{given} faults given but the alert list holds at most {max}")]
    TooManyFaults { given: usize, max: usize },
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write snapshot to {}: {reason}", .path.display())]
    Snapshot { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::ZeroInterval { name: "clock" };
        assert_eq!(err.to_string(), "clock interval must be greater than zero");

        let err = ConfigError::TooManyFaults { given: 6, max: 4 };
        assert_eq!(err.to_string(), "6 faults given but the alert list holds at most 4");
    }

    #[test]
    fn test_config_error_converts() {
        let err: DashboardError = ConfigError::ZeroScale.into();
        assert_eq!(err.to_string(), "invalid configuration: window scale must be at least 1");
    }

    #[test]
    fn test_snapshot_error_names_path() {
        let err = DashboardError::Snapshot {
            path: PathBuf::from("/tmp/out.png"),
            reason: "disk full".into(),
        };
        assert_eq!(err.to_string(), "failed to write snapshot to /tmp/out.png: disk full");
    }
}
