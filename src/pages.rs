//! Page navigation.
//!
//! The window shows either the telemetry dashboard or a debug view with frame
//! timing and the event log. `Y` switches between them.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Header, status cards, cleaning progress, gyroscope and environment.
    #[default]
    Dashboard,

    /// Frame timing, redraw counters, simulator stats and the event log.
    Debug,
}

impl Page {
    /// Switch to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dashboard => Self::Debug,
            Self::Debug => Self::Dashboard,
        }
    }

    /// Short name used in log lines.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Debug => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Dashboard, "Startup page should be the dashboard");
    }

    #[test]
    fn test_page_toggle_cycle() {
        assert_eq!(Page::Dashboard.toggle(), Page::Debug);
        assert_eq!(Page::Dashboard.toggle().toggle(), Page::Dashboard);
    }

    #[test]
    fn test_page_names() {
        assert_eq!(Page::Dashboard.name(), "dashboard");
        assert_eq!(Page::Debug.name(), "debug");
    }
}
