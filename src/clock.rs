//! Header clock: formatted local time and date.
//!
//! The clock updater timer calls [`Clock::refresh`] once per second. Formatting
//! happens there, not per frame, and the result is cached in fixed-size
//! strings. A revision counter bumps whenever the visible text changes so the
//! header can skip redraws between seconds.

use core::fmt::Write;

use chrono::NaiveDateTime;
use heapless::String;

/// Capacity of the time string (`HH:MM:SS`).
pub const TIME_LEN: usize = 8;

/// Capacity of the date string. Longest is `Wednesday, September 30, 2026` (29).
pub const DATE_LEN: usize = 32;

/// Format a time as 24-hour `HH:MM:SS`.
pub fn format_time(now: &NaiveDateTime) -> String<TIME_LEN> {
    let mut s = String::new();
    let _ = write!(s, "{}", now.format("%H:%M:%S"));
    s
}

/// Format a date as `Weekday, Month D, YYYY`.
pub fn format_date(now: &NaiveDateTime) -> String<DATE_LEN> {
    let mut s = String::new();
    let _ = write!(s, "{}", now.format("%A, %B %-d, %Y"));
    s
}

/// Cached clock text for the header.
pub struct Clock {
    time: String<TIME_LEN>,
    date: String<DATE_LEN>,
    revision: u32,
}

impl Clock {
    /// Create a clock showing `now`.
    pub fn new(now: &NaiveDateTime) -> Self {
        Self {
            time: format_time(now),
            date: format_date(now),
            revision: 0,
        }
    }

    /// Re-format the displayed time. Returns `true` if the text changed.
    pub fn refresh(&mut self, now: &NaiveDateTime) -> bool {
        let time = format_time(now);
        let date = format_date(now);
        if time == self.time && date == self.date {
            return false;
        }
        self.time = time;
        self.date = date;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Displayed time text.
    #[inline]
    pub fn time(&self) -> &str {
        self.time.as_str()
    }

    /// Displayed date text.
    #[inline]
    pub fn date(&self) -> &str {
        self.date.as_str()
    }

    /// Bumped on every visible change.
    #[inline]
    pub const fn revision(&self) -> u32 {
        self.revision
    }
}
