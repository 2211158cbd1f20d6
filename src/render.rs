//! Render state tracking for conditional redraws.
//!
//! Decides, once per frame, what must be repainted:
//! - Header conditional redraw (on clock change, link change, cleanup or page switch)
//! - Popup cleanup (clear display when a popup closes or switches)
//! - Alert overlay cleanup (clear display when the last alert is cleared)
//! - Page switch cleanup (rebuild after leaving the debug page)
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Backdrop | After any clear | Redrawn with the clear |
//! | Header | Once per second | Conditional redraw |
//! | Panels | Every frame | Always redraw (values ease continuously) |
//! | Popups / alert | While visible | Full clear on close |
//!
//! Overlays are drawn on top of panels and the backdrop between them. When an
//! overlay disappears, the gaps it covered would keep stale pixels, so the
//! whole frame is cleared and rebuilt in the same frame.

use std::time::Instant;

use crate::config::POPUP_DURATION;

/// Command popup currently on screen, with the instant it opened.
///
/// Only one popup is visible at a time; the most recent command wins.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "ACTIVE" / "PAUSED" after toggling the robot.
    Mode(Instant),
    /// "ONLINE" / "OFFLINE" after toggling the link.
    Link(Instant),
    /// "FAULT INJECTED" after adding a simulated fault.
    Fault(Instant),
    /// "ALERTS CLEARED" after clearing the alert list.
    Cleared(Instant),
}

impl Popup {
    /// Instant the popup opened.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Mode(t) | Self::Link(t) | Self::Fault(t) | Self::Cleared(t) => *t,
        }
    }

    /// Check if this popup has expired at `now`.
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time()) >= POPUP_DURATION
    }

    /// Popup kind (discriminant only, for comparison).
    #[inline]
    const fn kind(&self) -> u8 {
        match self {
            Self::Mode(_) => 0,
            Self::Link(_) => 1,
            Self::Fault(_) => 2,
            Self::Cleared(_) => 3,
        }
    }
}

/// Tracks render state for conditional display updates.
pub struct RenderState {
    /// Clock revision shown in the header last time it was drawn.
    prev_clock_revision: u32,

    /// Link state shown in the header last time it was drawn.
    prev_connected: bool,

    /// Kind of popup drawn last frame.
    prev_popup_kind: Option<u8>,

    /// Whether the alert overlay was visible last frame.
    prev_alert_visible: bool,

    /// Whether an overlay closed this frame (need to clear remnants).
    overlay_just_closed: bool,

    /// Nothing has been drawn yet.
    first_frame: bool,

    /// A page switch invalidated the whole frame.
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for the first frame.
    pub const fn new() -> Self {
        Self {
            prev_clock_revision: 0,
            prev_connected: true,
            prev_popup_kind: None,
            prev_alert_visible: false,
            overlay_just_closed: false,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the header needs redrawing, and remember what it will show.
    pub const fn check_header_dirty(&mut self, clock_revision: u32, connected: bool) -> bool {
        let dirty = self.needs_clear()
            || clock_revision != self.prev_clock_revision
            || connected != self.prev_connected;

        self.prev_clock_revision = clock_revision;
        self.prev_connected = connected;
        dirty
    }

    /// Record which popup (if any) is drawn this frame.
    ///
    /// Closing a popup or replacing it with another kind both leave stale pixels.
    /// Popups differ in text width, so a switch also needs a clear.
    pub fn update_popup(&mut self, popup: Option<&Popup>) {
        let current_kind = popup.map(Popup::kind);
        let changed = current_kind != self.prev_popup_kind;
        let was_visible = self.prev_popup_kind.is_some();
        self.prev_popup_kind = current_kind;

        if changed && was_visible {
            self.overlay_just_closed = true;
        }
    }

    /// Update alert overlay visibility.
    pub const fn update_alert(&mut self, visible: bool) {
        if self.prev_alert_visible && !visible {
            self.overlay_just_closed = true;
        }
        self.prev_alert_visible = visible;
    }

    /// Check if an overlay closed this frame (need to clear remnants).
    #[inline]
    pub const fn overlay_just_closed(&self) -> bool {
        self.overlay_just_closed
    }

    /// Whether nothing has been drawn yet.
    #[inline]
    const fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Whether the frame must start from a cleared display.
    #[inline]
    pub const fn needs_clear(&self) -> bool {
        self.is_first_frame() || self.overlay_just_closed() || self.display_cleared
    }

    /// Force a full rebuild this frame.
    ///
    /// Used when the page changes.
    pub const fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
    }

    /// Reset per-frame flags once the frame is drawn.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.overlay_just_closed = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
