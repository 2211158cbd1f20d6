//! Dashboard state machine: timers, simulator, commands and frame drawing.
//!
//! [`Dashboard`] owns everything the frame loop mutates. Each frame the loop
//! calls, in order:
//!
//! 1. [`Dashboard::handle`] for every key command received this frame
//! 2. [`Dashboard::update`] to poll the clock and telemetry timers, ease the
//!    displayed values and expire popups
//! 3. [`Dashboard::draw`] to render the current page into the frame buffer
//!
//! All timer and simulator work happens in `update`, before drawing starts,
//! so a frame never shows a half-applied telemetry tick.
//!
//! Time is passed in as a [`Now`] rather than read inside, so tests can step
//! the dashboard through minutes of simulated time without sleeping.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime, TimeDelta};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::animations::{ValueTransition, pulse_on, tween_idx};
use crate::clock::Clock;
use crate::pages::Page;
use crate::profiling::{DebugLog, ProfilingMetrics};
use crate::render::{Popup, RenderState};
use crate::schedule::IntervalTimer;
use crate::screens::{SimulatorStats, draw_debug_page};
use crate::settings::Settings;
use crate::simulator::{TelemetrySimulator, TickOutcome};
use crate::telemetry::BotTelemetrySnapshot;
use crate::widgets::{
    draw_alert_overlay,
    draw_backdrop,
    draw_command_popup,
    draw_environment_panel,
    draw_gyro_panel,
    draw_header,
    draw_progress_panel,
    draw_status_cards,
};

/// Simulated faults injected by the fault command, in rotation.
pub const FAULT_MESSAGES: [&str; 5] = [
    "Brush motor stall detected",
    "Water reservoir low",
    "Panel 12 obstructed",
    "Wheel slip on row 3",
    "Battery temperature high",
];

/// Body panels drawn per dashboard frame besides the status cards.
const BODY_PANELS: u32 = 3;

/// Tween slots for the X, Y and Z bars.
const GYRO_TWEENS: [usize; 3] = [tween_idx::GYRO_X, tween_idx::GYRO_Y, tween_idx::GYRO_Z];

/// A single instant seen three ways.
///
/// `instant` drives timers, `wall` drives the header clock and `epoch_ms`
/// drives the gyroscope baseline.
#[derive(Clone, Copy, Debug)]
pub struct Now {
    pub instant: Instant,
    pub wall: NaiveDateTime,
    pub epoch_ms: f64,
}

impl Now {
    /// Read the system clocks.
    pub fn capture() -> Self {
        let local = Local::now();
        Self {
            instant: Instant::now(),
            wall: local.naive_local(),
            epoch_ms: local.timestamp_millis() as f64,
        }
    }

    /// The same three clocks, `elapsed` later.
    pub fn advanced(&self, elapsed: Duration) -> Self {
        let millis = i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX);
        Self {
            instant: self.instant + elapsed,
            wall: self.wall + TimeDelta::milliseconds(millis),
            epoch_ms: self.epoch_ms + elapsed.as_secs_f64() * 1000.0,
        }
    }
}

/// Operator commands (mapped from keys in window mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch between ACTIVE (cleaning) and PAUSED (charging).
    ToggleActive,
    /// Bring the link down or back up.
    ToggleLink,
    /// Push the next simulated fault onto the alert list.
    InjectFault,
    /// Clear the alert list.
    ClearFaults,
    /// Switch between the dashboard and debug pages.
    SwitchPage,
}

/// The running dashboard.
pub struct Dashboard<R: Rng> {
    snapshot: BotTelemetrySnapshot,
    simulator: TelemetrySimulator<R>,
    clock: Clock,
    clock_timer: IntervalTimer,
    telemetry_timer: IntervalTimer,
    tweens: ValueTransition,
    render: RenderState,
    page: Page,
    page_just_switched: bool,
    popup: Option<Popup>,
    frame: u32,
    fault_cursor: usize,
    completion_logged: bool,
    log: DebugLog,
}

impl<R: Rng> Dashboard<R> {
    /// Build the startup dashboard from validated settings.
    pub fn new(settings: &Settings, rng: R, now: &Now) -> Self {
        let mut snapshot = BotTelemetrySnapshot::seeded(now.epoch_ms);
        snapshot.set_active(!settings.paused);
        snapshot.is_connected = !settings.offline;
        for fault in &settings.faults {
            snapshot.push_error(fault);
        }

        let mut tweens = ValueTransition::new();
        tweens.jump(tween_idx::PROGRESS, f32::from(snapshot.cleaning_percentage));
        for (idx, angle) in GYRO_TWEENS.into_iter().zip(snapshot.gyroscope.axes()) {
            tweens.jump(idx, angle);
        }
        tweens.jump(tween_idx::STABILITY, snapshot.stability());

        let mut log = DebugLog::new();
        log.push("Dashboard started");
        if !snapshot.is_connected {
            log.push("Link: OFFLINE");
        }
        for fault in snapshot.errors() {
            log.push(fault);
        }

        info!(
            active = snapshot.is_active,
            connected = snapshot.is_connected,
            alerts = snapshot.error_count(),
            "dashboard started"
        );

        Self {
            snapshot,
            simulator: TelemetrySimulator::new(rng),
            clock: Clock::new(&now.wall),
            clock_timer: IntervalTimer::new(settings.clock_interval(), now.instant),
            telemetry_timer: IntervalTimer::new(settings.telemetry_interval(), now.instant),
            tweens,
            render: RenderState::new(),
            page: Page::default(),
            page_just_switched: false,
            popup: None,
            frame: 0,
            fault_cursor: 0,
            completion_logged: false,
            log,
        }
    }

    /// Apply an operator command.
    ///
    /// State changes apply on either page; feedback popups only show on the
    /// dashboard.
    pub fn handle(&mut self, command: Command, now: &Now) {
        let popup = match command {
            Command::ToggleActive => {
                self.snapshot.set_active(!self.snapshot.is_active);
                let mode = if self.snapshot.is_active { "ACTIVE" } else { "PAUSED" };
                info!(mode, "robot mode changed");
                self.log.push(if self.snapshot.is_active { "Mode: ACTIVE" } else { "Mode: PAUSED" });
                Some(Popup::Mode(now.instant))
            }
            Command::ToggleLink => {
                self.snapshot.is_connected = !self.snapshot.is_connected;
                if self.snapshot.is_connected {
                    info!("link restored");
                    self.log.push("Link: ONLINE");
                } else {
                    warn!("link lost, telemetry held");
                    self.log.push("Link: OFFLINE");
                }
                Some(Popup::Link(now.instant))
            }
            Command::InjectFault => {
                let message = FAULT_MESSAGES[self.fault_cursor % FAULT_MESSAGES.len()];
                self.fault_cursor = self.fault_cursor.wrapping_add(1);
                self.snapshot.push_error(message);
                warn!(fault = message, alerts = self.snapshot.error_count(), "fault injected");
                self.log.push(message);
                Some(Popup::Fault(now.instant))
            }
            Command::ClearFaults => {
                let cleared = self.snapshot.clear_errors();
                info!(cleared, "alerts cleared");
                self.log.push("Alerts cleared");
                Some(Popup::Cleared(now.instant))
            }
            Command::SwitchPage => {
                self.page = self.page.toggle();
                self.page_just_switched = true;
                debug!(page = self.page.name(), "page switched");
                None
            }
        };

        self.popup = if self.page == Page::Dashboard { popup } else { None };
    }

    /// Poll timers, ease displayed values and expire popups.
    pub fn update(&mut self, now: &Now) {
        if self.clock_timer.poll(now.instant) && self.clock.refresh(&now.wall) {
            debug!(time = self.clock.time(), "clock refreshed");
        }

        if self.telemetry_timer.poll(now.instant) {
            self.tick_telemetry(now.epoch_ms);
        }

        let gyro = self.snapshot.gyroscope;
        self.tweens
            .set_target(tween_idx::PROGRESS, f32::from(self.snapshot.cleaning_percentage));
        for (idx, angle) in GYRO_TWEENS.into_iter().zip(gyro.axes()) {
            self.tweens.set_target(idx, angle);
        }
        self.tweens.set_target(tween_idx::STABILITY, gyro.stability());
        self.tweens.update();

        if self.popup.is_some_and(|popup| popup.is_expired(now.instant)) {
            self.popup = None;
        }
    }

    fn tick_telemetry(&mut self, epoch_ms: f64) {
        match self.simulator.tick(&mut self.snapshot, epoch_ms) {
            TickOutcome::Applied { cleaning_advanced } => {
                debug!(
                    cleaning = self.snapshot.cleaning_percentage,
                    battery = self.snapshot.battery_level,
                    power_kw = self.snapshot.power_generation,
                    cleaning_advanced,
                    "telemetry tick"
                );
                if self.snapshot.cleaning_percentage >= 100 && !self.completion_logged {
                    self.completion_logged = true;
                    info!("cleaning complete");
                    self.log.push("Cleaning complete");
                }
            }
            TickOutcome::Held => debug!(held = self.simulator.held_ticks(), "telemetry held while offline"),
        }
    }

    /// Render the current page.
    ///
    /// `fps` is shown on the debug page only.
    pub fn draw<D>(&mut self, display: &mut D, metrics: &mut ProfilingMetrics, fps: f32)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let on_dashboard = self.page == Page::Dashboard;

        self.render.update_popup(self.popup.as_ref());
        self.render.update_alert(on_dashboard && self.snapshot.has_errors());
        if self.page_just_switched {
            self.render.mark_display_cleared();
        }
        if self.render.overlay_just_closed() {
            debug!(frame = self.frame, "overlay closed, rebuilding frame");
        }

        if self.render.needs_clear() {
            metrics.inc_full_clears();
            if on_dashboard {
                draw_backdrop(display);
            }
        }

        if on_dashboard {
            self.draw_dashboard(display, metrics);
        } else {
            let stats = self.stats();
            draw_debug_page(display, metrics, &self.log, &stats, fps);
        }

        self.render.end_frame();
        self.page_just_switched = false;
        self.frame = self.frame.wrapping_add(1);
    }

    fn draw_dashboard<D>(&mut self, display: &mut D, metrics: &mut ProfilingMetrics)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self
            .render
            .check_header_dirty(self.clock.revision(), self.snapshot.is_connected)
        {
            draw_header(display, &self.clock, self.snapshot.is_connected);
            metrics.inc_header_redraws();
        }

        let pulse = pulse_on(self.frame);
        let cards = draw_status_cards(display, &self.snapshot, pulse);
        draw_progress_panel(display, &self.snapshot, self.tweens.get_current(tween_idx::PROGRESS));
        draw_environment_panel(display, &self.snapshot);
        draw_gyro_panel(
            display,
            &self.snapshot.gyroscope,
            GYRO_TWEENS.map(|idx| self.tweens.get_current(idx)),
            self.tweens.get_current(tween_idx::STABILITY),
        );
        metrics.inc_panel_draws(cards + BODY_PANELS);

        if self.snapshot.has_errors() {
            draw_alert_overlay(display, &self.snapshot, pulse);
            metrics.inc_alert_draws();
        }

        if let Some(popup) = &self.popup {
            draw_command_popup(display, popup, self.snapshot.is_active, self.snapshot.is_connected);
        }
    }

    /// Counters shown on the debug page.
    pub fn stats(&self) -> SimulatorStats {
        SimulatorStats {
            applied_ticks: self.simulator.applied_ticks(),
            held_ticks: self.simulator.held_ticks(),
            clock_ticks: self.clock_timer.fired(),
            alerts: self.snapshot.error_count(),
            active: self.snapshot.is_active,
            connected: self.snapshot.is_connected,
        }
    }

    #[inline]
    pub const fn snapshot(&self) -> &BotTelemetrySnapshot {
        &self.snapshot
    }

    #[inline]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    #[inline]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[inline]
    pub const fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    #[inline]
    pub const fn log(&self) -> &DebugLog {
        &self.log
    }

    /// Cleaning percentage currently drawn on the ring.
    #[inline]
    pub const fn displayed_progress(&self) -> f32 {
        self.tweens.get_current(tween_idx::PROGRESS)
    }
}
