//! Solar Bot dashboard binary.
//!
//! Runs the frame loop either in an SDL window (`window` feature) or headless,
//! in which case the last frame is written to a PNG snapshot.

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use rand::SeedableRng;
use rand::rngs::StdRng;
use solar_bot_dashboard::colors::BLACK;
use solar_bot_dashboard::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use solar_bot_dashboard::dashboard::{Dashboard, Now};
use solar_bot_dashboard::error::DashboardError;
use solar_bot_dashboard::profiling::ProfilingMetrics;
use solar_bot_dashboard::settings::Settings;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let settings = Settings::parse();
    init_logging(settings.verbose);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `-v` forces debug level; otherwise `RUST_LOG` applies, defaulting to info.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(settings: &Settings) -> Result<(), DashboardError> {
    settings.validate()?;

    let rng = match settings.seed {
        Some(seed) => {
            info!(seed, "seeded telemetry");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    display.clear(BLACK).ok();

    let dashboard = Dashboard::new(settings, rng, &Now::capture());

    #[cfg(feature = "window")]
    if !settings.headless {
        run_window(dashboard, &mut display, settings.scale);
        return Ok(());
    }

    #[cfg(not(feature = "window"))]
    if !settings.headless {
        tracing::warn!("built without the `window` feature, running headless");
    }

    run_headless(dashboard, &mut display, settings)
}

/// Frames-per-second counter, refreshed once per second.
struct FpsCounter {
    since: Instant,
    frames: u32,
    current: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            since: Instant::now(),
            frames: 0,
            current: 0.0,
        }
    }

    fn tick(&mut self) -> f32 {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed.as_secs() >= 1 {
            self.current = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.since = Instant::now();
        }
        self.current
    }
}

/// Update and draw one frame. Returns the render time.
fn render_frame(
    dashboard: &mut Dashboard<StdRng>,
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &mut ProfilingMetrics,
    fps: f32,
    frame_start: Instant,
) -> Duration {
    dashboard.update(&Now::capture());
    dashboard.draw(display, metrics, fps);
    frame_start.elapsed()
}

/// Sleep out the rest of the frame budget and record timings.
fn pace_frame(metrics: &mut ProfilingMetrics, frame_start: Instant, render_time: Duration) {
    let pre_sleep = frame_start.elapsed();
    if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
        thread::sleep(remaining);
    }
    let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

    metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
}

fn run_headless(
    mut dashboard: Dashboard<StdRng>,
    display: &mut SimulatorDisplay<Rgb565>,
    settings: &Settings,
) -> Result<(), DashboardError> {
    let run_time = settings.run_time();
    info!(seconds = run_time.as_secs(), "running headless");

    let mut metrics = ProfilingMetrics::new();
    let mut fps = FpsCounter::new();
    let started = Instant::now();

    while started.elapsed() < run_time {
        let frame_start = Instant::now();
        let current_fps = fps.tick();
        let render_time = render_frame(&mut dashboard, display, &mut metrics, current_fps, frame_start);
        pace_frame(&mut metrics, frame_start, render_time);
    }

    let output_settings = OutputSettingsBuilder::new().scale(settings.scale).build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(&settings.snapshot)
        .map_err(|e| DashboardError::Snapshot {
            path: settings.snapshot.clone(),
            reason: e.to_string(),
        })?;

    info!(
        path = %settings.snapshot.display(),
        frames = metrics.total_frames,
        avg_frame_us = metrics.frame_time_avg_us(),
        "snapshot written"
    );
    Ok(())
}

#[cfg(feature = "window")]
fn run_window(mut dashboard: Dashboard<StdRng>, display: &mut SimulatorDisplay<Rgb565>, scale: u32) {
    use embedded_graphics_simulator::sdl2::Keycode;
    use embedded_graphics_simulator::{SimulatorEvent, Window};
    use solar_bot_dashboard::dashboard::Command;

    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new("Solar Bot Dashboard", &output_settings);
    window.update(display);

    let mut metrics = ProfilingMetrics::new();
    let mut fps = FpsCounter::new();

    loop {
        let frame_start = Instant::now();

        // Button mapping:
        //   A - Toggle robot active / paused
        //   B - Toggle link online / offline
        //   X - Inject a simulated fault
        //   R - Clear alerts
        //   Y - Switch page (Dashboard <-> Debug)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!(frames = metrics.total_frames, "window closed");
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    let command = match keycode {
                        Keycode::A => Command::ToggleActive,
                        Keycode::B => Command::ToggleLink,
                        Keycode::X => Command::InjectFault,
                        Keycode::R => Command::ClearFaults,
                        Keycode::Y => Command::SwitchPage,
                        _ => continue,
                    };
                    dashboard.handle(command, &Now::capture());
                }
                _ => {}
            }
        }

        let current_fps = fps.tick();
        let render_time = render_frame(&mut dashboard, display, &mut metrics, current_fps, frame_start);
        window.update(display);
        pace_frame(&mut metrics, frame_start, render_time);
    }
}
