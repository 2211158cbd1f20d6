// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::struct_excessive_bools)] // RenderState and Settings use bools appropriately
#![allow(clippy::similar_names)] // from_r, to_r etc in color math are clear

//! Solar Bot telemetry dashboard.
//!
//! A 480x320 single-screen dashboard for a solar-panel cleaning robot, fed by
//! a telemetry simulator. It shows:
//! - Link status, logo and local clock (header)
//! - Battery, speed and power generation (status cards)
//! - Cleaning progress ring, position and panel count
//! - Temperature and humidity
//! - Gyroscope tilt bars and a stability score
//! - A system alert overlay while any fault is active
//!
//! # Runtime
//!
//! The binary runs a fixed 50 FPS frame loop. Two [`schedule::IntervalTimer`]s
//! are polled at the start of each frame: the clock updater (1 s) and the
//! telemetry simulator (2 s). All state lives in a single
//! [`dashboard::Dashboard`] that the loop owns, so there is no shared state
//! and no locking.
//!
//! # Rendering
//!
//! Widgets draw into any `DrawTarget<Color = Rgb565>`. In window mode that is
//! the SDL-backed simulator display; headless runs render into the same
//! in-memory buffer and save the last frame as PNG.
//!
//! The header is redrawn only when the clock text or link state changed.
//! Panels are redrawn every frame because their values ease continuously.
//! When an overlay (popup or alert) closes, the whole frame is rebuilt, see
//! [`render`].
//!
//! # Controls (window mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `A` | Toggle robot ACTIVE / PAUSED |
//! | `B` | Toggle link ONLINE / OFFLINE |
//! | `X` | Inject a simulated fault |
//! | `R` | Clear alerts |
//! | `Y` | Switch Dashboard / Debug page |

pub mod animations;
pub mod clock;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod pages;
pub mod profiling;
pub mod render;
pub mod schedule;
pub mod screens;
pub mod settings;
pub mod simulator;
pub mod styles;
pub mod telemetry;
pub mod text;
pub mod widgets;
