//! Animation effects: value easing, color gradients and pulsing.
//!
//! # Value Easing
//!
//! Telemetry only changes every two seconds, so gauges would jump in visible
//! steps. [`ValueTransition`] moves each displayed value a fixed fraction of the
//! remaining distance toward its target every frame:
//!
//! ```text
//! current += (target - current) * EASE_SPEED
//! ```
//!
//! At 50 FPS and `EASE_SPEED = 0.08`, about 98% of a change is applied within
//! one second. Values snap to the target once they are within
//! `EASE_SNAP_THRESHOLD`, so transitions terminate.
//!
//! # Gradients
//!
//! The progress ring and stability bar blend between color stops using the
//! same RGB565 channel interpolation as the easing code ([`lerp_rgb565`]).
//!
//! # Pulse
//!
//! Status-card dots and the alert overlay pulse at ~1 Hz. [`pulse_on`] derives
//! the phase from the frame counter so no extra state is needed.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

// =============================================================================
// Easing Constants
// =============================================================================

/// Fraction of the remaining distance covered per frame.
const EASE_SPEED: f32 = 0.08;

/// Distance at which a value snaps to its target.
const EASE_SNAP_THRESHOLD: f32 = 0.05;

/// Frames per pulse half-period (25 frames ≈ 0.5s at 50 FPS).
const PULSE_HALF_PERIOD: u32 = 25;

/// Number of eased values.
pub const TWEEN_COUNT: usize = 5;

/// Eased value indices.
pub mod tween_idx {
    /// Cleaning progress, in percent.
    pub const PROGRESS: usize = 0;
    /// Gyroscope X angle.
    pub const GYRO_X: usize = 1;
    /// Gyroscope Y angle.
    pub const GYRO_Y: usize = 2;
    /// Gyroscope Z angle.
    pub const GYRO_Z: usize = 3;
    /// Stability score.
    pub const STABILITY: usize = 4;
}

// =============================================================================
// Value Transition State
// =============================================================================

/// Eases displayed values toward their latest targets.
pub struct ValueTransition {
    /// Values currently drawn.
    current: [f32; TWEEN_COUNT],

    /// Values being moved toward.
    target: [f32; TWEEN_COUNT],

    /// Whether each value is still moving.
    transitioning: [bool; TWEEN_COUNT],
}

impl ValueTransition {
    /// Create a transition state with every value at zero.
    pub const fn new() -> Self {
        Self {
            current: [0.0; TWEEN_COUNT],
            target: [0.0; TWEEN_COUNT],
            transitioning: [false; TWEEN_COUNT],
        }
    }

    /// Place a value at `value` immediately, with no easing.
    pub fn jump(&mut self, idx: usize, value: f32) {
        self.current[idx] = value;
        self.target[idx] = value;
        self.transitioning[idx] = false;
    }

    /// Set the target for a value and start easing if it moved.
    pub fn set_target(&mut self, idx: usize, target: f32) {
        if (self.target[idx] - target).abs() >= f32::EPSILON {
            self.target[idx] = target;
            self.transitioning[idx] = true;
        }
    }

    /// Displayed value.
    #[inline]
    pub const fn get_current(&self, idx: usize) -> f32 {
        self.current[idx]
    }

    /// Advance all transitions by one frame.
    pub fn update(&mut self) {
        for i in 0..TWEEN_COUNT {
            if !self.transitioning[i] {
                continue;
            }

            let delta = self.target[i] - self.current[i];
            if delta.abs() <= EASE_SNAP_THRESHOLD {
                self.current[i] = self.target[i];
                self.transitioning[i] = false;
            } else {
                self.current[i] += delta * EASE_SPEED;
            }
        }
    }
}

impl Default for ValueTransition {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Pulse Effect
// =============================================================================

/// Pulse phase for the given frame (~1 Hz square wave).
#[inline]
pub const fn pulse_on(frame: u32) -> bool {
    (frame / PULSE_HALF_PERIOD).is_multiple_of(2)
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

/// Linear interpolation between two Rgb565 colors.
///
/// Works on the raw 5-6-5 channels with 8-bit fixed-point `t`. `t` is clamped
/// to `[0, 1]`; `t = 1` returns `to` exactly.
pub fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;
    if t_fixed >= 256 {
        return to;
    }

    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);

    // new = from + (to - from) * t
    let mix = |a: i32, b: i32| a + (((b - a) * t_fixed) >> 8);

    Rgb565::new(
        mix(from_r, to_r).clamp(0, 31) as u8,
        mix(from_g, to_g).clamp(0, 63) as u8,
        mix(from_b, to_b).clamp(0, 31) as u8,
    )
}

/// Three-stop gradient: `a` at 0.0, `b` at 0.5, `c` at 1.0.
pub fn gradient3(a: Rgb565, b: Rgb565, c: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 { lerp_rgb565(a, b, t * 2.0) } else { lerp_rgb565(b, c, (t - 0.5) * 2.0) }
}

/// Split an Rgb565 color into its raw (5, 6, 5)-bit channels.
fn channels(color: Rgb565) -> (i32, i32, i32) {
    // Rgb565: RRRRRGGGGGGBBBBB
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
