//! Color palette for the Solar Bot dashboard.
//!
//! The palette follows a dark slate theme: near-black panels, gray borders and
//! saturated accents for each telemetry group. Colors are authored as 8-bit
//! RGB triples and packed into RGB565 at compile time with [`rgb`].
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Packing drops the low bits of each channel, so two nearby 8-bit colors may
//! map to the same RGB565 value.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pack an 8-bit RGB triple into RGB565.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Logo backing and debug page background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Primary text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Neutrals
// =============================================================================

/// Darkest panel shade, also the top of the backdrop gradient.
pub const GRAY_900: Rgb565 = rgb(17, 24, 39);

/// Panel fill.
pub const GRAY_800: Rgb565 = rgb(31, 41, 55);

/// Gauge and bar tracks.
pub const GRAY_700: Rgb565 = rgb(55, 65, 81);

/// Neutral borders.
pub const GRAY_600: Rgb565 = rgb(75, 85, 99);

/// Secondary text (units, subtitles).
pub const GRAY_400: Rgb565 = rgb(156, 163, 175);

/// Label text.
pub const GRAY_300: Rgb565 = rgb(209, 213, 219);

// =============================================================================
// Backdrop
// =============================================================================

/// Middle stop of the backdrop gradient.
pub const BLUE_900: Rgb565 = rgb(30, 58, 138);

/// Bottom stop of the backdrop gradient.
pub const PURPLE_900: Rgb565 = rgb(88, 28, 135);

// =============================================================================
// Accents
// =============================================================================

/// Speed card accent and first stop of the progress gradient.
pub const BLUE_500: Rgb565 = rgb(59, 130, 246);

/// Z-axis gyroscope bar.
pub const BLUE_400: Rgb565 = rgb(96, 165, 250);

/// Progress panel border and middle stop of the progress gradient.
pub const PURPLE_500: Rgb565 = rgb(139, 92, 246);

/// Last stop of the progress gradient.
pub const PINK_500: Rgb565 = rgb(236, 72, 153);

/// Battery card accent, gyroscope panel border, Y-axis bar.
pub const GREEN_500: Rgb565 = rgb(34, 197, 94);

/// ACTIVE status text.
pub const GREEN_400: Rgb565 = rgb(74, 222, 128);

/// ONLINE badge fill.
pub const GREEN_600: Rgb565 = rgb(22, 163, 74);

/// X-axis gyroscope bar and low end of the stability gradient.
pub const RED_500: Rgb565 = rgb(239, 68, 68);

/// OFFLINE badge and alert overlay fill.
pub const RED_600: Rgb565 = rgb(220, 38, 38);

/// Alert overlay border.
pub const RED_400: Rgb565 = rgb(248, 113, 113);

/// Power card accent and middle of the stability gradient.
pub const YELLOW_500: Rgb565 = rgb(234, 179, 8);

/// PAUSED status text and environment accent.
pub const ORANGE_400: Rgb565 = rgb(251, 146, 60);
