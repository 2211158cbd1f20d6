//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in embedded-graphics
//! 0.8, so every fixed style lives here as a `const` instead of being rebuilt in
//! each draw function. Styles that need a runtime color use the exposed font
//! references: `MonoTextStyle::new(LABEL_FONT, color)`.
//!
//! Strings that contain a degree sign (`°`) must use the ISO 8859-1 fonts; the
//! ASCII fonts have no glyph for it.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_5X8, FONT_6X10, FONT_10X20},
        iso_8859_1,
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{GRAY_300, GRAY_400, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Right-aligned text. Used for the header clock.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Tiny Latin-1 font for values overlaid on gyroscope bars.
pub const BAR_VALUE_FONT: &MonoFont = &iso_8859_1::FONT_5X8;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small light-gray text for card titles and panel labels.
pub const LABEL_STYLE_LIGHT: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY_300);

/// Small muted text for units and subtitles.
pub const LABEL_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY_400);

/// Muted Latin-1 text for units containing a degree sign.
pub const DEGREE_STYLE_MUTED: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&iso_8859_1::FONT_6X10, GRAY_400);

/// Tiny light-gray text. The header date uses it to leave room for the badge.
pub const SMALL_STYLE_LIGHT: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_5X8, GRAY_300);

/// Medium white text for panel titles (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Medium white values (`ProFont` 18pt): card values, clock, stability.
pub const VALUE_STYLE_MEDIUM: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Large white values (`ProFont` 24pt): progress percentage.
pub const VALUE_STYLE_LARGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);
