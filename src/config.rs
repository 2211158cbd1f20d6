//! Layout and timing constants.
//!
//! Layout values are pre-computed at compile time so the render path never
//! divides screen dimensions per frame.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ [logo] SOLAR BOT              [ONLINE]        12:34:56   │  header 52px
//! │        Autonomous Cleaning System      Saturday, ...     │
//! ├───────────┬────────────────────────────┬─────────────────┤
//! │ BATTERY   │      CLEANING PROGRESS     │   GYROSCOPE     │
//! ├───────────┤          ( 78% )           │   X   Y   Z     │
//! │ SPEED     │  X:125m Y:78m     ACTIVE   │   █   █   █     │
//! ├───────────┼────────────────────────────┤   STABILITY     │
//! │ POWER     │  TEMPERATURE    HUMIDITY   │   ▓▓▓▓▓▓░░      │
//! └───────────┴────────────────────────────┴─────────────────┘
//!    120px               224px                   120px
//! ```

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Frame buffer width in pixels.
pub const SCREEN_WIDTH: u32 = 480;

/// Frame buffer height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Screen center X coordinate. Used for centering popups.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Used for centering popups.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Default clock updater period in milliseconds.
pub const CLOCK_INTERVAL_MS: u64 = 1000;

/// Default clock updater period.
pub const CLOCK_INTERVAL: Duration = Duration::from_millis(CLOCK_INTERVAL_MS);

/// Default telemetry simulator period in milliseconds.
pub const TELEMETRY_INTERVAL_MS: u64 = 2000;

/// Default telemetry simulator period.
pub const TELEMETRY_INTERVAL: Duration = Duration::from_millis(TELEMETRY_INTERVAL_MS);

/// Default window pixel scale.
pub const DEFAULT_SCALE: u32 = 2;

/// Default headless run length in seconds.
pub const DEFAULT_RUN_SECS: u64 = 6;

/// Default headless snapshot path.
pub const DEFAULT_SNAPSHOT: &str = "solar-bot.png";

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Outer margin and gap between panels.
pub const GAP: u32 = 4;

/// Header panel top-left corner.
pub const HEADER_X: u32 = GAP;
pub const HEADER_Y: u32 = GAP;

/// Header panel size (full width minus margins).
pub const HEADER_WIDTH: u32 = SCREEN_WIDTH - 2 * GAP;
pub const HEADER_HEIGHT: u32 = 52;

/// Top edge of the three-column body.
pub const BODY_TOP: u32 = HEADER_Y + HEADER_HEIGHT + GAP;

/// Body height down to the bottom margin.
pub const BODY_HEIGHT: u32 = SCREEN_HEIGHT - BODY_TOP - GAP;

/// Width of the left (status cards) and right (gyroscope) columns.
pub const SIDE_COL_WIDTH: u32 = 120;

/// Width of the center column (progress + environment).
pub const CENTER_COL_WIDTH: u32 = SCREEN_WIDTH - 2 * SIDE_COL_WIDTH - 4 * GAP;

/// Column X positions.
pub const LEFT_COL_X: u32 = GAP;
pub const CENTER_COL_X: u32 = LEFT_COL_X + SIDE_COL_WIDTH + GAP;
pub const RIGHT_COL_X: u32 = CENTER_COL_X + CENTER_COL_WIDTH + GAP;

/// Number of status cards stacked in the left column.
pub const CARD_COUNT: u32 = 3;

/// Height of each status card.
pub const CARD_HEIGHT: u32 = (BODY_HEIGHT - (CARD_COUNT - 1) * GAP) / CARD_COUNT;

/// Height of the cleaning progress panel.
pub const PROGRESS_HEIGHT: u32 = 196;

/// Environment strip sits under the progress panel and fills the column.
pub const ENV_Y: u32 = BODY_TOP + PROGRESS_HEIGHT + GAP;
pub const ENV_HEIGHT: u32 = BODY_HEIGHT - PROGRESS_HEIGHT - GAP;
