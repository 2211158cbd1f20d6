//! Widget components for the Solar Bot dashboard.
//!
//! - [`header`]: Logo, title, link badge and clock
//! - [`cards`]: Battery, speed and power status cards (left column)
//! - [`progress`]: Cleaning progress ring (center column)
//! - [`environment`]: Temperature and humidity strip (center column)
//! - [`gyro`]: Gyroscope bars and stability (right column)
//! - [`alert`]: System alert overlay
//! - [`popups`]: Command feedback popups
//! - [`icons`]: Line icons and the logo sprite
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! # Architecture
//!
//! Every draw function is generic over `D: DrawTarget<Color = Rgb565>` and
//! only reads state, so widgets can be rendered into any frame buffer.
//! Draw errors are ignored with `.ok()`: the simulator buffer is infallible.
//!
//! Each panel draws its own rounded background first, which wipes the previous
//! frame's text inside it. Panels are therefore always redrawn, while the
//! header is redrawn only when its content changed.

mod alert;
mod cards;
mod environment;
mod gyro;
mod header;
mod icons;
mod popups;
mod primitives;
mod progress;

pub use alert::{ALERT_AREA, draw_alert_overlay};
pub use cards::{CardIcon, StatusCard, card_area, draw_status_card, draw_status_cards};
pub use environment::{ENV_AREA, draw_environment_panel};
pub use gyro::{GYRO_AREA, bar_area, draw_gyro_panel};
pub use header::{BADGE_AREA, draw_header};
pub use icons::{draw_alert_icon, draw_logo};
pub use popups::{draw_command_popup, draw_popup, popup_content};
pub use primitives::{draw_backdrop, draw_panel};
pub use progress::{PROGRESS_AREA, RING_CENTER, RING_DIAMETER, draw_progress_panel};
