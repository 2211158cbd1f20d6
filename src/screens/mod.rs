//! Full-screen pages other than the dashboard.
//!
//! - **Debug Page** ([`debug`]): frame timing, redraw counters, simulator
//!   stats and the event log (`Y` toggles it at runtime)

mod debug;

pub use debug::{SimulatorStats, draw_debug_page};
