//! Alarm logic
//!
//! The coordinator decides when the alarm fires and what the display
//! shows; the blinker sequences brightness while the alarm is active.

pub mod blink;
pub mod coordinator;

pub use blink::{Blinker, DEFAULT_BLINK_MS};
pub use coordinator::{Command, Commands, Coordinator, DisplayString, Mode};
