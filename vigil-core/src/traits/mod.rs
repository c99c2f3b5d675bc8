//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;

pub use display::{SegmentDisplay, BRIGHTNESS_MAX, DEFAULT_BRIGHTNESS, DIGIT_COUNT};
