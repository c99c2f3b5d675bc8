//! Board-agnostic core logic for the alarm clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Seven-segment display trait and right-aligned string writes
//! - Button sampling with repeat-rate debouncing
//! - Alarm coordinator state machine and blink sequencing
//! - Alarm query request handling
//! - Configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod input;
pub mod query;
pub mod time;
pub mod traits;
