//! RP2040-specific HAL for the alarm clock firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `vigil-hal` traits, plus RP2040-specific functionality:
//!
//! - Display bus on I2C0 or I2C1, or a logging dry-run bus
//! - Button inputs (implements `vigil_hal::InputPin`)
//! - Wall clock backed by the on-chip RTC

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod rtc;

pub use gpio::Button;
pub use i2c::{DisplayBus, I2cBusError};
pub use rtc::{ClockError, RtcClock};
