//! Vigil Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the clock logic is
//! written against. Chip-specific crates implement them, and host tests
//! implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (vigil-firmware)           │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │  vigil-core /   │   │ vigil-hal-rp2040│
//! │  vigil-drivers  │   │  (impls)        │
//! └─────────────────┘   └─────────────────┘
//!          │                     │
//!          └──────────┬──────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vigil-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (buttons)
//! - [`i2c::I2cBus`] - I2C bus writes (display backpack)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::InputPin;
pub use i2c::{I2cBus, I2cConfig};
