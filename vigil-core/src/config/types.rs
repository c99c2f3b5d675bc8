//! Configuration type definitions

use chrono::NaiveTime;

use crate::alarm::DEFAULT_BLINK_MS;
use crate::input::{DEFAULT_DEBOUNCE_MS, DEFAULT_POLL_MS};

/// Default HT16K33 backpack address
pub const DEFAULT_I2C_ADDRESS: u8 = 0x70;

/// Default I2C bus index
pub const DEFAULT_I2C_BUS: u8 = 1;

/// Highest valid 7-bit I2C address
pub const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Alarm configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmConfig {
    /// Alarm time at startup
    pub time: NaiveTime,
    /// Blink toggle period in milliseconds
    pub blink_ms: u32,
}

/// Display bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBusConfig {
    /// I2C peripheral index
    pub i2c_bus: u8,
    /// 7-bit device address
    pub i2c_address: u8,
    /// Log bus writes instead of attaching to real hardware
    pub dry_run: bool,
}

impl Default for DisplayBusConfig {
    fn default() -> Self {
        Self {
            i2c_bus: DEFAULT_I2C_BUS,
            i2c_address: DEFAULT_I2C_ADDRESS,
            dry_run: false,
        }
    }
}

/// Button sampling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Poll period in milliseconds
    pub poll_ms: u32,
    /// Minimum spacing between button events in milliseconds
    pub debounce_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_ms: DEFAULT_POLL_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub alarm: AlarmConfig,
    pub display: DisplayBusConfig,
    pub input: InputConfig,
}

impl ClockConfig {
    /// Configuration with the given alarm time and defaults elsewhere
    pub fn with_alarm(time: NaiveTime) -> Self {
        Self {
            alarm: AlarmConfig {
                time,
                blink_ms: DEFAULT_BLINK_MS,
            },
            display: DisplayBusConfig::default(),
            input: InputConfig::default(),
        }
    }
}
