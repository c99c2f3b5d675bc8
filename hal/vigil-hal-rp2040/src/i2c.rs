//! Display bus for RP2040
//!
//! The seven-segment backpack sits on either I2C peripheral. For running
//! without hardware attached, a dry-run bus logs each transfer and reports
//! success.

use embassy_rp::i2c::{AbortReason, Blocking, Config, Error as I2cError, I2c, SclPin, SdaPin};
use embassy_rp::peripherals::{I2C0, I2C1};
use embassy_rp::Peri;
use vigil_hal::{I2cBus, I2cConfig};

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Address reserved or out of range
    InvalidAddress,
    /// Transfer length not supported by the peripheral
    InvalidLength,
}

impl From<I2cError> for I2cBusError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            I2cError::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            I2cError::Abort(_) => I2cBusError::Bus,
            I2cError::AddressOutOfRange(_) | I2cError::AddressReserved(_) => {
                I2cBusError::InvalidAddress
            }
            _ => I2cBusError::InvalidLength,
        }
    }
}

/// Bus the display driver writes through
pub enum DisplayBus {
    /// Backpack on I2C0
    I2c0(I2c<'static, I2C0, Blocking>),
    /// Backpack on I2C1
    I2c1(I2c<'static, I2C1, Blocking>),
    /// No hardware: writes are logged and succeed
    Dry,
}

impl DisplayBus {
    /// Attach to I2C0
    pub fn i2c0(
        peri: Peri<'static, I2C0>,
        scl: Peri<'static, impl SclPin<I2C0>>,
        sda: Peri<'static, impl SdaPin<I2C0>>,
        config: I2cConfig,
    ) -> Self {
        DisplayBus::I2c0(I2c::new_blocking(peri, scl, sda, rp_config(config)))
    }

    /// Attach to I2C1
    pub fn i2c1(
        peri: Peri<'static, I2C1>,
        scl: Peri<'static, impl SclPin<I2C1>>,
        sda: Peri<'static, impl SdaPin<I2C1>>,
        config: I2cConfig,
    ) -> Self {
        DisplayBus::I2c1(I2c::new_blocking(peri, scl, sda, rp_config(config)))
    }

    /// Dry-run bus
    pub fn dry() -> Self {
        DisplayBus::Dry
    }
}

fn rp_config(config: I2cConfig) -> Config {
    let mut rp = Config::default();
    rp.frequency = config.frequency;
    rp
}

impl I2cBus for DisplayBus {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        match self {
            DisplayBus::I2c0(i2c) => i2c.blocking_write(address, data)?,
            DisplayBus::I2c1(i2c) => i2c.blocking_write(address, data)?,
            DisplayBus::Dry => {
                #[cfg(feature = "defmt")]
                defmt::info!("dry run - write {=u8:#x} {=[u8]:#x}", address, data);
            }
        }
        Ok(())
    }
}
