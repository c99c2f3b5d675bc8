//! I2C bus abstractions
//!
//! Provides the write side of an I2C master. The display backpack is
//! write-only, so nothing here reads back from a device.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single register as a `[register, value]` transfer
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.write(address, &[register, value])
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        last: Option<(u8, [u8; 2])>,
    }

    impl I2cBus for Recorder {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            let mut bytes = [0u8; 2];
            bytes.copy_from_slice(data);
            self.last = Some((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn test_write_register_sends_pair() {
        let mut bus = Recorder { last: None };
        bus.write_register(0x70, 0xE1, 0x00).unwrap();
        assert_eq!(bus.last, Some((0x70, [0xE1, 0x00])));
    }

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default().frequency, 100_000);
    }
}
