//! HT16K33 seven-segment backpack driver
//!
//! Driver for 4-digit seven-segment backpacks built on the HT16K33 LED
//! controller. Every operation is a single `[register, value]` write.
//!
//! Display memory layout: digits live at even offsets 0, 2, 6 and 8; the
//! center colon sits at offset 4 between the second and third digit.

use vigil_core::traits::{SegmentDisplay, BRIGHTNESS_MAX, DEFAULT_BRIGHTNESS, DIGIT_COUNT};
use vigil_hal::I2cBus;

use super::segments::segment_pattern;

/// HT16K33 commands
mod cmd {
    /// System setup, oscillator on
    pub const OSCILLATOR_ON: u8 = 0x21;
    /// Display setup, display on, hardware blink off
    pub const DISPLAY_ON: u8 = 0x81;
    /// Dimming set, level in the low nibble
    pub const BRIGHTNESS: u8 = 0xE0;
}

/// Display memory offset of the colon
const COLON_OFFSET: u8 = 4;

/// Colon segment bit
const COLON_ON: u8 = 0x02;

/// Memory offsets cleared by [`Ht16k33::clear`]
const MEMORY_OFFSETS: [u8; 5] = [0, 2, 4, 6, 8];

/// HT16K33 driver
pub struct Ht16k33<B> {
    bus: B,
    /// 7-bit device address
    address: u8,
}

impl<B: I2cBus> Ht16k33<B> {
    /// Create a new driver. Nothing is written until [`SegmentDisplay::initialize`].
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Borrow the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    fn write(&mut self, register: u8, value: u8) -> Result<(), B::Error> {
        self.bus.write_register(self.address, register, value)
    }

    /// Memory offset for a digit position (skips the colon slot)
    fn digit_offset(position: u8) -> u8 {
        let skip = if position >= 2 { 1 } else { 0 };
        (position + skip) * 2
    }
}

impl<B: I2cBus> SegmentDisplay for Ht16k33<B> {
    type Error = B::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        self.write(cmd::OSCILLATOR_ON, 0x00)?;
        self.write(cmd::DISPLAY_ON, 0x00)?;
        self.set_brightness(DEFAULT_BRIGHTNESS)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error> {
        if level > BRIGHTNESS_MAX {
            return Ok(());
        }
        self.write(cmd::BRIGHTNESS | level, 0x00)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        for offset in MEMORY_OFFSETS {
            self.write(offset, 0x00)?;
        }
        Ok(())
    }

    fn write_digit(&mut self, position: u8, ch: char) -> Result<(), Self::Error> {
        if position as usize >= DIGIT_COUNT {
            return Ok(());
        }
        self.write(Self::digit_offset(position), segment_pattern(ch))
    }

    fn set_colon(&mut self, on: bool) -> Result<(), Self::Error> {
        let value = if on { COLON_ON } else { 0x00 };
        self.write(COLON_OFFSET, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vigil_core::alarm::Blinker;

    /// Mock bus recording every transfer
    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl I2cBus for RecordingBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.writes.push((address, data.to_vec()));
            Ok(())
        }
    }

    fn display() -> Ht16k33<RecordingBus> {
        Ht16k33::new(RecordingBus::default(), 0x70)
    }

    fn pairs(display: &Ht16k33<RecordingBus>) -> Vec<[u8; 2]> {
        display
            .bus()
            .writes
            .iter()
            .map(|(addr, data)| {
                assert_eq!(*addr, 0x70);
                [data[0], data[1]]
            })
            .collect()
    }

    #[test]
    fn test_initialize_sequence() {
        let mut d = display();
        d.initialize().unwrap();
        assert_eq!(pairs(&d), vec![[0x21, 0x00], [0x81, 0x00], [0xE1, 0x00]]);
    }

    #[test]
    fn test_brightness_range() {
        let mut d = display();
        d.set_brightness(0).unwrap();
        d.set_brightness(15).unwrap();
        d.set_brightness(16).unwrap();
        d.set_brightness(255).unwrap();
        assert_eq!(pairs(&d), vec![[0xE0, 0x00], [0xEF, 0x00]]);
    }

    #[test]
    fn test_clear_writes_every_slot() {
        let mut d = display();
        d.clear().unwrap();
        let offsets: Vec<u8> = pairs(&d).iter().map(|p| p[0]).collect();
        assert_eq!(offsets, vec![0, 2, 4, 6, 8]);
        assert!(pairs(&d).iter().all(|p| p[1] == 0));
    }

    #[test]
    fn test_digit_offsets_skip_colon() {
        let mut d = display();
        for position in 0..4 {
            d.write_digit(position, '8').unwrap();
        }
        assert_eq!(
            pairs(&d),
            vec![[0, 0x7F], [2, 0x7F], [6, 0x7F], [8, 0x7F]]
        );
    }

    #[test]
    fn test_out_of_range_position_is_ignored() {
        let mut d = display();
        d.write_digit(4, '1').unwrap();
        d.write_digit(200, '1').unwrap();
        assert!(d.bus().writes.is_empty());
    }

    #[test]
    fn test_unknown_character_writes_blank() {
        let mut d = display();
        d.write_digit(1, 'Z').unwrap();
        assert_eq!(pairs(&d), vec![[2, 0x00]]);
    }

    #[test]
    fn test_colon() {
        let mut d = display();
        d.set_colon(true).unwrap();
        d.set_colon(false).unwrap();
        assert_eq!(pairs(&d), vec![[4, 0x02], [4, 0x00]]);
    }

    #[test]
    fn test_write_string_right_aligned() {
        let mut d = display();
        d.write_string("0730").unwrap();
        assert_eq!(
            pairs(&d),
            vec![[8, 0x3F], [6, 0x4F], [2, 0x07], [0, 0x3F]]
        );

        let mut d = display();
        d.write_string("-1").unwrap();
        assert_eq!(pairs(&d), vec![[8, 0x06], [6, 0x40]]);

        let mut d = display();
        d.write_string("12:34").unwrap();
        assert!(d.bus().writes.is_empty());
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut d = Ht16k33::new(
            RecordingBus {
                fail: true,
                ..Default::default()
            },
            0x70,
        );
        assert_eq!(d.initialize(), Err(()));
        assert_eq!(d.write_string("0000"), Err(()));
    }

    #[test]
    fn test_custom_address() {
        let mut d = Ht16k33::new(RecordingBus::default(), 0x71);
        d.set_colon(true).unwrap();
        assert_eq!(d.address(), 0x71);
        assert_eq!(d.bus().writes[0].0, 0x71);
    }

    proptest! {
        #[test]
        fn prop_single_write_per_valid_brightness(level in 0u8..=255) {
            let mut d = display();
            d.set_brightness(level).unwrap();
            let expected = if level <= 15 { 1 } else { 0 };
            prop_assert_eq!(d.bus().writes.len(), expected);
        }

        #[test]
        fn prop_blink_always_ends_at_default(toggles in 0usize..32) {
            let mut d = display();
            let mut blinker = Blinker::new();
            for _ in 0..toggles {
                d.set_brightness(blinker.next_level()).unwrap();
            }
            d.set_brightness(blinker.finish()).unwrap();

            let last = d.bus().writes.last().map(|(_, data)| data[0]);
            prop_assert_eq!(last, Some(0xE1));
        }
    }
}
