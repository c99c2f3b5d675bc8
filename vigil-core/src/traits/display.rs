//! Seven-segment display trait
//!
//! Out-of-range arguments are silent no-ops rather than errors, so a
//! caller mistake never takes the display down. Errors are reserved for
//! transport failures.

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// Highest brightness level
pub const BRIGHTNESS_MAX: u8 = 15;

/// Brightness the display is initialized to and restored to after blinking
pub const DEFAULT_BRIGHTNESS: u8 = 1;

/// Trait for a 4-digit seven-segment display with a center colon
pub trait SegmentDisplay {
    /// Transport error type
    type Error;

    /// Bring the display up: oscillator on, display on without hardware
    /// blink, brightness at [`DEFAULT_BRIGHTNESS`]
    ///
    /// Must be called once before any other write.
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Set brightness (0-15). Other levels are ignored.
    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Blank every display memory slot, colon included
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw one character at `position` (0 = leftmost, 3 = rightmost)
    ///
    /// Positions outside 0-3 are ignored. Characters without a segment
    /// pattern render blank.
    fn write_digit(&mut self, position: u8, ch: char) -> Result<(), Self::Error>;

    /// Turn the center colon on or off
    fn set_colon(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Draw a string right-aligned on the display
    ///
    /// Strings longer than four characters are ignored entirely. Shorter
    /// strings leave the uncovered leftmost positions as they were.
    fn write_string(&mut self, s: &str) -> Result<(), Self::Error> {
        if s.chars().count() > DIGIT_COUNT {
            return Ok(());
        }

        let mut position = DIGIT_COUNT as u8;
        for ch in s.chars().rev() {
            position -= 1;
            self.write_digit(position, ch)?;
        }

        Ok(())
    }
}
