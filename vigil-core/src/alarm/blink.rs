//! Alarm blink sequencing
//!
//! Brightness alternates between full and off once per period, starting
//! with full. However the sequence is interrupted, it ends at the default
//! brightness.

use crate::traits::{BRIGHTNESS_MAX, DEFAULT_BRIGHTNESS};

/// Default toggle period in milliseconds
pub const DEFAULT_BLINK_MS: u32 = 500;

/// Brightness sequence for one blink run
#[derive(Debug, Clone, Default)]
pub struct Blinker {
    level: u8,
}

impl Blinker {
    /// Start a new sequence
    pub fn new() -> Self {
        Self { level: 0 }
    }

    /// Level for the next toggle
    pub fn next_level(&mut self) -> u8 {
        self.level = if self.level == 0 { BRIGHTNESS_MAX } else { 0 };
        self.level
    }

    /// Level to restore once the sequence is stopped
    pub fn finish(self) -> u8 {
        DEFAULT_BRIGHTNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_full_and_alternates() {
        let mut blinker = Blinker::new();
        let levels: Vec<u8> = (0..5).map(|_| blinker.next_level()).collect();
        assert_eq!(levels, vec![15, 0, 15, 0, 15]);
    }

    #[test]
    fn test_finish_before_any_toggle() {
        assert_eq!(Blinker::new().finish(), DEFAULT_BRIGHTNESS);
    }

    proptest! {
        #[test]
        fn prop_stopping_anywhere_restores_default(toggles in 0usize..64) {
            let mut blinker = Blinker::new();
            let mut written = Vec::new();
            for _ in 0..toggles {
                written.push(blinker.next_level());
            }
            written.push(blinker.finish());

            prop_assert_eq!(written.last().copied(), Some(DEFAULT_BRIGHTNESS));
            prop_assert!(written.iter().all(|&level| level <= BRIGHTNESS_MAX));
        }
    }
}
