//! Button sampling
//!
//! Three active-low buttons: arm, increment and decrement. While arm is
//! held, increment or decrement produce a delta. Deltas are rate limited by
//! a debounce window measured from the last emission, so a held button
//! repeats at the window's rate instead of once per poll.

use vigil_hal::InputPin;

/// Default poll period in milliseconds
pub const DEFAULT_POLL_MS: u32 = 10;

/// Default minimum spacing between two emitted deltas in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

/// Alarm adjustment requested by the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonDelta {
    /// One minute later
    Increment,
    /// One minute earlier
    Decrement,
}

impl ButtonDelta {
    /// Signed minute offset for this delta
    pub fn minutes(self) -> i64 {
        match self {
            ButtonDelta::Increment => 1,
            ButtonDelta::Decrement => -1,
        }
    }
}

/// Button states from one poll (`true` = pressed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLevels {
    pub arm: bool,
    pub increment: bool,
    pub decrement: bool,
}

impl ButtonLevels {
    /// Delta requested by these levels, ignoring timing
    ///
    /// Nothing without arm held; increment wins when both are pressed.
    pub fn delta(&self) -> Option<ButtonDelta> {
        if !self.arm {
            return None;
        }

        if self.increment {
            Some(ButtonDelta::Increment)
        } else if self.decrement {
            Some(ButtonDelta::Decrement)
        } else {
            None
        }
    }
}

/// The three button inputs
pub struct ButtonPins<P> {
    pub arm: P,
    pub increment: P,
    pub decrement: P,
}

impl<P: InputPin> ButtonPins<P> {
    /// Read all three buttons (pressed = pin low)
    pub fn read(&self) -> ButtonLevels {
        ButtonLevels {
            arm: self.arm.is_low(),
            increment: self.increment.is_low(),
            decrement: self.decrement.is_low(),
        }
    }
}

/// Repeat-rate limiter for button deltas
pub struct ButtonSampler {
    debounce_ms: u64,
    /// Timestamp of the last emitted delta
    last_emit_ms: Option<u64>,
}

impl Default for ButtonSampler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl ButtonSampler {
    /// Create a sampler with the given debounce window
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms: debounce_ms as u64,
            last_emit_ms: None,
        }
    }

    /// Feed one sample taken at `now_ms`
    ///
    /// Returns a delta when one is requested and at least the debounce
    /// window has passed since the previous emission. The first request
    /// after startup is accepted immediately.
    pub fn sample(&mut self, levels: ButtonLevels, now_ms: u64) -> Option<ButtonDelta> {
        let delta = levels.delta()?;

        if let Some(last) = self.last_emit_ms {
            if now_ms.saturating_sub(last) < self.debounce_ms {
                return None;
            }
        }

        self.last_emit_ms = Some(now_ms);
        Some(delta)
    }

    /// Read the pins and feed the result to [`Self::sample`]
    pub fn poll<P: InputPin>(&mut self, pins: &ButtonPins<P>, now_ms: u64) -> Option<ButtonDelta> {
        self.sample(pins.read(), now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    /// Mock input pin with an adjustable level
    struct MockPin {
        high: Cell<bool>,
    }

    impl MockPin {
        fn released() -> Self {
            // Pull-up: idle level is high
            Self {
                high: Cell::new(true),
            }
        }

        fn press(&self) {
            self.high.set(false);
        }
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    fn pins() -> ButtonPins<MockPin> {
        ButtonPins {
            arm: MockPin::released(),
            increment: MockPin::released(),
            decrement: MockPin::released(),
        }
    }

    const HELD_INC: ButtonLevels = ButtonLevels {
        arm: true,
        increment: true,
        decrement: false,
    };

    #[test]
    fn test_nothing_without_arm() {
        let pins = pins();
        pins.increment.press();

        let mut sampler = ButtonSampler::default();
        assert_eq!(sampler.poll(&pins, 0), None);
        assert_eq!(sampler.poll(&pins, 10_000), None);
    }

    #[test]
    fn test_pins_are_active_low() {
        let pins = pins();
        assert_eq!(pins.read(), ButtonLevels::default());

        pins.arm.press();
        pins.decrement.press();
        let levels = pins.read();
        assert!(levels.arm);
        assert!(levels.decrement);
        assert!(!levels.increment);
    }

    #[test]
    fn test_increment_wins_over_decrement() {
        let levels = ButtonLevels {
            arm: true,
            increment: true,
            decrement: true,
        };
        assert_eq!(levels.delta(), Some(ButtonDelta::Increment));
    }

    #[test]
    fn test_arm_alone_emits_nothing() {
        let levels = ButtonLevels {
            arm: true,
            ..Default::default()
        };
        let mut sampler = ButtonSampler::default();
        assert_eq!(sampler.sample(levels, 0), None);
    }

    #[test]
    fn test_first_press_is_immediate() {
        let pins = pins();
        pins.arm.press();
        pins.decrement.press();

        let mut sampler = ButtonSampler::default();
        assert_eq!(sampler.poll(&pins, 3), Some(ButtonDelta::Decrement));
    }

    #[test]
    fn test_held_button_repeats_at_debounce_rate() {
        let mut sampler = ButtonSampler::new(500);

        assert_eq!(sampler.sample(HELD_INC, 0), Some(ButtonDelta::Increment));
        assert_eq!(sampler.sample(HELD_INC, 10), None);
        assert_eq!(sampler.sample(HELD_INC, 499), None);
        assert_eq!(sampler.sample(HELD_INC, 500), Some(ButtonDelta::Increment));
        assert_eq!(sampler.sample(HELD_INC, 990), None);
        assert_eq!(sampler.sample(HELD_INC, 1000), Some(ButtonDelta::Increment));
    }

    #[test]
    fn test_empty_polls_do_not_reset_window() {
        let mut sampler = ButtonSampler::new(500);
        assert!(sampler.sample(HELD_INC, 0).is_some());

        // Released in between; window still counts from the emission
        assert_eq!(sampler.sample(ButtonLevels::default(), 200), None);
        assert_eq!(sampler.sample(HELD_INC, 300), None);
        assert!(sampler.sample(HELD_INC, 500).is_some());
    }

    #[test]
    fn test_delta_minutes() {
        assert_eq!(ButtonDelta::Increment.minutes(), 1);
        assert_eq!(ButtonDelta::Decrement.minutes(), -1);
    }

    proptest! {
        #[test]
        fn prop_held_events_never_closer_than_debounce(
            poll_ms in 1u64..60,
            debounce_ms in 1u32..1000,
            polls in 1usize..2000,
        ) {
            let mut sampler = ButtonSampler::new(debounce_ms);
            let mut last: Option<u64> = None;
            let mut emitted = 0usize;

            for i in 0..polls {
                let now = i as u64 * poll_ms;
                if sampler.sample(HELD_INC, now).is_some() {
                    if let Some(prev) = last {
                        prop_assert!(now - prev >= debounce_ms as u64);
                    }
                    last = Some(now);
                    emitted += 1;
                }
            }

            // Holding always produces at least the initial event
            prop_assert!(emitted >= 1);
        }
    }
}
