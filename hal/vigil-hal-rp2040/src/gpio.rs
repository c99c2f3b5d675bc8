//! Button inputs

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

/// Push button wired to ground with the internal pull-up enabled
///
/// Reads low while pressed.
pub struct Button {
    input: Input<'static>,
}

impl Button {
    /// Configure a pin as a pulled-up button input
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl vigil_hal::InputPin for Button {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}
