//! Button sampling task
//!
//! Polls the arm/increment/decrement buttons and forwards debounced alarm
//! adjustments to the coordinator.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use vigil_core::config::InputConfig;
use vigil_core::input::{ButtonPins, ButtonSampler};
use vigil_hal_rp2040::Button;

use crate::channels::BUTTON_CHANNEL;

/// Button task
#[embassy_executor::task]
pub async fn button_task(pins: ButtonPins<Button>, config: InputConfig) {
    info!(
        "Button task started (poll {} ms, debounce {} ms)",
        config.poll_ms, config.debounce_ms
    );

    let mut sampler = ButtonSampler::new(config.debounce_ms);
    let mut ticker = Ticker::every(Duration::from_millis(config.poll_ms as u64));

    loop {
        ticker.next().await;

        if let Some(delta) = sampler.poll(&pins, Instant::now().as_millis()) {
            debug!("Button delta: {:?}", delta);
            BUTTON_CHANNEL.send(delta).await;
        }
    }
}
