//! Alarm blink task
//!
//! Long-lived: idles until the coordinator starts a run, toggles the
//! display brightness until told to stop, then restores the default
//! brightness and acknowledges.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};

use vigil_core::alarm::Blinker;

use crate::channels::{DisplayCommand, BLINK_START, BLINK_STOP, BLINK_STOPPED, DISPLAY_CHANNEL};

/// Blink task
#[embassy_executor::task]
pub async fn blink_task(period_ms: u32) {
    info!("Blink task started ({} ms period)", period_ms);

    let period = Duration::from_millis(period_ms as u64);

    loop {
        BLINK_START.wait().await;
        debug!("Blink run started");

        let mut blinker = Blinker::new();
        loop {
            DISPLAY_CHANNEL
                .send(DisplayCommand::Brightness(blinker.next_level()))
                .await;

            if let Either::First(()) = select(BLINK_STOP.wait(), Timer::after(period)).await {
                break;
            }
        }

        DISPLAY_CHANNEL
            .send(DisplayCommand::Brightness(blinker.finish()))
            .await;
        debug!("Blink run stopped");
        BLINK_STOPPED.signal(());
    }
}
