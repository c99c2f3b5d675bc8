//! Display writer task
//!
//! Sole owner of the display after startup. Performs display commands in
//! the order they were sent.

use defmt::*;

use vigil_core::traits::SegmentDisplay;
use vigil_drivers::display::Ht16k33;
use vigil_hal_rp2040::DisplayBus;

use crate::channels::{DisplayCommand, DISPLAY_CHANNEL};

/// Concrete display type
pub type Display = Ht16k33<DisplayBus>;

/// Display writer task
///
/// A bus error here leaves the display in an unknown state, so it halts
/// the firmware.
#[embassy_executor::task]
pub async fn display_writer_task(mut display: Display) {
    info!("Display writer task started");

    loop {
        let command = DISPLAY_CHANNEL.receive().await;
        trace!("Display command: {:?}", command);

        let result = match &command {
            DisplayCommand::Show(s) => display.write_string(s),
            DisplayCommand::Brightness(level) => display.set_brightness(*level),
        };

        if let Err(e) = result {
            error!("Display write failed for {:?}: {:?}", command, e);
            panic!("display bus failure");
        }
    }
}
