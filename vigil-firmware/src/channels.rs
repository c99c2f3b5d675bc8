//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use chrono::NaiveTime;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use vigil_core::alarm::DisplayString;
use vigil_core::input::ButtonDelta;

/// Single slot: senders wait until the previous item is taken
const CHANNEL_SIZE: usize = 1;

/// Work for the display writer task
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    /// Draw a string right-aligned
    Show(DisplayString),
    /// Set brightness (0-15)
    Brightness(u8),
}

/// Display writes, performed in send order by the display writer
pub static DISPLAY_CHANNEL: Channel<CriticalSectionRawMutex, DisplayCommand, CHANNEL_SIZE> =
    Channel::new();

/// Debounced button deltas for the coordinator
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, ButtonDelta, CHANNEL_SIZE> =
    Channel::new();

/// Coordinator asks the blink task to start a run
pub static BLINK_START: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Coordinator asks the running blink to stop
///
/// Reset before every start so a stale stop cannot end the next run.
pub static BLINK_STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Blink task has restored default brightness and is idle again
pub static BLINK_STOPPED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// New wall clock time from the console
pub static CLOCK_SET: Signal<CriticalSectionRawMutex, NaiveTime> = Signal::new();
