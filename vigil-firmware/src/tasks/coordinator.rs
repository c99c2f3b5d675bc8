//! Alarm coordinator task
//!
//! Runs the coordinator state machine: merges clock ticks, button deltas
//! and console clock updates, and carries out the resulting display and
//! blink commands in order.

use chrono::NaiveTime;
use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::Timer;

use vigil_core::alarm::{Command, Coordinator};
use vigil_hal_rp2040::RtcClock;

use crate::channels::{
    DisplayCommand, BLINK_START, BLINK_STOP, BLINK_STOPPED, BUTTON_CHANNEL, CLOCK_SET,
    DISPLAY_CHANNEL,
};

/// Control of the blink task from the coordinator side
struct BlinkHandle {
    active: bool,
}

impl BlinkHandle {
    const fn new() -> Self {
        Self { active: false }
    }

    /// Stop the running blink and wait until it has restored brightness
    async fn stop(&mut self) {
        if !self.active {
            return;
        }
        BLINK_STOP.signal(());
        BLINK_STOPPED.wait().await;
        self.active = false;
    }

    /// Start a fresh blink run, ending any previous one first
    async fn start(&mut self) {
        self.stop().await;
        BLINK_STOP.reset();
        BLINK_START.signal(());
        self.active = true;
    }
}

/// Coordinator task
#[embassy_executor::task]
pub async fn coordinator_task(alarm: NaiveTime, mut clock: RtcClock) {
    info!("Coordinator task started");

    let mut coordinator = Coordinator::new(alarm);
    let mut blink = BlinkHandle::new();

    loop {
        match select3(
            BUTTON_CHANNEL.receive(),
            CLOCK_SET.wait(),
            Timer::after_secs(1),
        )
        .await
        {
            Either3::First(delta) => {
                for command in coordinator.on_button(delta) {
                    perform(command, &mut blink).await;
                }
                debug!("Alarm set to {}", coordinator.displayed());
            }
            Either3::Second(time) => {
                if let Err(e) = clock.set_time(time) {
                    warn!("Failed to set clock: {:?}", e);
                    continue;
                }
                info!("Clock set to {}", Display2Format(&time));
                // Redraw right away rather than on the next tick
                tick(&mut coordinator, &mut blink, time).await;
            }
            Either3::Third(()) => match clock.now() {
                Ok(now) => tick(&mut coordinator, &mut blink, now).await,
                Err(e) => warn!("Clock read failed: {:?}", e),
            },
        }
    }
}

async fn tick(coordinator: &mut Coordinator, blink: &mut BlinkHandle, now: NaiveTime) {
    if let Some(command) = coordinator.on_tick(now) {
        perform(command, blink).await;
    }
}

async fn perform(command: Command, blink: &mut BlinkHandle) {
    match command {
        Command::Show(s) => {
            trace!("Show {}", s);
            DISPLAY_CHANNEL.send(DisplayCommand::Show(s)).await;
        }
        Command::StartBlink => {
            info!("Alarm!");
            blink.start().await;
        }
        Command::StopBlink => {
            debug!("Alarm acknowledged");
            blink.stop().await;
        }
    }
}
