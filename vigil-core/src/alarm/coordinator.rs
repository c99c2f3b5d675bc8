//! Alarm coordinator state machine
//!
//! Owns the alarm time, the last-fired marker and the string last sent to
//! the display. Clock ticks and button deltas go in, display and blink
//! commands come out; the firmware task performs them in order.

use chrono::NaiveTime;
use heapless::Vec;

use crate::input::ButtonDelta;
use crate::time::{add_minutes, minute_marker, second_marker, MinuteMarker, SecondMarker};

/// 4-character string for the display ("HHMM")
pub type DisplayString = MinuteMarker;

/// Commands produced by a button event (at most stop + show)
pub type Commands = Vec<Command, 2>;

/// Coordinator modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Showing the current time, no blink running
    Idle,
    /// Alarm fired, blink task running
    Blinking,
}

/// Work for the firmware to perform
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Send a string to the display writer
    Show(DisplayString),
    /// Start the blink task
    StartBlink,
    /// Stop the blink task and wait until it has restored brightness
    StopBlink,
}

/// Alarm/display coordinator
#[derive(Debug, Clone)]
pub struct Coordinator {
    alarm: NaiveTime,
    /// Second marker of the tick the alarm last fired on
    last_fired: SecondMarker,
    displayed: DisplayString,
    mode: Mode,
}

impl Coordinator {
    /// Create a coordinator in idle mode with nothing displayed yet
    pub fn new(alarm: NaiveTime) -> Self {
        Self {
            alarm,
            last_fired: SecondMarker::new(),
            displayed: DisplayString::new(),
            mode: Mode::Idle,
        }
    }

    /// Current alarm time
    pub fn alarm_time(&self) -> NaiveTime {
        self.alarm
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last string sent to the display (empty before the first one)
    pub fn displayed(&self) -> &str {
        self.displayed.as_str()
    }

    /// Handle a clock tick
    ///
    /// Nothing happens while the minute on the display is current. When
    /// the minute changes into the alarm minute the blink starts and the
    /// display keeps its content for this tick; otherwise the new minute
    /// is shown.
    pub fn on_tick(&mut self, now: NaiveTime) -> Option<Command> {
        let minute = minute_marker(&now);
        if minute == self.displayed {
            return None;
        }

        let second = second_marker(&now);
        if self.mode == Mode::Idle
            && minute == minute_marker(&self.alarm)
            && second != self.last_fired
        {
            self.last_fired = second;
            self.mode = Mode::Blinking;
            return Some(Command::StartBlink);
        }

        self.displayed = minute.clone();
        Some(Command::Show(minute))
    }

    /// Handle a button delta
    ///
    /// Stops any running blink, moves the alarm by one minute (wrapping
    /// through midnight) and shows the new alarm time.
    pub fn on_button(&mut self, delta: ButtonDelta) -> Commands {
        let mut commands = Commands::new();

        if self.mode == Mode::Blinking {
            self.mode = Mode::Idle;
            let _ = commands.push(Command::StopBlink);
        }

        self.alarm = add_minutes(self.alarm, delta.minutes());
        self.displayed = minute_marker(&self.alarm);
        let _ = commands.push(Command::Show(self.displayed.clone()));

        commands
    }
}
