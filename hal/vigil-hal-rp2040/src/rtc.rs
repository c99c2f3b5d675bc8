//! Wall clock backed by the RP2040 RTC
//!
//! The board has no battery-backed clock, so after a cold boot the RTC
//! starts from midnight and is set over the console. Only the time of day
//! is meaningful; the date is pinned to a fixed day.

use chrono::{NaiveTime, Timelike};
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc, RtcError};
use embassy_rp::Peri;

/// Error from wall clock operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// RTC has not started counting yet
    NotRunning,
    /// RTC rejected or returned an invalid date/time
    InvalidTime,
}

impl From<RtcError> for ClockError {
    fn from(e: RtcError) -> Self {
        match e {
            RtcError::NotRunning => ClockError::NotRunning,
            _ => ClockError::InvalidTime,
        }
    }
}

/// Time-of-day clock on the RTC peripheral
pub struct RtcClock {
    rtc: Rtc<'static, RTC>,
}

impl RtcClock {
    /// Take the RTC, starting it at midnight if it is not already counting
    ///
    /// A running RTC survives a soft reset, so its time is kept.
    pub fn new(peri: Peri<'static, RTC>) -> Result<Self, ClockError> {
        let mut clock = Self {
            rtc: Rtc::new(peri),
        };
        if !clock.rtc.is_running() {
            clock.set_time(NaiveTime::MIN)?;
        }
        Ok(clock)
    }

    /// Current time of day
    pub fn now(&self) -> Result<NaiveTime, ClockError> {
        let dt = self.rtc.now()?;
        NaiveTime::from_hms_opt(dt.hour.into(), dt.minute.into(), dt.second.into())
            .ok_or(ClockError::InvalidTime)
    }

    /// Set the time of day
    pub fn set_time(&mut self, time: NaiveTime) -> Result<(), ClockError> {
        self.rtc.set_datetime(DateTime {
            year: 2024,
            month: 1,
            day: 1,
            day_of_week: DayOfWeek::Monday,
            // Time-of-day fields are always below 60
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        })?;
        Ok(())
    }
}
