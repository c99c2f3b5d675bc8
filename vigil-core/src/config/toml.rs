//! Simple TOML parser for clock configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the clock configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Decimal and `0x` hexadecimal integers
//! - [section] headers
//! - Comments (# ...)
//!
//! Unknown keys are ignored so that older firmware accepts newer files.
//! Unknown sections are rejected.

use chrono::NaiveTime;

use super::types::{ClockConfig, MAX_I2C_ADDRESS};
use crate::time::parse_hh_mm;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// `[alarm] time` is not an "HH:MM" time
    InvalidAlarmTime,
    /// `[alarm] time` is missing
    MissingAlarmTime,
    /// I2C address does not fit in 7 bits
    InvalidAddress,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Alarm,
    Display,
    Input,
}

/// Parse TOML configuration into ClockConfig
pub fn parse_config(input: &str) -> Result<ClockConfig, ParseError> {
    let mut section = Section::Root;
    let mut alarm_time: Option<NaiveTime> = None;
    // Placeholder alarm until the real one is known
    let mut config = ClockConfig::with_alarm(NaiveTime::MIN);

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            match section {
                Section::Alarm => match key {
                    "time" => {
                        let time = parse_hh_mm(parse_string(value)?)
                            .map_err(|_| ParseError::InvalidAlarmTime)?;
                        alarm_time = Some(time);
                    }
                    "blink_ms" => config.alarm.blink_ms = parse_nonzero(value)?,
                    _ => {}
                },
                Section::Display => match key {
                    "i2c_bus" => config.display.i2c_bus = parse_int(value)?,
                    "i2c_address" => {
                        let address: u8 = parse_int(value).map_err(|_| ParseError::InvalidAddress)?;
                        if address > MAX_I2C_ADDRESS {
                            return Err(ParseError::InvalidAddress);
                        }
                        config.display.i2c_address = address;
                    }
                    "dry_run" => config.display.dry_run = parse_bool(value)?,
                    _ => {}
                },
                Section::Input => match key {
                    "poll_ms" => config.input.poll_ms = parse_nonzero(value)?,
                    "debounce_ms" => config.input.debounce_ms = parse_int(value)?,
                    _ => {}
                },
                Section::Root => {
                    // No root-level keys
                }
            }
        }
    }

    config.alarm.time = alarm_time.ok_or(ParseError::MissingAlarmTime)?;
    Ok(config)
}

/// Parse section header like "alarm" or "display"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "alarm" => Ok(Section::Alarm),
        "display" => Ok(Section::Display),
        "input" => Ok(Section::Input),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse a decimal or `0x` hexadecimal integer
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    let raw = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    }
    .map_err(|_| ParseError::InvalidValue)?;

    T::try_from(raw).map_err(|_| ParseError::InvalidValue)
}

/// Parse an integer that must be greater than zero
fn parse_nonzero(value: &str) -> Result<u32, ParseError> {
    match parse_int(value)? {
        0 => Err(ParseError::InvalidValue),
        n => Ok(n),
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}
