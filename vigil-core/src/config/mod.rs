//! Configuration types and parsing
//!
//! The firmware embeds a TOML file at build time and parses it here at
//! startup with a small `no_std` line parser.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
