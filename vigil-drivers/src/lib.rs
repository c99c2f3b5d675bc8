//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vigil-core:
//!
//! - Seven-segment display (HT16K33 backpack over I2C)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
