//! Display drivers

pub mod ht16k33;
pub mod segments;

pub use ht16k33::Ht16k33;
pub use segments::segment_pattern;
