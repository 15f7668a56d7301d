//! Seven-segment display
//!
//! Digit decomposition, the segment table and the per-tick multiplexer.

pub mod digits;
pub mod multiplexer;
pub mod segments;

pub use digits::DisplayDigits;
pub use multiplexer::{is_lit, DisplayMultiplexer};
pub use segments::{pattern, SEGMENTS};
