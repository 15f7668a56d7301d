//! Segment patterns for decimal digits
//!
//! Bit 0 drives segment a through bit 6 for segment g. The decimal point
//! (bit 7) is never lit.

/// Patterns for digits 0 to 9
pub const SEGMENTS: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

/// Pattern for a decimal digit
///
/// Values above 9 render blank.
pub fn pattern(digit: u8) -> u8 {
    SEGMENTS.get(digit as usize).copied().unwrap_or(0)
}
