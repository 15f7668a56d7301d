//! Raw keypad inputs
//!
//! Both keypads are read without any filtering. Edge detection happens in
//! the core so that a held key produces exactly one press.

/// Single return line of a keypad scanned through the display strobe
///
/// The key wired to the currently strobed digit position drives this line.
pub trait KeyLine {
    /// Check if the line is currently asserted
    fn is_active(&self) -> bool;
}

/// Independently scanned key matrix exposing an 8-bit register
pub trait KeyMatrix {
    /// Read the raw register (active-low: a pressed key reads as 0)
    fn read_raw(&self) -> u8;
}
