//! Multiplexed seven-segment display port
//!
//! One segment bus is shared by every digit. The driver selects a digit with a
//! one-hot strobe mask, latches its pattern and lights it; the tick handler
//! repeats this for the next digit on every timer tick.

/// Seven-segment display bus
///
/// Segment patterns use bit 0 for segment `a` through bit 6 for segment `g`;
/// bit 7 is the decimal point.
pub trait SegmentDisplay {
    /// Drive the digit strobe lines with a one-hot mask (bit n = position n)
    fn select_digit(&mut self, strobe: u8);

    /// Latch a segment pattern onto the shared segment bus
    fn write_pattern(&mut self, pattern: u8);

    /// Blank or light the selected digit
    ///
    /// The refresh sequence blanks before switching the strobe so the old
    /// pattern never flashes on the new digit.
    fn set_blanked(&mut self, blanked: bool);
}
