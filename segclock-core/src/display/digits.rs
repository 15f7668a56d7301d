//! Decimal digits shown on the display

use crate::clock::{ClockTime, TimeField};
use crate::config::DIGIT_COUNT;

/// Six decimal digits, index 0 = seconds ones, index 5 = hours tens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayDigits([u8; DIGIT_COUNT]);

impl DisplayDigits {
    /// Wrap raw digits
    pub const fn from_array(digits: [u8; DIGIT_COUNT]) -> Self {
        Self(digits)
    }

    /// Tens/ones decomposition of a time
    pub fn from_time(time: &ClockTime) -> Self {
        let mut digits = Self::default();
        digits.set_field(TimeField::Seconds, time.second());
        digits.set_field(TimeField::Minutes, time.minute());
        digits.set_field(TimeField::Hours, time.hour());
        digits
    }

    /// Rewrite the two positions belonging to one field
    pub fn set_field(&mut self, field: TimeField, value: u8) {
        let ones = field.ones_position();
        self.0[ones] = value % 10;
        self.0[ones + 1] = value / 10;
    }

    /// Digit at a display position
    pub fn get(&self, position: usize) -> Option<u8> {
        self.0.get(position).copied()
    }

    pub fn as_array(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }
}
