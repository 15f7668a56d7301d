//! Round-robin digit multiplexer
//!
//! One digit position is driven per timer tick. The position index and the
//! one-hot strobe mask rotate together; the strobe also selects which
//! multiplexed key slot is sampled on the same tick.

use segclock_hal::SegmentDisplay;

use super::digits::DisplayDigits;
use super::segments::pattern;
use crate::config::{TickConfig, DIGIT_COUNT};
use crate::state::EditState;

/// Strobe mask for the first position
const FIRST_STROBE: u8 = 0b0000_0001;

/// Decide whether a position is lit under the edit-mode blink policy
///
/// Positions of the field under edit go dark during the second half of
/// each second. Everything is lit while not editing.
pub fn is_lit(position: usize, edit: EditState, ticks: u16, config: &TickConfig) -> bool {
    match edit.field() {
        None => true,
        Some(_) if ticks < config.blink_threshold() => true,
        Some(field) => !field.contains_position(position),
    }
}

/// Display multiplexer state, owned by the tick handler
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayMultiplexer {
    position: usize,
    strobe: u8,
}

impl Default for DisplayMultiplexer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayMultiplexer {
    pub const fn new() -> Self {
        Self {
            position: 0,
            strobe: FIRST_STROBE,
        }
    }

    /// Position driven on the last refresh
    pub fn position(&self) -> usize {
        self.position
    }

    /// Strobe mask asserted on the last refresh
    pub fn strobe(&self) -> u8 {
        self.strobe
    }

    /// Advance to the next position and drive it
    ///
    /// The display is blanked while the strobe and pattern change, then
    /// un-blanked only if the digit is lit. Returns the new strobe mask.
    pub fn refresh<D: SegmentDisplay>(
        &mut self,
        bus: &mut D,
        digits: &DisplayDigits,
        edit: EditState,
        ticks: u16,
        config: &TickConfig,
    ) -> u8 {
        self.position += 1;
        if self.position == DIGIT_COUNT {
            self.position = 0;
        }
        self.strobe <<= 1;
        if self.strobe == FIRST_STROBE << DIGIT_COUNT {
            self.strobe = FIRST_STROBE;
        }

        bus.set_blanked(true);
        bus.select_digit(self.strobe);
        bus.write_pattern(pattern(digits.get(self.position).unwrap_or(0)));
        if is_lit(self.position, edit, ticks, config) {
            bus.set_blanked(false);
        }

        self.strobe
    }
}
