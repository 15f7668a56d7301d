//! Strobe-scanned keypad
//!
//! A single key line is shared by all keys; the active display strobe decides
//! which key the line reflects on a given tick.

use super::keys::KeySet;

/// Edge detector for the strobe-scanned keypad
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiplexedKeypad {
    /// One bit per strobe slot, set while that slot's key is held
    previous: u8,
}

impl MultiplexedKeypad {
    pub const fn new() -> Self {
        Self { previous: 0 }
    }

    /// Sample the key line for the slot selected by `strobe`
    pub fn scan(&mut self, strobe: u8, active: bool) -> KeySet {
        if active {
            let edges = !self.previous & strobe;
            self.previous |= strobe;
            KeySet::from_bits(edges)
        } else {
            self.previous &= !strobe;
            KeySet::EMPTY
        }
    }
}
