//! Independently scanned matrix keypad

use super::keys::KeySet;

/// Edge detector for the active-low matrix register
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixKeypad {
    /// Inverted register value from the previous scan
    previous: u8,
}

impl MatrixKeypad {
    pub const fn new() -> Self {
        Self { previous: 0 }
    }

    /// Compare a raw register read against the previous scan
    pub fn scan(&mut self, raw: u8) -> KeySet {
        let pressed = !raw;
        let edges = !self.previous & pressed;
        self.previous = pressed;
        KeySet::from_bits(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::MatrixKey;
    use proptest::prelude::*;

    const IDLE: u8 = 0xFF;

    #[test]
    fn test_active_low_press() {
        let mut keypad = MatrixKeypad::new();
        assert!(keypad.scan(IDLE).is_empty());

        let raw = IDLE & !MatrixKey::HistoryNext.mask();
        let edges = keypad.scan(raw);
        assert_eq!(edges.matrix_keys().next(), Some(MatrixKey::HistoryNext));
        assert!(keypad.scan(raw).is_empty());
    }

    proptest! {
        #[test]
        fn prop_held_key_one_edge(bit in 0u8..8, ticks in 1usize..500) {
            let mut keypad = MatrixKeypad::new();
            keypad.scan(IDLE);
            let raw = IDLE & !(1 << bit);
            let mut edges = 0;
            for _ in 0..ticks {
                edges += keypad.scan(raw).bits().count_ones();
            }
            prop_assert_eq!(edges, 1);
        }
    }
}
