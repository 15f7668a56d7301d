//! Logical keys and edge sets

/// Keys on the strobe-scanned keypad
///
/// Each key is wired to the strobe slot given by its bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuxKey {
    Enter,
    Esc,
    Right,
    Up,
    Down,
    Left,
}

/// Order in which simultaneous edges are handled
pub const MUX_KEY_ORDER: [MuxKey; 6] = [
    MuxKey::Left,
    MuxKey::Down,
    MuxKey::Up,
    MuxKey::Right,
    MuxKey::Esc,
    MuxKey::Enter,
];

impl MuxKey {
    /// Strobe slot bit for this key
    pub const fn mask(self) -> u8 {
        match self {
            MuxKey::Enter => 1 << 0,
            MuxKey::Esc => 1 << 1,
            MuxKey::Right => 1 << 2,
            MuxKey::Up => 1 << 3,
            MuxKey::Down => 1 << 4,
            MuxKey::Left => 1 << 5,
        }
    }
}

/// Keys on the matrix keypad used for history browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixKey {
    /// Move the browse cursor forward
    HistoryNext,
    /// Move the browse cursor back
    HistoryPrev,
}

/// Order in which simultaneous edges are handled
pub const MATRIX_KEY_ORDER: [MatrixKey; 2] = [MatrixKey::HistoryNext, MatrixKey::HistoryPrev];

impl MatrixKey {
    /// Register bit for this key
    pub const fn mask(self) -> u8 {
        match self {
            MatrixKey::HistoryNext => 1 << 4,
            MatrixKey::HistoryPrev => 1 << 5,
        }
    }
}

/// Set of keys that went down, one bit per key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySet(u8);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if a key mask is present
    pub const fn contains_mask(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    /// Multiplexed keys present, in handling order
    pub fn mux_keys(self) -> impl Iterator<Item = MuxKey> {
        MUX_KEY_ORDER
            .into_iter()
            .filter(move |key| self.contains_mask(key.mask()))
    }

    /// Matrix keys present, in handling order
    pub fn matrix_keys(self) -> impl Iterator<Item = MatrixKey> {
        MATRIX_KEY_ORDER
            .into_iter()
            .filter(move |key| self.contains_mask(key.mask()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mux_keys_in_handling_order() {
        let set = KeySet::from_bits(MuxKey::Enter.mask() | MuxKey::Left.mask() | MuxKey::Up.mask());
        let mut keys = set.mux_keys();
        assert_eq!(keys.next(), Some(MuxKey::Left));
        assert_eq!(keys.next(), Some(MuxKey::Up));
        assert_eq!(keys.next(), Some(MuxKey::Enter));
        assert_eq!(keys.next(), None);
    }

    #[test]
    fn test_matrix_ignores_other_bits() {
        let set = KeySet::from_bits(0b1100_1111 | MatrixKey::HistoryPrev.mask());
        let mut keys = set.matrix_keys();
        assert_eq!(keys.next(), Some(MatrixKey::HistoryPrev));
        assert_eq!(keys.next(), None);
    }
}
