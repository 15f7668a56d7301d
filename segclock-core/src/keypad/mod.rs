//! Keypad edge detection
//!
//! Both keypads are sampled from the tick handler. Each scan turns raw line
//! levels into a [`KeySet`] of keys that went down since the previous scan,
//! so a held key reports exactly one edge.

pub mod keys;
pub mod matrix;
pub mod multiplexed;

pub use keys::{KeySet, MatrixKey, MuxKey, MATRIX_KEY_ORDER, MUX_KEY_ORDER};
pub use matrix::MatrixKeypad;
pub use multiplexed::MultiplexedKeypad;
