//! Periodic tick handler
//!
//! Runs once per hardware timer tick in interrupt context. It drives one
//! display position, scans both keypads and counts the tick. It never parses
//! commands or touches the character LCD.

use segclock_hal::{KeyLine, KeyMatrix, SegmentDisplay};

use crate::config::TickConfig;
use crate::display::DisplayMultiplexer;
use crate::keypad::{MatrixKeypad, MultiplexedKeypad};
use crate::shared::SharedState;

/// Interrupt-side state: multiplexer position and keypad history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickHandler {
    config: TickConfig,
    mux: DisplayMultiplexer,
    mux_keypad: MultiplexedKeypad,
    matrix_keypad: MatrixKeypad,
}

impl Default for TickHandler {
    fn default() -> Self {
        Self::new(TickConfig::default())
    }
}

impl TickHandler {
    pub const fn new(config: TickConfig) -> Self {
        Self {
            config,
            mux: DisplayMultiplexer::new(),
            mux_keypad: MultiplexedKeypad::new(),
            matrix_keypad: MatrixKeypad::new(),
        }
    }

    pub fn config(&self) -> &TickConfig {
        &self.config
    }

    /// Handle one timer tick
    pub fn on_tick<D, K, M>(&mut self, shared: &SharedState, display: &mut D, key_line: &K, matrix: &M)
    where
        D: SegmentDisplay,
        K: KeyLine,
        M: KeyMatrix,
    {
        let strobe = self.mux.refresh(
            display,
            &shared.digits(),
            shared.edit_state(),
            shared.ticks(),
            &self.config,
        );

        shared.post_mux_edges(self.mux_keypad.scan(strobe, key_line.is_active()));
        shared.post_matrix_edges(self.matrix_keypad.scan(matrix.read_raw()));

        shared.count_tick(self.config.ticks_per_second);
    }
}
