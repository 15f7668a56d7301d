//! State shared between the interrupt-side handlers and the dispatch loop
//!
//! Two producers (the tick handler and the serial receiver) and one consumer
//! (the dispatch loop) communicate only through atomics. Producers append
//! data or raise flags. Every compound read-modify-write on clock, edit or
//! history state happens in the consumer, which republishes the digits and
//! edit state for the tick handler afterwards.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};
use segclock_protocol::LineReceiver;

use crate::config::DIGIT_COUNT;
use crate::display::DisplayDigits;
use crate::keypad::KeySet;
use crate::state::EditState;

#[allow(clippy::declare_interior_mutable_const)]
const ZERO_DIGIT: AtomicU8 = AtomicU8::new(0);

/// Event contract between the interrupt handlers and the dispatch loop
///
/// At most one tick overflow and one frame-ready signal are outstanding at
/// a time; the dispatch loop drains each before the producer can usefully
/// raise it again.
#[derive(Debug)]
pub struct SharedState {
    /// Digits the multiplexer draws, published by the dispatch loop
    digits: [AtomicU8; DIGIT_COUNT],
    /// Published [`EditState`] for the blink policy
    edit: AtomicU8,
    /// Ticks counted in the current second
    ticks: AtomicU16,
    /// Raised once `ticks` reaches the per-second threshold
    overflow: AtomicBool,
    /// Pending multiplexed keypad edges
    mux_edges: AtomicU8,
    /// Pending matrix keypad edges
    matrix_edges: AtomicU8,
    /// Serial receive buffer
    line: LineReceiver,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            digits: [ZERO_DIGIT; DIGIT_COUNT],
            edit: AtomicU8::new(EditState::Off.to_bits()),
            ticks: AtomicU16::new(0),
            overflow: AtomicBool::new(false),
            mux_edges: AtomicU8::new(0),
            matrix_edges: AtomicU8::new(0),
            line: LineReceiver::new(),
        }
    }

    // Producer side (tick handler)

    /// Count one tick, raising the overflow flag at `threshold`
    ///
    /// Returns the tick count before this tick.
    pub fn count_tick(&self, threshold: u16) -> u16 {
        let previous = self.ticks.fetch_add(1, Ordering::AcqRel);
        if previous.wrapping_add(1) >= threshold {
            self.overflow.store(true, Ordering::Release);
        }
        previous
    }

    /// Queue multiplexed keypad edges
    pub fn post_mux_edges(&self, edges: KeySet) {
        if !edges.is_empty() {
            self.mux_edges.fetch_or(edges.bits(), Ordering::AcqRel);
        }
    }

    /// Queue matrix keypad edges
    pub fn post_matrix_edges(&self, edges: KeySet) {
        if !edges.is_empty() {
            self.matrix_edges.fetch_or(edges.bits(), Ordering::AcqRel);
        }
    }

    /// Digits to draw
    pub fn digits(&self) -> DisplayDigits {
        let mut digits = [0u8; DIGIT_COUNT];
        for (digit, slot) in digits.iter_mut().zip(&self.digits) {
            *digit = slot.load(Ordering::Acquire);
        }
        DisplayDigits::from_array(digits)
    }

    /// Edit state for the blink policy
    pub fn edit_state(&self) -> EditState {
        EditState::from_bits(self.edit.load(Ordering::Acquire))
    }

    /// Ticks counted in the current second
    pub fn ticks(&self) -> u16 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Serial receive buffer, pushed to from the serial interrupt
    pub fn line(&self) -> &LineReceiver {
        &self.line
    }

    // Consumer side (dispatch loop)

    /// Drain a pending overflow
    ///
    /// The threshold is subtracted before the flag is cleared. If ticks
    /// built up past another threshold the next tick raises the flag again.
    pub fn take_overflow(&self, threshold: u16) -> bool {
        if !self.overflow.load(Ordering::Acquire) {
            return false;
        }
        self.ticks.fetch_sub(threshold, Ordering::AcqRel);
        self.overflow.store(false, Ordering::Release);
        true
    }

    /// Check for a pending overflow without draining it
    pub fn is_overflow_pending(&self) -> bool {
        self.overflow.load(Ordering::Acquire)
    }

    /// Drain pending multiplexed keypad edges
    pub fn take_mux_edges(&self) -> KeySet {
        KeySet::from_bits(self.mux_edges.swap(0, Ordering::AcqRel))
    }

    /// Drain pending matrix keypad edges
    pub fn take_matrix_edges(&self) -> KeySet {
        KeySet::from_bits(self.matrix_edges.swap(0, Ordering::AcqRel))
    }

    /// Publish the digits and edit state for the tick handler
    pub fn publish(&self, digits: &DisplayDigits, edit: EditState) {
        for (slot, &digit) in self.digits.iter().zip(digits.as_array()) {
            slot.store(digit, Ordering::Release);
        }
        self.edit.store(edit.to_bits(), Ordering::Release);
    }
}
