//! GPIO keypad inputs

use embassy_rp::gpio::Input;
use segclock_hal::{KeyLine, KeyMatrix};

/// Return line of the strobe-scanned keypad
///
/// The line is pulled down and driven high through the key wired to the
/// currently strobed digit.
pub struct GpioKeyLine<'d> {
    input: Input<'d>,
}

impl<'d> GpioKeyLine<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self { input }
    }
}

impl KeyLine for GpioKeyLine<'_> {
    fn is_active(&self) -> bool {
        self.input.is_high()
    }
}

/// History browsing keys presented as an active-low register
///
/// Both keys are pulled up and short to ground when pressed. Unused register
/// bits read as released.
pub struct GpioKeyMatrix<'d> {
    next: Input<'d>,
    prev: Input<'d>,
}

/// Register bit of the "next" key
const NEXT_BIT: u8 = 1 << 4;

/// Register bit of the "previous" key
const PREV_BIT: u8 = 1 << 5;

impl<'d> GpioKeyMatrix<'d> {
    pub fn new(next: Input<'d>, prev: Input<'d>) -> Self {
        Self { next, prev }
    }
}

impl KeyMatrix for GpioKeyMatrix<'_> {
    fn read_raw(&self) -> u8 {
        let mut raw = 0xFF;
        if self.next.is_low() {
            raw &= !NEXT_BIT;
        }
        if self.prev.is_low() {
            raw &= !PREV_BIT;
        }
        raw
    }
}
