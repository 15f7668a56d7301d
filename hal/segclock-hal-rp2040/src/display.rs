//! GPIO-driven seven-segment display
//!
//! Eight segment lines (a..g plus the decimal point), six digit strobes and
//! an active-low display enable. Any `OutputPin` that cannot fail works, which
//! covers `embassy_rp::gpio::Output`.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use segclock_hal::SegmentDisplay;

/// Number of segment lines
pub const SEGMENT_LINES: usize = 8;

/// Number of digit strobes
pub const STROBE_LINES: usize = 6;

/// Segment display wired directly to GPIO
pub struct GpioSegmentDisplay<P> {
    segments: [P; SEGMENT_LINES],
    strobes: [P; STROBE_LINES],
    /// Low lights the display
    enable: P,
}

impl<P> GpioSegmentDisplay<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Take ownership of the pins and start with the display dark
    pub fn new(segments: [P; SEGMENT_LINES], strobes: [P; STROBE_LINES], enable: P) -> Self {
        let mut display = Self {
            segments,
            strobes,
            enable,
        };
        display.set_blanked(true);
        display
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pins: &mut [P], bits: u8) {
    for (bit, pin) in pins.iter_mut().enumerate() {
        let state = PinState::from(bits & (1 << bit) != 0);
        pin.set_state(state).unwrap_or_else(|never| match never {});
    }
}

impl<P> SegmentDisplay for GpioSegmentDisplay<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn select_digit(&mut self, strobe: u8) {
        drive(&mut self.strobes, strobe);
    }

    fn write_pattern(&mut self, pattern: u8) {
        drive(&mut self.segments, pattern);
    }

    fn set_blanked(&mut self, blanked: bool) {
        // Active-low enable
        self.enable
            .set_state(PinState::from(blanked))
            .unwrap_or_else(|never| match never {});
    }
}
