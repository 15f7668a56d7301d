//! HD44780 character LCD on a 4-bit GPIO bus
//!
//! RS, RW and E are plain outputs. D4..D7 switch between output for writes
//! and input for busy-flag reads. Every byte is transferred as two nibbles,
//! high nibble first.

use embassy_rp::gpio::{Flex, Level, Output, Pull};
use embassy_time::{block_for, Duration};
use segclock_hal::lcd::CMD_FUNCTION_SET_4BIT_2LINE;
use segclock_hal::CharacterLcd;

/// Enable pulse width and setup time in CPU cycles (~1 µs at 125 MHz)
const PULSE_CYCLES: u32 = 125;

/// 8-bit function set nibble used by the power-on wakeup sequence
const WAKE_NIBBLE: u8 = 0x3;

/// Switch-to-4-bit nibble
const FOUR_BIT_NIBBLE: u8 = 0x2;

/// Character LCD driven over GPIO
pub struct GpioLcd<'d> {
    rs: Output<'d>,
    rw: Output<'d>,
    en: Output<'d>,
    /// D4, D5, D6, D7
    data: [Flex<'d>; 4],
}

impl<'d> GpioLcd<'d> {
    /// Take the bus and put the controller into 4-bit mode
    ///
    /// The busy flag is not valid until the controller has seen the wakeup
    /// sequence, so it is paced with fixed delays.
    pub fn new(rs: Output<'d>, rw: Output<'d>, en: Output<'d>, mut data: [Flex<'d>; 4]) -> Self {
        for pin in data.iter_mut() {
            pin.set_pull(Pull::None);
            pin.set_as_output();
        }
        let mut lcd = Self { rs, rw, en, data };
        lcd.rs.set_low();
        lcd.rw.set_low();
        lcd.en.set_low();

        block_for(Duration::from_millis(40));
        lcd.write_nibble(WAKE_NIBBLE);
        block_for(Duration::from_millis(5));
        lcd.write_nibble(WAKE_NIBBLE);
        block_for(Duration::from_micros(150));
        lcd.write_nibble(WAKE_NIBBLE);
        block_for(Duration::from_micros(150));
        lcd.write_nibble(FOUR_BIT_NIBBLE);
        block_for(Duration::from_micros(150));
        lcd
    }

    fn pulse_delay() {
        cortex_m::asm::delay(PULSE_CYCLES);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_level(Level::from(nibble & (1 << bit) != 0));
        }
        Self::pulse_delay();
        self.en.set_high();
        Self::pulse_delay();
        self.en.set_low();
        Self::pulse_delay();
    }

    fn read_nibble(&mut self) -> u8 {
        self.en.set_high();
        Self::pulse_delay();
        let nibble = self
            .data
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, pin)| acc | ((pin.is_high() as u8) << bit));
        self.en.set_low();
        Self::pulse_delay();
        nibble
    }

    fn write_byte(&mut self, byte: u8) {
        self.rw.set_low();
        for pin in self.data.iter_mut() {
            pin.set_as_output();
        }
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }
}

impl CharacterLcd for GpioLcd<'_> {
    const FUNCTION_SET: u8 = CMD_FUNCTION_SET_4BIT_2LINE;

    fn is_busy(&mut self) -> bool {
        for pin in self.data.iter_mut() {
            pin.set_as_input();
        }
        self.rs.set_low();
        self.rw.set_high();
        Self::pulse_delay();

        let high = self.read_nibble();
        // Address counter low nibble, read to complete the transfer
        let _ = self.read_nibble();

        self.rw.set_low();
        high & 0b1000 != 0
    }

    fn write_command(&mut self, command: u8) {
        self.rs.set_low();
        self.write_byte(command);
    }

    fn write_data(&mut self, data: u8) {
        self.rs.set_high();
        self.write_byte(data);
    }
}
