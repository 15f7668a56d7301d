//! Character LCD port
//!
//! HD44780-compatible displays accept a command or data byte only while their
//! busy flag is clear. Every write therefore polls the flag first, which is
//! why the LCD is only ever driven from the dispatch loop and never from the
//! tick handler.

/// Clear display and return the cursor home
pub const CMD_CLEAR: u8 = 0b0000_0001;

/// Entry mode: increment address, no display shift
pub const CMD_ENTRY_MODE_INCREMENT: u8 = 0b0000_0110;

/// Display on, cursor on, cursor blink on
pub const CMD_DISPLAY_ON_CURSOR_BLINK: u8 = 0b0000_1111;

/// Function set: 8-bit bus, 2 lines, 5x8 font
pub const CMD_FUNCTION_SET_8BIT_2LINE: u8 = 0b0011_1000;

/// Function set: 4-bit bus, 2 lines, 5x8 font
pub const CMD_FUNCTION_SET_4BIT_2LINE: u8 = 0b0010_1000;

/// Set DDRAM address to the start of the second row
pub const CMD_SET_ROW_2: u8 = 0b1100_0000;

/// Character LCD with a readable busy flag
pub trait CharacterLcd {
    /// Function set command matching the physical bus width
    const FUNCTION_SET: u8 = CMD_FUNCTION_SET_8BIT_2LINE;

    /// Read the busy flag
    fn is_busy(&mut self) -> bool;

    /// Write a command byte without waiting
    fn write_command(&mut self, command: u8);

    /// Write a data (character) byte without waiting
    fn write_data(&mut self, data: u8);

    /// Spin until the controller accepts the next byte
    fn wait_ready(&mut self) {
        while self.is_busy() {
            core::hint::spin_loop();
        }
    }

    /// Wait for the busy flag, then send a command
    fn send_command(&mut self, command: u8) {
        self.wait_ready();
        self.write_command(command);
    }

    /// Wait for the busy flag, then send a data byte
    fn send_data(&mut self, data: u8) {
        self.wait_ready();
        self.write_data(data);
    }

    /// Send a run of data bytes at the current cursor position
    fn send_text(&mut self, text: &[u8]) {
        for &byte in text {
            self.send_data(byte);
        }
    }
}
