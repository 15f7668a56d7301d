//! Recording port implementations for host tests

use std::cell::Cell;
use std::rc::Rc;

use segclock_hal::lcd::{CMD_CLEAR, CMD_SET_ROW_2};
use segclock_hal::{CharacterLcd, KeyLine, KeyMatrix, SegmentDisplay, SerialTx};

use crate::config::HISTORY_LINE_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentWrite {
    Blank(bool),
    Select(u8),
    Pattern(u8),
}

/// Segment bus that records every write
///
/// The asserted strobe is shared with any [`MockKeyLine`] wired to it.
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub writes: Vec<SegmentWrite>,
    pub blanked: bool,
    pub strobe: Rc<Cell<u8>>,
}

impl MockDisplay {
    /// Pattern shown on the last refresh of each position, `None` if dark
    pub fn lit_patterns(&self) -> [Option<u8>; 6] {
        let mut lit = [None; 6];
        let mut slot = None;
        let mut pattern = 0u8;
        for write in &self.writes {
            match *write {
                SegmentWrite::Select(strobe) => {
                    slot = (0..6usize).find(|&bit| strobe == 1u8 << bit);
                    if let Some(slot) = slot {
                        lit[slot] = None;
                    }
                }
                SegmentWrite::Pattern(p) => pattern = p,
                SegmentWrite::Blank(false) => {
                    if let Some(slot) = slot {
                        lit[slot] = Some(pattern);
                    }
                }
                SegmentWrite::Blank(true) => {}
            }
        }
        lit
    }
}

impl SegmentDisplay for MockDisplay {
    fn select_digit(&mut self, strobe: u8) {
        self.strobe.set(strobe);
        self.writes.push(SegmentWrite::Select(strobe));
    }

    fn write_pattern(&mut self, pattern: u8) {
        self.writes.push(SegmentWrite::Pattern(pattern));
    }

    fn set_blanked(&mut self, blanked: bool) {
        self.blanked = blanked;
        self.writes.push(SegmentWrite::Blank(blanked));
    }
}

/// Key line that is active while one of the held slots is strobed
#[derive(Debug, Default)]
pub struct MockKeyLine {
    pub held: Cell<u8>,
    pub strobe: Rc<Cell<u8>>,
}

impl MockKeyLine {
    /// Key line wired to the strobe of `display`
    pub fn wired_to(display: &MockDisplay) -> Self {
        Self {
            held: Cell::new(0),
            strobe: Rc::clone(&display.strobe),
        }
    }
}

impl KeyLine for MockKeyLine {
    fn is_active(&self) -> bool {
        self.held.get() & self.strobe.get() != 0
    }
}

/// Active-low matrix register
#[derive(Debug)]
pub struct MockMatrix {
    pub raw: Cell<u8>,
}

impl Default for MockMatrix {
    fn default() -> Self {
        Self {
            raw: Cell::new(0xFF),
        }
    }
}

impl MockMatrix {
    /// Hold the keys in `mask`, releasing all others
    pub fn hold(&self, mask: u8) {
        self.raw.set(!mask);
    }
}

impl KeyMatrix for MockMatrix {
    fn read_raw(&self) -> u8 {
        self.raw.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdWrite {
    Command(u8),
    Data(u8),
}

/// LCD that records commands and data
#[derive(Debug, Default)]
pub struct MockLcd {
    pub writes: Vec<LcdWrite>,
    pub busy_polls: u32,
}

impl MockLcd {
    /// Both rows as drawn since the last clear
    pub fn rows(&self) -> ([u8; HISTORY_LINE_LEN], [u8; HISTORY_LINE_LEN]) {
        let start = self
            .writes
            .iter()
            .rposition(|w| *w == LcdWrite::Command(CMD_CLEAR))
            .map_or(0, |i| i + 1);

        let mut rows = ([b' '; HISTORY_LINE_LEN], [b' '; HISTORY_LINE_LEN]);
        let mut row = 0;
        let mut col = 0;
        for write in &self.writes[start..] {
            match *write {
                LcdWrite::Command(CMD_SET_ROW_2) => {
                    row = 1;
                    col = 0;
                }
                LcdWrite::Command(_) => {}
                LcdWrite::Data(byte) if col < HISTORY_LINE_LEN => {
                    if row == 0 {
                        rows.0[col] = byte;
                    } else {
                        rows.1[col] = byte;
                    }
                    col += 1;
                }
                LcdWrite::Data(_) => {}
            }
        }
        rows
    }

    /// Number of full redraws recorded
    pub fn renders(&self) -> usize {
        self.writes
            .iter()
            .filter(|w| **w == LcdWrite::Command(CMD_SET_ROW_2))
            .count()
    }
}

impl CharacterLcd for MockLcd {
    fn is_busy(&mut self) -> bool {
        self.busy_polls += 1;
        false
    }

    fn write_command(&mut self, command: u8) {
        self.writes.push(LcdWrite::Command(command));
    }

    fn write_data(&mut self, data: u8) {
        self.writes.push(LcdWrite::Data(data));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTxError;

/// Transmitter that collects sent bytes
#[derive(Debug)]
pub struct MockSerial {
    pub sent: Vec<u8>,
    pub ready: bool,
    pub fail: bool,
}

impl Default for MockSerial {
    fn default() -> Self {
        Self {
            sent: Vec::new(),
            ready: true,
            fail: false,
        }
    }
}

impl SerialTx for MockSerial {
    type Error = MockTxError;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockTxError);
        }
        self.sent.push(byte);
        Ok(())
    }
}
