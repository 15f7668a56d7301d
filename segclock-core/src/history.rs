//! Command history log
//!
//! A fixed ring of one-row LCD lines. Writing advances the most-recent
//! cursor and snaps the browse cursor to the new line; the matrix keypad
//! moves the browse cursor independently. The LCD always shows the browsed
//! line on row 1 and its predecessor on row 2.

use segclock_hal::lcd::{
    CMD_CLEAR, CMD_DISPLAY_ON_CURSOR_BLINK, CMD_ENTRY_MODE_INCREMENT, CMD_SET_ROW_2,
};
use segclock_hal::CharacterLcd;

use crate::config::{HISTORY_CAPACITY, HISTORY_LINE_LEN};

/// Outcome suffix stored with each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Ok,
    Err,
}

impl Status {
    /// Suffix text, right-aligned on the line
    pub const fn suffix(self) -> &'static [u8] {
        match self {
            Status::Ok => b"OK",
            Status::Err => b"ERR",
        }
    }
}

/// One sixteen-column history line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HistoryEntry([u8; HISTORY_LINE_LEN]);

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::BLANK
    }
}

impl HistoryEntry {
    pub const BLANK: HistoryEntry = HistoryEntry([b' '; HISTORY_LINE_LEN]);

    /// Left-aligned command text with the status written over the last columns
    pub fn new(text: &[u8], status: Status) -> Self {
        let mut line = [b' '; HISTORY_LINE_LEN];
        let len = text.len().min(HISTORY_LINE_LEN);
        line[..len].copy_from_slice(&text[..len]);

        let suffix = status.suffix();
        line[HISTORY_LINE_LEN - suffix.len()..].copy_from_slice(suffix);
        Self(line)
    }

    pub fn as_bytes(&self) -> &[u8; HISTORY_LINE_LEN] {
        &self.0
    }
}

const fn next_index(index: usize) -> usize {
    if index + 1 == HISTORY_CAPACITY {
        0
    } else {
        index + 1
    }
}

const fn prev_index(index: usize) -> usize {
    if index == 0 {
        HISTORY_CAPACITY - 1
    } else {
        index - 1
    }
}

/// Send the power-on LCD setup sequence
pub fn init_lcd<L: CharacterLcd>(lcd: &mut L) {
    lcd.send_command(CMD_CLEAR);
    lcd.send_command(L::FUNCTION_SET);
    lcd.send_command(CMD_DISPLAY_ON_CURSOR_BLINK);
    lcd.send_command(CMD_ENTRY_MODE_INCREMENT);
}

/// Ring of the most recent command lines
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandHistory {
    entries: [HistoryEntry; HISTORY_CAPACITY],
    /// Slot of the most recent write
    recent: usize,
    /// Slot shown on the first LCD row
    browse: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Empty log; the first record lands in slot 0
    pub const fn new() -> Self {
        Self {
            entries: [HistoryEntry::BLANK; HISTORY_CAPACITY],
            recent: HISTORY_CAPACITY - 1,
            browse: 0,
        }
    }

    /// Append a line, overwriting the oldest, and browse to it
    ///
    /// Returns the slot written.
    pub fn record(&mut self, text: &[u8], status: Status) -> usize {
        self.recent = next_index(self.recent);
        self.entries[self.recent] = HistoryEntry::new(text, status);
        self.browse = self.recent;
        self.recent
    }

    /// Move the browse cursor forward, returning the new slot
    pub fn browse_next(&mut self) -> usize {
        self.browse = next_index(self.browse);
        self.browse
    }

    /// Move the browse cursor back, returning the new slot
    pub fn browse_prev(&mut self) -> usize {
        self.browse = prev_index(self.browse);
        self.browse
    }

    /// Line stored in a slot
    pub fn entry(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Slot of the most recent write
    pub fn recent(&self) -> usize {
        self.recent
    }

    /// Slot currently shown on the first row
    pub fn browse(&self) -> usize {
        self.browse
    }

    /// Redraw both LCD rows
    pub fn render<L: CharacterLcd>(&self, lcd: &mut L) {
        lcd.send_command(CMD_CLEAR);
        lcd.send_text(self.entries[self.browse].as_bytes());
        lcd.send_command(CMD_SET_ROW_2);
        lcd.send_text(self.entries[prev_index(self.browse)].as_bytes());
    }
}
