//! GET reply encoding
//!
//! The reply buffer is filled front to back with the terminator first and the
//! digits in display order (seconds-ones first), then transmitted back to
//! front. Slot 0 is never sent. On the wire this reads `HH.MM.SS` CR LF.

use crate::frame::{CARRIAGE_RETURN, LINE_FEED};

/// Reply buffer size in bytes
pub const REPLY_BUFFER_LEN: usize = 11;

/// Number of bytes transmitted per reply
pub const REPLY_WIRE_LEN: usize = REPLY_BUFFER_LEN - 1;

/// Field separator between digit pairs
pub const FIELD_SEPARATOR: u8 = b'.';

/// A queued reply to `GET`, drained one byte at a time
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeReply {
    buffer: [u8; REPLY_BUFFER_LEN],
    /// Index of the next byte to send; 0 means drained
    cursor: usize,
}

impl TimeReply {
    /// Encode display digits (index 0 = seconds ones, 5 = hours tens)
    pub fn new(digits: &[u8; 6]) -> Self {
        let ascii = |d: u8| b'0' + d % 10;
        let mut buffer = [0u8; REPLY_BUFFER_LEN];
        buffer[1] = LINE_FEED;
        buffer[2] = CARRIAGE_RETURN;
        buffer[3] = ascii(digits[0]);
        buffer[4] = ascii(digits[1]);
        buffer[5] = FIELD_SEPARATOR;
        buffer[6] = ascii(digits[2]);
        buffer[7] = ascii(digits[3]);
        buffer[8] = FIELD_SEPARATOR;
        buffer[9] = ascii(digits[4]);
        buffer[10] = ascii(digits[5]);

        Self {
            buffer,
            cursor: REPLY_WIRE_LEN,
        }
    }

    /// Take the next byte to transmit
    pub fn next_byte(&mut self) -> Option<u8> {
        if self.cursor == 0 {
            return None;
        }
        let byte = self.buffer[self.cursor];
        self.cursor -= 1;
        Some(byte)
    }

    /// Number of bytes still to send
    pub fn remaining(&self) -> usize {
        self.cursor
    }

    /// Check if every byte has been sent
    pub fn is_drained(&self) -> bool {
        self.cursor == 0
    }
}

impl Iterator for TimeReply {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_byte()
    }
}
