//! Line framing for the serial command protocol.
//!
//! Frame format:
//! - BODY (1-12 bytes): ASCII command text
//! - CR (optional): carriage return, stripped with the terminator
//! - LF (1 byte): line feed terminator
//!
//! The receive buffer holds at most [`FRAME_CAPACITY`] bytes. Appending past
//! capacity restarts the buffer at index 0, silently discarding the partial
//! frame. A frame that never receives its terminator waits indefinitely.

use heapless::Vec;
use portable_atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

/// Receive buffer capacity in bytes
pub const FRAME_CAPACITY: usize = 14;

/// Frame terminator
pub const LINE_FEED: u8 = b'\n';

/// Optional byte preceding the terminator
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Errors that can occur when building a frame from raw bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// More bytes than the receive buffer can hold
    TooLong,
    /// Last byte is not a line feed
    Unterminated,
}

/// A complete terminator-delimited frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandFrame {
    bytes: Vec<u8, FRAME_CAPACITY>,
}

impl CommandFrame {
    /// Build a frame from raw bytes, including the terminator
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.last() != Some(&LINE_FEED) {
            return Err(FrameError::Unterminated);
        }
        let bytes = Vec::from_slice(bytes).map_err(|_| FrameError::TooLong)?;
        Ok(Self { bytes })
    }

    /// Raw frame bytes including the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame content with the LF and an optional preceding CR removed
    pub fn body(&self) -> &[u8] {
        let bytes: &[u8] = &self.bytes;
        let body = bytes.strip_suffix(&[LINE_FEED]).unwrap_or(bytes);
        body.strip_suffix(&[CARRIAGE_RETURN]).unwrap_or(body)
    }
}

/// Result of appending one received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Received {
    /// Byte stored, no complete frame yet
    Pending,
    /// Byte was a line feed; a frame is ready for the dispatch loop
    FrameReady,
    /// Buffer was full; it restarted at index 0 and the partial frame was lost
    ///
    /// Reported even when the byte was a line feed; check
    /// [`LineReceiver::is_frame_ready`] for readiness.
    Overflowed,
}

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: AtomicU8 = AtomicU8::new(0);

/// Bounded receive buffer shared between the serial interrupt and the
/// dispatch loop
///
/// The interrupt side only calls [`push`](Self::push). The dispatch loop
/// takes a snapshot with [`take_frame`](Self::take_frame) and releases the
/// buffer with [`reset`](Self::reset) once the command has been handled.
#[derive(Debug)]
pub struct LineReceiver {
    buffer: [AtomicU8; FRAME_CAPACITY],
    len: AtomicU8,
    ready: AtomicBool,
    overflows: AtomicU16,
}

impl Default for LineReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReceiver {
    /// Create an empty receiver
    pub const fn new() -> Self {
        Self {
            buffer: [EMPTY_SLOT; FRAME_CAPACITY],
            len: AtomicU8::new(0),
            ready: AtomicBool::new(false),
            overflows: AtomicU16::new(0),
        }
    }

    /// Append a received byte (interrupt context)
    ///
    /// Readiness always reflects whether the most recently appended byte is
    /// a line feed.
    pub fn push(&self, byte: u8) -> Received {
        let mut index = self.len.load(Ordering::Acquire) as usize;
        let mut outcome = Received::Pending;

        if index >= FRAME_CAPACITY {
            index = 0;
            self.overflows.fetch_add(1, Ordering::Relaxed);
            outcome = Received::Overflowed;
        }

        self.buffer[index].store(byte, Ordering::Relaxed);
        self.len.store((index + 1) as u8, Ordering::Release);

        let terminated = byte == LINE_FEED;
        self.ready.store(terminated, Ordering::Release);
        match outcome {
            Received::Pending if terminated => Received::FrameReady,
            outcome => outcome,
        }
    }

    /// Check if a terminated frame is waiting
    pub fn is_frame_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Take a snapshot of the pending frame, clearing the ready flag
    ///
    /// Returns `None` if no frame is ready or the buffer no longer ends in a
    /// terminator by the time it is read.
    pub fn take_frame(&self) -> Option<CommandFrame> {
        if !self.ready.swap(false, Ordering::AcqRel) {
            return None;
        }

        let len = (self.len.load(Ordering::Acquire) as usize).min(FRAME_CAPACITY);
        let mut bytes = Vec::new();
        for slot in &self.buffer[..len] {
            // Cannot fail: len is clamped to capacity
            let _ = bytes.push(slot.load(Ordering::Relaxed));
        }

        if bytes.last() != Some(&LINE_FEED) {
            return None;
        }
        Some(CommandFrame { bytes })
    }

    /// Release the buffer so the next frame starts at index 0
    pub fn reset(&self) {
        self.len.store(0, Ordering::Release);
        self.ready.store(false, Ordering::Release);
    }

    /// Number of bytes currently buffered
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire) as usize
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times the buffer wrapped and discarded a partial frame
    pub fn overflow_count(&self) -> u16 {
        self.overflows.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn feed(receiver: &LineReceiver, bytes: &[u8]) -> Received {
        let mut last = Received::Pending;
        for &byte in bytes {
            last = receiver.push(byte);
        }
        last
    }

    #[test]
    fn test_frame_ready_on_line_feed() {
        let receiver = LineReceiver::new();
        assert_eq!(feed(&receiver, b"SET 12.30.45"), Received::Pending);
        assert!(!receiver.is_frame_ready());

        assert_eq!(receiver.push(LINE_FEED), Received::FrameReady);
        assert!(receiver.is_frame_ready());

        let frame = receiver.take_frame().unwrap();
        assert_eq!(frame.as_bytes(), b"SET 12.30.45\n");
        assert_eq!(frame.body(), b"SET 12.30.45");
        assert!(!receiver.is_frame_ready());
    }

    #[test]
    fn test_body_strips_carriage_return() {
        let frame = CommandFrame::from_bytes(b"GET\r\n").unwrap();
        assert_eq!(frame.body(), b"GET");

        // Only one CR is part of the terminator
        let frame = CommandFrame::from_bytes(b"G\r\r\n").unwrap();
        assert_eq!(frame.body(), b"G\r");
    }

    #[test]
    fn test_full_crlf_set_frame_fits() {
        let receiver = LineReceiver::new();
        assert_eq!(feed(&receiver, b"SET 12.30.45\r\n"), Received::FrameReady);
        assert_eq!(receiver.len(), FRAME_CAPACITY);
        assert_eq!(receiver.overflow_count(), 0);
    }

    #[test]
    fn test_overflow_restarts_at_zero() {
        let receiver = LineReceiver::new();
        assert_eq!(feed(&receiver, b"ABCDEFGHIJKLMN"), Received::Pending);
        assert_eq!(receiver.len(), FRAME_CAPACITY);

        assert_eq!(receiver.push(b'G'), Received::Overflowed);
        assert_eq!(receiver.len(), 1);
        assert_eq!(receiver.overflow_count(), 1);

        assert_eq!(feed(&receiver, b"ET\n"), Received::FrameReady);
        assert_eq!(receiver.take_frame().unwrap().body(), b"GET");
    }

    #[test]
    fn test_overflow_on_line_feed_still_reported() {
        let receiver = LineReceiver::new();
        feed(&receiver, b"ABCDEFGHIJKLMN");

        assert_eq!(receiver.push(LINE_FEED), Received::Overflowed);
        assert_eq!(receiver.overflow_count(), 1);
        assert!(receiver.is_frame_ready());
        assert_eq!(receiver.take_frame().unwrap().body(), b"");
    }

    #[test]
    fn test_later_byte_withdraws_readiness() {
        let receiver = LineReceiver::new();
        feed(&receiver, b"GET\n");
        assert!(receiver.is_frame_ready());

        receiver.push(b'X');
        assert!(!receiver.is_frame_ready());
        assert!(receiver.take_frame().is_none());
    }

    #[test]
    fn test_reset_discards_buffer() {
        let receiver = LineReceiver::new();
        feed(&receiver, b"EDIT\n");
        let _ = receiver.take_frame();
        receiver.reset();

        assert!(receiver.is_empty());
        assert!(receiver.take_frame().is_none());
    }

    #[test]
    fn test_frame_from_bytes_errors() {
        assert_eq!(CommandFrame::from_bytes(b"GET"), Err(FrameError::Unterminated));
        assert_eq!(
            CommandFrame::from_bytes(b"SET 12.30.45\r\r\n"),
            Err(FrameError::TooLong)
        );
    }

    proptest! {
        #[test]
        fn prop_len_bounded_and_ready_tracks_last_byte(
            bytes in proptest::collection::vec(any::<u8>(), 1..64)
        ) {
            let receiver = LineReceiver::new();
            for &byte in &bytes {
                receiver.push(byte);
                prop_assert!(receiver.len() >= 1);
                prop_assert!(receiver.len() <= FRAME_CAPACITY);
                prop_assert_eq!(receiver.is_frame_ready(), byte == LINE_FEED);
            }
        }
    }
}
