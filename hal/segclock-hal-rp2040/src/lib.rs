//! RP2040-specific HAL for the wall clock firmware
//!
//! This crate provides RP2040 implementations of the shared `segclock-hal`
//! port traits:
//!
//! - Segment bus, digit strobes and display enable over GPIO
//! - Strobe-scanned key line and the two-key matrix register
//! - HD44780 character LCD on a 4-bit bus with busy-flag polling
//! - Buffered UART transmit and UART configuration mapping

#![no_std]

pub mod display;
pub mod keypad;
pub mod lcd;
pub mod uart;

// Re-export shared traits from segclock-hal for convenience
pub use segclock_hal::{CharacterLcd, KeyLine, KeyMatrix, SegmentDisplay, SerialTx};
