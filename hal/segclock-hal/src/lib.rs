//! Segclock Hardware Abstraction Layer
//!
//! This crate defines the port capabilities the clock logic is written
//! against. Chip-specific crates implement them; tests implement them with
//! recording mocks. Nothing here touches a register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segclock-core (tick handler, dispatch) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ segclock-hal-     │
//!           │    rp2040         │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`display::SegmentDisplay`] - Digit strobe and segment latch
//! - [`keypad::KeyLine`], [`keypad::KeyMatrix`] - Raw keypad inputs
//! - [`lcd::CharacterLcd`] - Busy-flag character display
//! - [`uart::SerialTx`] - Byte-wise serial transmit

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod keypad;
pub mod lcd;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use display::SegmentDisplay;
pub use keypad::{KeyLine, KeyMatrix};
pub use lcd::CharacterLcd;
pub use uart::{SerialTx, UartConfig};
