//! Edit-mode state machine
//!
//! Keypad and serial input drive an explicit four-state machine. The clock
//! only ticks automatically while the machine is `Off`.

pub mod events;
pub mod machine;

pub use events::EditEvent;
pub use machine::EditState;
