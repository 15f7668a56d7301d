//! Process-wide shared state
//!
//! The only state reachable from both the interrupt executor and the
//! thread-mode dispatch loop. Everything in it is atomic.

use segclock_core::shared::SharedState;

pub static SHARED: SharedState = SharedState::new();
