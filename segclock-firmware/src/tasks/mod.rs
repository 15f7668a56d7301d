//! Interrupt-priority tasks
//!
//! Both run on the high-priority interrupt executor and preempt the
//! dispatch loop. They only append data or raise flags in
//! [`SHARED`](crate::shared::SHARED).

pub mod serial_rx;
pub mod tick;

pub use serial_rx::serial_rx_task;
pub use tick::tick_task;
