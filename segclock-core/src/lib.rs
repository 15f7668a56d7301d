//! Board-agnostic clock engine for the wall clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Clock time arithmetic and display digit decomposition
//! - Display multiplexing with the edit-mode blink policy
//! - Edge detection for the strobe-scanned and matrix keypads
//! - Edit-mode state machine with cancel/commit semantics
//! - Serial command interpreter and command history log
//! - The interrupt/dispatch-loop event contract
//!
//! Work is split between two interrupt-side producers ([`tick::TickHandler`]
//! and the serial [`LineReceiver`](segclock_protocol::LineReceiver)) that only
//! append data or raise flags, and the [`dispatcher::Dispatcher`] that performs
//! every compound update from the main loop. [`shared::SharedState`] is the
//! contract between them.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod edit;
pub mod history;
pub mod interpreter;
pub mod keypad;
pub mod shared;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod mock;
