//! Segclock Serial Command Protocol
//!
//! This crate defines the ASCII command line spoken over the clock's serial
//! port. There is no flow control, no echo and no handshake.
//!
//! # Protocol Overview
//!
//! Commands are terminator-delimited lines, never length-prefixed:
//! ```text
//! ┌──────────────────────────┬──────┬────┐
//! │ BODY                     │ [CR] │ LF │
//! │ keyword [fields], ≤ 12B  │ opt. │    │
//! └──────────────────────────┴──────┴────┘
//! ```
//!
//! Keywords are case-insensitive and may be abbreviated to any prefix:
//!
//! - `SET hh.mm.ss` (`S`, `SE`, `SET`) - set the time
//! - `GET` (`G`, `GE`, `GET`) - reply with the displayed time
//! - `EDIT` (`E` .. `EDIT`) - enter interactive edit mode
//!
//! The reply to `GET` is `HH.MM.SS` followed by CR LF.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod reply;

pub use command::Command;
pub use frame::{CommandFrame, FrameError, LineReceiver, Received, FRAME_CAPACITY, LINE_FEED};
pub use reply::TimeReply;
