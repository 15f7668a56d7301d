//! Logging for dispatch loop activity

use defmt::*;
use segclock_core::dispatcher::Activity;
use segclock_core::interpreter::CommandOutcome;

/// Log one activity record at a level matching its importance
pub fn log(activity: &Activity) {
    match activity {
        Activity::SecondElapsed(time) => {
            trace!("Time {=u8}:{=u8}:{=u8}", time.hour(), time.minute(), time.second());
        }
        Activity::TickSuspended => trace!("Second elapsed while editing"),
        Activity::Edit { key, action } => debug!("Key {:?}: {:?}", key, action),
        Activity::HistoryBrowsed { key, index } => {
            debug!("History {:?} -> slot {}", key, index);
        }
        Activity::Command { command, result } => match result {
            Ok(CommandOutcome::TimeSet(time)) => info!("{:?}: time set to {:?}", command, time),
            Ok(outcome) => info!("{:?}: {:?}", command, outcome),
            Err(e) => warn!("{:?} rejected: {:?}", command, e),
        },
        Activity::ReplyByteSent(byte) => trace!("TX: {=u8:#x}", *byte),
        Activity::TransmitFailed => warn!("Reply byte dropped by UART"),
    }
}
