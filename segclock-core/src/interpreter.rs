//! Serial command interpreter
//!
//! Executes a parsed [`Command`] against the clock and the edit controller.
//! Failures never touch the clock; they only surface as an `ERR` history
//! line.

use segclock_protocol::{Command, TimeReply};

use crate::clock::{ClockState, ClockTime, TimeError};
use crate::edit::{EditAction, EditModeController};
use crate::history::Status;

/// Command failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// No grammar matched the line
    Unrecognized,
    /// SET fields out of range
    Validation(TimeError),
}

impl From<TimeError> for CommandError {
    fn from(err: TimeError) -> Self {
        CommandError::Validation(err)
    }
}

/// Successful command effects
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandOutcome {
    /// Clock set to a new time
    TimeSet(ClockTime),
    /// Reply queued with the displayed digits
    TimeQueried(TimeReply),
    /// Edit mode entered
    EditEntered,
    /// Already editing; nothing changed
    EditIgnored,
}

/// History status for an execution result
pub fn status_of(result: &Result<CommandOutcome, CommandError>) -> Status {
    match result {
        Ok(_) => Status::Ok,
        Err(_) => Status::Err,
    }
}

/// Run a command
pub fn execute(
    command: Command,
    clock: &mut ClockState,
    editor: &mut EditModeController,
) -> Result<CommandOutcome, CommandError> {
    match command {
        Command::SetTime {
            hour,
            minute,
            second,
        } => {
            let time = ClockTime::new(hour, minute, second)?;
            clock.set_time(time);
            Ok(CommandOutcome::TimeSet(time))
        }
        Command::GetTime => Ok(CommandOutcome::TimeQueried(TimeReply::new(
            clock.digits().as_array(),
        ))),
        Command::EnterEdit => match editor.enter_edit(clock) {
            EditAction::Entered => Ok(CommandOutcome::EditEntered),
            _ => Ok(CommandOutcome::EditIgnored),
        },
        Command::Invalid => Err(CommandError::Unrecognized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EditState;

    fn run(line: &[u8], clock: &mut ClockState, editor: &mut EditModeController) -> Result<CommandOutcome, CommandError> {
        execute(Command::parse(line), clock, editor)
    }

    #[test]
    fn test_set_time() {
        let mut clock = ClockState::default();
        let mut editor = EditModeController::new();

        let result = run(b"SET 12.30.45", &mut clock, &mut editor);
        assert_eq!(status_of(&result), Status::Ok);
        assert_eq!(clock.time(), ClockTime::new(12, 30, 45).unwrap());
        assert_eq!(clock.digits().as_array(), &[5, 4, 0, 3, 2, 1]);
    }

    #[test]
    fn test_set_out_of_range_leaves_clock() {
        let start = ClockTime::new(7, 7, 7).unwrap();
        let mut clock = ClockState::new(start);
        let mut editor = EditModeController::new();

        let result = run(b"SET 24.00.00", &mut clock, &mut editor);
        assert_eq!(
            result,
            Err(CommandError::Validation(TimeError::HourOutOfRange(24)))
        );
        assert_eq!(status_of(&result), Status::Err);
        assert_eq!(clock.time(), start);

        assert!(run(b"s 00.60.00", &mut clock, &mut editor).is_err());
        assert_eq!(clock.time(), start);
    }

    #[test]
    fn test_get_queues_reply() {
        let mut clock = ClockState::new(ClockTime::new(12, 30, 45).unwrap());
        let mut editor = EditModeController::new();

        let Ok(CommandOutcome::TimeQueried(reply)) = run(b"ge", &mut clock, &mut editor) else {
            panic!("GET did not produce a reply");
        };
        let wire: Vec<u8> = reply.collect();
        assert_eq!(wire, b"12.30.45\r\n");
    }

    #[test]
    fn test_edit_entry_and_guard() {
        let mut clock = ClockState::default();
        let mut editor = EditModeController::new();

        assert_eq!(run(b"EDIT", &mut clock, &mut editor), Ok(CommandOutcome::EditEntered));
        assert_eq!(editor.state(), EditState::EditSeconds);

        assert_eq!(run(b"E", &mut clock, &mut editor), Ok(CommandOutcome::EditIgnored));
        assert_eq!(editor.state(), EditState::EditSeconds);
    }

    #[test]
    fn test_unrecognized() {
        let mut clock = ClockState::default();
        let mut editor = EditModeController::new();
        let result = run(b"XYZ", &mut clock, &mut editor);
        assert_eq!(result, Err(CommandError::Unrecognized));
        assert_eq!(status_of(&result), Status::Err);
    }
}
