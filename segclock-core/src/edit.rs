//! Edit-mode controller
//!
//! Applies [`EditEvent`]s to the [`EditState`] machine and the clock. Enter
//! from `Off` snapshots the time, Esc restores it, Enter while editing keeps
//! whatever was edited.

use crate::clock::{ClockState, Step, TimeField};
use crate::state::{EditEvent, EditState};

/// Effect of one edit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditAction {
    /// Edit mode started on the seconds field
    Entered,
    /// Edited time kept, edit mode left
    Committed,
    /// Saved time restored, edit mode left
    Cancelled,
    /// Another field selected
    FieldChanged(TimeField),
    /// Field stepped to a new value
    Adjusted { field: TimeField, value: u8 },
    /// Event had no effect in the current state
    Ignored,
}

/// Owns the edit state and mutates the clock on its behalf
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditModeController {
    state: EditState,
}

impl EditModeController {
    pub const fn new() -> Self {
        Self {
            state: EditState::Off,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Handle one keypad event
    pub fn handle(&mut self, event: EditEvent, clock: &mut ClockState) -> EditAction {
        let current = self.state;
        let next = current.transition(event);

        let action = match (current.field(), event) {
            (None, EditEvent::Enter) => {
                clock.snapshot();
                EditAction::Entered
            }
            (Some(_), EditEvent::Enter) => EditAction::Committed,
            (Some(_), EditEvent::Esc) => {
                clock.restore();
                EditAction::Cancelled
            }
            (Some(_), EditEvent::Left | EditEvent::Right) => match next.field() {
                Some(field) => EditAction::FieldChanged(field),
                None => EditAction::Ignored,
            },
            (Some(field), EditEvent::Up) => EditAction::Adjusted {
                field,
                value: clock.step_field(field, Step::Up),
            },
            (Some(field), EditEvent::Down) => EditAction::Adjusted {
                field,
                value: clock.step_field(field, Step::Down),
            },
            (None, _) => EditAction::Ignored,
        };

        self.state = next;
        action
    }

    /// Enter edit mode on request from the serial line
    ///
    /// Same as pressing Enter from `Off`; does nothing while already editing.
    pub fn enter_edit(&mut self, clock: &mut ClockState) -> EditAction {
        if self.state.is_editing() {
            return EditAction::Ignored;
        }
        self.handle(EditEvent::Enter, clock)
    }
}
