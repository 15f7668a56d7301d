//! Edit state definition
//!
//! The state decides which field Up/Down adjust, which digits blink and
//! whether automatic ticking is suspended.

use super::events::EditEvent;
use crate::clock::TimeField;

/// Edit states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditState {
    /// Normal running clock
    #[default]
    Off,
    /// Adjusting seconds
    EditSeconds,
    /// Adjusting minutes
    EditMinutes,
    /// Adjusting hours
    EditHours,
}

impl EditState {
    /// Field under edit, if any
    pub fn field(&self) -> Option<TimeField> {
        match self {
            EditState::Off => None,
            EditState::EditSeconds => Some(TimeField::Seconds),
            EditState::EditMinutes => Some(TimeField::Minutes),
            EditState::EditHours => Some(TimeField::Hours),
        }
    }

    /// Check if a field is being edited
    pub fn is_editing(&self) -> bool {
        !matches!(self, EditState::Off)
    }

    /// Check if automatic per-second ticking applies
    pub fn ticking_allowed(&self) -> bool {
        !self.is_editing()
    }

    /// Process an event and return the next state
    ///
    /// Up and Down never change the state; the controller applies them to
    /// the clock.
    pub fn transition(self, event: EditEvent) -> Self {
        use EditEvent::*;
        use EditState::*;

        match (self, event) {
            (Off, Enter) => EditSeconds,
            (_, Enter) => Off,

            (_, Esc) => Off,

            (EditSeconds, Left) => EditMinutes,
            (EditMinutes, Left) => EditHours,
            (EditHours, Left) => EditSeconds,

            (EditSeconds, Right) => EditHours,
            (EditHours, Right) => EditMinutes,
            (EditMinutes, Right) => EditSeconds,

            (state, _) => state,
        }
    }

    /// Compact encoding for sharing through an atomic
    pub const fn to_bits(self) -> u8 {
        match self {
            EditState::Off => 0,
            EditState::EditSeconds => 1,
            EditState::EditMinutes => 2,
            EditState::EditHours => 3,
        }
    }

    /// Decode [`to_bits`](Self::to_bits); unknown values read as `Off`
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => EditState::EditSeconds,
            2 => EditState::EditMinutes,
            3 => EditState::EditHours,
            _ => EditState::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDITING: [EditState; 3] = [
        EditState::EditSeconds,
        EditState::EditMinutes,
        EditState::EditHours,
    ];

    #[test]
    fn test_enter_toggles() {
        assert_eq!(EditState::Off.transition(EditEvent::Enter), EditState::EditSeconds);
        for state in EDITING {
            assert_eq!(state.transition(EditEvent::Enter), EditState::Off);
        }
    }

    #[test]
    fn test_esc_returns_off() {
        assert_eq!(EditState::Off.transition(EditEvent::Esc), EditState::Off);
        for state in EDITING {
            assert_eq!(state.transition(EditEvent::Esc), EditState::Off);
        }
    }

    #[test]
    fn test_left_cycle() {
        let mut state = EditState::EditSeconds;
        state = state.transition(EditEvent::Left);
        assert_eq!(state, EditState::EditMinutes);
        state = state.transition(EditEvent::Left);
        assert_eq!(state, EditState::EditHours);
        state = state.transition(EditEvent::Left);
        assert_eq!(state, EditState::EditSeconds);
    }

    #[test]
    fn test_rotation_inverse() {
        for state in EDITING {
            let there = state.transition(EditEvent::Left).transition(EditEvent::Right);
            let back = state.transition(EditEvent::Right).transition(EditEvent::Left);
            assert_eq!(there, state);
            assert_eq!(back, state);
        }
    }

    #[test]
    fn test_off_ignores_navigation() {
        for event in [EditEvent::Left, EditEvent::Right, EditEvent::Up, EditEvent::Down] {
            assert_eq!(EditState::Off.transition(event), EditState::Off);
        }
    }

    #[test]
    fn test_bits_roundtrip() {
        for state in [EditState::Off, EditState::EditSeconds, EditState::EditMinutes, EditState::EditHours] {
            assert_eq!(EditState::from_bits(state.to_bits()), state);
        }
        assert_eq!(EditState::from_bits(0xFF), EditState::Off);
    }
}
