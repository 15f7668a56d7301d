//! Events that trigger edit state transitions

use crate::keypad::MuxKey;

/// Edit-mode events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditEvent {
    /// Start editing, or commit when already editing
    Enter,
    /// Cancel editing and restore the saved time
    Esc,
    /// Move to the next more significant field
    Left,
    /// Move to the next less significant field
    Right,
    /// Increment the edited field
    Up,
    /// Decrement the edited field
    Down,
}

impl From<MuxKey> for EditEvent {
    fn from(key: MuxKey) -> Self {
        match key {
            MuxKey::Enter => EditEvent::Enter,
            MuxKey::Esc => EditEvent::Esc,
            MuxKey::Left => EditEvent::Left,
            MuxKey::Right => EditEvent::Right,
            MuxKey::Up => EditEvent::Up,
            MuxKey::Down => EditEvent::Down,
        }
    }
}
