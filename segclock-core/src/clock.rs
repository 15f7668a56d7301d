//! Clock time and the state the edit controller mutates
//!
//! [`ClockState`] keeps the canonical time, the snapshot taken when edit mode
//! starts, and the display digits. Every mutation goes through it so the
//! digits can never drift from the time.

use crate::display::DisplayDigits;

/// Errors for out-of-range time fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour above 23
    HourOutOfRange(u8),
    /// Minute above 59
    MinuteOutOfRange(u8),
    /// Second above 59
    SecondOutOfRange(u8),
}

/// One of the three editable time fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    Seconds,
    Minutes,
    Hours,
}

impl TimeField {
    /// Number of values the field cycles through
    pub const fn modulus(self) -> u8 {
        match self {
            TimeField::Seconds | TimeField::Minutes => 60,
            TimeField::Hours => 24,
        }
    }

    /// Display position of the field's ones digit; the tens digit follows it
    pub const fn ones_position(self) -> usize {
        match self {
            TimeField::Seconds => 0,
            TimeField::Minutes => 2,
            TimeField::Hours => 4,
        }
    }

    /// Check if a display position belongs to this field
    pub const fn contains_position(self, position: usize) -> bool {
        let ones = self.ones_position();
        position == ones || position == ones + 1
    }
}

/// Direction of a single-step field adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Up,
    Down,
}

/// Wall-clock time of day, 24-hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// 00:00:00, the power-on time
    pub const MIDNIGHT: ClockTime = ClockTime {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a time, rejecting out-of-range fields
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour >= TimeField::Hours.modulus() {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute >= TimeField::Minutes.modulus() {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        if second >= TimeField::Seconds.modulus() {
            return Err(TimeError::SecondOutOfRange(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Value of one field
    pub fn field(&self, field: TimeField) -> u8 {
        match field {
            TimeField::Seconds => self.second,
            TimeField::Minutes => self.minute,
            TimeField::Hours => self.hour,
        }
    }

    fn field_mut(&mut self, field: TimeField) -> &mut u8 {
        match field {
            TimeField::Seconds => &mut self.second,
            TimeField::Minutes => &mut self.minute,
            TimeField::Hours => &mut self.hour,
        }
    }

    /// Advance by one second with carry
    ///
    /// Returns the most significant field that changed.
    pub fn advance_second(&mut self) -> TimeField {
        self.second += 1;
        if self.second < 60 {
            return TimeField::Seconds;
        }
        self.second = 0;
        self.minute += 1;
        if self.minute < 60 {
            return TimeField::Minutes;
        }
        self.minute = 0;
        self.hour += 1;
        if self.hour == 24 {
            self.hour = 0;
        }
        TimeField::Hours
    }

    /// Step one field by one, wrapping within the field and never carrying
    pub fn step(&mut self, field: TimeField, step: Step) -> u8 {
        let modulus = field.modulus();
        let value = self.field_mut(field);
        *value = match step {
            Step::Up if *value + 1 >= modulus => 0,
            Step::Up => *value + 1,
            Step::Down if *value == 0 => modulus - 1,
            Step::Down => *value - 1,
        };
        *value
    }
}

/// Canonical clock state: time, cancel snapshot and display digits
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    time: ClockTime,
    saved: ClockTime,
    digits: DisplayDigits,
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(ClockTime::MIDNIGHT)
    }
}

impl ClockState {
    /// Create a state showing `time`
    pub fn new(time: ClockTime) -> Self {
        Self {
            time,
            saved: time,
            digits: DisplayDigits::from_time(&time),
        }
    }

    /// Current time
    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Digits derived from the current time
    pub fn digits(&self) -> &DisplayDigits {
        &self.digits
    }

    /// Snapshot taken on the last entry into edit mode
    pub fn saved(&self) -> ClockTime {
        self.saved
    }

    /// Replace the time and recompute every digit
    pub fn set_time(&mut self, time: ClockTime) {
        self.time = time;
        self.digits = DisplayDigits::from_time(&time);
    }

    /// Advance one second, recomputing only the digits that changed
    pub fn tick(&mut self) -> TimeField {
        let carried = self.time.advance_second();
        self.digits.set_field(TimeField::Seconds, self.time.second);
        if carried != TimeField::Seconds {
            self.digits.set_field(TimeField::Minutes, self.time.minute);
        }
        if carried == TimeField::Hours {
            self.digits.set_field(TimeField::Hours, self.time.hour);
        }
        carried
    }

    /// Save the current time for a later cancel
    pub fn snapshot(&mut self) {
        self.saved = self.time;
    }

    /// Restore the saved time and recompute every digit
    pub fn restore(&mut self) {
        self.set_time(self.saved);
    }

    /// Step one field, recomputing only that field's digits
    pub fn step_field(&mut self, field: TimeField, step: Step) -> u8 {
        let value = self.time.step(field, step);
        self.digits.set_field(field, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seconds_of_day(time: ClockTime) -> u32 {
        time.hour() as u32 * 3600 + time.minute() as u32 * 60 + time.second() as u32
    }

    fn any_time() -> impl Strategy<Value = ClockTime> {
        (0u8..24, 0u8..60, 0u8..60).prop_map(|(h, m, s)| ClockTime::new(h, m, s).unwrap())
    }

    #[test]
    fn test_new_validates_ranges() {
        assert!(ClockTime::new(23, 59, 59).is_ok());
        assert_eq!(ClockTime::new(24, 0, 0), Err(TimeError::HourOutOfRange(24)));
        assert_eq!(ClockTime::new(0, 60, 0), Err(TimeError::MinuteOutOfRange(60)));
        assert_eq!(ClockTime::new(0, 0, 60), Err(TimeError::SecondOutOfRange(60)));
    }

    #[test]
    fn test_advance_carries() {
        let mut t = ClockTime::new(12, 30, 45).unwrap();
        assert_eq!(t.advance_second(), TimeField::Seconds);
        assert_eq!(t, ClockTime::new(12, 30, 46).unwrap());

        let mut t = ClockTime::new(12, 30, 59).unwrap();
        assert_eq!(t.advance_second(), TimeField::Minutes);
        assert_eq!(t, ClockTime::new(12, 31, 0).unwrap());

        let mut t = ClockTime::new(23, 59, 59).unwrap();
        assert_eq!(t.advance_second(), TimeField::Hours);
        assert_eq!(t, ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_step_wraps_without_carry() {
        let mut t = ClockTime::new(23, 59, 0).unwrap();
        assert_eq!(t.step(TimeField::Hours, Step::Up), 0);
        assert_eq!(t.step(TimeField::Minutes, Step::Up), 0);
        assert_eq!(t.step(TimeField::Seconds, Step::Down), 59);
        assert_eq!(t, ClockTime::new(0, 0, 59).unwrap());

        assert_eq!(t.step(TimeField::Hours, Step::Down), 23);
    }

    #[test]
    fn test_state_tick_updates_digits() {
        let mut state = ClockState::new(ClockTime::new(9, 59, 59).unwrap());
        assert_eq!(state.tick(), TimeField::Hours);
        assert_eq!(state.digits().as_array(), &[0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut state = ClockState::new(ClockTime::new(8, 15, 0).unwrap());
        state.snapshot();
        state.step_field(TimeField::Minutes, Step::Down);
        assert_eq!(state.time(), ClockTime::new(8, 14, 0).unwrap());
        assert_eq!(state.saved(), ClockTime::new(8, 15, 0).unwrap());

        state.restore();
        assert_eq!(state.time(), ClockTime::new(8, 15, 0).unwrap());
        assert_eq!(state.digits(), &DisplayDigits::from_time(&state.time()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_full_day_returns_to_start(start in any_time()) {
            let mut state = ClockState::new(start);
            for _ in 0..86_400u32 {
                state.tick();
            }
            prop_assert_eq!(state.time(), start);
            prop_assert_eq!(state.digits(), &DisplayDigits::from_time(&start));
        }
    }

    proptest! {
        #[test]
        fn prop_tick_keeps_digits_in_sync(start in any_time(), ticks in 0u32..4000) {
            let mut state = ClockState::new(start);
            for _ in 0..ticks {
                state.tick();
            }
            prop_assert_eq!(state.digits(), &DisplayDigits::from_time(&state.time()));
            prop_assert_eq!(
                seconds_of_day(state.time()),
                (seconds_of_day(start) + ticks) % 86_400
            );
        }

        #[test]
        fn prop_step_up_down_inverse(start in any_time(), field_index in 0usize..3) {
            let field = [TimeField::Seconds, TimeField::Minutes, TimeField::Hours][field_index];
            let mut state = ClockState::new(start);
            state.step_field(field, Step::Up);
            state.step_field(field, Step::Down);
            prop_assert_eq!(state.time(), start);
        }
    }
}
