//! Compile-time configuration
//!
//! The clock keeps no persisted settings; everything here is fixed at build
//! time and reinitialized at power-on.

/// Hardware timer ticks per second
pub const TICKS_PER_SECOND: u16 = 1200;

/// Number of multiplexed digit positions
pub const DIGIT_COUNT: usize = 6;

/// Number of entries kept in the command history
pub const HISTORY_CAPACITY: usize = 6;

/// Characters per history line (one LCD row)
pub const HISTORY_LINE_LEN: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick rate of zero would never advance the clock
    ZeroTickRate,
    /// Odd tick rate has no exact blink half-period
    OddTickRate,
}

/// Tick scheduler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickConfig {
    /// Timer ticks that make up one second
    pub ticks_per_second: u16,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl TickConfig {
    /// Tick count at which edited digits switch from lit to blanked
    pub const fn blink_threshold(&self) -> u16 {
        self.ticks_per_second / 2
    }

    /// Offset of tick `n` from the first deadline, in timer counts
    ///
    /// Each deadline is rounded down from the exact time, so individual
    /// periods differ by at most one count but the error never accumulates.
    pub const fn tick_offset(&self, n: u64, timer_hz: u64) -> u64 {
        n * timer_hz / self.ticks_per_second as u64
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.ticks_per_second % 2 != 0 {
            return Err(ConfigError::OddTickRate);
        }
        Ok(())
    }
}
