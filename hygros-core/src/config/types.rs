//! Configuration type definitions
//!
//! Board firmware fills these from `hygros.toml` at build time. Nothing is
//! stored at runtime.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest settle interval the AHT10 tolerates after a trigger
pub const MIN_INTERVAL_MS: u32 = 80;

/// Longest accepted settle interval (one minute)
pub const MAX_INTERVAL_MS: u32 = 60_000;

/// Highest MAX7219 intensity step
pub const MAX_INTENSITY: u8 = 0x0F;

/// Highest MAX7219 scan limit (all eight digits)
pub const MAX_SCAN_LIMIT: u8 = 7;

/// Reasons a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Interval outside `MIN_INTERVAL_MS..=MAX_INTERVAL_MS`
    IntervalOutOfRange,
    /// `read_attempts` must be at least 1
    NoReadAttempts,
    /// Intensity above `MAX_INTENSITY`
    IntensityOutOfRange,
    /// Scan limit above `MAX_SCAN_LIMIT`
    ScanLimitOutOfRange,
    /// Not a 7-bit address, or a reserved one
    InvalidAddress,
}

/// Polling loop timing and retry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollConfig {
    /// Settle interval (ms), used both after init and after every trigger
    pub interval_ms: u32,
    /// Consecutive failed reads tolerated before a fresh trigger is issued
    ///
    /// 1 means a failed read immediately goes back to issuing a command.
    pub read_attempts: u8,
}

impl PollConfig {
    pub const fn new() -> Self {
        Self {
            interval_ms: 1000,
            read_attempts: 1,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// LED controller settings written during `Init`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Brightness, 0 (dimmest) to 15
    pub intensity: u8,
    /// Index of the last scanned digit
    pub scan_limit: u8,
}

impl DisplayConfig {
    pub const fn new() -> Self {
        Self {
            intensity: 0x01,
            scan_limit: 0x07,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Sensor bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// 7-bit I2C address
    pub address: u8,
}

impl SensorConfig {
    pub const fn new() -> Self {
        Self { address: 0x38 }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub poll: PollConfig,
    pub display: DisplayConfig,
    pub sensor: SensorConfig,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            poll: PollConfig::new(),
            display: DisplayConfig::new(),
            sensor: SensorConfig::new(),
        }
    }

    /// Check every field against the hardware limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.poll.interval_ms) {
            return Err(ConfigError::IntervalOutOfRange);
        }
        if self.poll.read_attempts == 0 {
            return Err(ConfigError::NoReadAttempts);
        }
        if self.display.intensity > MAX_INTENSITY {
            return Err(ConfigError::IntensityOutOfRange);
        }
        if self.display.scan_limit > MAX_SCAN_LIMIT {
            return Err(ConfigError::ScanLimitOutOfRange);
        }
        // 0x00-0x07 and 0x78-0x7F are reserved I2C addresses
        if !(0x08..=0x77).contains(&self.sensor.address) {
            return Err(ConfigError::InvalidAddress);
        }
        Ok(())
    }
}
