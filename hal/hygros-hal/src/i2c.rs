//! I2C sensor bus
//!
//! The climate sensor only needs two transfers: a command write and a
//! reply read, issued at different times by the poller. No combined
//! write-then-read transaction is required.

use crate::outcome::BusFault;

/// Blocking I2C master with 7-bit addressing
pub trait I2cBus {
    /// Transport error, classified for the status console
    type Error: Into<BusFault> + Copy;

    /// Send `data` to the device at `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` from the device at `address`
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Bus clock settings handed to the chip HAL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cConfig {
    /// SCL frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // AHT10 is rated for fast mode but standard mode is plenty
        Self { frequency: 100_000 }
    }
}
