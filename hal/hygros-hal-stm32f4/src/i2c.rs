//! I2C bus driver for STM32F4
//!
//! Provides the sensor bus. Errors keep embassy's detail so they can be
//! logged, and collapse to a [`BusFault`] for status reporting.

use embassy_stm32::i2c::{Config, Error as I2cError, I2c, Master};
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;
use hygros_hal::i2c::I2cConfig;
use hygros_hal::{BusFault, I2cBus};

/// Build an embassy I2C configuration
pub fn config(cfg: &I2cConfig) -> Config {
    let mut config = Config::default();
    config.frequency = Hertz(cfg.frequency);
    config
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Timeout
    Timeout,
    /// CRC error
    Crc,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<I2cError> for I2cBusError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Bus => I2cBusError::Bus,
            I2cError::Arbitration => I2cBusError::ArbitrationLost,
            I2cError::Nack => I2cBusError::Nack,
            I2cError::Timeout => I2cBusError::Timeout,
            I2cError::Crc => I2cBusError::Crc,
            I2cError::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

impl From<I2cBusError> for BusFault {
    fn from(e: I2cBusError) -> Self {
        match e {
            I2cBusError::Timeout => BusFault::Timeout,
            I2cBusError::ArbitrationLost => BusFault::Busy,
            _ => BusFault::Error,
        }
    }
}

/// Blocking I2C master
pub struct Stm32I2c<'d> {
    bus: I2c<'d, Blocking, Master>,
}

impl<'d> Stm32I2c<'d> {
    pub fn new(bus: I2c<'d, Blocking, Master>) -> Self {
        Self { bus }
    }
}

impl I2cBus for Stm32I2c<'_> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.blocking_write(address, data).map_err(Into::into)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.bus.blocking_read(address, buf).map_err(Into::into)
    }
}
