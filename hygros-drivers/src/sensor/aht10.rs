//! AHT10 temperature/humidity sensor
//!
//! The sensor answers a 3-byte trigger with a 6-byte reply once the
//! conversion is done. The driver only moves bytes and decodes them; the
//! poller decides when to trigger and when the reply is ready.
//!
//! Reply layout:
//!
//! ```text
//! byte 0      status (busy 0x80, calibrated 0x08)
//! byte 1      humidity  bits 19..12
//! byte 2      humidity  bits 11..4
//! byte 3 hi   humidity  bits 3..0
//! byte 3 lo   temperature bits 19..16
//! byte 4      temperature bits 15..8
//! byte 5      temperature bits 7..0
//! ```

use hygros_core::traits::{ClimateSensor, Reading};
use hygros_hal::{BusFault, I2cBus};

/// Factory-set 7-bit bus address
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// Initialization / calibration command
pub const INIT_COMMAND: [u8; 3] = [0xE1, 0x08, 0x00];

/// Measurement trigger command
pub const MEASURE_COMMAND: [u8; 3] = [0xAC, 0x33, 0x00];

/// Reply length
pub const SAMPLE_LEN: usize = 6;

/// One raw reply
pub type RawSample = [u8; SAMPLE_LEN];

/// %RH per raw humidity count
pub const HUMIDITY_SCALE: f32 = 0.000095;

/// °C per raw temperature count
pub const TEMPERATURE_SCALE: f32 = 0.000191;

/// °C subtracted after scaling
pub const TEMPERATURE_OFFSET: f32 = 50.0;

/// Highest humidity reported; keeps the whole part at two digits
pub const MAX_HUMIDITY: f32 = 99.9;

/// Status byte (first byte of every reply)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u8);

impl Status {
    const BUSY: u8 = 0x80;
    const CALIBRATED: u8 = 0x08;

    /// Conversion still running when the reply was read
    pub fn is_busy(self) -> bool {
        self.0 & Self::BUSY != 0
    }

    /// Calibration coefficients loaded
    pub fn is_calibrated(self) -> bool {
        self.0 & Self::CALIBRATED != 0
    }
}

/// 20-bit humidity count
pub fn humidity_raw(raw: &RawSample) -> u32 {
    (raw[1] as u32) << 12 | (raw[2] as u32) << 4 | (raw[3] as u32) >> 4
}

/// 20-bit temperature count
pub fn temperature_raw(raw: &RawSample) -> u32 {
    ((raw[3] & 0x0F) as u32) << 16 | (raw[4] as u32) << 8 | raw[5] as u32
}

/// Convert a raw reply into physical values
///
/// Humidity is clamped to `0.0..=MAX_HUMIDITY`. The status byte is ignored.
pub fn decode(raw: &RawSample) -> Reading {
    let humidity = (humidity_raw(raw) as f32 * HUMIDITY_SCALE).clamp(0.0, MAX_HUMIDITY);
    let temperature = temperature_raw(raw) as f32 * TEMPERATURE_SCALE - TEMPERATURE_OFFSET;
    Reading::new(temperature, humidity)
}

/// AHT10 on an I2C bus
pub struct Aht10<I2C> {
    i2c: I2C,
    address: u8,
    /// Command sent by `trigger`; starts as the init command
    command: [u8; 3],
    last_status: Option<Status>,
}

impl<I2C: I2cBus> Aht10<I2C> {
    /// Create a driver for a sensor at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            command: INIT_COMMAND,
            last_status: None,
        }
    }

    /// Status byte of the last successful read
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Read one raw reply
    pub fn read_raw(&mut self) -> Result<RawSample, BusFault> {
        let mut raw = [0u8; SAMPLE_LEN];
        self.i2c.read(self.address, &mut raw).map_err(Into::into)?;
        Ok(raw)
    }
}

impl<I2C: I2cBus> ClimateSensor for Aht10<I2C> {
    fn init(&mut self) -> Result<(), BusFault> {
        self.i2c
            .write(self.address, &INIT_COMMAND)
            .map_err(Into::into)
    }

    fn arm(&mut self) {
        self.command = MEASURE_COMMAND;
    }

    fn trigger(&mut self) -> Result<(), BusFault> {
        self.i2c.write(self.address, &self.command).map_err(Into::into)
    }

    fn fetch(&mut self) -> Result<Reading, BusFault> {
        let raw = self.read_raw()?;
        let status = Status(raw[0]);
        if status.is_busy() {
            warn!("AHT10 still busy, reply may be stale");
        }
        if !status.is_calibrated() {
            warn!("AHT10 reports uncalibrated");
        }
        self.last_status = Some(status);
        Ok(decode(&raw))
    }
}
