//! Climate sensor trait and reading type

use hygros_hal::BusFault;

/// One decoded temperature/humidity sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent, never above 99.9
    pub humidity_pct: f32,
}

impl Reading {
    pub fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }
}

/// Trigger-then-read climate sensor
///
/// The poller owns the timing: it calls [`trigger`](Self::trigger), waits
/// out the settle interval, then calls [`fetch`](Self::fetch). Drivers must
/// not block waiting for the conversion themselves.
pub trait ClimateSensor {
    /// Send the power-on initialization command
    fn init(&mut self) -> Result<(), BusFault>;

    /// Switch from the init command to the measurement command
    ///
    /// Called once when the boot settle delay ends. Must be idempotent.
    fn arm(&mut self);

    /// Send the measurement command selected by [`arm`](Self::arm)
    fn trigger(&mut self) -> Result<(), BusFault>;

    /// Read and decode the reply to the last trigger
    fn fetch(&mut self) -> Result<Reading, BusFault>;
}

impl<S: ClimateSensor + ?Sized> ClimateSensor for &mut S {
    fn init(&mut self) -> Result<(), BusFault> {
        (**self).init()
    }

    fn arm(&mut self) {
        (**self).arm()
    }

    fn trigger(&mut self) -> Result<(), BusFault> {
        (**self).trigger()
    }

    fn fetch(&mut self) -> Result<Reading, BusFault> {
        (**self).fetch()
    }
}
