//! Adapters from embedded-hal 1.0 implementations
//!
//! Most chip HALs already implement the embedded-hal traits. Wrapping a
//! peripheral in one of these adapters makes it usable wherever a
//! `hygros-hal` trait is expected, at the cost of coarser error detail
//! (embedded-hal has no timeout kind).

use core::convert::Infallible;

use embedded_hal::digital;
use embedded_hal::spi;

use crate::outcome::BusFault;

/// Map an embedded-hal SPI error kind to a bus fault
pub fn spi_fault(kind: spi::ErrorKind) -> BusFault {
    match kind {
        spi::ErrorKind::ModeFault => BusFault::Busy,
        _ => BusFault::Error,
    }
}

/// SPI master from an `embedded_hal::spi::SpiBus`
pub struct EhSpi<T>(pub T);

impl<T: spi::SpiBus<u8>> crate::SpiBus for EhSpi<T> {
    type Error = BusFault;

    fn write(&mut self, data: &[u8]) -> Result<(), BusFault> {
        let kind = |e: T::Error| spi_fault(spi::Error::kind(&e));
        self.0.write(data).map_err(kind)?;
        self.0.flush().map_err(kind)
    }
}

/// Output pin from an `embedded_hal::digital::OutputPin`
///
/// The commanded level is tracked here so `is_set_high` works without
/// `StatefulOutputPin`. Only pins that cannot fail are accepted, so the
/// tracked level always matches the line.
pub struct EhPin<T> {
    pin: T,
    high: bool,
}

fn settle(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

impl<T: digital::OutputPin<Error = Infallible>> EhPin<T> {
    /// Wrap a pin, driving it to `high` so the tracked level is accurate
    pub fn new(mut pin: T, high: bool) -> Self {
        settle(if high { pin.set_high() } else { pin.set_low() });
        Self { pin, high }
    }
}

impl<T: digital::OutputPin<Error = Infallible>> crate::OutputPin for EhPin<T> {
    fn set_high(&mut self) {
        settle(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        settle(self.pin.set_low());
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
