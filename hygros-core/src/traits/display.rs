//! Reading display trait

use hygros_hal::BusFault;

use super::sensor::Reading;
use crate::config::DisplayConfig;

/// A display that shows one temperature/humidity pair
///
/// Writes are fire-and-forget: the methods return nothing. Drivers latch
/// the first transport fault instead, and the poller collects it with
/// [`take_fault`](Self::take_fault) so it can be reported.
pub trait ReadingDisplay {
    /// Bring the display into its operating configuration
    fn configure(&mut self, config: &DisplayConfig);

    /// Render a reading, replacing whatever was shown before
    fn show(&mut self, reading: &Reading);

    /// Return and clear the first fault since the last call
    fn take_fault(&mut self) -> Option<BusFault>;
}

impl<D: ReadingDisplay + ?Sized> ReadingDisplay for &mut D {
    fn configure(&mut self, config: &DisplayConfig) {
        (**self).configure(config)
    }

    fn show(&mut self, reading: &Reading) {
        (**self).show(reading)
    }

    fn take_fault(&mut self) -> Option<BusFault> {
        (**self).take_fault()
    }
}
