//! SPI bus abstractions
//!
//! The LED controller is write-only, so the display path only needs
//! [`SpiBus::write`]. Chip select is handled by a separate latch pin.

use crate::outcome::BusFault;

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error: Into<BusFault> + Copy;

    /// Write data without reading, blocking until shifted out
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// SPI configuration
#[derive(Debug, Clone, Copy)]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz, well under the MAX7219's 10 MHz limit
            mode: Mode::Mode0,
        }
    }
}

/// SPI mode (CPOL/CPHA pair)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suits_led_driver() {
        let cfg = SpiConfig::default();
        assert_eq!(cfg.mode, Mode::Mode0);
        assert!(cfg.frequency <= 10_000_000);
    }
}
