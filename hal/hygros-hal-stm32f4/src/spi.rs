//! SPI configuration for STM32F4
//!
//! The display bus is a TX-only embassy `Spi`, which already implements
//! `embedded_hal::spi::SpiBus`; the firmware wraps it in
//! `hygros_hal::eh::EhSpi`. This module only translates the configuration.

use embassy_stm32::spi::{Config, MODE_0, MODE_1, MODE_2, MODE_3};
use embassy_stm32::time::Hertz;
use hygros_hal::spi::{Mode, SpiConfig};

/// Build an embassy SPI configuration
pub fn config(cfg: &SpiConfig) -> Config {
    let mut config = Config::default();
    config.frequency = Hertz(cfg.frequency);
    config.mode = match cfg.mode {
        Mode::Mode0 => MODE_0,
        Mode::Mode1 => MODE_1,
        Mode::Mode2 => MODE_2,
        Mode::Mode3 => MODE_3,
    };
    config
}
