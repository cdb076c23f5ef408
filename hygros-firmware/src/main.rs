//! Hygros - Climate Display Firmware
//!
//! Main firmware binary for STM32F4 Nucleo boards. Polls an AHT10
//! temperature/humidity sensor, shows the values on a MAX7219 7-segment
//! module and prints a status line per event on the ST-LINK virtual COM
//! port.
//!
//! Named after the Greek "hygros" (ὑγρός) meaning "moist".
//!
//! # Wiring (Nucleo-F411RE)
//!
//! | Signal          | Pin  | Peripheral |
//! |-----------------|------|------------|
//! | AHT10 SCL       | PB8  | I2C1       |
//! | AHT10 SDA       | PB9  | I2C1       |
//! | MAX7219 CLK     | PB3  | SPI1       |
//! | MAX7219 DIN     | PB5  | SPI1       |
//! | MAX7219 LOAD    | PB4  | GPIO       |
//! | Heartbeat (LD2) | PA5  | GPIO       |
//! | Console TX      | PA2  | USART2     |

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::spi::Spi;
use embassy_stm32::usart::UartTx;
use {defmt_rtt as _, panic_probe as _};

use hygros_core::Poller;
use hygros_drivers::{Aht10, Max7219};
use hygros_hal::eh::{EhPin, EhSpi};
use hygros_hal::i2c::I2cConfig;
use hygros_hal::spi::SpiConfig;
use hygros_hal::uart::UartConfig;
use hygros_hal_stm32f4::{i2c, spi, uart};
use hygros_hal_stm32f4::{EmbassyClock, Stm32I2c, Stm32Output, Stm32UartTx};

// CONFIG, I2C_FREQUENCY, CONSOLE_BAUDRATE
include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Hygros firmware starting...");

    if let Err(e) = CONFIG.validate() {
        defmt::panic!("invalid configuration: {}", e);
    }

    let p = embassy_stm32::init(Default::default());
    let clock = EmbassyClock;

    // Sensor
    let i2c_config = i2c::config(&I2cConfig {
        frequency: I2C_FREQUENCY,
    });
    let i2c_bus = I2c::new_blocking(p.I2C1, p.PB8, p.PB9, i2c_config);
    let sensor = Aht10::new(Stm32I2c::new(i2c_bus), CONFIG.sensor.address);

    // Display
    let spi_bus = Spi::new_blocking_txonly(p.SPI1, p.PB3, p.PB5, spi::config(&SpiConfig::default()));
    let load = EhPin::new(Output::new(p.PB4, Level::Low, Speed::VeryHigh), false);
    let display = Max7219::new(EhSpi(spi_bus), load);

    // Heartbeat
    let led = Stm32Output::new(Output::new(p.PA5, Level::Low, Speed::Low));

    // Status console
    let uart_config = uart::config(&UartConfig {
        baudrate: CONSOLE_BAUDRATE,
        ..Default::default()
    });
    let console = Stm32UartTx::new(unwrap!(UartTx::new_blocking(p.USART2, p.PA2, uart_config)));

    info!(
        "Polling every {} ms, sensor at {=u8:#x}",
        CONFIG.poll.interval_ms, CONFIG.sensor.address
    );

    let mut poller = Poller::new(sensor, display, led, console, &CONFIG);
    loop {
        poller.poll_clock(&clock);
    }
}
