//! STM32F4-specific HAL for the Hygros firmware
//!
//! This crate wraps blocking embassy-stm32 peripherals so they implement
//! the `hygros-hal` traits. It supports:
//!
//! - STM32F411RE (Nucleo-F411)
//! - STM32F401RE (Nucleo-F401)
//!
//! # Features
//!
//! - `stm32f411re` - Enable support for STM32F411RE
//! - `stm32f401re` - Enable support for STM32F401RE
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! The firmware creates the embassy peripherals itself and hands them to
//! the wrappers here. SPI goes through the generic embedded-hal adapter in
//! `hygros_hal::eh`; only its configuration lives in this crate.

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod spi;
pub mod time;
pub mod uart;

pub use gpio::Stm32Output;
pub use i2c::{I2cBusError, Stm32I2c};
pub use time::EmbassyClock;
pub use uart::{Stm32UartTx, UartBusError};
