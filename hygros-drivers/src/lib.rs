//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hygros-core:
//!
//! - Climate sensors (AHT10 over I2C)
//! - Reading displays (MAX7219 7-segment over SPI)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod display;
pub mod sensor;

pub use display::Max7219;
pub use sensor::Aht10;
