//! Hygros Hardware Abstraction Layer
//!
//! This crate defines the blocking bus and pin traits the polling loop is
//! written against. Chip-specific HALs (STM32F4, ...) implement them, and
//! host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hygros-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hygros-core / hygros-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hygros-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ hygros-hal-   │       │  embedded-hal │
//! │   stm32f4     │       │  adapters(eh) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Latch line and heartbeat LED
//! - [`uart::UartTx`] - Status console
//! - [`i2c::I2cBus`] - Sensor bus
//! - [`spi::SpiBus`] - Display bus
//! - [`time::Monotonic`] - Millisecond tick source
//!
//! Every bus error converts into a [`BusFault`], which together with success
//! forms the [`TransportOutcome`] reported on the status console.

#![no_std]
#![deny(unsafe_code)]

pub mod eh;
pub mod gpio;
pub mod i2c;
pub mod outcome;
pub mod spi;
pub mod time;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use outcome::{BusFault, TransportOutcome};
pub use spi::SpiBus;
pub use time::{Deadline, Monotonic};
pub use uart::UartTx;
