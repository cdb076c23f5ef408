//! Board-agnostic core logic for the Hygros climate display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor and display traits
//! - Polling state machine and its driver loop
//! - Fixed-point rendering of readings
//! - Status console messages
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod config;
pub mod format;
pub mod poller;
pub mod state;
pub mod traits;

pub use poller::Poller;
