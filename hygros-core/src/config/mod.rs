//! Configuration types
//!
//! Board-agnostic settings for the polling loop, the LED controller and the
//! sensor bus.

pub mod types;

pub use types::*;
