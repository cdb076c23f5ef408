//! Hardware abstraction traits
//!
//! These traits define the interface between the polling loop and the
//! concrete sensor and display drivers.

pub mod display;
pub mod sensor;

pub use display::ReadingDisplay;
pub use sensor::{ClimateSensor, Reading};
