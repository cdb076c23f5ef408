//! Climate sensors

pub mod aht10;

pub use aht10::Aht10;
