//! UART driver for STM32F4
//!
//! Provides the transmit-only status console.

use embassy_stm32::mode::Blocking;
use embassy_stm32::usart::{self, Error as UsartError};
use hygros_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use hygros_hal::UartTx;

/// Build an embassy USART configuration
pub fn config(cfg: &UartConfig) -> usart::Config {
    let mut config = usart::Config::default();
    config.baudrate = cfg.baudrate;
    config.data_bits = match cfg.data_bits {
        DataBits::Seven => usart::DataBits::DataBits7,
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    config.parity = match cfg.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    config.stop_bits = match cfg.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    config
}

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Noise error
    Noise,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Buffer too long for a single transfer
    BufferTooLong,
    /// Other error
    Other,
}

impl From<UsartError> for UartBusError {
    fn from(e: UsartError) -> Self {
        match e {
            UsartError::Framing => UartBusError::Framing,
            UsartError::Noise => UartBusError::Noise,
            UsartError::Overrun => UartBusError::Overrun,
            UsartError::Parity => UartBusError::Parity,
            UsartError::BufferTooLong => UartBusError::BufferTooLong,
            _ => UartBusError::Other,
        }
    }
}

/// Blocking UART transmitter
pub struct Stm32UartTx<'d> {
    tx: usart::UartTx<'d, Blocking>,
}

impl<'d> Stm32UartTx<'d> {
    pub fn new(tx: usart::UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for Stm32UartTx<'_> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data).map_err(Into::into)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush().map_err(Into::into)
    }
}
