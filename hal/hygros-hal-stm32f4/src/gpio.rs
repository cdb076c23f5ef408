//! GPIO outputs for STM32F4

use embassy_stm32::gpio::Output;
use hygros_hal::OutputPin;

/// Push-pull output implementing [`OutputPin`]
pub struct Stm32Output<'d> {
    pin: Output<'d>,
}

impl<'d> Stm32Output<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for Stm32Output<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}
