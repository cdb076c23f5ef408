//! GPIO pin abstractions
//!
//! The polling loop drives two plain outputs: the display latch line and
//! the heartbeat LED.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Toggle the pin state
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    /// Rising-then-falling edge, leaving the pin low
    fn pulse(&mut self) {
        self.set_high();
        self.set_low();
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }

    fn toggle(&mut self) {
        (**self).toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
        edges: u8,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_toggle() {
        let mut pin = MockPin { high: false, edges: 0 };
        pin.toggle();
        assert!(pin.is_set_high());
        pin.toggle();
        assert!(!pin.is_set_high());
    }

    #[test]
    fn test_pulse_ends_low() {
        let mut pin = MockPin { high: false, edges: 0 };
        pin.pulse();
        assert!(!pin.is_set_high());
        assert_eq!(pin.edges, 2);
    }

    #[test]
    fn test_through_reference() {
        fn drive<P: OutputPin>(mut pin: P) {
            pin.set_high();
        }

        let mut pin = MockPin { high: false, edges: 0 };
        drive(&mut pin);
        assert!(pin.is_set_high());
    }
}
