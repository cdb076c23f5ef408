//! MAX7219 eight-digit 7-segment driver
//!
//! Each register write is one 16-bit SPI frame (address, value) followed
//! by a pulse on the LOAD line, which latches the frame into the chip.
//!
//! Digit layout, left to right as seen on the module:
//!
//! ```text
//!   DIG7   DIG6   DIG5   DIG4   DIG3   DIG2   DIG1   DIG0
//!   sign   T tens T ones T 1/10 blank  H tens H ones H 1/10
//!   0x08   0x07   0x06.  0x05   0x04   0x03   0x02.  0x01
//! ```

use heapless::Vec;
use hygros_core::config::DisplayConfig;
use hygros_core::format::{FixedPoint, FIXED_WIDTH};
use hygros_core::traits::{Reading, ReadingDisplay};
use hygros_hal::{BusFault, OutputPin, SpiBus};

/// Register addresses
pub mod register {
    pub const NO_OP: u8 = 0x00;
    /// Digit 0; digit n is at `DIGIT_0 + n`
    pub const DIGIT_0: u8 = 0x01;
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;

    /// Address of digit `n` (0..=7)
    pub const fn digit(n: u8) -> u8 {
        DIGIT_0 + n
    }
}

/// Code-B blank
pub const BLANK: u8 = 0x0F;
/// Code-B minus sign
pub const MINUS: u8 = 0x0A;
/// Decimal point bit, OR'ed into a digit code
pub const DP: u8 = 0x80;
/// Code-B decoding on all eight digits
pub const DECODE_ALL: u8 = 0xFF;

const SIGN_DIGIT: u8 = 7;
const TEMPERATURE_DIGITS: [u8; 3] = [6, 5, 4];
const SPACER_DIGIT: u8 = 3;
const HUMIDITY_DIGITS: [u8; 3] = [2, 1, 0];

/// Commands in one reading frame
pub const FRAME_LEN: usize = 7;

/// One register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayCommand {
    pub address: u8,
    pub value: u8,
}

impl DisplayCommand {
    pub const fn new(address: u8, value: u8) -> Self {
        Self { address, value }
    }

    /// Wire order: address first
    pub fn to_bytes(self) -> [u8; 2] {
        [self.address, self.value]
    }
}

/// Code-B value for an ASCII character
///
/// Only digits, `-` and space are representable; anything else is blank.
pub fn code_b(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'-' => MINUS,
        _ => BLANK,
    }
}

/// Encode text into digit codes, folding each `.` into the digit before it
///
/// A leading `.` gets a blank digit of its own. Characters past `N`
/// digits are dropped.
pub fn encode_digits<const N: usize>(text: &[u8]) -> Vec<u8, N> {
    let mut codes: Vec<u8, N> = Vec::new();
    for &ch in text {
        if ch == b'.' {
            if let Some(last) = codes.last_mut() {
                *last |= DP;
                continue;
            }
            let _ = codes.push(BLANK | DP);
            continue;
        }
        if codes.push(code_b(ch)).is_err() {
            break;
        }
    }
    codes
}

/// Sign digit for a rounded temperature
///
/// Blank when the value rounds to zero, so `-0.04` never shows `-00.0`.
pub fn sign_code(value: &FixedPoint) -> u8 {
    if value.is_negative() {
        MINUS
    } else {
        BLANK
    }
}

/// Register writes that show `reading`, in send order
///
/// Sign first, then the three temperature digits, then the three humidity
/// digits. The spacer digit is left alone.
pub fn reading_frame(reading: &Reading) -> [DisplayCommand; FRAME_LEN] {
    let temperature = FixedPoint::new(reading.temperature_c);
    let sign = sign_code(&temperature);
    let temperature = value_codes(&temperature);
    let humidity = value_codes(&FixedPoint::new(reading.humidity_pct));

    let mut frame = [DisplayCommand::new(register::NO_OP, 0); FRAME_LEN];
    frame[0] = DisplayCommand::new(register::digit(SIGN_DIGIT), sign);
    for i in 0..3 {
        frame[1 + i] = DisplayCommand::new(register::digit(TEMPERATURE_DIGITS[i]), temperature[i]);
        frame[4 + i] = DisplayCommand::new(register::digit(HUMIDITY_DIGITS[i]), humidity[i]);
    }
    frame
}

fn value_codes(fixed: &FixedPoint) -> [u8; 3] {
    let codes: Vec<u8, FIXED_WIDTH> = encode_digits(fixed.as_bytes());
    let mut out = [BLANK; 3];
    for (slot, code) in out.iter_mut().zip(codes.iter()) {
        *slot = *code;
    }
    out
}

/// Register writes that bring the chip out of shutdown
pub fn configure_sequence(config: &DisplayConfig) -> [DisplayCommand; 5] {
    [
        DisplayCommand::new(register::SCAN_LIMIT, config.scan_limit),
        DisplayCommand::new(register::INTENSITY, config.intensity),
        DisplayCommand::new(register::DECODE_MODE, DECODE_ALL),
        DisplayCommand::new(register::SHUTDOWN, 0x01),
        DisplayCommand::new(register::digit(SPACER_DIGIT), BLANK),
    ]
}

/// MAX7219 on a write-only SPI bus with a separate LOAD line
pub struct Max7219<SPI, LATCH> {
    spi: SPI,
    latch: LATCH,
    fault: Option<BusFault>,
}

impl<SPI: SpiBus, LATCH: OutputPin> Max7219<SPI, LATCH> {
    /// Create a driver; the LOAD line is driven low immediately
    pub fn new(spi: SPI, mut latch: LATCH) -> Self {
        latch.set_low();
        Self {
            spi,
            latch,
            fault: None,
        }
    }

    /// Write one register
    ///
    /// The LOAD pulse is sent even when the SPI write fails so that the
    /// chip never holds a half-shifted frame. The first fault is also kept
    /// for [`ReadingDisplay::take_fault`].
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), BusFault> {
        let result = self
            .spi
            .write(&DisplayCommand::new(address, value).to_bytes())
            .map_err(Into::into);
        self.latch.pulse();
        if let Err(fault) = result {
            debug!("MAX7219 write to {=u8:#x} failed", address);
            self.fault.get_or_insert(fault);
        }
        result
    }

    /// Send a batch of register writes, continuing past failures
    pub fn send(&mut self, commands: &[DisplayCommand]) {
        for cmd in commands {
            let _ = self.write_register(cmd.address, cmd.value);
        }
    }
}

impl<SPI: SpiBus, LATCH: OutputPin> ReadingDisplay for Max7219<SPI, LATCH> {
    fn configure(&mut self, config: &DisplayConfig) {
        self.send(&configure_sequence(config));
    }

    fn show(&mut self, reading: &Reading) {
        self.send(&reading_frame(reading));
    }

    fn take_fault(&mut self) -> Option<BusFault> {
        self.fault.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Wire {
        Frame([u8; 2]),
        Load,
    }

    type Trace = Rc<RefCell<std::vec::Vec<Wire>>>;

    struct MockSpi {
        trace: Trace,
        fail_on: Option<u8>,
    }

    impl SpiBus for MockSpi {
        type Error = BusFault;

        fn write(&mut self, data: &[u8]) -> Result<(), BusFault> {
            if self.fail_on == Some(data[0]) {
                return Err(BusFault::Busy);
            }
            self.trace.borrow_mut().push(Wire::Frame([data[0], data[1]]));
            Ok(())
        }
    }

    struct MockLatch {
        trace: Trace,
        high: bool,
    }

    impl OutputPin for MockLatch {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.trace.borrow_mut().push(Wire::Load);
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn driver(fail_on: Option<u8>) -> (Max7219<MockSpi, MockLatch>, Trace) {
        let trace: Trace = Rc::new(RefCell::new(vec![]));
        let spi = MockSpi {
            trace: trace.clone(),
            fail_on,
        };
        let latch = MockLatch {
            trace: trace.clone(),
            high: false,
        };
        (Max7219::new(spi, latch), trace)
    }

    fn frames(trace: &Trace) -> std::vec::Vec<[u8; 2]> {
        trace
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Wire::Frame(f) => Some(*f),
                Wire::Load => None,
            })
            .collect()
    }

    #[test]
    fn test_code_b() {
        assert_eq!(code_b(b'0'), 0x00);
        assert_eq!(code_b(b'7'), 0x07);
        assert_eq!(code_b(b'-'), MINUS);
        assert_eq!(code_b(b' '), BLANK);
        assert_eq!(code_b(b'x'), BLANK);
    }

    #[test]
    fn test_encode_folds_decimal_point() {
        let codes: Vec<u8, 8> = encode_digits(b"21.4");
        assert_eq!(codes.as_slice(), &[0x02, 0x01 | DP, 0x04]);

        let leading: Vec<u8, 8> = encode_digits(b".5");
        assert_eq!(leading.as_slice(), &[BLANK | DP, 0x05]);

        let short: Vec<u8, 2> = encode_digits(b"123");
        assert_eq!(short.as_slice(), &[0x01, 0x02]);
    }

    #[test]
    fn test_frame_layout() {
        let frame = reading_frame(&Reading::new(21.4, 45.2));
        assert_eq!(
            frame,
            [
                DisplayCommand::new(0x08, BLANK),
                DisplayCommand::new(0x07, 0x02),
                DisplayCommand::new(0x06, 0x01 | DP),
                DisplayCommand::new(0x05, 0x04),
                DisplayCommand::new(0x03, 0x04),
                DisplayCommand::new(0x02, 0x05 | DP),
                DisplayCommand::new(0x01, 0x02),
            ]
        );
    }

    #[test]
    fn test_negative_temperature_shows_minus() {
        let frame = reading_frame(&Reading::new(-5.3, 80.0));
        assert_eq!(frame[0], DisplayCommand::new(0x08, MINUS));
        assert_eq!(frame[1].value, 0x00);
        assert_eq!(frame[2].value, 0x05 | DP);
        assert_eq!(frame[3].value, 0x03);
    }

    #[test]
    fn test_frame_clamps_and_rounds() {
        let frame = reading_frame(&Reading::new(150.0, 9.96));
        assert_eq!(
            [frame[1].value, frame[2].value, frame[3].value],
            [9, 9 | DP, 9]
        );
        assert_eq!(
            [frame[4].value, frame[5].value, frame[6].value],
            [1, DP, 0]
        );
    }

    #[test]
    fn test_configure_sequence() {
        let (mut display, trace) = driver(None);
        display.configure(&DisplayConfig::default());
        assert_eq!(
            frames(&trace),
            vec![[0x0B, 7], [0x0A, 1], [0x09, 0xFF], [0x0C, 1], [0x04, BLANK]]
        );
        assert_eq!(display.take_fault(), None);
    }

    #[test]
    fn test_every_write_is_latched() {
        let (mut display, trace) = driver(None);
        display.show(&Reading::new(14.0, 10.0));
        let trace = trace.borrow();
        assert_eq!(trace.len(), FRAME_LEN * 2);
        for pair in trace.chunks(2) {
            assert!(matches!(pair[0], Wire::Frame(_)));
            assert_eq!(pair[1], Wire::Load);
        }
    }

    #[test]
    fn test_fault_latched_and_rest_sent() {
        let (mut display, trace) = driver(Some(0x06));
        display.show(&Reading::new(14.0, 10.0));

        // Failed frame is missing but still got its LOAD pulse
        assert_eq!(frames(&trace).len(), FRAME_LEN - 1);
        let loads = trace.borrow().iter().filter(|w| **w == Wire::Load).count();
        assert_eq!(loads, FRAME_LEN);

        assert_eq!(display.take_fault(), Some(BusFault::Busy));
        assert_eq!(display.take_fault(), None);
    }

    #[test]
    fn test_first_fault_wins() {
        let (mut display, _) = driver(Some(register::SHUTDOWN));
        display.fault = Some(BusFault::Timeout);
        assert_eq!(display.write_register(register::SHUTDOWN, 0), Err(BusFault::Busy));
        assert_eq!(display.take_fault(), Some(BusFault::Timeout));
        assert_eq!(display.write_register(register::SHUTDOWN, 1), Err(BusFault::Busy));
        assert_eq!(display.take_fault(), Some(BusFault::Busy));
    }

    #[test]
    fn test_near_zero_temperature_has_blank_sign() {
        for value in [-0.04, -0.0, 0.04] {
            let frame = reading_frame(&Reading::new(value, 50.0));
            assert_eq!(frame[0], DisplayCommand::new(0x08, BLANK), "{value}");
            assert_eq!(
                [frame[1].value, frame[2].value, frame[3].value],
                [0, DP, 0]
            );
        }

        // f32 -0.05 is slightly below -0.05, so it rounds to -00.1
        let frame = reading_frame(&Reading::new(-0.05, 50.0));
        assert_eq!(frame[0].value, MINUS);
        assert_eq!(frame[3].value, 1);
    }

    #[test]
    fn test_rounds_like_console() {
        // 26.849998 is just below 26.85
        let frame = reading_frame(&Reading::new(26.849998, 14.25));
        assert_eq!(
            [frame[1].value, frame[2].value, frame[3].value],
            [2, 6 | DP, 8]
        );
        assert_eq!(
            [frame[4].value, frame[5].value, frame[6].value],
            [1, 4 | DP, 2]
        );
    }
}
