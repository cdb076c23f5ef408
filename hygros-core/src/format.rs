//! Fixed-point rendering of readings
//!
//! The display has room for a sign, two integer digits and one fractional
//! digit per value. [`FixedPoint`] produces that text once, and both the
//! display frame and the console line are built from it, so the two always
//! show the same digits. Mapping characters to segment codes is the display
//! driver's job.

use core::fmt;

/// Largest representable magnitude, in tenths (99.9)
pub const MAX_TENTHS: u16 = 999;

/// Length of the rendered magnitude, `DD.D`
pub const FIXED_WIDTH: usize = 4;

/// Magnitude of `value` in tenths, clamped to 99.9
///
/// Rounds half to even on the exact value, the same rule `{:.1}` uses.
/// The product is taken in `f64`, where it is exact for any `f32`.
/// NaN renders as zero.
pub fn to_tenths(value: f32) -> u16 {
    if value.is_nan() {
        return 0;
    }
    let scaled = libm::rint(libm::fabs(value as f64) * 10.0);
    if scaled >= MAX_TENTHS as f64 {
        MAX_TENTHS
    } else {
        scaled as u16
    }
}

/// A reading rounded to one decimal: sign flag plus `DD.D`
///
/// Values that round to zero are never negative, so `-0.04` shows as
/// `00.0` without a minus sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedPoint {
    negative: bool,
    text: [u8; FIXED_WIDTH],
}

impl FixedPoint {
    pub fn new(value: f32) -> Self {
        let tenths = to_tenths(value);
        Self {
            negative: value < 0.0 && tenths > 0,
            ..Self::from_tenths(tenths)
        }
    }

    /// Non-negative value given in tenths, clamped to 99.9
    pub fn from_tenths(tenths: u16) -> Self {
        let t = tenths.min(MAX_TENTHS);
        Self {
            negative: false,
            text: [
                b'0' + (t / 100) as u8,
                b'0' + (t / 10 % 10) as u8,
                b'.',
                b'0' + (t % 10) as u8,
            ],
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude digits, without the sign
    pub fn as_bytes(&self) -> &[u8; FIXED_WIDTH] {
        &self.text
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits and '.' are ever stored
        core::str::from_utf8(&self.text).unwrap_or("")
    }

    /// Magnitude in tenths
    pub fn tenths(&self) -> u16 {
        let d = |i: usize| (self.text[i] - b'0') as u16;
        d(0) * 100 + d(1) * 10 + d(3)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(self.as_str())
    }
}
