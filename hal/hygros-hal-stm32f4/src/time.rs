//! Millisecond tick from the embassy time driver

use embassy_time::Instant;
use hygros_hal::Monotonic;

/// [`Monotonic`] backed by `embassy_time::Instant`
///
/// The 64-bit embassy tick is truncated to 32 bits; deadlines compare
/// wrap-safely so the roll-over after ~49.7 days is harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
