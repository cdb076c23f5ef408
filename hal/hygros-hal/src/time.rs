//! Monotonic millisecond tick and non-blocking deadlines
//!
//! The polling loop never sleeps. It stores an absolute [`Deadline`] and
//! compares the current tick against it on every pass.

/// Free-running millisecond counter
///
/// The counter wraps after ~49.7 days; [`Deadline`] handles the wrap.
pub trait Monotonic {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

impl<M: Monotonic + ?Sized> Monotonic for &M {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Absolute tick value after which a wait is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline(u32);

impl Deadline {
    /// Deadline `interval_ms` after `now_ms`
    pub fn after(now_ms: u32, interval_ms: u32) -> Self {
        Self(now_ms.wrapping_add(interval_ms))
    }

    /// Deadline at an absolute tick
    pub const fn at(tick_ms: u32) -> Self {
        Self(tick_ms)
    }

    pub fn tick(self) -> u32 {
        self.0
    }

    /// True once `now_ms` is strictly past the deadline
    ///
    /// Equality does not count. Ticks are compared as a signed distance so
    /// a deadline set just before the counter wraps still expires.
    pub fn has_passed(self, now_ms: u32) -> bool {
        (now_ms.wrapping_sub(self.0) as i32) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_greater() {
        let d = Deadline::after(1000, 1000);
        assert_eq!(d.tick(), 2000);
        assert!(!d.has_passed(1999));
        assert!(!d.has_passed(2000));
        assert!(d.has_passed(2001));
    }

    #[test]
    fn test_wrapping_deadline() {
        let d = Deadline::after(u32::MAX - 10, 100);
        assert_eq!(d.tick(), 89);
        assert!(!d.has_passed(u32::MAX));
        assert!(!d.has_passed(89));
        assert!(d.has_passed(90));
    }

    #[test]
    fn test_monotonic_by_reference() {
        struct Fixed(u32);
        impl Monotonic for Fixed {
            fn now_ms(&self) -> u32 {
                self.0
            }
        }

        fn read<M: Monotonic>(m: M) -> u32 {
            m.now_ms()
        }

        let clock = Fixed(42);
        assert_eq!(read(&clock), 42);
    }
}
