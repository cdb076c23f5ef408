//! Transport outcome classification
//!
//! Every bus operation ends in one of four outcomes. Chip HALs keep their
//! own detailed error enums and convert them into [`BusFault`] so that the
//! polling loop can report failures uniformly.

use core::fmt;

/// Why a bus transaction did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Transaction failed (NACK, bus error, overrun, ...)
    Error,
    /// Peripheral or bus was busy (arbitration lost, line held)
    Busy,
    /// Transaction did not finish in time
    Timeout,
}

/// Result of a single bus operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportOutcome {
    Ok,
    Error,
    Busy,
    Timeout,
}

impl TransportOutcome {
    /// Human-readable name used on the status console
    pub fn name(self) -> &'static str {
        match self {
            TransportOutcome::Ok => "Ok",
            TransportOutcome::Error => "Error",
            TransportOutcome::Busy => "Busy",
            TransportOutcome::Timeout => "Timeout",
        }
    }
}

impl From<BusFault> for TransportOutcome {
    fn from(fault: BusFault) -> Self {
        match fault {
            BusFault::Error => TransportOutcome::Error,
            BusFault::Busy => TransportOutcome::Busy,
            BusFault::Timeout => TransportOutcome::Timeout,
        }
    }
}

impl fmt::Display for TransportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BusFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(TransportOutcome::from(*self).name())
    }
}

// Mocks and adapters that cannot fail still need an error type
impl From<core::convert::Infallible> for BusFault {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_to_outcome() {
        assert_eq!(TransportOutcome::from(BusFault::Error), TransportOutcome::Error);
        assert_eq!(TransportOutcome::from(BusFault::Busy), TransportOutcome::Busy);
        assert_eq!(
            TransportOutcome::from(BusFault::Timeout),
            TransportOutcome::Timeout
        );
    }

    #[test]
    fn test_fault_display_uses_outcome_name() {
        use core::fmt::Write;

        let mut text: heapless::String<16> = heapless::String::new();
        write!(text, "{}/{}", BusFault::Busy, TransportOutcome::Ok).unwrap();
        assert_eq!(text.as_str(), "Busy/Ok");
    }

    #[test]
    fn test_names() {
        assert_eq!(TransportOutcome::Ok.name(), "Ok");
        assert_eq!(TransportOutcome::Timeout.name(), "Timeout");
    }
}
