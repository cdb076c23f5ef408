//! Events that trigger state transitions

use hygros_hal::BusFault;

/// What happened while executing the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Display configured and sensor init command sent (whatever its outcome)
    Initialized,
    /// Deadline not reached yet
    Waiting,
    /// Boot settle delay is over
    SettleElapsed,

    /// Measurement trigger accepted by the sensor
    CommandAccepted,
    /// Measurement trigger failed on the bus
    CommandFailed(BusFault),

    /// Reply read and decoded
    SampleReady,
    /// Reply read failed; retry the read
    ReadFailed(BusFault),
    /// Reply read failed too many times; issue a new trigger
    ReadAbandoned(BusFault),
}
