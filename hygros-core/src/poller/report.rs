//! Status console lines
//!
//! Plain ASCII, one report per line, `\r\n` terminated. Meant for a person
//! watching a serial terminal; nothing parses it.

use core::fmt;

use hygros_hal::{BusFault, TransportOutcome};

use crate::format::FixedPoint;
use crate::state::State;
use crate::traits::Reading;

/// Capacity that fits the longest report line
pub const LINE_CAPACITY: usize = 64;

/// Which peripheral a fault came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Origin {
    Sensor,
    Display,
}

/// A status message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report<'a> {
    /// Boot settle over, measurements begin
    Started,
    /// A bus transaction failed in `state`
    Fault {
        fault: BusFault,
        state: State,
        origin: Origin,
    },
    /// A fresh reading was shown, in the digits the display got
    Reading(&'a Reading),
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Started => f.write_str("Start reading sensor data\r\n"),
            Report::Fault {
                fault,
                state,
                origin,
            } => {
                write!(f, "{} @ {} State", TransportOutcome::from(*fault), state)?;
                if *origin == Origin::Display {
                    f.write_str(" (display)")?;
                }
                f.write_str("\r\n")
            }
            Report::Reading(reading) => write!(
                f,
                "Temperature = {} C\tHumidity = {} %RH\r\n",
                FixedPoint::new(reading.temperature_c),
                FixedPoint::new(reading.humidity_pct)
            ),
        }
    }
}

impl Report<'_> {
    /// Render into a fixed-capacity line
    ///
    /// Output that does not fit is cut off at `LINE_CAPACITY` bytes.
    pub fn render(&self) -> heapless::String<LINE_CAPACITY> {
        use core::fmt::Write;

        let mut line = heapless::String::new();
        let _ = write!(line, "{}", self);
        line
    }
}
