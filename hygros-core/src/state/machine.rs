//! State machine definition
//!
//! The next state is a function of the current state and one event,
//! nothing else.

use super::events::Event;

/// Polling states
///
/// `Init` runs once per boot; the machine then cycles between
/// `IssueMeasureCmd` and `MeasurementDelay` forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Configure the display and send the sensor init command
    Init,
    /// Wait for the sensor to settle after init
    InitDelay,
    /// Send the measurement trigger
    IssueMeasureCmd,
    /// Wait for the measurement, then read and show it
    MeasurementDelay,
}

impl State {
    /// Name used in status reports
    pub fn name(self) -> &'static str {
        match self {
            State::Init => "Init",
            State::InitDelay => "InitDelay",
            State::IssueMeasureCmd => "IssueMeasureCmd",
            State::MeasurementDelay => "MeasurementDelay",
        }
    }

    /// Check if this state waits on a deadline
    pub fn is_delay(self) -> bool {
        matches!(self, State::InitDelay | State::MeasurementDelay)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Init, Initialized) => InitDelay,

            (InitDelay, SettleElapsed) => IssueMeasureCmd,

            (IssueMeasureCmd, CommandAccepted) => MeasurementDelay,
            (IssueMeasureCmd, CommandFailed(_)) => IssueMeasureCmd,

            (MeasurementDelay, SampleReady) => IssueMeasureCmd,
            (MeasurementDelay, ReadFailed(_)) => MeasurementDelay,
            (MeasurementDelay, ReadAbandoned(_)) => IssueMeasureCmd,

            // Default: stay in current state
            _ => self,
        }
    }
}

impl core::fmt::Display for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hygros_hal::BusFault;
    use proptest::prelude::*;

    const STATES: [State; 4] = [
        State::Init,
        State::InitDelay,
        State::IssueMeasureCmd,
        State::MeasurementDelay,
    ];

    fn any_state() -> impl Strategy<Value = State> {
        prop::sample::select(STATES.to_vec())
    }

    fn any_fault() -> impl Strategy<Value = BusFault> {
        prop_oneof![
            Just(BusFault::Error),
            Just(BusFault::Busy),
            Just(BusFault::Timeout),
        ]
    }

    fn any_event() -> impl Strategy<Value = Event> {
        prop_oneof![
            Just(Event::Initialized),
            Just(Event::Waiting),
            Just(Event::SettleElapsed),
            Just(Event::CommandAccepted),
            any_fault().prop_map(Event::CommandFailed),
            Just(Event::SampleReady),
            any_fault().prop_map(Event::ReadFailed),
            any_fault().prop_map(Event::ReadAbandoned),
        ]
    }

    #[test]
    fn test_boot_sequence() {
        let state = State::Init.transition(Event::Initialized);
        assert_eq!(state, State::InitDelay);

        let state = state.transition(Event::Waiting);
        assert_eq!(state, State::InitDelay);

        let state = state.transition(Event::SettleElapsed);
        assert_eq!(state, State::IssueMeasureCmd);
    }

    #[test]
    fn test_measurement_cycle() {
        let state = State::IssueMeasureCmd.transition(Event::CommandAccepted);
        assert_eq!(state, State::MeasurementDelay);

        let state = state.transition(Event::Waiting);
        assert_eq!(state, State::MeasurementDelay);

        let state = state.transition(Event::SampleReady);
        assert_eq!(state, State::IssueMeasureCmd);
    }

    #[test]
    fn test_command_failure_retries_same_state() {
        for fault in [BusFault::Error, BusFault::Busy, BusFault::Timeout] {
            let next = State::IssueMeasureCmd.transition(Event::CommandFailed(fault));
            assert_eq!(next, State::IssueMeasureCmd);
        }
    }

    #[test]
    fn test_read_failure_policy() {
        let state = State::MeasurementDelay;
        assert_eq!(
            state.transition(Event::ReadFailed(BusFault::Error)),
            State::MeasurementDelay
        );
        assert_eq!(
            state.transition(Event::ReadAbandoned(BusFault::Error)),
            State::IssueMeasureCmd
        );
    }

    #[test]
    fn test_init_is_never_reentered() {
        for state in STATES.into_iter().skip(1) {
            for event in [Event::Initialized, Event::SampleReady, Event::CommandAccepted] {
                assert_ne!(state.transition(event), State::Init);
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(State::IssueMeasureCmd.name(), "IssueMeasureCmd");
        assert_eq!(State::MeasurementDelay.name(), "MeasurementDelay");
        assert!(State::InitDelay.is_delay());
        assert!(!State::Init.is_delay());
    }

    proptest! {
        #[test]
        fn transition_is_deterministic(state in any_state(), event in any_event()) {
            prop_assert_eq!(state.transition(event), state.transition(event));
        }

        #[test]
        fn waiting_never_moves(state in any_state()) {
            prop_assert_eq!(state.transition(Event::Waiting), state);
        }

        #[test]
        fn delay_states_only_leave_on_their_event(event in any_event()) {
            let next = State::InitDelay.transition(event);
            if event == Event::SettleElapsed {
                prop_assert_eq!(next, State::IssueMeasureCmd);
            } else {
                prop_assert_eq!(next, State::InitDelay);
            }
        }
    }
}
