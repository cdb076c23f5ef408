//! Cooperative polling loop
//!
//! [`Poller`] owns the state selector, the active deadline and every
//! peripheral it talks to. The firmware calls [`Poller::poll`] once per
//! main-loop pass with the current tick; each call executes the current
//! state exactly once and never waits on anything but the bus itself.
//!
//! ```text
//!   Init ──► InitDelay ──(tick > deadline)──► IssueMeasureCmd ◄──────────┐
//!                                                │   ▲                   │
//!                                        Ok      │   │ bus fault         │
//!                                                ▼   │ (report, retry)   │
//!                                           MeasurementDelay ────────────┘
//!                                       (tick > deadline, read Ok or abandoned)
//! ```

pub mod report;

use hygros_hal::{BusFault, Deadline, Monotonic, OutputPin, UartTx};

use crate::config::{Config, DisplayConfig, PollConfig};
use crate::state::{Event, State};
use crate::traits::{ClimateSensor, Reading, ReadingDisplay};

pub use report::{Origin, Report, LINE_CAPACITY};

/// The polling state machine and the peripherals it drives
pub struct Poller<S, D, L, C> {
    sensor: S,
    display: D,
    /// Toggled on every accepted measurement command
    heartbeat: L,
    /// Status console
    console: C,
    poll_config: PollConfig,
    display_config: DisplayConfig,
    state: State,
    /// Only meaningful while `state.is_delay()`
    deadline: Deadline,
    /// Consecutive failed reads in the current measurement
    failed_reads: u8,
    last_reading: Option<Reading>,
}

impl<S, D, L, C> Poller<S, D, L, C>
where
    S: ClimateSensor,
    D: ReadingDisplay,
    L: OutputPin,
    C: UartTx,
{
    /// Create a poller in the `Init` state
    pub fn new(sensor: S, display: D, heartbeat: L, console: C, config: &Config) -> Self {
        Self {
            sensor,
            display,
            heartbeat,
            console,
            poll_config: config.poll,
            display_config: config.display,
            state: State::Init,
            deadline: Deadline::at(0),
            failed_reads: 0,
            last_reading: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Active deadline, if the current state waits on one
    pub fn deadline(&self) -> Option<Deadline> {
        self.state.is_delay().then_some(self.deadline)
    }

    /// Last reading that made it to the display
    pub fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }

    /// Execute the current state once against the tick `now_ms`
    ///
    /// Returns the state that the next call will execute.
    pub fn poll(&mut self, now_ms: u32) -> State {
        let event = self.execute(now_ms);
        let next = self.state.transition(event);
        if next != self.state {
            debug!("{} -> {}", self.state, next);
        }
        self.state = next;
        next
    }

    /// Read the tick from `clock` and poll
    pub fn poll_clock<M: Monotonic>(&mut self, clock: &M) -> State {
        self.poll(clock.now_ms())
    }

    /// Give the peripherals back
    pub fn release(self) -> (S, D, L, C) {
        (self.sensor, self.display, self.heartbeat, self.console)
    }

    fn execute(&mut self, now_ms: u32) -> Event {
        match self.state {
            State::Init => {
                self.display.configure(&self.display_config);
                self.collect_display_fault();

                if let Err(fault) = self.sensor.init() {
                    self.report_fault(fault, Origin::Sensor);
                }

                self.deadline = Deadline::after(now_ms, self.poll_config.interval_ms);
                Event::Initialized
            }

            State::InitDelay => {
                if !self.deadline.has_passed(now_ms) {
                    return Event::Waiting;
                }
                info!("Sensor settled, starting measurements");
                self.report(Report::Started);
                self.sensor.arm();
                Event::SettleElapsed
            }

            State::IssueMeasureCmd => match self.sensor.trigger() {
                Ok(()) => {
                    self.heartbeat.toggle();
                    self.failed_reads = 0;
                    self.deadline = Deadline::after(now_ms, self.poll_config.interval_ms);
                    Event::CommandAccepted
                }
                Err(fault) => {
                    self.report_fault(fault, Origin::Sensor);
                    Event::CommandFailed(fault)
                }
            },

            State::MeasurementDelay => {
                if !self.deadline.has_passed(now_ms) {
                    return Event::Waiting;
                }
                match self.sensor.fetch() {
                    Ok(reading) => {
                        self.display.show(&reading);
                        self.collect_display_fault();
                        self.report(Report::Reading(&reading));
                        self.last_reading = Some(reading);
                        self.failed_reads = 0;
                        Event::SampleReady
                    }
                    Err(fault) => {
                        self.report_fault(fault, Origin::Sensor);
                        self.failed_reads = self.failed_reads.saturating_add(1);
                        if self.failed_reads >= self.poll_config.read_attempts {
                            self.failed_reads = 0;
                            Event::ReadAbandoned(fault)
                        } else {
                            Event::ReadFailed(fault)
                        }
                    }
                }
            }
        }
    }

    fn collect_display_fault(&mut self) {
        if let Some(fault) = self.display.take_fault() {
            self.report_fault(fault, Origin::Display);
        }
    }

    fn report_fault(&mut self, fault: BusFault, origin: Origin) {
        warn!("{} fault in {}: {}", origin, self.state, fault);
        let state = self.state;
        self.report(Report::Fault {
            fault,
            state,
            origin,
        });
    }

    fn report(&mut self, report: Report<'_>) {
        let line = report.render();
        let sent = self.console.write_str_blocking(&line);
        if sent.and_then(|()| self.console.flush()).is_err() {
            warn!("status console write failed");
        }
    }
}
