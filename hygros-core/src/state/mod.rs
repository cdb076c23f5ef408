//! Polling state machine
//!
//! The state is a plain selector; all transitions go through the pure
//! [`State::transition`] function. Bus I/O lives in [`crate::poller`],
//! which turns transport results into [`Event`]s.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
