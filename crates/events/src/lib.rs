//! Completion notifications for benchmark runs.
//!
//! This crate provides the bus on which the suite announces that a
//! measurable workload phase has concluded, and the event types carried
//! on it.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::{Event, EventEnvelope};
