//! Event types published by the benchmark suite.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use storebench_core::{BenchmarkTest, TestMethod};
use uuid::Uuid;

/// Envelope wrapping every event with identity and timing metadata.
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: Event,
}

impl EventEnvelope {
    /// Create a new envelope with auto-generated ID and timestamp.
    pub fn new(event: Event) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Notifications observable by benchmark listeners.
///
/// Only the measurable phases (write, read, secondary read) produce an
/// event. Init and finish conclude silently; a listener that needs to react
/// to setup or teardown has nothing to wait for here.
#[derive(Clone)]
pub enum Event {
    /// A measurable phase of a test concluded, successfully or not. The
    /// event does not say which; listeners interested in failure inspect
    /// the test's own recorded results.
    TestFinished {
        test: Arc<dyn BenchmarkTest>,
        method: TestMethod,
    },
}

impl Event {
    /// Backend name of the test this event concerns.
    pub fn backend(&self) -> &str {
        match self {
            Event::TestFinished { test, .. } => test.backend_name(),
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TestFinished { test, method } => f
                .debug_struct("TestFinished")
                .field("backend", &test.backend_name())
                .field("method", method)
                .finish(),
        }
    }
}
