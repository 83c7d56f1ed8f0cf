//! The benchmark suite: drives one test at a time through its lifecycle
//! phases, contains failures at the suite boundary, and announces completed
//! workload phases on the event bus.

use std::future::Future;
use std::sync::Arc;

use events::{Event, EventBus, EventEnvelope};
use storebench_core::{BenchmarkTest, TestError, TestMethod};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::current::{occupant, CurrentGuard, CurrentSlot};
use crate::error::PhaseFailure;

/// Executes benchmark tests phase by phase and logs every step.
///
/// Each `run_*` operation wraps one lifecycle call of the supplied test:
/// it records the test as current, logs start and outcome, and swallows any
/// failure the test raises, so a batch scheduler can push a whole roster of
/// backends through without one broken backend aborting the run. After the
/// three workload phases (write, read, secondary read) a
/// [`Event::TestFinished`] notification is published whether the phase
/// succeeded or not; init and finish publish nothing.
///
/// The suite is built for one phase call in flight at a time. Concurrent
/// calls on the same instance are memory safe (the current-test slot is
/// lock-guarded) but interleave log attribution and current-test
/// bookkeeping, so drive it from a single caller.
pub struct BenchmarkSuite {
    current: CurrentSlot,
    bus: EventBus,
}

impl BenchmarkSuite {
    /// Create a suite with its own event bus.
    pub fn new() -> Self {
        Self::with_bus(EventBus::new())
    }

    /// Create a suite publishing on an existing bus.
    pub fn with_bus(bus: EventBus) -> Self {
        Self {
            current: CurrentSlot::default(),
            bus,
        }
    }

    /// The bus this suite publishes completion notifications on.
    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe to completion notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.bus.subscribe()
    }

    /// The test currently executing a phase, if any. Empty whenever no
    /// phase call is in flight.
    pub fn current(&self) -> Option<Arc<dyn BenchmarkTest>> {
        occupant(&self.current)
    }

    /// Backend name of the currently executing test, if any.
    pub fn current_backend(&self) -> Option<String> {
        self.current().map(|test| test.backend_name().to_owned())
    }

    /// Run the init phase: backend setup. Publishes no notification.
    pub async fn run_init(&self, test: Arc<dyn BenchmarkTest>) {
        self.drive(&test, "Init", |t| async move { t.init().await })
            .await;
    }

    /// Run the write workload and notify listeners when it concludes.
    pub async fn run_write(&self, test: Arc<dyn BenchmarkTest>) {
        self.drive(&test, "Write", |t| async move { t.write().await })
            .await;
        self.notify(test, TestMethod::Write);
    }

    /// Run the primary read workload and notify listeners when it concludes.
    pub async fn run_read(&self, test: Arc<dyn BenchmarkTest>) {
        self.drive(&test, "Read", |t| async move { t.read().await })
            .await;
        self.notify(test, TestMethod::Read);
    }

    /// Run the secondary read workload and notify listeners when it
    /// concludes.
    pub async fn run_secondary_read(&self, test: Arc<dyn BenchmarkTest>) {
        self.drive(&test, "SecondaryRead", |t| async move {
            t.secondary_read().await
        })
        .await;
        self.notify(test, TestMethod::SecondaryRead);
    }

    /// Run the finish phase: resource teardown. Publishes no notification.
    pub async fn run_finish(&self, test: Arc<dyn BenchmarkTest>) {
        self.drive(&test, "Finish", |t| async move { t.finish().await })
            .await;
    }

    /// Execute one lifecycle operation with the shared bookkeeping: mark
    /// the test current for the duration of the call, log start and
    /// outcome, and recover any failure. The current-test slot is released
    /// before this returns, on every path.
    async fn drive<F, Fut>(&self, test: &Arc<dyn BenchmarkTest>, phase: &'static str, op: F)
    where
        F: FnOnce(Arc<dyn BenchmarkTest>) -> Fut,
        Fut: Future<Output = Result<(), TestError>>,
    {
        let _current = CurrentGuard::install(&self.current, Arc::clone(test));
        let backend = test.backend_name().to_owned();

        info!(backend = %backend, "{}() started", phase);

        match op(Arc::clone(test)).await {
            Ok(()) => {
                info!(backend = %backend, "{}() ended", phase);
            }
            Err(source) => {
                let failure = PhaseFailure::new(backend.clone(), phase, source);
                error!(backend = %backend, phase = phase, "{}", failure);
                info!(backend = %backend, "{}() failed", phase);
            }
        }
    }

    /// Publish the completion notification for a measurable phase. Fired
    /// after the current-test slot is released, success or failure alike.
    fn notify(&self, test: Arc<dyn BenchmarkTest>, method: TestMethod) {
        let backend = test.backend_name().to_owned();
        let subscribers = self
            .bus
            .publish(EventEnvelope::new(Event::TestFinished { test, method }));

        debug!(
            backend = %backend,
            method = method.as_str(),
            subscribers,
            "completion notification published"
        );
    }
}

impl Default for BenchmarkSuite {
    fn default() -> Self {
        Self::new()
    }
}
