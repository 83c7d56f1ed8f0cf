use storebench_core::TestError;
use thiserror::Error;

/// The single failure kind this layer produces: a lifecycle operation of a
/// test raised an error. It exists to render the error-level log record;
/// the suite recovers every one of these and none escapes a `run_*` call.
#[derive(Debug, Error)]
#[error("{backend} {phase}() failed: {source}")]
pub struct PhaseFailure {
    /// Backend the failing test targets.
    pub backend: String,
    /// Name of the phase that failed.
    pub phase: &'static str,
    /// The cause reported by the test entity.
    #[source]
    pub source: TestError,
}

impl PhaseFailure {
    pub fn new(backend: impl Into<String>, phase: &'static str, source: TestError) -> Self {
        Self {
            backend: backend.into(),
            phase,
            source,
        }
    }
}
