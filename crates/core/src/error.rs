use thiserror::Error;

/// Failure raised by a lifecycle operation of a [`crate::BenchmarkTest`].
///
/// The suite does not distinguish between variants; every one is logged the
/// same way. The variants exist so backend implementations can report the
/// usual failure shapes of a storage benchmark without stringly wrapping
/// everything themselves.
#[derive(Error, Debug)]
pub enum TestError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Workload failed: {0}")]
    Workload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Teardown failed: {0}")]
    Teardown(String),
}
