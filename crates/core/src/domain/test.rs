use async_trait::async_trait;

use crate::error::TestError;

/// Lifecycle contract for one benchmark test bound to a single backend.
///
/// The suite drives implementations through the conventional sequence
/// init → write → read → secondary_read → finish, but does not enforce it;
/// ordering is the scheduler's responsibility. No operation is retried, so
/// implementations do not need to be idempotent.
///
/// Operations take `&self` because tests are shared with listeners as
/// `Arc<dyn BenchmarkTest>`; any state a test mutates while running (cursors,
/// connections, collected measurements) is its own concern, behind interior
/// mutability.
#[async_trait]
pub trait BenchmarkTest: Send + Sync {
    /// Name of the backend under test, used for log attribution.
    fn backend_name(&self) -> &str;

    /// Prepare the backend for the run: open connections, create schema,
    /// pre-populate whatever the workloads need.
    async fn init(&self) -> Result<(), TestError>;

    /// Execute the write workload. The test records its own timing and
    /// throughput measurements.
    async fn write(&self) -> Result<(), TestError>;

    /// Execute the primary read workload.
    async fn read(&self) -> Result<(), TestError>;

    /// Execute the secondary read workload (cold cache, alternate query
    /// shape, whatever variant the backend protocol defines).
    async fn secondary_read(&self) -> Result<(), TestError>;

    /// Release everything acquired during the run.
    async fn finish(&self) -> Result<(), TestError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct NullTest;

    #[async_trait]
    impl BenchmarkTest for NullTest {
        fn backend_name(&self) -> &str {
            "null"
        }

        async fn init(&self) -> Result<(), TestError> {
            Ok(())
        }

        async fn write(&self) -> Result<(), TestError> {
            Ok(())
        }

        async fn read(&self) -> Result<(), TestError> {
            Ok(())
        }

        async fn secondary_read(&self) -> Result<(), TestError> {
            Err(TestError::Workload("cold cache scan aborted".into()))
        }

        async fn finish(&self) -> Result<(), TestError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_contract_is_object_safe() {
        let test: Arc<dyn BenchmarkTest> = Arc::new(NullTest);

        assert_eq!(test.backend_name(), "null");
        assert!(test.init().await.is_ok());
        assert!(test.secondary_read().await.is_err());
    }
}
