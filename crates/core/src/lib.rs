//! Core domain types for the storebench harness: the benchmark lifecycle
//! contract and the identifiers shared by the suite and its listeners.

pub mod domain;
pub mod error;

pub use domain::{BenchmarkTest, TestMethod};
pub use error::TestError;
