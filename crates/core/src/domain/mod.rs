mod method;
mod test;

pub use method::TestMethod;
pub use test::BenchmarkTest;
