use serde::{Deserialize, Serialize};

/// Identifier for the measurable workload phases of a benchmark run.
///
/// Only the phases that produce measurements are represented here; `Init`
/// and `Finish` are bookkeeping steps and never reach listeners, so they
/// have no identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TestMethod {
    Write,
    Read,
    SecondaryRead,
}

impl TestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Read => "read",
            Self::SecondaryRead => "secondary_read",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "write" => Some(Self::Write),
            "read" => Some(Self::Read),
            "secondary_read" => Some(Self::SecondaryRead),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_str_roundtrip() {
        for method in [TestMethod::Write, TestMethod::Read, TestMethod::SecondaryRead] {
            assert_eq!(TestMethod::parse(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_method_parse_unknown() {
        assert_eq!(TestMethod::parse("init"), None);
        assert_eq!(TestMethod::parse("finish"), None);
        assert_eq!(TestMethod::parse(""), None);
    }

    #[test]
    fn test_method_serialization() {
        assert_eq!(
            serde_json::to_string(&TestMethod::SecondaryRead).unwrap(),
            "\"secondary_read\""
        );

        let method: TestMethod = serde_json::from_str("\"write\"").unwrap();
        assert_eq!(method, TestMethod::Write);
    }
}
