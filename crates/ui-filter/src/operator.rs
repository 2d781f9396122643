//! Logical operators joining several filters on the same field.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How multiple filter entries for one field combine.
///
/// Operators are carried verbatim: only the exact strings `and` and `or`
/// map to the named variants, everything else lands in
/// [`FilterOperator::Custom`] and serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterOperator {
    /// Every entry must match.
    And,
    /// At least one entry must match.
    #[default]
    Or,
    /// Unrecognized operator text.
    Custom(String),
}

impl FilterOperator {
    /// Parses an operator string. Never fails.
    pub fn parse(op: &str) -> FilterOperator {
        match op {
            "and" => FilterOperator::And,
            "or" => FilterOperator::Or,
            other => FilterOperator::Custom(other.to_string()),
        }
    }

    /// Returns the operator text.
    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::And => "and",
            FilterOperator::Or => "or",
            FilterOperator::Custom(op) => op,
        }
    }
}

impl FromStr for FilterOperator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterOperator::parse(s))
    }
}

impl From<&str> for FilterOperator {
    fn from(s: &str) -> Self {
        FilterOperator::parse(s)
    }
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FilterOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilterOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let op = String::deserialize(deserializer)?;
        Ok(FilterOperator::parse(&op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_and_custom() {
        assert_eq!(FilterOperator::parse("and"), FilterOperator::And);
        assert_eq!(FilterOperator::parse("or"), FilterOperator::Or);
        assert_eq!(
            FilterOperator::parse("AND"),
            FilterOperator::Custom("AND".to_string())
        );
    }

    #[test]
    fn default_is_or() {
        assert_eq!(FilterOperator::default(), FilterOperator::Or);
    }

    #[test]
    fn serializes_verbatim() {
        assert_eq!(
            serde_json::to_string(&FilterOperator::And).unwrap(),
            r#""and""#
        );
        let custom: FilterOperator = serde_json::from_str(r#""xor""#).unwrap();
        assert_eq!(custom.to_string(), "xor");
        assert_eq!(serde_json::to_string(&custom).unwrap(), r#""xor""#);
    }
}
