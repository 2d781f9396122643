//! Filter match modes.
//!
//! The [`MatchMode`] enum holds the canonical vocabulary a backend is
//! expected to understand. Table widgets also emit date and boolean flavored
//! synonyms (`dateAfter`, `is`, ...); [`normalize_match_mode`] folds those
//! into their canonical spelling before they reach a descriptor.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maps a match-mode synonym to its canonical spelling.
///
/// | input | output |
/// |---|---|
/// | `after`, `dateAfter` | `gt` |
/// | `before`, `dateBefore` | `lt` |
/// | `is`, `dateIs` | `equals` |
/// | `isNot`, `dateIsNot` | `notEquals` |
///
/// Matching is exact and case-sensitive. Anything else is returned unchanged.
///
/// ```
/// use ui_filter::normalize_match_mode;
///
/// assert_eq!(normalize_match_mode("dateAfter"), "gt");
/// assert_eq!(normalize_match_mode("contains"), "contains");
/// assert_eq!(normalize_match_mode("DateAfter"), "DateAfter");
/// ```
pub fn normalize_match_mode(mode: &str) -> &str {
    match mode {
        "after" | "dateAfter" => "gt",
        "before" | "dateBefore" => "lt",
        "is" | "dateIs" => "equals",
        "isNot" | "dateIsNot" => "notEquals",
        other => other,
    }
}

/// How a filter value is compared against a field.
///
/// Parsing always succeeds: synonyms are normalized first, and strings
/// outside the vocabulary are kept verbatim in [`MatchMode::Custom`].
///
/// Serializes as its canonical string (`"startsWith"`, `"gt"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchMode {
    // Text modes
    /// Field starts with the value.
    StartsWith,
    /// Field contains the value.
    Contains,
    /// Field does not contain the value.
    NotContains,
    /// Field ends with the value.
    EndsWith,

    // Equality
    /// Field equals the value.
    Equals,
    /// Field differs from the value.
    NotEquals,

    // Ordering
    /// Field is less than the value.
    Lt,
    /// Field is less than or equal to the value.
    Lte,
    /// Field is greater than the value.
    Gt,
    /// Field is greater than or equal to the value.
    Gte,

    // List-valued
    /// Field is one of the listed values.
    In,
    /// Field lies between the two listed bounds.
    Between,

    /// A mode this crate does not know about, passed through unchanged.
    Custom(String),
}

impl MatchMode {
    /// Parses a match mode, normalizing synonyms first.
    pub fn parse(mode: &str) -> MatchMode {
        match normalize_match_mode(mode) {
            "startsWith" => MatchMode::StartsWith,
            "contains" => MatchMode::Contains,
            "notContains" => MatchMode::NotContains,
            "endsWith" => MatchMode::EndsWith,
            "equals" => MatchMode::Equals,
            "notEquals" => MatchMode::NotEquals,
            "lt" => MatchMode::Lt,
            "lte" => MatchMode::Lte,
            "gt" => MatchMode::Gt,
            "gte" => MatchMode::Gte,
            "in" => MatchMode::In,
            "between" => MatchMode::Between,
            other => MatchMode::Custom(other.to_string()),
        }
    }

    /// Returns the canonical string for this mode.
    pub fn as_str(&self) -> &str {
        match self {
            MatchMode::StartsWith => "startsWith",
            MatchMode::Contains => "contains",
            MatchMode::NotContains => "notContains",
            MatchMode::EndsWith => "endsWith",
            MatchMode::Equals => "equals",
            MatchMode::NotEquals => "notEquals",
            MatchMode::Lt => "lt",
            MatchMode::Lte => "lte",
            MatchMode::Gt => "gt",
            MatchMode::Gte => "gte",
            MatchMode::In => "in",
            MatchMode::Between => "between",
            MatchMode::Custom(mode) => mode,
        }
    }

    /// Returns `true` for modes that only make sense on text fields.
    pub fn is_text_mode(&self) -> bool {
        matches!(
            self,
            MatchMode::StartsWith
                | MatchMode::Contains
                | MatchMode::NotContains
                | MatchMode::EndsWith
        )
    }

    /// Returns `true` for modes that need an ordered field type.
    pub fn is_ordering_mode(&self) -> bool {
        matches!(
            self,
            MatchMode::Lt | MatchMode::Lte | MatchMode::Gt | MatchMode::Gte | MatchMode::Between
        )
    }

    /// Returns `true` if the filter value is expected to be a list.
    pub fn expects_list(&self) -> bool {
        matches!(self, MatchMode::In | MatchMode::Between)
    }

    /// Returns `true` if this mode is outside the canonical vocabulary.
    pub fn is_custom(&self) -> bool {
        matches!(self, MatchMode::Custom(_))
    }
}

impl FromStr for MatchMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MatchMode::parse(s))
    }
}

impl From<&str> for MatchMode {
    fn from(s: &str) -> Self {
        MatchMode::parse(s)
    }
}

impl From<String> for MatchMode {
    fn from(s: String) -> Self {
        MatchMode::parse(&s)
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MatchMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mode = String::deserialize(deserializer)?;
        Ok(MatchMode::parse(&mode))
    }
}
