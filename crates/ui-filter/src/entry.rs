//! A single normalized filter constraint.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::event::FilterMetadata;
use crate::match_mode::{normalize_match_mode, MatchMode};
use crate::operator::FilterOperator;
use crate::value::FilterValue;

/// One filter constraint on a field, as sent to the backend.
///
/// The match mode is always canonical (see [`normalize_match_mode`]); the
/// operator is carried as given.
///
/// # Example
///
/// ```
/// use ui_filter::{FilterEntry, FilterMetadata, MatchMode};
///
/// let md = FilterMetadata::new("2024-01-01").match_mode("dateAfter");
/// let entry = FilterEntry::from_metadata(&md).unwrap();
/// assert_eq!(entry.match_mode, Some(MatchMode::Gt));
/// assert_eq!(entry.operator, None);
///
/// // Falsy values never produce an entry.
/// assert!(FilterEntry::from_metadata(&FilterMetadata::new("")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEntry {
    /// The value to compare against.
    pub value: FilterValue,
    /// How to compare.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_mode: Option<MatchMode>,
    /// How this constraint combines with its siblings on the same field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<FilterOperator>,
}

impl FilterEntry {
    /// Creates an entry with only a value.
    pub fn new(value: impl Into<FilterValue>) -> Self {
        FilterEntry {
            value: value.into(),
            match_mode: None,
            operator: None,
        }
    }

    /// Sets the match mode, normalizing synonyms.
    pub fn with_match_mode(mut self, mode: impl Into<MatchMode>) -> Self {
        self.match_mode = Some(mode.into());
        self
    }

    /// Sets the operator.
    pub fn with_operator(mut self, op: impl Into<FilterOperator>) -> Self {
        self.operator = Some(op.into());
        self
    }

    /// Builds an entry from raw widget metadata.
    ///
    /// Returns `None` when the value is absent or falsy, regardless of the
    /// match mode or operator.
    pub fn from_metadata(md: &FilterMetadata) -> Option<Self> {
        let value = md.value.as_ref().filter(|v| v.is_truthy())?;

        let match_mode = md.match_mode.as_deref().map(|raw| {
            let canonical = normalize_match_mode(raw);
            if canonical != raw {
                trace!(from = raw, to = canonical, "normalized match mode");
            }
            MatchMode::parse(canonical)
        });

        Some(FilterEntry {
            value: value.clone(),
            match_mode,
            operator: md.operator.as_deref().map(FilterOperator::parse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_value_and_operator() {
        let md = FilterMetadata::new(21).match_mode("lt").operator("and");
        let entry = FilterEntry::from_metadata(&md).unwrap();
        assert_eq!(entry.value, FilterValue::from(21));
        assert_eq!(entry.match_mode, Some(MatchMode::Lt));
        assert_eq!(entry.operator, Some(FilterOperator::And));
    }

    #[test]
    fn normalizes_synonyms() {
        let cases = [
            ("after", MatchMode::Gt),
            ("dateBefore", MatchMode::Lt),
            ("is", MatchMode::Equals),
            ("dateIsNot", MatchMode::NotEquals),
        ];
        for (raw, expected) in cases {
            let md = FilterMetadata::new("v").match_mode(raw);
            let entry = FilterEntry::from_metadata(&md).unwrap();
            assert_eq!(entry.match_mode, Some(expected), "mode {raw}");
        }
    }

    #[test]
    fn missing_mode_stays_missing() {
        let entry = FilterEntry::from_metadata(&FilterMetadata::new("v")).unwrap();
        assert_eq!(entry.match_mode, None);
        assert_eq!(entry.operator, None);
    }

    #[test]
    fn unknown_mode_passes_through() {
        let md = FilterMetadata::new("v").match_mode("soundsLike");
        let entry = FilterEntry::from_metadata(&md).unwrap();
        assert_eq!(
            entry.match_mode,
            Some(MatchMode::Custom("soundsLike".to_string()))
        );
    }

    #[test]
    fn falsy_values_are_dropped() {
        for md in [
            FilterMetadata::default(),
            FilterMetadata::new(""),
            FilterMetadata::new(0),
            FilterMetadata::new(false),
            FilterMetadata {
                value: Some(FilterValue::Null),
                match_mode: Some("equals".into()),
                operator: Some("and".into()),
            },
        ] {
            assert!(FilterEntry::from_metadata(&md).is_none(), "{md:?}");
        }
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let entry = FilterEntry::new("2024-01-01").with_match_mode("dateAfter");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"value":"2024-01-01","matchMode":"gt"}"#
        );
    }
}
