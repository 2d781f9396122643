//! The raw lazy-load event raised by a data table.
//!
//! These types mirror the JSON the table component emits, loosely typed
//! parts included. Shapes that vary at runtime (a sort field that may be a
//! list, filter metadata that may be a single object or a list) are explicit
//! enums here so the descriptor builder can match on them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::value::FilterValue;

/// A lazy-load request from a data table: paging, sorting and filtering state.
///
/// Every field is optional. An event decoded from `{}` is valid and produces
/// an empty descriptor.
///
/// ```
/// use ui_filter::LazyLoadEvent;
///
/// let event = LazyLoadEvent::from_json(r#"{"first": 20, "rows": 10}"#).unwrap();
/// assert_eq!(event.first, Some(20));
/// assert_eq!(event.rows, Some(10));
/// assert!(event.filters.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LazyLoadEvent {
    /// Zero-based offset of the first row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<u64>,
    /// Number of rows requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u64>,
    /// Index one past the last requested row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<u64>,
    /// Single-column sort field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<SortField>,
    /// Single-column sort order: positive ascending, negative descending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Multi-column sort, primary column first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_sort_meta: Option<Vec<SortMeta>>,
    /// Column filters keyed by field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<String, Option<FilterMetadataSet>>>,
}

impl LazyLoadEvent {
    /// Decodes an event from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FilterError::InvalidEvent)
    }
}

/// The single-sort field: a name, or a list of candidate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortField {
    /// A single field name.
    Single(String),
    /// Candidate field names; only the first is used.
    Candidates(Vec<String>),
}

impl SortField {
    /// Returns the field to sort by, if any.
    ///
    /// Empty names count as no field.
    pub fn primary(&self) -> Option<&str> {
        let field = match self {
            SortField::Single(field) => Some(field.as_str()),
            SortField::Candidates(fields) => fields.first().map(String::as_str),
        };
        field.filter(|f| !f.is_empty())
    }
}

impl From<&str> for SortField {
    fn from(field: &str) -> Self {
        SortField::Single(field.to_string())
    }
}

/// One entry of a multi-column sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortMeta {
    /// Field name.
    pub field: String,
    /// Sort order: positive ascending, negative descending.
    pub order: i32,
}

impl SortMeta {
    /// Creates a sort entry.
    pub fn new(field: impl Into<String>, order: i32) -> Self {
        SortMeta {
            field: field.into(),
            order,
        }
    }
}

/// Raw filter metadata for one constraint on one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterMetadata {
    /// The value typed or picked in the filter widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
    /// Match mode as emitted by the widget, synonyms included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_mode: Option<String>,
    /// Operator joining constraints on the same column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl FilterMetadata {
    /// Creates metadata holding a value and nothing else.
    pub fn new(value: impl Into<FilterValue>) -> Self {
        FilterMetadata {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Sets the match mode.
    pub fn match_mode(mut self, mode: impl Into<String>) -> Self {
        self.match_mode = Some(mode.into());
        self
    }

    /// Sets the operator.
    pub fn operator(mut self, op: impl Into<String>) -> Self {
        self.operator = Some(op.into());
        self
    }

    /// Returns `true` if the value is present and truthy.
    pub fn has_value(&self) -> bool {
        self.value.as_ref().is_some_and(FilterValue::is_truthy)
    }
}

/// Filter metadata for one column: a single constraint or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterMetadataSet {
    /// Several constraints, combined by their operator.
    Many(Vec<FilterMetadata>),
    /// A single constraint.
    One(FilterMetadata),
}

impl FilterMetadataSet {
    /// Returns the constraints as a slice, whichever shape arrived.
    pub fn entries(&self) -> &[FilterMetadata] {
        match self {
            FilterMetadataSet::Many(entries) => entries,
            FilterMetadataSet::One(entry) => std::slice::from_ref(entry),
        }
    }
}

impl From<FilterMetadata> for FilterMetadataSet {
    fn from(entry: FilterMetadata) -> Self {
        FilterMetadataSet::One(entry)
    }
}

impl From<Vec<FilterMetadata>> for FilterMetadataSet {
    fn from(entries: Vec<FilterMetadata>) -> Self {
        FilterMetadataSet::Many(entries)
    }
}
