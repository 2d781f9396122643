//! Filter descriptor: the aggregate built from one lazy-load event.
//!
//! A [`FilterDescriptor`] says which slice of data a table wants: paging
//! bounds, sort order and per-column filter constraints. It is built once
//! per event and never changes afterwards; a new event yields a new
//! descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::entry::FilterEntry;
use crate::error::{FilterError, Result};
use crate::event::{FilterMetadataSet, LazyLoadEvent, SortField};
use crate::operator::FilterOperator;
use crate::paging::PageRequest;
use crate::sort::SortEntry;

/// Filter key the table uses for its search-all-columns box.
///
/// Descriptors built from an event carry this as
/// [`FilterDescriptor::global_field_name`] whenever the event had filters,
/// whether or not a global filter is actually among them.
pub const GLOBAL_FIELD_NAME: &str = "global";

/// Returns `true` if `field` is the conventional global-search key.
pub fn is_global_field(field: &str) -> bool {
    field == GLOBAL_FIELD_NAME
}

/// Paging, sorting and filtering request for a backend.
///
/// Every part is optional. Absent parts are omitted when serialized.
///
/// # Example
///
/// ```
/// use ui_filter::{FilterDescriptor, LazyLoadEvent, MatchMode, GLOBAL_FIELD_NAME};
///
/// let event = LazyLoadEvent::from_json(r#"{
///     "first": 0,
///     "rows": 25,
///     "sortField": "name",
///     "sortOrder": 1,
///     "filters": {"createdAt": {"value": "2024-01-01", "matchMode": "dateAfter"}}
/// }"#).unwrap();
///
/// let descriptor = FilterDescriptor::from_event(&event);
/// assert_eq!(descriptor.rows(), Some(25));
/// assert_eq!(descriptor.sort_fields().unwrap()[0].field, "name");
///
/// let created = descriptor.filter("createdAt").unwrap();
/// assert_eq!(created[0].match_mode, Some(MatchMode::Gt));
/// assert_eq!(descriptor.global_field_name(), Some(GLOBAL_FIELD_NAME));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort_fields: Option<Vec<SortEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filters: Option<BTreeMap<String, Vec<FilterEntry>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    global_field_name: Option<String>,
}

impl FilterDescriptor {
    /// Builds a descriptor from a lazy-load event.
    ///
    /// Never fails. Zero offsets, counts and sort orders count as not
    /// supplied, as do empty sort field names.
    ///
    /// - `rows`: the explicit row count, else `last - first`, else `last`.
    /// - `sort_fields`: the multi-sort list if present (single-sort fields
    ///   are then ignored), else the single sort field with a non-zero order.
    /// - `filters`: entries with falsy values are dropped, fields left with
    ///   no entries are omitted, match modes are normalized.
    /// - `global_field_name`: [`GLOBAL_FIELD_NAME`] whenever the event had a
    ///   filters map, even an empty one.
    pub fn from_event(event: &LazyLoadEvent) -> Self {
        let (filters, global_field_name) = match &event.filters {
            Some(raw) => (
                Some(build_filters(raw)),
                Some(GLOBAL_FIELD_NAME.to_string()),
            ),
            None => (None, None),
        };

        let descriptor = FilterDescriptor {
            first: event.first,
            rows: resolve_rows(event),
            sort_fields: resolve_sort_fields(event),
            filters,
            global_field_name,
        };

        debug!(
            first = ?descriptor.first,
            rows = ?descriptor.rows,
            sort_fields = descriptor.sort_fields.as_ref().map_or(0, Vec::len),
            filter_fields = descriptor.filters.as_ref().map_or(0, BTreeMap::len),
            "built filter descriptor"
        );

        descriptor
    }

    /// Decodes a lazy-load event from JSON and builds its descriptor.
    pub fn from_event_json(json: &str) -> Result<Self> {
        let event = LazyLoadEvent::from_json(json)?;
        Ok(FilterDescriptor::from_event(&event))
    }

    /// Decodes a descriptor from its own JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FilterError::InvalidDescriptor)
    }

    /// Encodes this descriptor as JSON, omitting absent parts.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(FilterError::Encode)
    }

    /// Starts a descriptor by hand.
    pub fn builder() -> FilterDescriptorBuilder {
        FilterDescriptorBuilder::default()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Zero-based offset of the first record to fetch.
    pub fn first(&self) -> Option<u64> {
        self.first
    }

    /// Number of records to fetch.
    pub fn rows(&self) -> Option<u64> {
        self.rows
    }

    /// Sort entries, primary first.
    pub fn sort_fields(&self) -> Option<&[SortEntry]> {
        self.sort_fields.as_deref()
    }

    /// Filter entries keyed by field name.
    pub fn filters(&self) -> Option<&BTreeMap<String, Vec<FilterEntry>>> {
        self.filters.as_ref()
    }

    /// Filter entries for one field.
    pub fn filter(&self, field: &str) -> Option<&[FilterEntry]> {
        self.filters.as_ref()?.get(field).map(Vec::as_slice)
    }

    /// The key under which a global search would be stored.
    pub fn global_field_name(&self) -> Option<&str> {
        self.global_field_name.as_deref()
    }

    /// Returns `true` if no part of the descriptor is set.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
            && self.rows.is_none()
            && self.sort_fields.is_none()
            && self.filters.is_none()
            && self.global_field_name.is_none()
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    /// Entries stored under the global field name, if both exist.
    pub fn global_filters(&self) -> Option<&[FilterEntry]> {
        let global = self.global_field_name.as_deref()?;
        self.filter(global)
    }

    /// Per-column filters, skipping the global-search key.
    pub fn column_filters(&self) -> impl Iterator<Item = (&str, &[FilterEntry])> + '_ {
        let global = self.global_field_name.as_deref();
        self.filters
            .iter()
            .flatten()
            .filter(move |(field, _)| Some(field.as_str()) != global)
            .map(|(field, entries)| (field.as_str(), entries.as_slice()))
    }

    /// How the entries on `field` combine: the first explicit operator among
    /// them, else [`FilterOperator::Or`].
    pub fn operator_for(&self, field: &str) -> FilterOperator {
        self.filter(field)
            .and_then(|entries| entries.iter().find_map(|e| e.operator.clone()))
            .unwrap_or_default()
    }

    /// The sort to apply: the requested one, else ascending on
    /// `default_field` when it is not blank, else none.
    pub fn sort_or_default(&self, default_field: Option<&str>) -> Vec<SortEntry> {
        match self.sort_fields.as_deref() {
            Some(sort) if !sort.is_empty() => sort.to_vec(),
            _ => default_field
                .filter(|f| !f.trim().is_empty())
                .map(|f| vec![SortEntry::asc(f)])
                .unwrap_or_default(),
        }
    }

    /// Page-oriented view of `first` and `rows`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_bounds(self.first, self.rows)
    }
}

impl From<&LazyLoadEvent> for FilterDescriptor {
    fn from(event: &LazyLoadEvent) -> Self {
        FilterDescriptor::from_event(event)
    }
}

impl From<LazyLoadEvent> for FilterDescriptor {
    fn from(event: LazyLoadEvent) -> Self {
        FilterDescriptor::from_event(&event)
    }
}

fn supplied(n: Option<u64>) -> Option<u64> {
    n.filter(|&n| n != 0)
}

fn resolve_rows(event: &LazyLoadEvent) -> Option<u64> {
    if let Some(rows) = supplied(event.rows) {
        return Some(rows);
    }
    match (supplied(event.last), supplied(event.first)) {
        (Some(last), Some(first)) => Some(last.saturating_sub(first)),
        (Some(last), None) => Some(last),
        _ => None,
    }
}

fn resolve_sort_fields(event: &LazyLoadEvent) -> Option<Vec<SortEntry>> {
    if let Some(meta) = &event.multi_sort_meta {
        return Some(
            meta.iter()
                .map(|m| SortEntry::new(m.field.clone(), m.order))
                .collect(),
        );
    }

    let field = event.sort_field.as_ref().and_then(SortField::primary)?;
    let order = event.sort_order.filter(|&o| o != 0)?;
    Some(vec![SortEntry::new(field, order)])
}

fn build_filters(
    raw: &BTreeMap<String, Option<FilterMetadataSet>>,
) -> BTreeMap<String, Vec<FilterEntry>> {
    let mut filters = BTreeMap::new();

    for (field, set) in raw {
        let Some(set) = set else { continue };

        let entries: Vec<FilterEntry> = set
            .entries()
            .iter()
            .filter_map(|md| {
                let entry = FilterEntry::from_metadata(md);
                if entry.is_none() {
                    trace!(field = %field, match_mode = ?md.match_mode, "dropped filter without value");
                }
                entry
            })
            .collect();

        if !entries.is_empty() {
            filters.insert(field.clone(), entries);
        }
    }

    filters
}

/// Assembles a [`FilterDescriptor`] directly, without an event.
///
/// Repeated [`add_filter`](Self::add_filter) calls on one field append to
/// that field's list in call order.
///
/// ```
/// use ui_filter::{FilterDescriptor, FilterEntry, MatchMode};
///
/// let descriptor = FilterDescriptor::builder()
///     .first(10)
///     .add_sort_field("foo", 1)
///     .add_sort_field("bar", -1)
///     .add_filter("state", FilterEntry::new("Massachusetts"))
///     .add_filter("state", FilterEntry::new("Connecticut"))
///     .add_filter("age", FilterEntry::new(21).with_match_mode(MatchMode::Lt))
///     .build();
///
/// assert_eq!(descriptor.first(), Some(10));
/// assert_eq!(descriptor.sort_fields().map(|s| s.len()), Some(2));
/// assert_eq!(descriptor.filter("state").map(|f| f.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterDescriptorBuilder {
    first: Option<u64>,
    rows: Option<u64>,
    sort_fields: Vec<SortEntry>,
    filters: BTreeMap<String, Vec<FilterEntry>>,
    global_field_name: Option<String>,
}

impl FilterDescriptorBuilder {
    /// Sets the offset of the first record.
    pub fn first(mut self, first: u64) -> Self {
        self.first = Some(first);
        self
    }

    /// Sets the number of records to fetch.
    pub fn rows(mut self, rows: u64) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Appends a sort field.
    pub fn add_sort_field(mut self, field: impl Into<String>, order: i32) -> Self {
        self.sort_fields.push(SortEntry::new(field, order));
        self
    }

    /// Appends a filter entry to `field`, creating its list on first use.
    pub fn add_filter(mut self, field: impl Into<String>, entry: FilterEntry) -> Self {
        self.filters.entry(field.into()).or_default().push(entry);
        self
    }

    /// Sets the global-search key.
    pub fn global_field_name(mut self, name: impl Into<String>) -> Self {
        self.global_field_name = Some(name.into());
        self
    }

    /// Finalizes the descriptor. Empty sort and filter collections are
    /// left absent.
    pub fn build(self) -> FilterDescriptor {
        FilterDescriptor {
            first: self.first,
            rows: self.rows,
            sort_fields: (!self.sort_fields.is_empty()).then_some(self.sort_fields),
            filters: (!self.filters.is_empty()).then_some(self.filters),
            global_field_name: self.global_field_name,
        }
    }
}
