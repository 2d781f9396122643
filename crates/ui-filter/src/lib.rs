//! ui-filter - Lazy-load events to backend filter descriptors.
//!
//! Data tables that load lazily raise an event whenever the user pages,
//! sorts or filters. This crate turns that event into a small, serializable
//! [`FilterDescriptor`] a backend can act on:
//!
//! - Paging bounds: `first` offset and `rows` count, derived from whatever
//!   the table supplied
//! - Sorting: a single sort field or a multi-column sort, primary first
//! - Filtering: per-column constraints with canonical match modes, falsy
//!   values dropped
//! - A marker naming the global-search key
//!
//! The crate only describes requests. It never filters, sorts or pages data
//! itself and never talks to a backend.
//!
//! # Quick Start
//!
//! ```rust
//! use ui_filter::{FilterDescriptor, MatchMode, SortEntry};
//!
//! let descriptor = FilterDescriptor::from_event_json(r#"{
//!     "first": 20,
//!     "last": 30,
//!     "multiSortMeta": [{"field": "city", "order": 1}, {"field": "age", "order": -1}],
//!     "filters": {
//!         "name": {"value": "Ann", "matchMode": "startsWith"},
//!         "born": [{"value": "1990-01-01", "matchMode": "dateAfter", "operator": "and"},
//!                  {"value": "", "matchMode": "dateBefore", "operator": "and"}]
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(descriptor.first(), Some(20));
//! assert_eq!(descriptor.rows(), Some(10));
//! assert_eq!(
//!     descriptor.sort_fields().unwrap(),
//!     &[SortEntry::asc("city"), SortEntry::desc("age")]
//! );
//!
//! // The empty "before" bound was dropped, the synonym normalized.
//! let born = descriptor.filter("born").unwrap();
//! assert_eq!(born.len(), 1);
//! assert_eq!(born[0].match_mode, Some(MatchMode::Gt));
//!
//! println!("{}", descriptor.to_json().unwrap());
//! ```
//!
//! # Match Modes
//!
//! | Widget emits | Descriptor carries |
//! |------|-----------|
//! | `after`, `dateAfter` | `gt` |
//! | `before`, `dateBefore` | `lt` |
//! | `is`, `dateIs` | `equals` |
//! | `isNot`, `dateIsNot` | `notEquals` |
//! | anything else | unchanged |
//!
//! # Logging
//!
//! Descriptor construction emits `tracing` events at `debug` (one per
//! descriptor) and `trace` (dropped entries, normalized modes). Install any
//! subscriber to see them.

mod descriptor;
mod entry;
mod error;
mod event;
mod match_mode;
mod operator;
mod paging;
mod result;
mod sort;
mod value;

// Re-export public API
pub use descriptor::{
    is_global_field, FilterDescriptor, FilterDescriptorBuilder, GLOBAL_FIELD_NAME,
};
pub use entry::FilterEntry;
pub use error::{FilterError, Result};
pub use event::{FilterMetadata, FilterMetadataSet, LazyLoadEvent, SortField, SortMeta};
pub use match_mode::{normalize_match_mode, MatchMode};
pub use operator::FilterOperator;
pub use paging::PageRequest;
pub use result::ResultEnvelope;
pub use sort::{SortDirection, SortEntry};
pub use value::{FilterValue, Number};
