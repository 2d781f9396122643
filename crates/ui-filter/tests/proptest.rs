//! Property-based tests for descriptor construction using proptest.

use std::collections::BTreeMap;

use proptest::prelude::*;
use ui_filter::{
    normalize_match_mode, FilterDescriptor, FilterMetadata, FilterMetadataSet, FilterValue,
    LazyLoadEvent, MatchMode, SortField, SortMeta, GLOBAL_FIELD_NAME,
};

// ============================================================================
// Strategies
// ============================================================================

const SYNONYMS: [&str; 8] = [
    "after",
    "dateAfter",
    "before",
    "dateBefore",
    "is",
    "dateIs",
    "isNot",
    "dateIsNot",
];

fn falsy_value() -> impl Strategy<Value = Option<FilterValue>> {
    prop_oneof![
        Just(None),
        Just(Some(FilterValue::Null)),
        Just(Some(FilterValue::from(""))),
        Just(Some(FilterValue::from(0))),
        Just(Some(FilterValue::from(false))),
    ]
}

fn truthy_value() -> impl Strategy<Value = Option<FilterValue>> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|s| Some(FilterValue::from(s))),
        (1i64..1000).prop_map(|n| Some(FilterValue::from(n))),
        Just(Some(FilterValue::from(true))),
    ]
}

fn any_mode() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(SYNONYMS.to_vec()).prop_map(|s| Some(s.to_string())),
        "[a-zA-Z]{1,10}".prop_map(Some),
    ]
}

fn metadata() -> impl Strategy<Value = FilterMetadata> {
    (
        prop_oneof![falsy_value(), truthy_value()],
        any_mode(),
        prop::option::of(prop_oneof![Just("and".to_string()), Just("or".to_string())]),
    )
        .prop_map(|(value, match_mode, operator)| FilterMetadata {
            value,
            match_mode,
            operator,
        })
}

fn filters() -> impl Strategy<Value = BTreeMap<String, Option<FilterMetadataSet>>> {
    prop::collection::btree_map(
        "[a-z]{1,6}",
        prop_oneof![
            metadata().prop_map(|md| Some(FilterMetadataSet::One(md))),
            prop::collection::vec(metadata(), 0..5).prop_map(|v| Some(FilterMetadataSet::Many(v))),
            Just(None),
        ],
        0..6,
    )
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Normalizing twice gives the same result as normalizing once.
    #[test]
    fn normalization_is_idempotent(mode in "[a-zA-Z]{0,12}") {
        let once = normalize_match_mode(&mode);
        prop_assert_eq!(normalize_match_mode(once), once);
    }

    /// Strings outside the synonym table come back unchanged.
    #[test]
    fn unknown_modes_are_identity(mode in "[a-zA-Z]{0,12}") {
        prop_assume!(!SYNONYMS.contains(&mode.as_str()));
        prop_assert_eq!(normalize_match_mode(&mode), mode.as_str());
        let parsed = MatchMode::parse(&mode);
        prop_assert_eq!(parsed.as_str(), mode.as_str());
    }

    /// No falsy value ever reaches a descriptor, and no key maps to an empty list.
    #[test]
    fn falsy_excluded_and_no_empty_keys(raw in filters()) {
        let event = LazyLoadEvent { filters: Some(raw.clone()), ..Default::default() };
        let d = FilterDescriptor::from_event(&event);

        prop_assert_eq!(d.global_field_name(), Some(GLOBAL_FIELD_NAME));
        let built = d.filters().unwrap();
        for (field, entries) in built {
            prop_assert!(!entries.is_empty());
            prop_assert!(raw.contains_key(field));
            for entry in entries {
                prop_assert!(entry.value.is_truthy());
            }
        }

        // Every field with at least one truthy entry survives, with the same count.
        for (field, set) in &raw {
            let truthy = set
                .as_ref()
                .map_or(0, |s| s.entries().iter().filter(|md| md.has_value()).count());
            prop_assert_eq!(d.filter(field).map_or(0, <[_]>::len), truthy);
        }
    }

    /// Every surviving match mode is already canonical.
    #[test]
    fn built_modes_are_canonical(raw in filters()) {
        let event = LazyLoadEvent { filters: Some(raw), ..Default::default() };
        let d = FilterDescriptor::from_event(&event);
        for entries in d.filters().unwrap().values() {
            for mode in entries.iter().filter_map(|e| e.match_mode.as_ref()) {
                prop_assert!(!SYNONYMS.contains(&mode.as_str()));
            }
        }
    }

    /// An explicit non-zero row count always wins.
    #[test]
    fn explicit_rows_win(
        first in prop::option::of(0u64..10_000),
        rows in 1u64..500,
        last in prop::option::of(0u64..10_000),
    ) {
        let event = LazyLoadEvent { first, rows: Some(rows), last, ..Default::default() };
        prop_assert_eq!(FilterDescriptor::from_event(&event).rows(), Some(rows));
    }

    /// Without a row count, rows is the span between first and last.
    #[test]
    fn rows_from_span(first in 1u64..10_000, span in 0u64..500) {
        let event = LazyLoadEvent {
            first: Some(first),
            last: Some(first + span),
            ..Default::default()
        };
        prop_assert_eq!(FilterDescriptor::from_event(&event).rows(), Some(span));
    }

    /// A multi-sort list alone decides the sort, whatever single-sort says.
    #[test]
    fn multi_sort_is_exclusive(
        multi in prop::collection::vec(("[a-z]{1,6}", -3i32..=3), 0..5),
        single in "[a-z]{1,6}",
        order in -3i32..=3,
    ) {
        let meta: Vec<SortMeta> = multi.iter().map(|(f, o)| SortMeta::new(f.clone(), *o)).collect();
        let event = LazyLoadEvent {
            multi_sort_meta: Some(meta),
            sort_field: Some(SortField::Single(single)),
            sort_order: Some(order),
            ..Default::default()
        };
        let d = FilterDescriptor::from_event(&event);
        let sort = d.sort_fields().unwrap();
        prop_assert_eq!(sort.len(), multi.len());
        for (entry, (field, order)) in sort.iter().zip(&multi) {
            prop_assert_eq!(&entry.field, field);
            prop_assert_eq!(entry.order, *order);
        }
    }

    /// Building twice from the same event gives equal descriptors.
    #[test]
    fn construction_is_deterministic(raw in filters(), first in prop::option::of(0u64..100)) {
        let event = LazyLoadEvent { first, filters: Some(raw), ..Default::default() };
        prop_assert_eq!(FilterDescriptor::from_event(&event), FilterDescriptor::from_event(&event));
    }
}
