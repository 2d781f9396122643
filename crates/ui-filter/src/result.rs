//! The page-of-results envelope a table displays.

use serde::{Deserialize, Serialize};

/// One page of records plus the total match count across all pages.
///
/// The total drives the table's paginator; `records.len()` is at most the
/// requested row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope<T> {
    /// The records on this page.
    pub records: Vec<T>,
    /// Total matching records across all pages.
    pub total_records: u64,
}

impl<T> ResultEnvelope<T> {
    /// Wraps a page of records.
    pub fn new(records: Vec<T>, total_records: u64) -> Self {
        ResultEnvelope {
            records,
            total_records,
        }
    }

    /// An envelope with no records and a zero total.
    pub fn empty() -> Self {
        ResultEnvelope::new(Vec::new(), 0)
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of pages of `rows` records needed to show the total.
    ///
    /// Returns `None` for a zero page size.
    pub fn page_count(&self, rows: u64) -> Option<u64> {
        if rows == 0 {
            None
        } else {
            Some(self.total_records.div_ceil(rows))
        }
    }

    /// Transforms each record, keeping the total.
    pub fn map<U, F>(self, f: F) -> ResultEnvelope<U>
    where
        F: FnMut(T) -> U,
    {
        ResultEnvelope {
            records: self.records.into_iter().map(f).collect(),
            total_records: self.total_records,
        }
    }
}

impl<T> Default for ResultEnvelope<T> {
    fn default() -> Self {
        ResultEnvelope::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basics() {
        let env = ResultEnvelope::new(vec!["a", "b"], 12);
        assert_eq!(env.len(), 2);
        assert!(!env.is_empty());
        assert_eq!(env.total_records, 12);

        let empty: ResultEnvelope<u8> = ResultEnvelope::default();
        assert!(empty.is_empty());
        assert_eq!(empty.total_records, 0);
    }

    #[test]
    fn page_count_rounds_up() {
        let env = ResultEnvelope::new(vec![1, 2, 3], 21);
        assert_eq!(env.page_count(10), Some(3));
        assert_eq!(env.page_count(21), Some(1));
        assert_eq!(env.page_count(0), None);
        assert_eq!(ResultEnvelope::<u8>::empty().page_count(10), Some(0));
    }

    #[test]
    fn map_keeps_total() {
        let env = ResultEnvelope::new(vec![1, 2], 40).map(|n| n * 10);
        assert_eq!(env.records, vec![10, 20]);
        assert_eq!(env.total_records, 40);
    }

    #[test]
    fn serializes_camel_case() {
        let env = ResultEnvelope::new(vec!["x"], 1);
        assert_eq!(
            serde_json::to_string(&env).unwrap(),
            r#"{"records":["x"],"totalRecords":1}"#
        );
        let back: ResultEnvelope<String> =
            serde_json::from_str(r#"{"records":["y"],"totalRecords":9}"#).unwrap();
        assert_eq!(back.records, vec!["y".to_string()]);
        assert_eq!(back.total_records, 9);
    }
}
