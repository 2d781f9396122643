//! Page requests derived from a descriptor's offset and row count.

use serde::{Deserialize, Serialize};

/// A page-oriented view of `first`/`rows`, for backends that page by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageRequest {
    /// Fetch every matching record.
    Unpaged,
    /// Fetch one page.
    Paged {
        /// Zero-based page index.
        page: u64,
        /// Records per page.
        size: u64,
    },
}

impl PageRequest {
    /// Derives a page request from an offset and a row count.
    ///
    /// A missing or zero row count means unpaged. A missing offset counts
    /// as zero. The page index rounds down, so an offset in the middle of
    /// a page lands on that page.
    pub fn from_bounds(first: Option<u64>, rows: Option<u64>) -> Self {
        match rows {
            None | Some(0) => PageRequest::Unpaged,
            Some(size) => PageRequest::Paged {
                page: first.unwrap_or(0) / size,
                size,
            },
        }
    }

    /// Returns `true` if this requests a single page.
    pub fn is_paged(&self) -> bool {
        matches!(self, PageRequest::Paged { .. })
    }

    /// Returns the offset of the first record on the page.
    pub fn offset(&self) -> u64 {
        match self {
            PageRequest::Unpaged => 0,
            PageRequest::Paged { page, size } => page * size,
        }
    }

    /// Returns the page size, if paged.
    pub fn limit(&self) -> Option<u64> {
        match self {
            PageRequest::Unpaged => None,
            PageRequest::Paged { size, .. } => Some(*size),
        }
    }
}
