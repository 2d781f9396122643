//! Sort entries for filter descriptors.
//!
//! Provides [`SortDirection`] and [`SortEntry`], one field of a possibly
//! multi-column sort.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl SortDirection {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    /// Returns the signed order value tables use: `1` or `-1`.
    pub fn as_order(self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(FilterError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// A single sort field and its signed order.
///
/// Positive orders sort ascending, anything else descending. The magnitude
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    /// The field to sort by.
    pub field: String,
    /// Signed sort order.
    pub order: i32,
}

impl SortEntry {
    /// Creates a sort entry with a raw order value.
    pub fn new(field: impl Into<String>, order: i32) -> Self {
        SortEntry {
            field: field.into(),
            order,
        }
    }

    /// Creates an ascending sort entry.
    pub fn asc(field: impl Into<String>) -> Self {
        SortEntry::new(field, SortDirection::Asc.as_order())
    }

    /// Creates a descending sort entry.
    pub fn desc(field: impl Into<String>) -> Self {
        SortEntry::new(field, SortDirection::Desc.as_order())
    }

    /// Returns the direction implied by the order's sign.
    pub fn direction(&self) -> SortDirection {
        if self.order > 0 {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}
