//! Filter value types.
//!
//! Table widgets hand over whatever the filter input produced: text, numbers,
//! booleans, date strings, lists for `in`/`between`, or small objects.
//! [`FilterValue`] is the tagged union covering those shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A value supplied by a filter widget.
///
/// Serializes untagged, so it reads and writes the plain JSON shape the
/// widget produced.
///
/// # Example
///
/// ```
/// use ui_filter::FilterValue;
///
/// let v: FilterValue = serde_json::from_str(r#"["a", 2, true]"#).unwrap();
/// assert_eq!(v.as_list().map(|items| items.len()), Some(3));
/// assert!(v.is_truthy());
///
/// assert!(!FilterValue::from("").is_truthy());
/// assert!(!FilterValue::from(0).is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// Text value. Dates arrive as text.
    String(String),
    /// List value, used by list-valued match modes.
    List(Vec<FilterValue>),
    /// Structured value.
    Object(BTreeMap<String, FilterValue>),
}

impl FilterValue {
    /// Returns `true` if the value counts as "set" for filtering purposes.
    ///
    /// Null, `false`, zero, NaN and the empty string are not truthy. Lists
    /// and objects always are, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            FilterValue::Null => false,
            FilterValue::Bool(b) => *b,
            FilterValue::Number(n) => n.is_truthy(),
            FilterValue::String(s) => !s.is_empty(),
            FilterValue::List(_) | FilterValue::Object(_) => true,
        }
    }

    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, FilterValue::Null)
    }

    /// Extracts the text value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the number, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the list items, if present.
    pub fn as_list(&self) -> Option<&[FilterValue]> {
        match self {
            FilterValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Extracts the object fields, if present.
    pub fn as_object(&self) -> Option<&BTreeMap<String, FilterValue>> {
        match self {
            FilterValue::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Numeric filter value.
///
/// Integers keep their sign-appropriate representation; everything else is
/// `F64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Returns `false` for zero and NaN.
    pub fn is_truthy(self) -> bool {
        match self {
            Number::I64(n) => n != 0,
            Number::U64(n) => n != 0,
            Number::F64(n) => n != 0.0 && !n.is_nan(),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

// Conversions into FilterValue

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::String(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::String(s)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl From<Number> for FilterValue {
    fn from(n: Number) -> Self {
        FilterValue::Number(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Number(Number::from(n))
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(Number::from(n))
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        FilterValue::Number(Number::from(n))
    }
}

impl From<u64> for FilterValue {
    fn from(n: u64) -> Self {
        FilterValue::Number(Number::from(n))
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(Number::from(n))
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(items: Vec<T>) -> Self {
        FilterValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for FilterValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FilterValue::Null,
            serde_json::Value::Bool(b) => FilterValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FilterValue::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    FilterValue::Number(Number::U64(u))
                } else {
                    FilterValue::Number(Number::F64(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => FilterValue::String(s),
            serde_json::Value::Array(items) => {
                FilterValue::List(items.into_iter().map(FilterValue::from).collect())
            }
            serde_json::Value::Object(fields) => FilterValue::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, FilterValue::from(v)))
                    .collect(),
            ),
        }
    }
}
