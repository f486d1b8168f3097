//! Cell values, anchor cells, and construction entries

use std::fmt;

use crate::error::{Error, Result};
use crate::style::{Style, StyleId};

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric value (all numbers stored as f64; totals operate on these)
    Number(f64),

    /// Text value
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
        }
    }

    /// Compare two values, failing loudly when their kinds differ
    ///
    /// Silent `false` on a number/text comparison hides data errors in
    /// report input, so a mismatch is reported instead of swallowed.
    pub fn try_eq(&self, other: &CellValue) -> Result<bool> {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => Ok(a == b),
            (CellValue::Text(a), CellValue::Text(b)) => Ok(a == b),
            (left, right) => Err(Error::TypeMismatch {
                left: left.type_name(),
                right: right.type_name(),
            }),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// An anchor cell: a value plus the span it covers and an optional style
///
/// The grid stores one `Cell` per merged span, at the span's top-left
/// position. Slots covered by the span hold nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// Number of columns the cell spans (1 = unmerged)
    pub width: usize,
    /// Number of rows the cell spans (1 = unmerged)
    pub height: usize,
    /// Style reference into the owning table's pool, if styled
    pub style: Option<StyleId>,
}

impl Cell {
    /// Create a new unmerged, unstyled cell
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Cell {
            value: value.into(),
            width: 1,
            height: 1,
            style: None,
        }
    }

    /// Set the span
    pub fn with_span(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the style reference
    pub fn with_style(mut self, style: StyleId) -> Self {
        self.style = Some(style);
        self
    }

    /// Whether the cell spans more than one slot
    pub fn is_merged(&self) -> bool {
        self.width > 1 || self.height > 1
    }

    /// Compare the cell's value against a raw value, failing loudly on a
    /// kind mismatch
    pub fn matches<V: Into<CellValue>>(&self, raw: V) -> Result<bool> {
        self.value.try_eq(&raw.into())
    }
}

/// One position in the construction input
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A plain value
    Value(CellValue),

    /// A value with a cell-level style overriding the table default
    Styled(CellValue, Style),

    /// An intentionally empty position, absorbed into a neighboring span
    /// during auto-merge
    Gap,
}

impl Entry {
    /// Create a styled entry
    pub fn styled<V: Into<CellValue>>(value: V, style: Style) -> Self {
        Entry::Styled(value.into(), style)
    }
}

impl<V: Into<CellValue>> From<V> for Entry {
    fn from(value: V) -> Self {
        Entry::Value(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_try_eq_same_kind() {
        assert!(CellValue::Number(1.0)
            .try_eq(&CellValue::Number(1.0))
            .unwrap());
        assert!(!CellValue::Number(1.0)
            .try_eq(&CellValue::Number(2.0))
            .unwrap());
        assert!(CellValue::text("a").try_eq(&CellValue::text("a")).unwrap());
    }

    #[test]
    fn test_try_eq_kind_mismatch() {
        let err = CellValue::Number(1.0)
            .try_eq(&CellValue::text("1"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                left: "number",
                right: "text",
            }
        ));
    }

    #[test]
    fn test_cell_matches() {
        let cell = Cell::new(3);
        assert!(cell.matches(3).unwrap());
        assert!(!cell.matches(4).unwrap());
        assert!(cell.matches("3").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(12.0).to_string(), "12");
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
        assert_eq!(CellValue::text("total").to_string(), "total");
    }

    #[test]
    fn test_entry_from() {
        assert_eq!(Entry::from(2), Entry::Value(CellValue::Number(2.0)));
        assert_eq!(Entry::from("x"), Entry::Value(CellValue::text("x")));
    }
}
