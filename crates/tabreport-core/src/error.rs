//! Core error types

use thiserror::Error;

/// Result type for report-building operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a report
#[derive(Debug, Error)]
pub enum Error {
    /// Construction input rows have differing lengths
    #[error("ragged input: row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Summary location string was not recognized
    #[error("unknown summary location: {0:?}")]
    UnknownLocation(String),

    /// Grouping was requested on an area wider than one column
    #[error("grouping requires a single-column area, got width {0}")]
    GroupWidth(usize),

    /// A selection expected to hold exactly one area held a different count
    #[error("expected exactly one area, selection holds {0}")]
    SelectionCount(usize),

    /// A summary tried to total a column containing non-numeric content
    #[error("cannot total {found} at row {row}, column {col}")]
    NonNumericSummary {
        row: usize,
        col: usize,
        found: &'static str,
    },

    /// Values of different kinds were compared
    #[error("cannot compare {left} with {right}")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// An operation needed an anchor cell where only a covered slot exists
    #[error("no anchor cell at row {row}, column {col}")]
    MissingAnchor { row: usize, col: usize },

    /// A merge would cut through a span that extends past the area bounds
    #[error("merged span at row {row}, column {col} extends past the target bounds")]
    MergeOverlap { row: usize, col: usize },

    /// A write landed on a slot covered by a merged span
    #[error("row {row}, column {col} is covered by a merged span")]
    CoveredSlot { row: usize, col: usize },

    /// Area-relative coordinates fell outside the area
    #[error("row {row}, column {col} is outside the area")]
    OutOfBounds { row: usize, col: usize },
}
