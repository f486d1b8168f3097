//! Summary (subtotal) row parameters

use std::str::FromStr;

use crate::error::Error;
use crate::style::Style;

/// Where a summary row's label sits relative to the summarized area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLocation {
    /// The label goes just right of the summarized column, on the new
    /// row; the column's merged anchor grows to absorb that row
    Left,

    /// The label goes directly below the area's first column
    Bottom,
}

impl FromStr for SummaryLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "left" => Ok(SummaryLocation::Left),
            "down" | "bottom" => Ok(SummaryLocation::Bottom),
            other => Err(Error::UnknownLocation(other.to_string())),
        }
    }
}

/// Parameters for one summary row
///
/// The label occupies `label_span` columns starting at the label
/// position; every column right of it gets a computed total.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Columns the label cell spans; 0 writes no label at all
    pub label_span: usize,
    /// Label text
    pub label: String,
    /// Label placement
    pub location: SummaryLocation,
    /// Style for the label cell, overriding the table default
    pub label_style: Option<Style>,
    /// Style for the total cells, overriding the table default
    pub value_style: Option<Style>,
}

impl Summary {
    /// Create a new summary with unstyled label and totals
    pub fn new<S: Into<String>>(label_span: usize, label: S, location: SummaryLocation) -> Self {
        Summary {
            label_span,
            label: label.into(),
            location,
            label_style: None,
            value_style: None,
        }
    }

    /// Set the label cell style
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = Some(style);
        self
    }

    /// Set the total cell style
    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = Some(style);
        self
    }
}
