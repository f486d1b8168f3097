//! # tabreport
//!
//! A Rust library for building tabular reports: styled grids with
//! merged cells, group subtotals, and XLSX output.
//!
//! Tabreport turns rows of raw values into a finished report. Gaps in
//! the input merge into their neighbors on construction, selectors pick
//! out columns and runs of equal values, groups collapse into merged
//! cells, and summary rows with computed totals slot in beneath them.
//! The finished table is written out as an `.xlsx` workbook.
//!
//! ## Example
//!
//! ```rust
//! use tabreport::prelude::*;
//!
//! let mut table = Table::new(
//!     vec![vec!["product".into(), "branch".into(), "sales".into()]],
//!     vec![
//!         vec!["widget".into(), "east".into(), 120.into()],
//!         vec!["widget".into(), "west".into(), 80.into()],
//!         vec!["gadget".into(), "east".into(), 45.into()],
//!     ],
//!     Some(Style::standard()),
//! )
//! .unwrap();
//!
//! // Merge each product's run and give it a subtotal row
//! let groups = table.select(&ColumnSelector::column(1).grouped()).unwrap();
//! groups.merge(&mut table, None).unwrap();
//! groups
//!     .add_summary(&mut table, &Summary::new(1, "total", SummaryLocation::Left))
//!     .unwrap();
//!
//! // Grand total under everything
//! table
//!     .add_body_summary(&Summary::new(2, "all products", SummaryLocation::Bottom))
//!     .unwrap();
//!
//! assert_eq!(table.height(), 7);
//! assert_eq!(table.cell(6, 2).unwrap().value, CellValue::Number(245.0));
//!
//! // write_to_xlsx(&table, "report.xlsx", (0, 0)).unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use tabreport_core::{
    Area, AreaId, Areas, Cell, CellSelector, CellValue, Color, ColumnSelector, Dimension, Entry,
    Error, FontWeight, HorizontalAlign, Result, RowSelector, Selector, Style, StyleId, StylePool,
    Summary, SummaryLocation, Table, VerticalAlign,
};

// Re-export I/O types
pub use tabreport_xlsx::{XlsxError, XlsxResult, XlsxWriter};

use std::path::Path;

/// Write a finished table to an `.xlsx` file
///
/// `position` is the zero-based (row, column) sheet slot the table's
/// top-left cell lands in.
pub fn write_to_xlsx<P: AsRef<Path>>(
    table: &Table,
    path: P,
    position: (usize, usize),
) -> XlsxResult<()> {
    XlsxWriter::write_file(table, path, position)
}
