//! # tabreport-core
//!
//! Core model for building tabular reports: a grid of styled, possibly
//! merged cells, plus areas, selectors, and summary rows over it.
//!
//! A report starts as header and body rows. Intentional gaps in the
//! input merge into their neighbors on construction. From there,
//! selectors pick out columns or value groups, groups collapse into
//! merged cells, and summary rows with computed totals slot in beneath
//! them. Every area handed out stays aimed at the same cells while rows
//! shift underneath it.
//!
//! ## Example
//!
//! ```rust
//! use tabreport_core::{ColumnSelector, Summary, SummaryLocation, Table};
//!
//! let mut table = Table::new(
//!     vec![vec!["region".into(), "city".into(), "units".into()]],
//!     vec![
//!         vec!["north".into(), "ayr".into(), 10.into()],
//!         vec!["north".into(), "wick".into(), 12.into()],
//!         vec!["south".into(), "rye".into(), 7.into()],
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! // One area per run of equal region values
//! let groups = table.select(&ColumnSelector::column(1).grouped()).unwrap();
//! assert_eq!(groups.len(), 2);
//!
//! groups.merge(&mut table, None).unwrap();
//! groups
//!     .add_summary(&mut table, &Summary::new(1, "total", SummaryLocation::Left))
//!     .unwrap();
//!
//! // Each group gained a total row: 10 + 12, then 7
//! assert_eq!(table.height(), 6);
//! assert_eq!(table.cell(3, 2).unwrap().value.to_string(), "22");
//! assert_eq!(table.cell(5, 2).unwrap().value.to_string(), "7");
//! ```

pub mod area;
pub mod cell;
pub mod error;
mod grid;
pub mod select;
pub mod style;
pub mod summary;
pub mod table;

pub use area::{Area, AreaId, Areas};
pub use cell::{Cell, CellValue, Entry};
pub use error::{Error, Result};
pub use select::{CellSelector, ColumnSelector, RowSelector, Selector};
pub use style::{
    Color, Dimension, FontWeight, HorizontalAlign, Style, StyleId, StylePool, VerticalAlign,
};
pub use summary::{Summary, SummaryLocation};
pub use table::Table;
