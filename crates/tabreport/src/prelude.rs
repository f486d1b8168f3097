//! Commonly used types, for glob import
//!
//! ```rust
//! use tabreport::prelude::*;
//! ```

pub use tabreport_core::{
    Area, AreaId, Areas, Cell, CellSelector, CellValue, Color, ColumnSelector, Dimension, Entry,
    FontWeight, HorizontalAlign, RowSelector, Selector, Style, Summary, SummaryLocation, Table,
    VerticalAlign,
};
pub use tabreport_xlsx::XlsxWriter;

pub use crate::write_to_xlsx;
