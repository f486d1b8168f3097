//! # tabreport-xlsx
//!
//! XLSX (Office Open XML) writer for tabreport tables.

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
