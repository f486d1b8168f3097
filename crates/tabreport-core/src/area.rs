//! Area views over a table's grid

use crate::cell::{Cell, CellValue};
use crate::error::{Error, Result};
use crate::style::Style;
use crate::summary::Summary;
use crate::table::Table;

/// Handle to an area registered with its table
///
/// Areas are registered, not owned: the table keeps every area's
/// rectangle and moves or grows it when summary rows shift the grid, so
/// a handle obtained before an insertion still points at the same cells
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaId(pub(crate) usize);

/// A registered rectangle, in table-absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AreaRect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl AreaRect {
    /// First row below the rectangle
    pub fn end_row(&self) -> usize {
        self.row + self.height
    }
}

/// Read-only view of one area
///
/// Obtained from [`Table::area`]; coordinates on this view are relative
/// to the area's top-left corner.
#[derive(Clone, Copy)]
pub struct Area<'t> {
    pub(crate) table: &'t Table,
    pub(crate) rect: AreaRect,
}

impl<'t> Area<'t> {
    /// The area's top-left corner in table coordinates
    pub fn position(&self) -> (usize, usize) {
        (self.rect.row, self.rect.col)
    }

    pub fn width(&self) -> usize {
        self.rect.width
    }

    pub fn height(&self) -> usize {
        self.rect.height
    }

    /// The anchor at area-relative (row, col); `None` for covered or
    /// out-of-area positions
    pub fn cell(&self, row: usize, col: usize) -> Option<&'t Cell> {
        if row >= self.rect.height || col >= self.rect.width {
            return None;
        }
        self.table.cell(self.rect.row + row, self.rect.col + col)
    }

    /// The value at area-relative (row, col), if an anchor sits there
    pub fn value(&self, row: usize, col: usize) -> Option<&'t CellValue> {
        self.cell(row, col).map(|c| &c.value)
    }
}

/// An ordered collection of area handles, as produced by selectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Areas(pub(crate) Vec<AreaId>);

impl Areas {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AreaId> + '_ {
        self.0.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<AreaId> {
        self.0.get(index).copied()
    }

    /// The single area in the selection, or an error when the count
    /// differs from one
    pub fn one(&self) -> Result<AreaId> {
        match self.0.as_slice() {
            [id] => Ok(*id),
            other => Err(Error::SelectionCount(other.len())),
        }
    }

    /// Collapse each area into one merged cell; see [`Table::merge`]
    pub fn merge(&self, table: &mut Table, style: Option<&Style>) -> Result<()> {
        for id in self.iter() {
            table.merge(id, style)?;
        }
        Ok(())
    }

    /// Append a summary row below each area, in selection order; see
    /// [`Table::add_summary`]
    ///
    /// Earlier insertions shift later areas before they are processed,
    /// so each summary lands below the rows its area holds at that
    /// moment.
    pub fn add_summary(&self, table: &mut Table, summary: &Summary) -> Result<()> {
        for id in self.iter() {
            table.add_summary(id, summary)?;
        }
        Ok(())
    }

    /// Restyle every anchor inside each area; see [`Table::set_area_style`]
    pub fn set_style(&self, table: &mut Table, style: &Style) {
        for id in self.iter() {
            table.set_area_style(id, style);
        }
    }
}

impl<'a> IntoIterator for &'a Areas {
    type Item = AreaId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, AreaId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for Areas {
    type Output = AreaId;

    fn index(&self, index: usize) -> &AreaId {
        &self.0[index]
    }
}
