//! Selectors: reusable descriptions of which parts of an area to pick

use crate::area::{AreaId, AreaRect, Areas};
use crate::cell::Cell;
use crate::error::Result;
use crate::table::Table;

/// Picks areas out of an existing area
///
/// Selectors are pure descriptions; running one registers the picked
/// areas with the table so they survive later structural edits.
pub trait Selector {
    fn select(&self, table: &mut Table, within: AreaId) -> Result<Areas>;
}

/// Selects whole columns by a 1-based index predicate
///
/// With [`grouped`](ColumnSelector::grouped), each picked column is
/// further split into runs of equal consecutive values and the runs are
/// returned instead of the column.
pub struct ColumnSelector {
    predicate: Box<dyn Fn(usize) -> bool>,
    grouped: bool,
}

impl ColumnSelector {
    /// Select the columns whose 1-based index satisfies the predicate
    pub fn columns<F>(predicate: F) -> Self
    where
        F: Fn(usize) -> bool + 'static,
    {
        ColumnSelector {
            predicate: Box::new(predicate),
            grouped: false,
        }
    }

    /// Select a single column by 1-based index
    pub fn column(index: usize) -> Self {
        Self::columns(move |col| col == index)
    }

    /// Split each selected column into runs of equal values
    pub fn grouped(mut self) -> Self {
        self.grouped = true;
        self
    }
}

impl Selector for ColumnSelector {
    fn select(&self, table: &mut Table, within: AreaId) -> Result<Areas> {
        let rect = table.rect(within);
        let mut areas = Areas::default();
        for col in 0..rect.width {
            if !(self.predicate)(col + 1) {
                continue;
            }
            if self.grouped {
                let runs = table.group_column(within, col)?;
                areas.0.extend(runs.iter());
            } else {
                let id = table.register(AreaRect {
                    row: rect.row,
                    col: rect.col + col,
                    width: 1,
                    height: rect.height,
                });
                areas.0.push(id);
            }
        }
        Ok(areas)
    }
}

/// Selects whole rows by a 1-based index predicate
pub struct RowSelector {
    predicate: Box<dyn Fn(usize) -> bool>,
}

impl RowSelector {
    /// Select the rows whose 1-based index satisfies the predicate
    pub fn rows<F>(predicate: F) -> Self
    where
        F: Fn(usize) -> bool + 'static,
    {
        RowSelector {
            predicate: Box::new(predicate),
        }
    }

    /// Select a single row by 1-based index
    pub fn row(index: usize) -> Self {
        Self::rows(move |row| row == index)
    }
}

impl Selector for RowSelector {
    fn select(&self, table: &mut Table, within: AreaId) -> Result<Areas> {
        let rect = table.rect(within);
        let mut areas = Areas::default();
        for row in 0..rect.height {
            if !(self.predicate)(row + 1) {
                continue;
            }
            let id = table.register(AreaRect {
                row: rect.row + row,
                col: rect.col,
                width: rect.width,
                height: 1,
            });
            areas.0.push(id);
        }
        Ok(areas)
    }
}

/// Picks individual anchor cells by a predicate on the cell
///
/// Unlike the area selectors this yields positions, not areas: single
/// cells are restyled in place and never need registry tracking.
pub struct CellSelector {
    predicate: Box<dyn Fn(&Cell) -> bool>,
}

impl CellSelector {
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&Cell) -> bool + 'static,
    {
        CellSelector {
            predicate: Box::new(predicate),
        }
    }

    /// Table-absolute (row, col) of every matching anchor, row-major
    pub fn select(&self, table: &Table, within: AreaId) -> Vec<(usize, usize)> {
        let area = table.area(within);
        let (base_row, base_col) = area.position();
        let mut positions = Vec::new();
        for row in 0..area.height() {
            for col in 0..area.width() {
                if let Some(cell) = area.cell(row, col) {
                    if (self.predicate)(cell) {
                        positions.push((base_row + row, base_col + col));
                    }
                }
            }
        }
        positions
    }
}
