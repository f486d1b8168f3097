//! Backing cell store shared by every area of a table

use crate::cell::Cell;

/// Row-major store of anchor cells
///
/// One slot per grid position; `None` marks a slot covered by a merged
/// span anchored up or to the left of it. Every row is exactly `width`
/// slots long.
#[derive(Debug, Default)]
pub(crate) struct Grid {
    rows: Vec<Vec<Option<Cell>>>,
    width: usize,
}

impl Grid {
    pub fn new(width: usize) -> Self {
        Grid {
            rows: Vec::new(),
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn push_row(&mut self, row: Vec<Option<Cell>>) {
        debug_assert_eq!(row.len(), self.width);
        self.rows.push(row);
    }

    /// The anchor at (row, col); `None` for covered or out-of-range slots
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.get_mut(col)?.as_mut()
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Option<Cell>) {
        self.rows[row][col] = cell;
    }

    pub fn take(&mut self, row: usize, col: usize) -> Option<Cell> {
        self.rows[row][col].take()
    }

    /// Insert an all-covered row at `at`, shifting later rows down
    pub fn insert_blank_row(&mut self, at: usize) {
        self.rows.insert(at, vec![None; self.width]);
    }

    pub fn row(&self, row: usize) -> &[Option<Cell>] {
        &self.rows[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_blank_row_shifts() {
        let mut grid = Grid::new(2);
        grid.push_row(vec![Some(Cell::new(1)), Some(Cell::new(2))]);
        grid.push_row(vec![Some(Cell::new(3)), Some(Cell::new(4))]);

        grid.insert_blank_row(1);

        assert_eq!(grid.height(), 3);
        assert!(grid.row(1).iter().all(Option::is_none));
        assert_eq!(grid.get(2, 0), Some(&Cell::new(3)));
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = Grid::new(1);
        assert_eq!(grid.get(0, 0), None);
    }
}
