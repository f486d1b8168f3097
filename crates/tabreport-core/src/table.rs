//! The table: root owner of the grid, style pool, and area registry

use std::collections::BTreeSet;
use std::mem;

use crate::area::{Area, AreaId, AreaRect, Areas};
use crate::cell::{Cell, CellValue, Entry};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::select::Selector;
use crate::style::{Style, StyleId, StylePool};
use crate::summary::{Summary, SummaryLocation};

/// A styled, partially merged grid under construction
///
/// A table owns the cell grid, the interned styles, and a registry of
/// every area handed out over it. Summary insertion re-aims all
/// registered areas, so handles stay valid across structural edits.
#[derive(Debug)]
pub struct Table {
    grid: Grid,
    styles: StylePool,
    areas: Vec<AreaRect>,
    /// Rows holding computed totals; excluded from later totals
    total_rows: BTreeSet<usize>,
    default_style: Option<StyleId>,
    header: AreaId,
    body: AreaId,
}

impl Table {
    /// Build a table from header rows and body rows
    ///
    /// All rows must be the same length. `Entry::Gap` positions are
    /// absorbed into the nearest preceding value during auto-merge:
    /// scanning in row-major order, each value first extends downward
    /// over unclaimed gaps, then extends rightward one column at a time
    /// as long as the whole column segment next to it is unclaimed gaps.
    /// The resulting spans never overlap.
    pub fn new(
        header: Vec<Vec<Entry>>,
        body: Vec<Vec<Entry>>,
        default_style: Option<Style>,
    ) -> Result<Self> {
        let header_rows = header.len();
        let mut raw = header;
        raw.extend(body);

        let width = raw.first().map_or(0, Vec::len);
        for (row, entries) in raw.iter().enumerate() {
            if entries.len() != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    actual: entries.len(),
                });
            }
        }
        let height = raw.len();

        let mut styles = StylePool::new();
        let default_style = default_style.map(|s| styles.get_or_insert(s));

        let grid = Self::auto_merge(&mut raw, width, height, default_style, &mut styles);

        let mut table = Table {
            grid,
            styles,
            areas: Vec::new(),
            total_rows: BTreeSet::new(),
            default_style,
            header: AreaId(0),
            body: AreaId(0),
        };
        table.header = table.register(AreaRect {
            row: 0,
            col: 0,
            width,
            height: header_rows,
        });
        table.body = table.register(AreaRect {
            row: header_rows,
            col: 0,
            width,
            height: height - header_rows,
        });
        Ok(table)
    }

    /// Build a headerless table
    pub fn with_body(body: Vec<Vec<Entry>>, default_style: Option<Style>) -> Result<Self> {
        Self::new(Vec::new(), body, default_style)
    }

    fn auto_merge(
        raw: &mut [Vec<Entry>],
        width: usize,
        height: usize,
        default_style: Option<StyleId>,
        styles: &mut StylePool,
    ) -> Grid {
        let mut slots: Vec<Vec<Option<Cell>>> = vec![vec![None; width]; height];
        let mut claimed = vec![vec![false; width]; height];

        for row in 0..height {
            for col in 0..width {
                if matches!(raw[row][col], Entry::Gap) {
                    continue;
                }
                let (value, style) = match mem::replace(&mut raw[row][col], Entry::Gap) {
                    Entry::Value(value) => (value, default_style),
                    Entry::Styled(value, style) => (value, Some(styles.get_or_insert(style))),
                    Entry::Gap => unreachable!(),
                };

                // Extend down over unclaimed gaps
                let mut span_h = 1;
                while row + span_h < height
                    && matches!(raw[row + span_h][col], Entry::Gap)
                    && !claimed[row + span_h][col]
                {
                    claimed[row + span_h][col] = true;
                    span_h += 1;
                }

                // Extend right only while the entire adjacent column
                // segment is unclaimed gaps, claiming it whole so spans
                // cannot overlap
                let mut span_w = 1;
                'extend: while col + span_w < width {
                    for i in 0..span_h {
                        if !matches!(raw[row + i][col + span_w], Entry::Gap)
                            || claimed[row + i][col + span_w]
                        {
                            break 'extend;
                        }
                    }
                    for i in 0..span_h {
                        claimed[row + i][col + span_w] = true;
                    }
                    span_w += 1;
                }

                slots[row][col] = Some(Cell {
                    value,
                    width: span_w,
                    height: span_h,
                    style,
                });
            }
        }

        let mut grid = Grid::new(width);
        for row in slots {
            grid.push_row(row);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The area covering the header rows (possibly zero-height)
    pub fn header(&self) -> AreaId {
        self.header
    }

    /// The area covering the body rows, summary rows included once added
    pub fn body(&self) -> AreaId {
        self.body
    }

    /// The anchor at table-absolute (row, col); `None` for covered or
    /// out-of-range slots
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row, col)
    }

    /// Whether a row was inserted as a summary row
    pub fn is_total_row(&self, row: usize) -> bool {
        self.total_rows.contains(&row)
    }

    /// All summary row indices, ascending
    pub fn total_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.total_rows.iter().copied()
    }

    /// Resolve a style reference
    pub fn style(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id)
    }

    /// The interned table default style, if one was given
    pub fn default_style(&self) -> Option<StyleId> {
        self.default_style
    }

    /// Resolve an area handle into a read-only view
    pub fn area(&self, id: AreaId) -> Area<'_> {
        Area {
            table: self,
            rect: self.areas[id.0],
        }
    }

    pub(crate) fn rect(&self, id: AreaId) -> AreaRect {
        self.areas[id.0]
    }

    pub(crate) fn register(&mut self, rect: AreaRect) -> AreaId {
        self.areas.push(rect);
        AreaId(self.areas.len() - 1)
    }

    /// Run a selector against the body
    pub fn select<S: Selector>(&mut self, selector: &S) -> Result<Areas> {
        let body = self.body;
        selector.select(self, body)
    }

    /// Run a selector against an arbitrary area
    pub fn select_in<S: Selector>(&mut self, within: AreaId, selector: &S) -> Result<Areas> {
        selector.select(self, within)
    }

    /// Split a single-column area into runs of equal consecutive values
    ///
    /// Covered slots continue the current run, since they belong to a
    /// span whose anchor started it. Summary rows inside the column end
    /// up inside whichever run surrounds them. An empty area yields an
    /// empty selection; a wider area is an error.
    pub fn group(&mut self, within: AreaId) -> Result<Areas> {
        let rect = self.rect(within);
        if rect.width != 1 {
            return Err(Error::GroupWidth(rect.width));
        }

        let mut areas = Areas::default();
        if rect.height == 0 {
            return Ok(areas);
        }

        let mut run_start = 0usize;
        let mut run_value = self.grid.get(rect.row, rect.col).map(|c| c.value.clone());

        for offset in 1..rect.height {
            let Some(value) = self
                .grid
                .get(rect.row + offset, rect.col)
                .map(|c| c.value.clone())
            else {
                continue;
            };
            if run_value.as_ref() != Some(&value) {
                let id = self.register(AreaRect {
                    row: rect.row + run_start,
                    col: rect.col,
                    width: 1,
                    height: offset - run_start,
                });
                areas.0.push(id);
                run_start = offset;
                run_value = Some(value);
            }
        }

        let id = self.register(AreaRect {
            row: rect.row + run_start,
            col: rect.col,
            width: 1,
            height: rect.height - run_start,
        });
        areas.0.push(id);
        Ok(areas)
    }

    /// Register one area-relative column as its own area and group it
    pub fn group_column(&mut self, within: AreaId, col: usize) -> Result<Areas> {
        let rect = self.rect(within);
        if col >= rect.width {
            return Err(Error::OutOfBounds { row: 0, col });
        }
        let column = self.register(AreaRect {
            row: rect.row,
            col: rect.col + col,
            width: 1,
            height: rect.height,
        });
        self.group(column)
    }

    /// Collapse an area into a single merged cell
    ///
    /// The area's top-left anchor keeps its value and grows to cover the
    /// whole rectangle; every other anchor inside is discarded. Fails if
    /// any contained span sticks out past the area bounds, or if the
    /// top-left slot is covered. An optional style replaces the anchor's.
    pub fn merge(&mut self, id: AreaId, style: Option<&Style>) -> Result<()> {
        let rect = self.rect(id);
        if rect.width == 0 || rect.height == 0 {
            return Ok(());
        }

        for row in rect.row..rect.end_row() {
            for col in rect.col..rect.col + rect.width {
                if let Some(cell) = self.grid.get(row, col) {
                    if row + cell.height > rect.end_row() || col + cell.width > rect.col + rect.width
                    {
                        return Err(Error::MergeOverlap { row, col });
                    }
                }
            }
        }

        let style = style.map(|s| self.styles.get_or_insert(s.clone()));
        let mut anchor = self
            .grid
            .take(rect.row, rect.col)
            .ok_or(Error::MissingAnchor {
                row: rect.row,
                col: rect.col,
            })?;

        for row in rect.row..rect.end_row() {
            for col in rect.col..rect.col + rect.width {
                self.grid.set(row, col, None);
            }
        }

        anchor.width = rect.width;
        anchor.height = rect.height;
        if let Some(style) = style {
            anchor.style = Some(style);
        }
        self.grid.set(rect.row, rect.col, Some(anchor));
        Ok(())
    }

    /// Insert a summary row directly below an area
    ///
    /// The new row gets a label cell and, in every column right of the
    /// label, the sum of that column's numbers over the area's rows.
    /// Rows inserted by earlier summaries are skipped, so nested totals
    /// never double-count. The row is recorded as a total row, and every
    /// registered area is re-aimed: areas entirely above the insertion
    /// point are untouched, areas straddling it grow one row, and areas
    /// at or below it shift down one row.
    ///
    /// With [`SummaryLocation::Left`] the area's top-left anchor must be
    /// present; its span grows to absorb the new row and the label goes
    /// just right of the area. With [`SummaryLocation::Bottom`] the
    /// label goes below the area's first column.
    pub fn add_summary(&mut self, id: AreaId, summary: &Summary) -> Result<()> {
        let rect = self.rect(id);
        let insert_at = rect.end_row();

        let label_col = match summary.location {
            SummaryLocation::Left => {
                let anchor =
                    self.grid
                        .get_mut(rect.row, rect.col)
                        .ok_or(Error::MissingAnchor {
                            row: rect.row,
                            col: rect.col,
                        })?;
                anchor.height += 1;
                rect.col + rect.width
            }
            SummaryLocation::Bottom => rect.col,
        };

        // Renumber totals at or below the insertion point, then insert
        self.total_rows = self
            .total_rows
            .iter()
            .map(|&row| if row >= insert_at { row + 1 } else { row })
            .collect();
        self.grid.insert_blank_row(insert_at);

        let label_style = summary
            .label_style
            .as_ref()
            .map(|s| self.styles.get_or_insert(s.clone()))
            .or(self.default_style);
        let value_style = summary
            .value_style
            .as_ref()
            .map(|s| self.styles.get_or_insert(s.clone()))
            .or(self.default_style);

        if summary.label_span != 0 {
            let label = Cell {
                value: CellValue::text(summary.label.clone()),
                width: summary.label_span,
                height: 1,
                style: label_style,
            };
            self.grid.set(insert_at, label_col, Some(label));
        }

        for col in (label_col + summary.label_span)..self.grid.width() {
            let mut total = 0.0;
            for row in rect.row..rect.end_row() {
                if self.total_rows.contains(&row) {
                    continue;
                }
                match self.grid.get(row, col) {
                    Some(cell) => match cell.value {
                        CellValue::Number(n) => total += n,
                        CellValue::Text(_) => {
                            return Err(Error::NonNumericSummary {
                                row,
                                col,
                                found: "text",
                            })
                        }
                    },
                    None => {
                        return Err(Error::NonNumericSummary {
                            row,
                            col,
                            found: "a covered slot",
                        })
                    }
                }
            }
            let cell = Cell {
                value: CellValue::Number(total),
                width: 1,
                height: 1,
                style: value_style,
            };
            self.grid.set(insert_at, col, Some(cell));
        }

        self.total_rows.insert(insert_at);

        // Re-aim every registered area so existing handles stay valid
        for area in &mut self.areas {
            if insert_at > area.row + area.height {
                continue;
            } else if insert_at > area.row {
                area.height += 1;
            } else {
                area.row += 1;
            }
        }
        Ok(())
    }

    /// Insert a grand-total row below the whole body
    pub fn add_body_summary(&mut self, summary: &Summary) -> Result<()> {
        let body = self.body;
        self.add_summary(body, summary)
    }

    /// Apply a style to every anchor inside an area
    pub fn set_area_style(&mut self, id: AreaId, style: &Style) {
        let rect = self.rect(id);
        let style = self.styles.get_or_insert(style.clone());
        for row in rect.row..rect.end_row() {
            for col in rect.col..rect.col + rect.width {
                if let Some(cell) = self.grid.get_mut(row, col) {
                    cell.style = Some(style);
                }
            }
        }
    }

    /// Apply a style to every anchor in one area-relative row
    pub fn set_row_style(&mut self, id: AreaId, row: usize, style: &Style) -> Result<()> {
        let rect = self.rect(id);
        if row >= rect.height {
            return Err(Error::OutOfBounds { row, col: 0 });
        }
        let style = self.styles.get_or_insert(style.clone());
        for col in rect.col..rect.col + rect.width {
            if let Some(cell) = self.grid.get_mut(rect.row + row, col) {
                cell.style = Some(style);
            }
        }
        Ok(())
    }

    /// Apply a style to anchors at the given table-absolute positions
    ///
    /// Covered or out-of-range positions are skipped.
    pub fn restyle_cells(&mut self, positions: &[(usize, usize)], style: &Style) {
        let style = self.styles.get_or_insert(style.clone());
        for &(row, col) in positions {
            if let Some(cell) = self.grid.get_mut(row, col) {
                cell.style = Some(style);
            }
        }
    }

    /// Overwrite the value at an area-relative position
    ///
    /// Fails on out-of-area coordinates and on covered slots; a covered
    /// slot has no cell of its own to write.
    pub fn set_value<V: Into<CellValue>>(
        &mut self,
        id: AreaId,
        row: usize,
        col: usize,
        value: V,
    ) -> Result<()> {
        let rect = self.rect(id);
        if row >= rect.height || col >= rect.width {
            return Err(Error::OutOfBounds { row, col });
        }
        let (abs_row, abs_col) = (rect.row + row, rect.col + col);
        match self.grid.get_mut(abs_row, abs_col) {
            Some(cell) => {
                cell.value = value.into();
                Ok(())
            }
            None => Err(Error::CoveredSlot {
                row: abs_row,
                col: abs_col,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries(rows: &[&[Entry]]) -> Vec<Vec<Entry>> {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    /// (value, width, height) per slot, `None` for covered
    fn layout(table: &Table) -> Vec<Vec<Option<(String, usize, usize)>>> {
        (0..table.height())
            .map(|row| {
                (0..table.width())
                    .map(|col| {
                        table
                            .cell(row, col)
                            .map(|c| (c.value.to_string(), c.width, c.height))
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Table::with_body(
            entries(&[&[1.into(), 2.into()], &[3.into()]]),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1,
            }
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(Vec::new(), Vec::new(), None).unwrap();
        assert_eq!(table.width(), 0);
        assert_eq!(table.height(), 0);
        assert_eq!(table.area(table.body()).height(), 0);
    }

    #[test]
    fn test_auto_merge_down() {
        let table = Table::with_body(
            entries(&[
                &[1.into(), 2.into()],
                &[Entry::Gap, 3.into()],
                &[Entry::Gap, 4.into()],
            ]),
            None,
        )
        .unwrap();

        assert_eq!(
            layout(&table),
            vec![
                vec![Some(("1".into(), 1, 3)), Some(("2".into(), 1, 1))],
                vec![None, Some(("3".into(), 1, 1))],
                vec![None, Some(("4".into(), 1, 1))],
            ],
        );
    }

    #[test]
    fn test_auto_merge_right() {
        let table = Table::with_body(
            entries(&[&["title".into(), Entry::Gap, Entry::Gap]]),
            None,
        )
        .unwrap();

        assert_eq!(
            layout(&table),
            vec![vec![Some(("title".into(), 3, 1)), None, None]],
        );
    }

    #[test]
    fn test_auto_merge_rectangle() {
        // The value claims the full 2x2 block: down first, then the
        // whole adjacent column segment
        let table = Table::with_body(
            entries(&[
                &[1.into(), Entry::Gap, 2.into()],
                &[Entry::Gap, Entry::Gap, 3.into()],
            ]),
            None,
        )
        .unwrap();

        assert_eq!(
            layout(&table),
            vec![
                vec![Some(("1".into(), 2, 2)), None, Some(("2".into(), 1, 1))],
                vec![None, None, Some(("3".into(), 1, 1))],
            ],
        );
    }

    #[test]
    fn test_auto_merge_right_blocked_by_partial_gap_column() {
        // Column 1 has a value in the second row, so the 2-row span in
        // column 0 cannot extend right; the lone gap above that value
        // stays an empty slot, claimed by nobody
        let table = Table::with_body(
            entries(&[
                &[1.into(), Entry::Gap],
                &[Entry::Gap, 2.into()],
            ]),
            None,
        )
        .unwrap();

        assert_eq!(
            layout(&table),
            vec![
                vec![Some(("1".into(), 1, 2)), None],
                vec![None, Some(("2".into(), 1, 1))],
            ],
        );
    }

    #[test]
    fn test_auto_merge_claims_are_exclusive() {
        // Scanned first, value 2 absorbs the whole gap column below it,
        // so value 3 finds its right neighbor already claimed and stays
        // unmerged
        let table = Table::with_body(
            entries(&[
                &[1.into(), 2.into()],
                &[Entry::Gap, Entry::Gap],
                &[3.into(), Entry::Gap],
            ]),
            None,
        )
        .unwrap();

        assert_eq!(
            layout(&table),
            vec![
                vec![Some(("1".into(), 1, 2)), Some(("2".into(), 1, 3))],
                vec![None, None],
                vec![Some(("3".into(), 1, 1)), None],
            ],
        );
    }

    #[test]
    fn test_header_and_body_areas() {
        let table = Table::new(
            entries(&[&["h1".into(), "h2".into()]]),
            entries(&[&[1.into(), 2.into()], &[3.into(), 4.into()]]),
            None,
        )
        .unwrap();

        let header = table.area(table.header());
        assert_eq!(header.position(), (0, 0));
        assert_eq!(header.height(), 1);

        let body = table.area(table.body());
        assert_eq!(body.position(), (1, 0));
        assert_eq!(body.height(), 2);
        assert_eq!(body.value(0, 0), Some(&CellValue::Number(1.0)));
    }

    #[test]
    fn test_group_runs() {
        let mut table = Table::with_body(
            entries(&[&[1.into()], &[1.into()], &[1.into()], &[2.into()]]),
            None,
        )
        .unwrap();

        let body = table.body();
        let groups = table.group(body).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(table.area(groups[0]).position(), (0, 0));
        assert_eq!(table.area(groups[0]).height(), 3);
        assert_eq!(table.area(groups[1]).position(), (3, 0));
        assert_eq!(table.area(groups[1]).height(), 1);
    }

    #[test]
    fn test_group_covered_slots_continue_run() {
        let mut table = Table::with_body(
            entries(&[
                &[1.into()],
                &[Entry::Gap],
                &[1.into()],
                &[2.into()],
            ]),
            None,
        )
        .unwrap();

        let body = table.body();
        let groups = table.group(body).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(table.area(groups[0]).height(), 3);
    }

    #[test]
    fn test_group_rejects_wide_area() {
        let mut table = Table::with_body(
            entries(&[&[1.into(), 2.into()]]),
            None,
        )
        .unwrap();
        let body = table.body();
        assert!(matches!(table.group(body), Err(Error::GroupWidth(2))));
    }

    #[test]
    fn test_merge_collapses_area() {
        let mut table = Table::with_body(
            entries(&[&[1.into(), 2.into()], &[1.into(), 3.into()]]),
            None,
        )
        .unwrap();

        let body = table.body();
        let groups = table.group_column(body, 0).unwrap();
        table.merge(groups[0], None).unwrap();

        assert_eq!(
            layout(&table),
            vec![
                vec![Some(("1".into(), 1, 2)), Some(("2".into(), 1, 1))],
                vec![None, Some(("3".into(), 1, 1))],
            ],
        );
    }

    #[test]
    fn test_merge_overlap_rejected() {
        let mut table = Table::with_body(
            entries(&[
                &["wide".into(), Entry::Gap],
                &[1.into(), 2.into()],
            ]),
            None,
        )
        .unwrap();

        // A single-column area cutting through the 2-wide span
        let id = table.register(AreaRect {
            row: 0,
            col: 0,
            width: 1,
            height: 2,
        });
        let err = table.merge(id, None).unwrap_err();
        assert!(matches!(err, Error::MergeOverlap { row: 0, col: 0 }));
    }

    #[test]
    fn test_summary_left() {
        let mut table = Table::with_body(
            entries(&[
                &[1.into(), 2.into(), 3.into()],
                &[1.into(), 2.into(), 4.into()],
            ]),
            None,
        )
        .unwrap();

        let body = table.body();
        let groups = table.group_column(body, 0).unwrap();
        table.merge(groups[0], None).unwrap();
        table
            .add_summary(
                groups[0],
                &Summary::new(1, "total", SummaryLocation::Left),
            )
            .unwrap();

        assert_eq!(
            layout(&table),
            vec![
                vec![
                    Some(("1".into(), 1, 3)),
                    Some(("2".into(), 1, 1)),
                    Some(("3".into(), 1, 1)),
                ],
                vec![None, Some(("2".into(), 1, 1)), Some(("4".into(), 1, 1))],
                vec![None, Some(("total".into(), 1, 1)), Some(("7".into(), 1, 1))],
            ],
        );
        assert!(table.is_total_row(2));
        assert_eq!(table.area(groups[0]).height(), 3);
        assert_eq!(table.area(body).height(), 3);
    }

    #[test]
    fn test_summary_left_requires_anchor() {
        let mut table = Table::with_body(
            entries(&[&[1.into(), 2.into()], &[Entry::Gap, 3.into()]]),
            None,
        )
        .unwrap();

        // An area starting on the covered second row has no anchor to grow
        let id = table.register(AreaRect {
            row: 1,
            col: 0,
            width: 1,
            height: 1,
        });
        let err = table
            .add_summary(id, &Summary::new(1, "total", SummaryLocation::Left))
            .unwrap_err();
        assert!(matches!(err, Error::MissingAnchor { row: 1, col: 0 }));
    }

    #[test]
    fn test_summary_bottom() {
        let mut table = Table::with_body(
            entries(&[
                &["a".into(), 1.into(), 2.into()],
                &["b".into(), 3.into(), 4.into()],
            ]),
            None,
        )
        .unwrap();

        table
            .add_body_summary(&Summary::new(1, "total", SummaryLocation::Bottom))
            .unwrap();

        assert_eq!(
            layout(&table)[2],
            vec![
                Some(("total".into(), 1, 1)),
                Some(("4".into(), 1, 1)),
                Some(("6".into(), 1, 1)),
            ],
        );
        assert_eq!(table.area(table.body()).height(), 3);
    }

    #[test]
    fn test_summary_label_span_zero_writes_no_label() {
        let mut table = Table::with_body(
            entries(&[&[1.into(), 2.into()]]),
            None,
        )
        .unwrap();

        table
            .add_body_summary(&Summary::new(0, "ignored", SummaryLocation::Bottom))
            .unwrap();

        assert_eq!(
            layout(&table)[1],
            vec![Some(("1".into(), 1, 1)), Some(("2".into(), 1, 1))],
        );
    }

    #[test]
    fn test_summary_skips_total_rows() {
        let mut table = Table::with_body(
            entries(&[&["a".into(), 1.into()], &["b".into(), 2.into()]]),
            None,
        )
        .unwrap();

        table
            .add_body_summary(&Summary::new(1, "subtotal", SummaryLocation::Bottom))
            .unwrap();
        table
            .add_body_summary(&Summary::new(1, "grand", SummaryLocation::Bottom))
            .unwrap();

        // The grand total sums 1 + 2, not 1 + 2 + 3
        assert_eq!(layout(&table)[3][1], Some(("3".into(), 1, 1)));
        assert_eq!(
            table.total_rows().collect::<Vec<_>>(),
            vec![2, 3],
        );
    }

    #[test]
    fn test_summary_rejects_text_column() {
        let mut table = Table::with_body(
            entries(&[&["a".into(), "oops".into()]]),
            None,
        )
        .unwrap();

        let err = table
            .add_body_summary(&Summary::new(1, "total", SummaryLocation::Bottom))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NonNumericSummary {
                row: 0,
                col: 1,
                found: "text",
            }
        ));
    }

    #[test]
    fn test_summary_reaims_registered_areas() {
        let mut table = Table::with_body(
            entries(&[
                &[1.into(), 10.into()],
                &[1.into(), 11.into()],
                &[2.into(), 12.into()],
            ]),
            None,
        )
        .unwrap();

        let body = table.body();
        let groups = table.group_column(body, 0).unwrap();
        let below = groups[1];
        assert_eq!(table.area(below).position(), (2, 0));

        table.merge(groups[0], None).unwrap();
        table.merge(groups[1], None).unwrap();
        table
            .add_summary(groups[0], &Summary::new(1, "total", SummaryLocation::Left))
            .unwrap();

        // The later group shifted down; the summarized group grew
        assert_eq!(table.area(below).position(), (3, 0));
        assert_eq!(table.area(groups[0]).height(), 3);
        assert_eq!(table.area(body).height(), 4);
    }

    #[test]
    fn test_set_value() {
        let mut table = Table::with_body(
            entries(&[&[1.into(), Entry::Gap]]),
            None,
        )
        .unwrap();

        let body = table.body();
        table.set_value(body, 0, 0, 9).unwrap();
        assert_eq!(
            table.cell(0, 0).map(|c| c.value.clone()),
            Some(CellValue::Number(9.0)),
        );

        let err = table.set_value(body, 0, 1, 9).unwrap_err();
        assert!(matches!(err, Error::CoveredSlot { row: 0, col: 1 }));

        let err = table.set_value(body, 5, 0, 9).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { row: 5, col: 0 }));
    }

    #[test]
    fn test_set_area_style_skips_covered() {
        let mut table = Table::with_body(
            entries(&[&[1.into(), Entry::Gap], &[2.into(), 3.into()]]),
            None,
        )
        .unwrap();

        let body = table.body();
        table.set_area_style(body, &Style::new().bold());

        let styled = table.cell(0, 0).and_then(|c| c.style).unwrap();
        assert_eq!(
            table.style(styled).and_then(|s| s.font_weight),
            Some(crate::style::FontWeight::Bold),
        );
        assert!(table.cell(0, 1).is_none());
    }
}
