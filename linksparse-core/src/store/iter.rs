//! Read-only traversal over the cell lists

use super::arena::CellArena;
use crate::cell::{Axis, Cell, CellId};
use alloc::collections::btree_map;
use core::iter::FusedIterator;

/// Iterator over one row list or one column list, in list order
#[derive(Debug, Clone)]
pub struct LineIter<'a> {
    cells: &'a CellArena,
    cursor: Option<CellId>,
    axis: Axis,
}

impl<'a> LineIter<'a> {
    pub(crate) fn new(cells: &'a CellArena, head: Option<CellId>, axis: Axis) -> Self {
        Self {
            cells,
            cursor: head,
            axis,
        }
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let cell = &self.cells[id];
        self.cursor = cell.next(self.axis);
        Some(cell)
    }
}

impl FusedIterator for LineIter<'_> {}

/// Iterator over every cell in row-major traversal order
///
/// Non-empty rows are visited in ascending order; cells within a row follow
/// the row list, which is not necessarily sorted by column.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    cells: &'a CellArena,
    row_heads: btree_map::Values<'a, usize, CellId>,
    line: LineIter<'a>,
    remaining: usize,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(
        cells: &'a CellArena,
        row_heads: btree_map::Values<'a, usize, CellId>,
    ) -> Self {
        Self {
            cells,
            row_heads,
            line: LineIter::new(cells, None, Axis::Row),
            remaining: cells.len(),
        }
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cell) = self.line.next() {
                self.remaining -= 1;
                return Some(cell);
            }
            let head = *self.row_heads.next()?;
            self.line = LineIter::new(self.cells, Some(head), Axis::Row);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}
