//! Sparse matrix store
//!
//! Every non-zero entry lives in a cell arena and is linked into two lists:
//! the list of its row and the list of its column. Only occupied lines have a
//! head entry, so memory follows the number of stored cells rather than the
//! largest coordinate. Dimensions only ever grow. Cells are released by
//! walking row lists alone, so a cell reachable from both lists is freed once.

mod arena;
#[cfg(any(test, debug_assertions))]
mod check;
mod iter;

pub use iter::{Cells, LineIter};

use crate::cell::{Axis, Cell, CellId, Value};
use crate::error::Result;
use crate::validation::{validate_coordinate, validate_extent};
use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use arena::CellArena;

/// Where a new cell is linked inside its row and column lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListOrder {
    /// Link at the tail; traversal follows insertion order
    #[default]
    Append,
    /// Keep row lists ordered by column and column lists ordered by row
    Sorted,
}

/// Heads of the non-empty lines along one axis, keyed by line index
type LineHeads = BTreeMap<usize, CellId>;

/// Sparse matrix of `f32` values backed by cross-linked row and column lists
#[derive(Debug, Clone)]
pub struct Matrix {
    cells: CellArena,
    row_heads: LineHeads,
    column_heads: LineHeads,
    rows: usize,
    columns: usize,
    order: ListOrder,
}

impl Matrix {
    /// Create an empty 1×1 matrix
    pub fn new() -> Self {
        Self::with_list_order(ListOrder::default())
    }

    /// Create an empty 1×1 matrix that links new cells using `order`
    pub fn with_list_order(order: ListOrder) -> Self {
        Self {
            cells: CellArena::new(),
            row_heads: LineHeads::new(),
            column_heads: LineHeads::new(),
            rows: 1,
            columns: 1,
            order,
        }
    }

    /// Create an empty matrix of the given shape
    pub fn with_dimensions(rows: usize, columns: usize) -> Result<Self> {
        Self::with_shape(rows, columns, ListOrder::default())
    }

    /// Create an empty matrix of the given shape and list order
    pub fn with_shape(rows: usize, columns: usize, order: ListOrder) -> Result<Self> {
        validate_extent(rows)?;
        validate_extent(columns)?;
        Ok(Self {
            rows,
            columns,
            ..Self::with_list_order(order)
        })
    }

    /// Build a matrix from its dense row-major form
    ///
    /// Zero entries are skipped. Ragged rows are allowed; the column count is
    /// the length of the longest row.
    pub fn from_dense<R: AsRef<[Value]>>(dense: &[R]) -> Result<Self> {
        let rows = dense.len().max(1);
        let columns = dense
            .iter()
            .map(|row| row.as_ref().len())
            .max()
            .unwrap_or(0)
            .max(1);
        let mut matrix = Self::with_dimensions(rows, columns)?;
        for (row, values) in dense.iter().enumerate() {
            for (column, &value) in values.as_ref().iter().enumerate() {
                if value != 0.0 {
                    matrix.set(row, column, value)?;
                }
            }
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Matrix dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.cells.len()
    }

    pub fn list_order(&self) -> ListOrder {
        self.order
    }

    /// Look up the cell at `(row, column)`
    ///
    /// Out-of-range coordinates read as absent; the matrix never grows here.
    pub fn exists(&self, row: usize, column: usize) -> Option<&Cell> {
        self.find(row, column).map(|id| &self.cells[id])
    }

    /// Value at `(row, column)`, or `0.0` when no cell is stored there
    pub fn get(&self, row: usize, column: usize) -> Value {
        self.exists(row, column).map_or(0.0, Cell::value)
    }

    /// Write `value` at `(row, column)`
    ///
    /// Grows the matrix to admit the coordinates. Writing zero removes the
    /// cell if one is present; writing a non-zero creates or overwrites it.
    pub fn set(&mut self, row: usize, column: usize, value: Value) -> Result<()> {
        validate_coordinate(row)?;
        validate_coordinate(column)?;
        self.grow(row + 1, column + 1);

        match (self.find(row, column), value == 0.0) {
            (Some(id), true) => {
                self.unlink(id, Axis::Row);
                self.unlink(id, Axis::Column);
                self.cells.remove(id);
            }
            (Some(id), false) => self.cells[id].value = value,
            (None, true) => {}
            (None, false) => {
                let id = self.cells.insert(Cell::new(row, column, value));
                self.link(id, Axis::Row);
                self.link(id, Axis::Column);
            }
        }
        Ok(())
    }

    /// Release every cell, keeping the current dimensions
    pub fn clear(&mut self) {
        for head in core::mem::take(&mut self.row_heads).into_values() {
            let mut cursor = Some(head);
            while let Some(id) = cursor {
                cursor = self.cells.remove(id).next_in_row;
            }
        }
        self.column_heads.clear();
        debug_assert!(self.cells.is_empty(), "cells left outside every row list");
    }

    /// Sum of every stored value
    pub fn sum_values(&self) -> Value {
        self.iter().map(Cell::value).sum()
    }

    /// Iterate every cell in row-major traversal order
    pub fn iter(&self) -> Cells<'_> {
        Cells::new(&self.cells, self.row_heads.values())
    }

    /// Iterate the cells of one row in list order
    pub fn row_iter(&self, row: usize) -> LineIter<'_> {
        LineIter::new(&self.cells, self.row_heads.get(&row).copied(), Axis::Row)
    }

    /// Iterate the cells of one column in list order
    pub fn column_iter(&self, column: usize) -> LineIter<'_> {
        LineIter::new(&self.cells, self.column_heads.get(&column).copied(), Axis::Column)
    }

    /// Indices of the rows holding at least one cell, ascending
    pub(crate) fn occupied_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.row_heads.keys().copied()
    }

    /// Dense row-major copy including implicit zeros
    pub fn to_dense(&self) -> Vec<Vec<Value>> {
        let mut dense = vec![vec![0.0; self.columns]; self.rows];
        for cell in self.iter() {
            dense[cell.row][cell.column] = cell.value;
        }
        dense
    }

    fn grow(&mut self, rows: usize, columns: usize) {
        if rows > self.rows {
            tracing::trace!(from = self.rows, to = rows, "growing row extent");
            self.rows = rows;
        }
        if columns > self.columns {
            tracing::trace!(from = self.columns, to = columns, "growing column extent");
            self.columns = columns;
        }
    }

    fn find(&self, row: usize, column: usize) -> Option<CellId> {
        if column >= self.columns {
            return None;
        }
        let mut cursor = self.row_heads.get(&row).copied();
        while let Some(id) = cursor {
            let cell = &self.cells[id];
            if cell.column == column {
                return Some(id);
            }
            cursor = cell.next_in_row;
        }
        None
    }

    fn heads(&self, axis: Axis) -> &LineHeads {
        match axis {
            Axis::Row => &self.row_heads,
            Axis::Column => &self.column_heads,
        }
    }

    fn heads_mut(&mut self, axis: Axis) -> &mut LineHeads {
        match axis {
            Axis::Row => &mut self.row_heads,
            Axis::Column => &mut self.column_heads,
        }
    }

    /// Link an already-stored cell into its `axis` list
    fn link(&mut self, id: CellId, axis: Axis) {
        let line = self.cells[id].line(axis);
        let offset = self.cells[id].offset(axis);

        let mut previous = None;
        let mut cursor = self.heads(axis).get(&line).copied();
        while let Some(current) = cursor {
            if self.order == ListOrder::Sorted && self.cells[current].offset(axis) > offset {
                break;
            }
            previous = Some(current);
            cursor = self.cells[current].next(axis);
        }

        *self.cells[id].next_mut(axis) = cursor;
        match previous {
            Some(previous) => *self.cells[previous].next_mut(axis) = Some(id),
            None => {
                self.heads_mut(axis).insert(line, id);
            }
        }
    }

    /// Detach a cell from its `axis` list without releasing it
    ///
    /// A line left empty loses its head entry.
    fn unlink(&mut self, id: CellId, axis: Axis) {
        let line = self.cells[id].line(axis);

        let mut previous = None;
        let mut cursor = self.heads(axis).get(&line).copied();
        while let Some(current) = cursor {
            if current == id {
                let next = self.cells[id].next(axis);
                match (previous, next) {
                    (Some(previous), _) => *self.cells[previous].next_mut(axis) = next,
                    (None, Some(next)) => {
                        self.heads_mut(axis).insert(line, next);
                    }
                    (None, None) => {
                        self.heads_mut(axis).remove(&line);
                    }
                }
                *self.cells[id].next_mut(axis) = None;
                return;
            }
            previous = Some(current);
            cursor = self.cells[current].next(axis);
        }
        debug_assert!(false, "cell {} missing from its {axis:?} list", id.index());
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}

/// Matrices are equal when they have the same shape and the same entries;
/// list order is ignored.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self.nnz() == other.nnz()
            && self
                .iter()
                .all(|cell| other.get(cell.row, cell.column) == cell.value)
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Cell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::format::MAX_COORDINATE;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample() -> Matrix {
        let mut matrix = Matrix::new();
        matrix.set(1, 1, 3.0).unwrap();
        matrix.set(0, 1, 2.0).unwrap();
        matrix.set(1, 0, 1.0).unwrap();
        matrix.set(0, 0, 4.0).unwrap();
        matrix.set(2, 2, 7.0).unwrap();
        matrix
    }

    #[test]
    fn test_new_matrix_is_empty_1x1() {
        let matrix = Matrix::new();
        assert_eq!(matrix.dimensions(), (1, 1));
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert!(matrix.exists(0, 0).is_none());
    }

    #[test]
    fn test_basic_construction() {
        let matrix = sample();
        matrix.assert_invariants();

        assert_eq!(matrix.get(2, 2), 7.0);
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.nnz(), 5);
        assert_eq!(
            matrix.to_dense(),
            vec![
                vec![4.0, 2.0, 0.0],
                vec![1.0, 3.0, 0.0],
                vec![0.0, 0.0, 7.0],
            ]
        );
    }

    #[test]
    fn test_append_order_traversal() {
        let matrix = sample();
        let visited: Vec<_> = matrix.iter().map(Cell::coordinates).collect();
        assert_eq!(visited, vec![(0, 1), (0, 0), (1, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn test_sorted_order_traversal() {
        let mut matrix = Matrix::with_list_order(ListOrder::Sorted);
        matrix.set(1, 1, 3.0).unwrap();
        matrix.set(0, 1, 2.0).unwrap();
        matrix.set(1, 0, 1.0).unwrap();
        matrix.set(0, 0, 4.0).unwrap();
        matrix.set(2, 2, 7.0).unwrap();
        matrix.assert_invariants();

        let visited: Vec<_> = matrix.iter().map(Cell::coordinates).collect();
        assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 2)]);

        let column: Vec<_> = matrix.column_iter(1).map(Cell::row).collect();
        assert_eq!(column, vec![0, 1]);
    }

    #[test]
    fn test_overwrite_keeps_count() {
        let mut matrix = Matrix::new();
        matrix.set(2, 3, 5.0).unwrap();
        matrix.set(2, 3, 5.0).unwrap();
        assert_eq!(matrix.nnz(), 1);

        matrix.set(2, 3, -1.5).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(2, 3), -1.5);
        matrix.assert_invariants();
    }

    #[test]
    fn test_zero_suppression() {
        let mut matrix = sample();

        // Absent coordinate: no-op
        matrix.set(2, 0, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 5);

        // Present coordinate: removed exactly once
        matrix.set(0, 1, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 4);
        assert!(matrix.exists(0, 1).is_none());
        assert_eq!(matrix.column_iter(1).count(), 1);
        matrix.set(0, 1, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 4);
        matrix.assert_invariants();
    }

    #[test]
    fn test_growth_never_shrinks() {
        let mut matrix = Matrix::new();
        matrix.set(4, 6, 1.0).unwrap();
        assert_eq!(matrix.dimensions(), (5, 7));

        matrix.set(4, 6, 0.0).unwrap();
        assert_eq!(matrix.dimensions(), (5, 7));

        // Zero writes still admit their coordinates
        matrix.set(9, 0, 0.0).unwrap();
        assert_eq!(matrix.dimensions(), (10, 7));
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_out_of_range_reads_do_not_grow() {
        let matrix = sample();
        assert_eq!(matrix.get(100, 100), 0.0);
        assert!(matrix.exists(3, 0).is_none());
        assert!(matrix.exists(0, 3).is_none());
        assert_eq!(matrix.row_iter(50).count(), 0);
        assert_eq!(matrix.dimensions(), (3, 3));
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut matrix = Matrix::new();
        assert_eq!(
            matrix.set(MAX_COORDINATE + 1, 0, 1.0),
            Err(MatrixError::InvalidIndex)
        );
        assert_eq!(
            Matrix::with_dimensions(0, 3).unwrap_err(),
            MatrixError::InvalidIndex
        );
        assert_eq!(matrix.dimensions(), (1, 1));
    }

    #[test]
    fn test_extreme_coordinate_stays_sparse() {
        let mut matrix = Matrix::new();
        matrix.set(MAX_COORDINATE, 0, 1.0).unwrap();
        matrix.set(3, MAX_COORDINATE, 2.0).unwrap();

        assert_eq!(matrix.dimensions(), (MAX_COORDINATE + 1, MAX_COORDINATE + 1));
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(MAX_COORDINATE, 0), 1.0);
        assert_eq!(matrix.row_heads.len(), 2);
        assert_eq!(matrix.column_heads.len(), 2);

        let visited: Vec<_> = matrix.iter().map(Cell::coordinates).collect();
        assert_eq!(visited, vec![(3, MAX_COORDINATE), (MAX_COORDINATE, 0)]);
        matrix.assert_invariants();
    }

    #[test]
    fn test_emptied_lines_drop_their_heads() {
        let mut matrix = sample();
        matrix.set(2, 2, 0.0).unwrap();

        assert!(!matrix.row_heads.contains_key(&2));
        assert!(!matrix.column_heads.contains_key(&2));
        assert_eq!(matrix.dimensions(), (3, 3));

        // Removing a list head promotes its successor
        matrix.set(0, 1, 0.0).unwrap();
        assert_eq!(matrix.row_iter(0).map(Cell::column).collect::<Vec<_>>(), vec![0]);
        assert_eq!(matrix.column_iter(1).map(Cell::row).collect::<Vec<_>>(), vec![1]);
        matrix.assert_invariants();
    }

    #[test]
    fn test_clear_releases_every_cell() {
        let mut matrix = sample();
        matrix.clear();
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.iter().count(), 0);
        assert_eq!(matrix.column_iter(0).count(), 0);

        matrix.set(1, 2, 8.0).unwrap();
        assert_eq!(matrix.get(1, 2), 8.0);
        matrix.assert_invariants();
    }

    #[test]
    fn test_from_dense_and_sum_values() {
        let matrix =
            Matrix::from_dense(&[vec![0.0f32, 1.5], vec![2.5, 0.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(matrix.dimensions(), (3, 2));
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.sum_values(), 4.0);
        assert_eq!(sample().sum_values(), 17.0);
    }

    #[test]
    fn test_equality_ignores_list_order() {
        let appended = sample();
        let mut sorted = Matrix::with_list_order(ListOrder::Sorted);
        let writes = [(2, 2, 7.0), (0, 0, 4.0), (1, 0, 1.0), (0, 1, 2.0), (1, 1, 3.0)];
        for (row, column, value) in writes {
            sorted.set(row, column, value).unwrap();
        }
        assert_eq!(appended, sorted);

        let mut different = sample();
        different.set(2, 2, 8.0).unwrap();
        assert_ne!(appended, different);
    }

    #[test]
    fn test_random_writes_preserve_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut matrix = Matrix::new();
        let mut dense = vec![vec![0.0f32; 12]; 12];

        for _ in 0..2_000 {
            let row = rng.gen_range(0..12);
            let column = rng.gen_range(0..12);
            let value = if rng.gen_bool(0.4) {
                0.0
            } else {
                rng.gen_range(1..5) as f32
            };
            matrix.set(row, column, value).unwrap();
            dense[row][column] = value;
        }
        matrix.assert_invariants();

        let expected = dense.iter().flatten().filter(|v| **v != 0.0).count();
        assert_eq!(matrix.nnz(), expected);
        for (row, values) in dense.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                assert_eq!(matrix.get(row, column), value);
                assert_eq!(matrix.exists(row, column).is_some(), value != 0.0);
            }
        }
    }
}
