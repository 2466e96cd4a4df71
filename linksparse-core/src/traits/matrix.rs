//! Read-only matrix access traits
//!
//! This is the surface display and reporting layers consume; nothing here
//! mutates a matrix.

use crate::cell::{Cell, Value};
use crate::store::Matrix;
use alloc::vec::Vec;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: Copy;

    /// Get an element at the given position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Extension trait for whole-row and whole-column reads
pub trait MatrixOperations: SparseMatrix {
    /// Non-zero `(column, value)` pairs of a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Non-zero `(row, value)` pairs of a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}

impl SparseMatrix for Matrix {
    type Element = Value;

    fn get_element(&self, row: usize, col: usize) -> Option<Value> {
        self.exists(row, col).map(Cell::value)
    }

    fn dimensions(&self) -> (usize, usize) {
        Matrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        Matrix::nnz(self)
    }
}

impl MatrixOperations for Matrix {
    fn get_row(&self, row_index: usize) -> Vec<(usize, Value)> {
        let mut entries: Vec<_> = self
            .row_iter(row_index)
            .map(|cell| (cell.column(), cell.value()))
            .collect();
        entries.sort_unstable_by_key(|&(column, _)| column);
        entries
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, Value)> {
        let mut entries: Vec<_> = self
            .column_iter(col_index)
            .map(|cell| (cell.row(), cell.value()))
            .collect();
        entries.sort_unstable_by_key(|&(row, _)| row);
        entries
    }
}
