//! Structural transforms: transpose, line swaps and slicing

use crate::error::Result;
use crate::store::Matrix;
use crate::validation::{validate_swap_pair, SliceBox};
use alloc::borrow::Cow;
use tracing::instrument;

/// Transpose `matrix`; the result has shape `columns × rows`
#[instrument(level = "debug", skip_all, fields(dims = ?matrix.dimensions()))]
pub fn transpose(matrix: &Matrix) -> Result<Matrix> {
    let mut result = Matrix::with_shape(matrix.columns(), matrix.rows(), matrix.list_order())?;
    for cell in matrix.iter() {
        result.set(cell.column(), cell.row(), cell.value())?;
    }
    Ok(result)
}

/// Copy of `matrix` with rows `first` and `second` exchanged
#[instrument(level = "debug", skip(matrix))]
pub fn swap_rows(matrix: &Matrix, first: usize, second: usize) -> Result<Matrix> {
    validate_swap_pair(first, second, matrix.rows())?;

    let mut result = Matrix::with_shape(matrix.rows(), matrix.columns(), matrix.list_order())?;
    for cell in matrix.iter() {
        let row = swapped(cell.row(), first, second);
        result.set(row, cell.column(), cell.value())?;
    }
    Ok(result)
}

/// Copy of `matrix` with columns `first` and `second` exchanged
#[instrument(level = "debug", skip(matrix))]
pub fn swap_columns(matrix: &Matrix, first: usize, second: usize) -> Result<Matrix> {
    validate_swap_pair(first, second, matrix.columns())?;

    let mut result = Matrix::with_shape(matrix.rows(), matrix.columns(), matrix.list_order())?;
    for cell in matrix.iter() {
        let column = swapped(cell.column(), first, second);
        result.set(cell.row(), column, cell.value())?;
    }
    Ok(result)
}

fn swapped(index: usize, first: usize, second: usize) -> usize {
    if index == first {
        second
    } else if index == second {
        first
    } else {
        index
    }
}

/// Extract the rectangle spanned by two corners, re-indexed from zero
///
/// Corners are swapped only when the first lies strictly below and to the
/// right of the second. A rectangle covering the whole matrix borrows the
/// input instead of copying it.
#[instrument(level = "debug", skip(matrix))]
pub fn slice(
    matrix: &Matrix,
    row_one: usize,
    column_one: usize,
    row_two: usize,
    column_two: usize,
) -> Result<Cow<'_, Matrix>> {
    let bounds = SliceBox::from_corners(
        matrix.dimensions(),
        (row_one, column_one),
        (row_two, column_two),
    )?;
    if bounds.covers(matrix.dimensions()) {
        tracing::debug!("slice spans the whole matrix, returning input");
        return Ok(Cow::Borrowed(matrix));
    }

    let mut result = Matrix::with_shape(bounds.rows(), bounds.columns(), matrix.list_order())?;
    for row in bounds.first_row..=bounds.last_row {
        for cell in matrix.row_iter(row) {
            if bounds.contains_column(cell.column()) {
                result.set(
                    row - bounds.first_row,
                    cell.column() - bounds.first_column,
                    cell.value(),
                )?;
            }
        }
    }
    Ok(Cow::Owned(result))
}
