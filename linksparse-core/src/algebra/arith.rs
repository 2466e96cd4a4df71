//! Arithmetic on whole matrices

use crate::cell::Value;
use crate::error::Result;
use crate::store::Matrix;
use crate::validation::{ensure_product_compatible, ensure_same_shape};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use tracing::instrument;

/// Multiply every entry of `matrix` by `scalar`
#[instrument(level = "debug", skip_all, fields(nnz = matrix.nnz(), scalar = scalar))]
pub fn scalar_multiply(matrix: &Matrix, scalar: Value) -> Result<Matrix> {
    let mut result = Matrix::with_shape(matrix.rows(), matrix.columns(), matrix.list_order())?;
    for cell in matrix.iter() {
        result.set(cell.row(), cell.column(), cell.value() * scalar)?;
    }
    Ok(result)
}

/// Entry-wise sum of two matrices of equal shape
#[instrument(level = "debug", skip_all, fields(dims = ?left.dimensions()))]
pub fn sum(left: &Matrix, right: &Matrix) -> Result<Matrix> {
    ensure_same_shape(left.dimensions(), right.dimensions())?;

    let mut result = Matrix::with_shape(left.rows(), left.columns(), left.list_order())?;
    for cell in left.iter() {
        let (row, column) = cell.coordinates();
        result.set(row, column, cell.value() + right.get(row, column))?;
    }
    // Entries stored only on the right
    for cell in right.iter() {
        let (row, column) = cell.coordinates();
        if left.exists(row, column).is_none() {
            result.set(row, column, cell.value())?;
        }
    }
    Ok(result)
}

/// Entry-wise (Hadamard) product of two matrices of equal shape
#[instrument(level = "debug", skip_all, fields(dims = ?left.dimensions()))]
pub fn elementwise_product(left: &Matrix, right: &Matrix) -> Result<Matrix> {
    ensure_same_shape(left.dimensions(), right.dimensions())?;

    let (sparse, dense) = if left.nnz() <= right.nnz() {
        (left, right)
    } else {
        (right, left)
    };
    let mut result = Matrix::with_shape(left.rows(), left.columns(), left.list_order())?;
    for cell in sparse.iter() {
        let (row, column) = cell.coordinates();
        result.set(row, column, cell.value() * dense.get(row, column))?;
    }
    Ok(result)
}

/// Matrix product `left × right`
///
/// Each output row is accumulated from the left row's cells in ascending
/// column order `k`, so every entry is summed in the same order as
/// `Σ_k left(i, k) * right(k, j)`. Only columns that receive a term are
/// held in the accumulator.
#[instrument(
    level = "debug",
    skip_all,
    fields(left = ?left.dimensions(), right = ?right.dimensions())
)]
pub fn multiply(left: &Matrix, right: &Matrix) -> Result<Matrix> {
    ensure_product_compatible(left.dimensions(), right.dimensions())?;

    let mut result = Matrix::with_shape(left.rows(), right.columns(), left.list_order())?;
    let mut terms: Vec<(usize, Value)> = Vec::new();
    let mut accumulator: BTreeMap<usize, Value> = BTreeMap::new();
    for row in left.occupied_rows() {
        terms.clear();
        terms.extend(left.row_iter(row).map(|cell| (cell.column(), cell.value())));
        terms.sort_unstable_by_key(|&(k, _)| k);

        for &(k, term) in &terms {
            for factor in right.row_iter(k) {
                *accumulator.entry(factor.column()).or_insert(0.0) += term * factor.value();
            }
        }
        for (column, total) in core::mem::take(&mut accumulator) {
            if total != 0.0 {
                result.set(row, column, total)?;
            }
        }
    }
    Ok(result)
}
