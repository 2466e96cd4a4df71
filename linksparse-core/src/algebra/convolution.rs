//! Two-dimensional convolution with zero padding

use crate::cell::Value;
use crate::error::Result;
use crate::store::Matrix;
use crate::validation::kernel_half_extent;
use tracing::instrument;

/// Convolve `matrix` with an odd-sized `kernel`
///
/// Each output entry is the sum of the kernel multiplied entry-wise with the
/// kernel-sized neighborhood centered on that entry. Positions outside the
/// matrix count as zero. The kernel is applied as-is, without flipping.
#[instrument(
    level = "debug",
    skip_all,
    fields(dims = ?matrix.dimensions(), kernel = ?kernel.dimensions())
)]
pub fn convolution(matrix: &Matrix, kernel: &Matrix) -> Result<Matrix> {
    let (half_rows, half_columns) = kernel_half_extent(kernel.dimensions())?;
    let (rows, columns) = matrix.dimensions();

    let mut result = Matrix::with_shape(rows, columns, matrix.list_order())?;
    for row in 0..rows {
        for column in 0..columns {
            let mut total: Value = 0.0;
            for tap in kernel.iter() {
                let Some(source_row) = (row + tap.row()).checked_sub(half_rows) else {
                    continue;
                };
                let Some(source_column) = (column + tap.column()).checked_sub(half_columns) else {
                    continue;
                };
                // Reads past the far edges come back as zero
                total += tap.value() * matrix.get(source_row, source_column);
            }
            result.set(row, column, total)?;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use alloc::vec::Vec;

    fn diagonal_sum_grid() -> Matrix {
        let dense: Vec<[f32; 5]> = (0..4)
            .map(|i| core::array::from_fn(|j| (i + j) as f32))
            .collect();
        Matrix::from_dense(&dense).unwrap()
    }

    fn filled(rows: usize, columns: usize, value: Value) -> Matrix {
        let mut kernel = Matrix::with_dimensions(rows, columns).unwrap();
        for row in 0..rows {
            for column in 0..columns {
                kernel.set(row, column, value).unwrap();
            }
        }
        kernel
    }

    #[test]
    fn test_convolution_interior() {
        let matrix = diagonal_sum_grid();
        assert_eq!(matrix.dimensions(), (4, 5));

        let result = convolution(&matrix, &filled(3, 3, 6.0)).unwrap();
        assert_eq!(result.dimensions(), (4, 5));
        assert_eq!(result.get(1, 1), 108.0);
        result.assert_invariants();
    }

    #[test]
    fn test_convolution_zero_padding() {
        let result = convolution(&diagonal_sum_grid(), &filled(3, 3, 6.0)).unwrap();
        // Corner neighborhood: (0,0)=0 (0,1)=1 (1,0)=1 (1,1)=2
        assert_eq!(result.get(0, 0), 24.0);
        // Far corner neighborhood: 5 + 6 + 6 + 7
        assert_eq!(result.get(3, 4), 144.0);
    }

    #[test]
    fn test_identity_kernel() {
        let matrix = diagonal_sum_grid();
        let mut kernel = Matrix::with_dimensions(3, 3).unwrap();
        kernel.set(1, 1, 1.0).unwrap();

        assert_eq!(convolution(&matrix, &kernel).unwrap(), matrix);
    }

    #[test]
    fn test_kernel_is_not_flipped() {
        let mut matrix = Matrix::with_dimensions(3, 3).unwrap();
        matrix.set(1, 1, 1.0).unwrap();
        let mut kernel = Matrix::with_dimensions(1, 3).unwrap();
        kernel.set(0, 2, 5.0).unwrap();

        // Output (r, c) reads input (r, c + 1)
        let result = convolution(&matrix, &kernel).unwrap();
        assert_eq!(result.get(1, 0), 5.0);
        assert_eq!(result.get(1, 2), 0.0);
        assert_eq!(result.nnz(), 1);
    }

    #[test]
    fn test_even_kernel_rejected() {
        let matrix = diagonal_sum_grid();
        assert_eq!(
            convolution(&matrix, &filled(2, 3, 1.0)).unwrap_err(),
            MatrixError::InvalidKernel
        );
        assert_eq!(
            convolution(&matrix, &filled(3, 4, 1.0)).unwrap_err(),
            MatrixError::InvalidKernel
        );
    }
}
