//! Operand shape validation for binary operations and convolution

use crate::error::{MatrixError, Result};

/// Require two operands to have identical dimensions
pub const fn ensure_same_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatrixError::DimensionMismatch);
    }
    Ok(())
}

/// Require `left.columns == right.rows` for a matrix product
pub const fn ensure_product_compatible(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch);
    }
    Ok(())
}

/// Half extents `(rows / 2, columns / 2)` of an odd-sized kernel
///
/// Both kernel dimensions must be odd so the kernel has a center cell.
pub const fn kernel_half_extent(kernel: (usize, usize)) -> Result<(usize, usize)> {
    if kernel.0 % 2 == 0 || kernel.1 % 2 == 0 {
        return Err(MatrixError::InvalidKernel);
    }
    Ok((kernel.0 / 2, kernel.1 / 2))
}
