//! Coordinate and extent validation
//!
//! Pure checks on indices with no access to matrix storage.

use crate::error::{MatrixError, Result};
use crate::format::MAX_COORDINATE;

/// Validate a coordinate that a write may admit into a matrix
///
/// Coordinates are bounded by what the persisted format can represent.
pub const fn validate_coordinate(index: usize) -> Result<()> {
    if index > MAX_COORDINATE {
        return Err(MatrixError::InvalidIndex);
    }
    Ok(())
}

/// Validate a row or column count
pub const fn validate_extent(extent: usize) -> Result<()> {
    if extent == 0 || extent - 1 > MAX_COORDINATE {
        return Err(MatrixError::InvalidIndex);
    }
    Ok(())
}

/// Validate the two lines of a row or column swap
///
/// Both must lie inside `bound` and must differ.
pub const fn validate_swap_pair(first: usize, second: usize, bound: usize) -> Result<()> {
    if first == second || first >= bound || second >= bound {
        return Err(MatrixError::InvalidIndex);
    }
    Ok(())
}

/// Inclusive rectangle selected by a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBox {
    pub first_row: usize,
    pub first_column: usize,
    pub last_row: usize,
    pub last_column: usize,
}

impl SliceBox {
    /// Resolve the two corners of a slice request against `dimensions`
    ///
    /// Corners are swapped only when the first lies below and to the right of
    /// the second. Any other crossed pair is rejected, as are identical
    /// corners and corners outside the matrix.
    pub fn from_corners(
        dimensions: (usize, usize),
        (row_one, column_one): (usize, usize),
        (row_two, column_two): (usize, usize),
    ) -> Result<Self> {
        let (rows, columns) = dimensions;
        if row_one >= rows || row_two >= rows || column_one >= columns || column_two >= columns {
            return Err(MatrixError::InvalidIndex);
        }
        if row_one == row_two && column_one == column_two {
            return Err(MatrixError::InvalidIndex);
        }

        let (first, last) = if row_one > row_two && column_one > column_two {
            ((row_two, column_two), (row_one, column_one))
        } else {
            ((row_one, column_one), (row_two, column_two))
        };
        if first.0 > last.0 || first.1 > last.1 {
            return Err(MatrixError::InvalidIndex);
        }

        Ok(Self {
            first_row: first.0,
            first_column: first.1,
            last_row: last.0,
            last_column: last.1,
        })
    }

    pub const fn rows(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    pub const fn columns(&self) -> usize {
        self.last_column - self.first_column + 1
    }

    pub const fn contains_column(&self, column: usize) -> bool {
        column >= self.first_column && column <= self.last_column
    }

    /// Whether the box spans the whole of a matrix with `dimensions`
    pub const fn covers(&self, dimensions: (usize, usize)) -> bool {
        self.first_row == 0
            && self.first_column == 0
            && self.last_row + 1 == dimensions.0
            && self.last_column + 1 == dimensions.1
    }
}
