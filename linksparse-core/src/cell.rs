//! Storage node for one non-zero entry
//!
//! A cell is linked into exactly one row list and one column list of the
//! matrix that owns it. Links are arena handles rather than pointers.

/// Element type stored in every matrix
pub type Value = f32;

/// Stable handle of a cell inside its matrix's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// Slot index inside the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Which of the two lists a traversal follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Row,
    Column,
}

/// One stored non-zero entry
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub(crate) row: usize,
    pub(crate) column: usize,
    pub(crate) value: Value,
    pub(crate) next_in_row: Option<CellId>,
    pub(crate) next_in_column: Option<CellId>,
}

impl Cell {
    pub(crate) const fn new(row: usize, column: usize, value: Value) -> Self {
        Self {
            row,
            column,
            value,
            next_in_row: None,
            next_in_column: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// Coordinates as `(row, column)`
    pub fn coordinates(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Index of the list this cell belongs to along `axis`
    pub(crate) fn line(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }

    /// Position of this cell within its `axis` list
    pub(crate) fn offset(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.column,
            Axis::Column => self.row,
        }
    }

    pub(crate) fn next(&self, axis: Axis) -> Option<CellId> {
        match axis {
            Axis::Row => self.next_in_row,
            Axis::Column => self.next_in_column,
        }
    }

    pub(crate) fn next_mut(&mut self, axis: Axis) -> &mut Option<CellId> {
        match axis {
            Axis::Row => &mut self.next_in_row,
            Axis::Column => &mut self.next_in_column,
        }
    }
}
