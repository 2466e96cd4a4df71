//! Structural invariant checks for development builds

use super::Matrix;
use crate::cell::{Axis, CellId};
use hashbrown::HashSet;

impl Matrix {
    /// Panic unless both indexes hold exactly the same set of live,
    /// non-zero, in-bounds cells and every head starts a non-empty line
    pub(crate) fn assert_invariants(&self) {
        let by_row = self.collect_line_members(Axis::Row);
        let by_column = self.collect_line_members(Axis::Column);

        assert_eq!(by_row, by_column, "row and column indexes disagree");
        assert_eq!(by_row.len(), self.nnz(), "non-zero count out of sync");
    }

    fn collect_line_members(&self, axis: Axis) -> HashSet<CellId> {
        let mut members = HashSet::with_capacity(self.nnz());
        let extent = match axis {
            Axis::Row => self.rows,
            Axis::Column => self.columns,
        };
        for (&line, &head) in self.heads(axis) {
            assert!(line < extent, "{axis:?} head {line} outside the matrix");
            let mut cursor = Some(head);
            while let Some(id) = cursor {
                let cell = self
                    .cells
                    .get(id)
                    .unwrap_or_else(|| panic!("{axis:?} list {line} links a released cell"));
                assert!(members.insert(id), "cell {} linked twice", id.index());
                assert_eq!(cell.line(axis), line, "cell filed under the wrong list");
                assert!(cell.value != 0.0, "zero-valued cell stored");
                assert!(
                    cell.row < self.rows() && cell.column < self.columns(),
                    "cell outside the matrix"
                );
                cursor = cell.next(axis);
            }
        }
        members
    }
}
