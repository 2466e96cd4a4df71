//! Slot arena holding every cell of one matrix
//!
//! Released slots are threaded onto a free list and reused by later
//! insertions, so a `CellId` stays valid until its cell is removed.

use crate::cell::{Cell, CellId};
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Cell),
    Vacant { next_free: Option<CellId> },
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CellArena {
    slots: Vec<Slot>,
    free_head: Option<CellId>,
    len: usize,
}

impl CellArena {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live cells
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn insert(&mut self, cell: Cell) -> CellId {
        self.len += 1;
        match self.free_head {
            Some(id) => {
                if let Slot::Vacant { next_free } = self.slots[id.0] {
                    self.free_head = next_free;
                }
                self.slots[id.0] = Slot::Occupied(cell);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(cell));
                CellId(self.slots.len() - 1)
            }
        }
    }

    /// Release the slot behind `id` and hand back its cell
    pub(crate) fn remove(&mut self, id: CellId) -> Cell {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(cell) => {
                self.free_head = Some(id);
                self.len -= 1;
                cell
            }
            Slot::Vacant { .. } => unreachable!("cell {} released twice", id.0),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn get(&self, id: CellId) -> Option<&Cell> {
        match self.slots.get(id.0)? {
            Slot::Occupied(cell) => Some(cell),
            Slot::Vacant { .. } => None,
        }
    }
}

impl Index<CellId> for CellArena {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        match &self.slots[id.0] {
            Slot::Occupied(cell) => cell,
            Slot::Vacant { .. } => unreachable!("dangling link to cell {}", id.0),
        }
    }
}

impl IndexMut<CellId> for CellArena {
    fn index_mut(&mut self, id: CellId) -> &mut Cell {
        match &mut self.slots[id.0] {
            Slot::Occupied(cell) => cell,
            Slot::Vacant { .. } => unreachable!("dangling link to cell {}", id.0),
        }
    }
}
