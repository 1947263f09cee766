//! One side's board: the cell grid plus the fleet that sits on it.

use crate::fleet::Fleet;
use crate::grid::Grid;

/// Grid and fleet are only mutated together, through `placement` and `shot`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) fleet: Fleet,
}

impl Board {
    /// Empty grid, unplaced fleet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}
