//! Grid Model: the 10x10 cell-state matrix for one side.

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

const N: usize = BOARD_SIZE as usize;

/// State of a single cell. `Hit` and `Miss` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Code used in the owner's snapshot: 0 empty, 1 ship, 2 hit, -1 miss.
    pub fn own_code(self) -> i8 {
        match self {
            CellState::Empty => 0,
            CellState::Ship => 1,
            CellState::Hit => 2,
            CellState::Miss => -1,
        }
    }

    /// Code used in the fog-of-war snapshot: 0 unknown, 2 hit, -1 miss.
    /// Un-fired ship cells read as unknown.
    pub fn fog_code(self) -> i8 {
        match self {
            CellState::Empty | CellState::Ship => 0,
            CellState::Hit => 2,
            CellState::Miss => -1,
        }
    }

    /// Whether a shot has already resolved on this cell.
    pub fn is_fired(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[CellState; N]; N],
}

impl Grid {
    /// All-empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_at(&self, at: Coordinate) -> Result<CellState, GameError> {
        let at = at.checked()?;
        Ok(self.cells[at.row][at.col])
    }

    /// Overwrite one cell. Callers validate transitions; this only guards
    /// the bounds.
    pub fn set_cell(&mut self, at: Coordinate, state: CellState) -> Result<(), GameError> {
        let at = at.checked()?;
        self.cells[at.row][at.col] = state;
        Ok(())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }

    /// Matrix for the board owner.
    pub fn own_view(&self) -> Vec<Vec<i8>> {
        self.project(CellState::own_code)
    }

    /// Matrix for the opponent: ships stay hidden until hit.
    pub fn fog_view(&self) -> Vec<Vec<i8>> {
        self.project(CellState::fog_code)
    }

    fn project(&self, code: fn(CellState) -> i8) -> Vec<Vec<i8>> {
        self.cells
            .iter()
            .map(|row| row.iter().copied().map(code).collect())
            .collect()
    }
}
