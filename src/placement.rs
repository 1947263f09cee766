//! Placement Validator and the computer's random fleet layout.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, SHIPS};
use crate::coord::Coordinate;
use crate::grid::CellState;
use crate::ship::{footprint, Orientation, ShipType};

/// Attempts per ship before random placement gives up.
const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Check a proposed placement without touching the board. Returns the cells
/// the ship would cover. Checks run in a fixed order: bounds, duplicate type,
/// overlap.
pub fn plan_placement(
    board: &Board,
    ship_type: ShipType,
    origin: Coordinate,
    orientation: Orientation,
) -> Result<Vec<Coordinate>, GameError> {
    let cells = footprint(origin, orientation, ship_type.length())?;
    if board.fleet.ship(ship_type).placed() {
        return Err(GameError::DuplicateShip);
    }
    for &at in &cells {
        if board.grid.cell_at(at)? == CellState::Ship {
            return Err(GameError::Overlap);
        }
    }
    Ok(cells)
}

impl Board {
    /// Validate and apply a placement. On error nothing changes.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let cells = plan_placement(self, ship_type, origin, orientation)?;
        for &at in &cells {
            self.grid.set_cell(at, CellState::Ship)?;
        }
        self.fleet
            .ship_mut(ship_type)
            .mark_placed(origin, orientation, &cells);
        debug!("placed {} at {} ({})", ship_type, origin, orientation.name());
        Ok(())
    }

    /// Pick a random legal origin and orientation for `ship_type`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coordinate, Orientation), GameError> {
        let n = BOARD_SIZE as usize;
        let len = ship_type.length();
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (n - 1, n - len),
                Orientation::Vertical => (n - len, n - 1),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            match plan_placement(self, ship_type, origin, orientation) {
                Ok(_) => return Ok((origin, orientation)),
                Err(GameError::Overlap) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(GameError::Overlap)
    }

    /// Place every still-unplaced ship at random. Works on a scratch copy so
    /// a failure leaves `self` untouched.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let mut scratch = self.clone();
        for ship_type in SHIPS {
            if scratch.fleet.ship(ship_type).placed() {
                continue;
            }
            let (origin, orientation) = scratch.random_placement(rng, ship_type)?;
            scratch.place(ship_type, origin, orientation)?;
        }
        *self = scratch;
        Ok(())
    }

    /// Deterministic layout: one ship per even row, flush left.
    pub fn fixed_layout() -> Result<Board, GameError> {
        let mut board = Board::new();
        for (i, ship_type) in SHIPS.into_iter().enumerate() {
            board.place(ship_type, Coordinate::new(i * 2, 0), Orientation::Horizontal)?;
        }
        Ok(board)
    }
}
