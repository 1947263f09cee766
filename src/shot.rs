//! Shot Resolver.

use crate::board::Board;
use crate::common::GameError;
use crate::coord::Coordinate;
use crate::grid::CellState;
use crate::ship::ShipType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

impl ShotOutcome {
    pub fn name(self) -> &'static str {
        match self {
            ShotOutcome::Hit => "hit",
            ShotOutcome::Miss => "miss",
        }
    }
}

/// What one resolved shot did to the defending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Set when this shot sank a ship.
    pub sunk: Option<ShipType>,
    /// Set when this shot left the defending fleet fully sunk.
    pub fleet_destroyed: bool,
}

impl Board {
    /// Apply a shot to this (defending) board. Re-firing on a resolved cell
    /// is refused and leaves the board unchanged.
    pub fn receive_shot(&mut self, target: Coordinate) -> Result<ShotReport, GameError> {
        let cell = self.grid.cell_at(target)?;
        if cell.is_fired() {
            return Err(GameError::AlreadyFired);
        }

        let (outcome, sunk) = if cell == CellState::Ship {
            self.grid.set_cell(target, CellState::Hit)?;
            let sunk = self.fleet.ship_at(target).and_then(|ship_type| {
                let ship = self.fleet.ship_mut(ship_type);
                ship.register_hit();
                ship.is_sunk().then_some(ship_type)
            });
            (ShotOutcome::Hit, sunk)
        } else {
            self.grid.set_cell(target, CellState::Miss)?;
            (ShotOutcome::Miss, None)
        };

        Ok(ShotReport {
            target,
            outcome,
            sunk,
            fleet_destroyed: self.fleet.is_defeated(),
        })
    }
}
