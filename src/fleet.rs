//! Fleet Registry: one ship per catalog type for one side.

use crate::bitboard::CellMask;
use crate::config::{NUM_SHIPS, SHIPS};
use crate::coord::Coordinate;
use crate::ship::{Ship, ShipType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
}

impl Fleet {
    /// Full catalog, nothing placed.
    pub fn new() -> Self {
        Fleet {
            ships: SHIPS.map(Ship::new),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, ship_type: ShipType) -> &Ship {
        &self.ships[ship_type.index()]
    }

    pub(crate) fn ship_mut(&mut self, ship_type: ShipType) -> &mut Ship {
        &mut self.ships[ship_type.index()]
    }

    /// Union of every placed ship's cells.
    pub fn occupied(&self) -> CellMask {
        self.ships
            .iter()
            .fold(CellMask::new(), |acc, ship| acc | ship.mask())
    }

    /// The placed ship covering `at`, if any.
    pub fn ship_at(&self, at: Coordinate) -> Option<ShipType> {
        self.ships
            .iter()
            .find(|ship| ship.mask().contains(at))
            .map(Ship::ship_type)
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::placed)
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// The side has lost once every ship is placed and sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk_count() == NUM_SHIPS
    }

    /// Catalog types not yet placed, in catalog order.
    pub fn unplaced(&self) -> impl Iterator<Item = ShipType> + '_ {
        self.ships
            .iter()
            .filter(|s| !s.placed())
            .map(Ship::ship_type)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
