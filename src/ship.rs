//! Ship catalog types and per-ship placement/damage tracking.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::CellMask;
use crate::common::GameError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Column increases along the ship.
    Horizontal,
    /// Row increases along the ship.
    Vertical,
}

impl Orientation {
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl FromStr for Orientation {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(GameError::UnknownOrientation),
        }
    }
}

/// The five catalog ship types. Lengths are fixed by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    pub const fn length(self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser | ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }

    /// Lower-case wire name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "carrier",
            ShipType::Battleship => "battleship",
            ShipType::Cruiser => "cruiser",
            ShipType::Submarine => "submarine",
            ShipType::Destroyer => "destroyer",
        }
    }

    /// Position in [`crate::SHIPS`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ShipType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carrier" => Ok(ShipType::Carrier),
            "battleship" => Ok(ShipType::Battleship),
            "cruiser" => Ok(ShipType::Cruiser),
            "submarine" => Ok(ShipType::Submarine),
            "destroyer" => Ok(ShipType::Destroyer),
            _ => Err(GameError::UnknownShipType),
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cells a ship of `length` would cover from `origin`, in order. Fails with
/// `OutOfBounds` if any of them falls off the board.
pub fn footprint(
    origin: Coordinate,
    orientation: Orientation,
    length: usize,
) -> Result<Vec<Coordinate>, GameError> {
    let (dr, dc) = orientation.step();
    (0..length)
        .map(|i| {
            let row = origin.row.checked_add(dr * i).ok_or(GameError::OutOfBounds)?;
            let col = origin.col.checked_add(dc * i).ok_or(GameError::OutOfBounds)?;
            Coordinate::new(row, col).checked()
        })
        .collect()
}

/// One fleet entry: its type, where it sits once placed, and damage taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    position: Option<(Coordinate, Orientation)>,
    mask: CellMask,
    hits: usize,
}

impl Ship {
    /// An unplaced, undamaged ship.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            position: None,
            mask: CellMask::new(),
            hits: 0,
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.position.map(|(origin, _)| origin)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.position.map(|(_, orientation)| orientation)
    }

    /// Cells covered by the ship; empty while unplaced.
    pub fn mask(&self) -> CellMask {
        self.mask
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.placed() && self.hits == self.length()
    }

    /// Record the placement. Validation happens in `placement`.
    pub(crate) fn mark_placed(&mut self, origin: Coordinate, orientation: Orientation, cells: &[Coordinate]) {
        self.position = Some((origin, orientation));
        self.mask = cells.iter().copied().collect();
    }

    /// Count one more hit segment, capped at the ship length.
    pub(crate) fn register_hit(&mut self) {
        self.hits = (self.hits + 1).min(self.length());
    }
}
