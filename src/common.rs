//! Engine-wide error taxonomy.

use thiserror::Error;

/// Every way a command can be refused. All variants are request-scoped: the
/// game is left exactly as it was before the rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A coordinate falls outside the 10x10 board.
    #[error("coordinate is outside the board")]
    OutOfBounds,
    /// The ship type was already placed on this fleet.
    #[error("ship type has already been placed")]
    DuplicateShip,
    /// The ship would cover a cell already holding a ship.
    #[error("ship placement overlaps another ship")]
    Overlap,
    /// The target cell was already fired upon.
    #[error("cell has already been fired upon")]
    AlreadyFired,
    /// The command is not legal in the current phase.
    #[error("command is not allowed in the current phase")]
    IllegalPhase,
    /// The coordinate string is not a letter followed by a number.
    #[error("coordinate must be a letter A-J followed by a number 1-10")]
    MalformedCoordinate,
    /// The ship type is not in the fleet catalog.
    #[error("unknown ship type")]
    UnknownShipType,
    /// Orientation is neither horizontal nor vertical.
    #[error("orientation must be horizontal or vertical")]
    UnknownOrientation,
}

impl GameError {
    /// Stable name used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            GameError::OutOfBounds => "OutOfBounds",
            GameError::DuplicateShip => "DuplicateShip",
            GameError::Overlap => "Overlap",
            GameError::AlreadyFired => "AlreadyFired",
            GameError::IllegalPhase => "IllegalPhase",
            GameError::MalformedCoordinate => "MalformedCoordinate",
            GameError::UnknownShipType => "UnknownShipType",
            GameError::UnknownOrientation => "UnknownOrientation",
        }
    }
}
