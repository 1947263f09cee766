//! Board coordinates and their wire form (`"C7"`: row letter, 1-based column).

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// A (row, column) pair. Construction does not check bounds; consumers call
/// [`Coordinate::in_bounds`] or go through a checked grid accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE as usize && self.col < BOARD_SIZE as usize
    }

    /// Like `in_bounds`, but as a `Result` for use with `?`.
    pub fn checked(self) -> Result<Self, GameError> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Row-major index in `0..CELL_COUNT`. Only meaningful in bounds.
    pub(crate) fn index(&self) -> usize {
        self.row * BOARD_SIZE as usize + self.col
    }

    /// The up-to-four orthogonal neighbours that lie on the board.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let deltas: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        deltas.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Some(Coordinate::new(row, col)).filter(Coordinate::in_bounds)
        })
    }

    /// Iterate every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        let n = BOARD_SIZE as usize;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coordinate::new(row, col)))
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    /// Parse `"E10"`-style strings. The letter is case-insensitive. A string
    /// of the right shape whose letter or number falls off the board is
    /// `OutOfBounds`; anything else is `MalformedCoordinate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or(GameError::MalformedCoordinate)?;
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GameError::MalformedCoordinate);
        }
        // no zero padding: "A01" is not a column number
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(GameError::MalformedCoordinate);
        }
        let number: usize = digits.parse().map_err(|_| GameError::MalformedCoordinate)?;
        if number == 0 {
            return Err(GameError::OutOfBounds);
        }
        let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        Coordinate::new(row, number - 1).checked()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}
