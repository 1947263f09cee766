//! A 10x10 cell set packed into a `u128`.
//!
//! Used for per-ship footprints, fleet occupancy and the computer's memory of
//! cells it has already fired at. Row-major bit order, bit `row * 10 + col`.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use crate::common::GameError;
use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::coord::Coordinate;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellMask {
    bits: u128,
}

impl CellMask {
    /// Empty mask.
    #[inline]
    pub const fn new() -> Self {
        CellMask { bits: 0 }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Membership test. Off-board coordinates are an error, not `false`.
    pub fn get(&self, at: Coordinate) -> Result<bool, GameError> {
        let at = at.checked()?;
        Ok((self.bits >> at.index()) & 1 == 1)
    }

    /// Like `get`, but off-board coordinates are simply not members.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.get(at).unwrap_or(false)
    }

    /// Add a cell to the set.
    pub fn set(&mut self, at: Coordinate) -> Result<(), GameError> {
        let at = at.checked()?;
        self.bits |= 1u128 << at.index();
        Ok(())
    }

    /// True when the two masks share any cell.
    pub fn intersects(&self, other: &CellMask) -> bool {
        self.bits & other.bits != 0
    }

    /// Iterate member cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..CELL_COUNT)
            .filter(move |i| (self.bits >> i) & 1 == 1)
            .map(|i| Coordinate::new(i / BOARD_SIZE as usize, i % BOARD_SIZE as usize))
    }
}

impl BitAnd for CellMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask { bits: self.bits & rhs.bits }
    }
}

impl BitOr for CellMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask { bits: self.bits | rhs.bits }
    }
}

impl BitOrAssign for CellMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Coordinate> for CellMask {
    /// Collect on-board coordinates; off-board ones are dropped.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut mask = CellMask::new();
        for at in iter {
            let _ = mask.set(at);
        }
        mask
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.to_string())).finish()
    }
}
