// Hunt/target opponent: random over unfired cells, with a queue of
// neighbours to try after any hit that did not sink its ship.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bitboard::CellMask;
use crate::board::Board;
use crate::common::GameError;
use crate::coord::Coordinate;
use crate::shot::{ShotOutcome, ShotReport};

/// Computer player. Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct ComputerOpponent {
    rng: SmallRng,
    /// Cells not yet fired at on the human board. Sole candidate pool.
    untried: Vec<Coordinate>,
    fired: CellMask,
    targets: VecDeque<Coordinate>,
}

impl ComputerOpponent {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        ComputerOpponent {
            rng,
            untried: Coordinate::all().collect(),
            fired: CellMask::new(),
            targets: VecDeque::new(),
        }
    }

    /// Lay out the computer fleet at random.
    pub fn place_fleet(&mut self, board: &mut Board) -> Result<(), GameError> {
        board.place_fleet_randomly(&mut self.rng)
    }

    /// Number of cells still available to fire at.
    pub fn remaining(&self) -> usize {
        self.untried.len()
    }

    /// Whether `at` is already spent.
    pub fn has_fired(&self, at: Coordinate) -> bool {
        self.fired.contains(at)
    }

    /// Pending neighbour targets, front first.
    pub fn queued_targets(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.targets.iter().copied()
    }

    /// Choose the next cell and remove it from the pool. `None` only once
    /// every cell has been fired at.
    pub fn select_target(&mut self) -> Option<Coordinate> {
        while let Some(next) = self.targets.pop_front() {
            if let Some(pos) = self.untried.iter().position(|&c| c == next) {
                self.untried.swap_remove(pos);
                let _ = self.fired.set(next);
                return Some(next);
            }
        }
        if self.untried.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..self.untried.len());
        let next = self.untried.swap_remove(pick);
        let _ = self.fired.set(next);
        Some(next)
    }

    /// Learn from the resolution of the shot just taken.
    pub fn observe(&mut self, report: &ShotReport) {
        if report.outcome != ShotOutcome::Hit || report.sunk.is_some() {
            return;
        }
        for n in report.target.neighbors() {
            if !self.fired.contains(n) && !self.targets.contains(&n) {
                self.targets.push_back(n);
            }
        }
    }
}
