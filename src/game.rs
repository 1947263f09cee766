//! Game State Machine: the aggregate that owns both boards and gates every
//! command on the current phase.

use log::{error, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai::ComputerOpponent;
use crate::board::Board;
use crate::common::GameError;
use crate::coord::Coordinate;
use crate::ship::{Orientation, ShipType};
use crate::shot::ShotReport;

/// Coarse game stage. Wire codes 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Placing,
    Playing,
    Over,
}

impl Phase {
    pub fn code(self) -> u8 {
        match self {
            Phase::Waiting => 1,
            Phase::Placing => 2,
            Phase::Playing => 3,
            Phase::Over => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Human,
    Computer,
}

impl Winner {
    pub fn name(self) -> &'static str {
        match self {
            Winner::Human => "human",
            Winner::Computer => "computer",
        }
    }
}

/// Both halves of one fire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The human's shot on the computer board.
    pub human: ShotReport,
    /// The computer's answer, absent when the human shot ended the game.
    pub computer: Option<ShotReport>,
    pub phase: Phase,
    pub winner: Option<Winner>,
}

#[derive(Debug, Clone)]
pub struct Game {
    human: Board,
    computer: Board,
    phase: Phase,
    winner: Option<Winner>,
    opponent: ComputerOpponent,
    /// Seeds each fresh opponent on reset.
    rng: SmallRng,
}

impl Game {
    /// New game in `Waiting`.
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let opponent = ComputerOpponent::new(rng.random());
        Game {
            human: Board::new(),
            computer: Board::new(),
            phase: Phase::Waiting,
            winner: None,
            opponent,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Only set once the phase is `Over`.
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn human_board(&self) -> &Board {
        &self.human
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    pub fn opponent(&self) -> &ComputerOpponent {
        &self.opponent
    }

    /// Session start: `Waiting` -> `Placing`.
    pub fn begin(&mut self) -> Result<Phase, GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::IllegalPhase);
        }
        self.phase = Phase::Placing;
        info!("session started, placing ships");
        Ok(self.phase)
    }

    /// Place one human ship. The last placement also lays out the computer
    /// fleet and moves the game to `Playing` before returning.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Phase, GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::IllegalPhase);
        }
        let mut human = self.human.clone();
        human.place(ship_type, origin, orientation)?;
        if human.fleet().all_placed() {
            self.computer = self.layout_computer_fleet()?;
            self.phase = Phase::Playing;
        }
        self.human = human;
        info!("human placed {} at {} ({})", ship_type, origin, orientation.name());
        if self.phase == Phase::Playing {
            info!("all ships placed, battle begins");
        }
        Ok(self.phase)
    }

    fn layout_computer_fleet(&mut self) -> Result<Board, GameError> {
        let mut board = Board::new();
        match self.opponent.place_fleet(&mut board) {
            Ok(()) => Ok(board),
            Err(e) => {
                error!("random computer layout failed ({e}), using fixed layout");
                Board::fixed_layout()
            }
        }
    }

    /// Resolve a human shot and, unless it ended the game, the computer's
    /// reply. Both happen before the phase is re-evaluated.
    pub fn fire(&mut self, target: Coordinate) -> Result<TurnReport, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::IllegalPhase);
        }
        let human = self.computer.receive_shot(target)?;
        info!("human fired at {}: {}", target, human.outcome.name());

        let computer = if human.fleet_destroyed {
            None
        } else {
            self.computer_turn()
        };

        if human.fleet_destroyed {
            self.finish(Winner::Human);
        } else if computer.is_some_and(|r| r.fleet_destroyed) {
            self.finish(Winner::Computer);
        }

        Ok(TurnReport {
            human,
            computer,
            phase: self.phase,
            winner: self.winner,
        })
    }

    fn computer_turn(&mut self) -> Option<ShotReport> {
        let target = self.opponent.select_target()?;
        match self.human.receive_shot(target) {
            Ok(report) => {
                self.opponent.observe(&report);
                info!("computer fired at {}: {}", target, report.outcome.name());
                Some(report)
            }
            Err(e) => {
                error!("computer shot at {target} rejected: {e}");
                None
            }
        }
    }

    fn finish(&mut self, winner: Winner) {
        self.phase = Phase::Over;
        self.winner = Some(winner);
        info!("game over, {} wins", winner.name());
    }

    /// Start over with empty boards. Lands in `Placing`; legal in any phase.
    pub fn reset(&mut self) -> Phase {
        self.human = Board::new();
        self.computer = Board::new();
        self.winner = None;
        self.opponent = ComputerOpponent::new(self.rng.random());
        self.phase = Phase::Placing;
        info!("game reset");
        self.phase
    }
}
