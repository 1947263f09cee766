//! Headless full game: the human side is driven by a second computer
//! opponent through the same commands a client would send.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::ai::ComputerOpponent;
use crate::common::GameError;
use crate::config::{CELL_COUNT, SHIPS};
use crate::game::{Game, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub seed: u64,
    pub turns: usize,
    pub winner: Option<&'static str>,
    #[serde(rename = "humanShipsSunk")]
    pub human_ships_sunk: usize,
    #[serde(rename = "computerShipsSunk")]
    pub computer_ships_sunk: usize,
}

pub fn simulate(seed: u64) -> Result<SimulationSummary, GameError> {
    let mut game = Game::new(seed);
    game.begin()?;

    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    for ship_type in SHIPS {
        let (origin, orientation) = game.human_board().random_placement(&mut rng, ship_type)?;
        game.place_ship(ship_type, origin, orientation)?;
    }

    let mut autopilot = ComputerOpponent::from_rng(rng);
    let mut turns = 0;
    while game.phase() == Phase::Playing && turns < CELL_COUNT {
        let Some(target) = autopilot.select_target() else {
            break;
        };
        let turn = game.fire(target)?;
        autopilot.observe(&turn.human);
        turns += 1;
    }

    Ok(SimulationSummary {
        seed,
        turns,
        winner: game.winner().map(|w| w.name()),
        human_ships_sunk: game.human_board().fleet().sunk_count(),
        computer_ships_sunk: game.computer_board().fleet().sunk_count(),
    })
}
