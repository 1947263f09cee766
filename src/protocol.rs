//! Sync Protocol: JSON request/response shapes and the handlers that map them
//! onto a [`Game`]. Transport independent; see `server` for the HTTP routes.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::common::GameError;
use crate::coord::Coordinate;
use crate::game::Game;
use crate::ship::{Orientation, Ship, ShipType};
use crate::shot::ShotReport;

/// Wire name for a request body that could not be decoded.
pub const MALFORMED_REQUEST: &str = "MalformedRequest";

/// Structured failure: `{success: false, error, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub success: bool,
    pub error: &'static str,
    pub message: String,
}

impl Rejection {
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Rejection {
            success: false,
            error: MALFORMED_REQUEST,
            message: message.into(),
        }
    }
}

impl From<GameError> for Rejection {
    fn from(err: GameError) -> Self {
        Rejection {
            success: false,
            error: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseResponse {
    pub state: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridResponse {
    pub grid: Vec<Vec<i8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipStatus {
    #[serde(rename = "type")]
    pub ship_type: &'static str,
    pub size: usize,
    pub placed: bool,
    pub hits: usize,
    pub sunk: bool,
}

impl From<&Ship> for ShipStatus {
    fn from(ship: &Ship) -> Self {
        ShipStatus {
            ship_type: ship.ship_type().name(),
            size: ship.length(),
            placed: ship.placed(),
            hits: ship.hits(),
            sunk: ship.is_sunk(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetResponse {
    pub success: bool,
    pub ships: Vec<ShipStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceRequest {
    #[serde(rename = "type")]
    pub ship_type: String,
    pub position: String,
    pub orientation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceResponse {
    pub success: bool,
    #[serde(rename = "gameState")]
    pub game_state: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FireRequest {
    pub target: String,
}

/// The computer's reply shot, as reported alongside the human's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotSummary {
    pub target: String,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunk: Option<&'static str>,
}

impl From<&ShotReport> for ShotSummary {
    fn from(report: &ShotReport) -> Self {
        ShotSummary {
            target: report.target.to_string(),
            result: report.outcome.name(),
            sunk: report.sunk.map(ShipType::name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FireResponse {
    pub success: bool,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunk: Option<&'static str>,
    #[serde(rename = "gameOver")]
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer: Option<ShotSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOverResponse {
    #[serde(rename = "gameOver")]
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<&'static str>,
}

/// Reply to `reset` and `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseChangeResponse {
    pub success: bool,
    pub state: u8,
}

pub fn phase(game: &Game) -> PhaseResponse {
    PhaseResponse {
        state: game.phase().code(),
    }
}

/// The human's own board, ships included.
pub fn own_grid(game: &Game) -> GridResponse {
    GridResponse {
        grid: game.human_board().grid().own_view(),
    }
}

/// The computer's board as the human may see it.
pub fn target_grid(game: &Game) -> GridResponse {
    GridResponse {
        grid: game.computer_board().grid().fog_view(),
    }
}

pub fn fleet_status(game: &Game) -> FleetResponse {
    FleetResponse {
        success: true,
        ships: game
            .human_board()
            .fleet()
            .ships()
            .iter()
            .map(ShipStatus::from)
            .collect(),
    }
}

pub fn game_over(game: &Game) -> GameOverResponse {
    GameOverResponse {
        game_over: game.is_over(),
        winner: game.winner().map(|w| w.name()),
    }
}

pub fn place_ship(game: &mut Game, req: &PlaceRequest) -> Result<PlaceResponse, Rejection> {
    let parsed = parse_placement(req).and_then(|(ship_type, origin, orientation)| {
        game.place_ship(ship_type, origin, orientation)
    });
    match parsed {
        Ok(phase) => Ok(PlaceResponse {
            success: true,
            game_state: phase.code(),
        }),
        Err(e) => {
            warn!("place-ship {:?} rejected: {}", req, e.kind());
            Err(e.into())
        }
    }
}

fn parse_placement(req: &PlaceRequest) -> Result<(ShipType, Coordinate, Orientation), GameError> {
    let ship_type = req.ship_type.parse::<ShipType>()?;
    let orientation = req.orientation.parse::<Orientation>()?;
    let origin = req.position.parse::<Coordinate>()?;
    Ok((ship_type, origin, orientation))
}

pub fn fire(game: &mut Game, req: &FireRequest) -> Result<FireResponse, Rejection> {
    let turn = req
        .target
        .parse::<Coordinate>()
        .and_then(|target| game.fire(target))
        .map_err(|e| {
            warn!("fire at {:?} rejected: {}", req.target, e.kind());
            Rejection::from(e)
        })?;
    debug!("turn resolved: {:?}", turn);
    Ok(FireResponse {
        success: true,
        result: turn.human.outcome.name(),
        sunk: turn.human.sunk.map(ShipType::name),
        game_over: turn.winner.is_some(),
        winner: turn.winner.map(|w| w.name()),
        computer: turn.computer.as_ref().map(ShotSummary::from),
    })
}

pub fn reset(game: &mut Game) -> PhaseChangeResponse {
    PhaseChangeResponse {
        success: true,
        state: game.reset().code(),
    }
}

pub fn start(game: &mut Game) -> Result<PhaseChangeResponse, Rejection> {
    let phase = game.begin().map_err(|e| {
        warn!("start rejected: {}", e.kind());
        Rejection::from(e)
    })?;
    Ok(PhaseChangeResponse {
        success: true,
        state: phase.code(),
    })
}
