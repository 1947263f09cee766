mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "server")]
mod logging;
mod placement;
pub mod protocol;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod session;
mod ship;
mod shot;
mod simulate;

pub use ai::*;
pub use bitboard::CellMask;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "server")]
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
pub use shot::*;
pub use simulate::*;
