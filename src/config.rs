use crate::ship::ShipType;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet catalog, in the order ships are listed to clients and auto-placed.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::Carrier,
    ShipType::Battleship,
    ShipType::Cruiser,
    ShipType::Submarine,
    ShipType::Destroyer,
];

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Number of cells on one board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Session used when a client does not name one.
pub const DEFAULT_SESSION: &str = "default";

/// Live sessions kept by a server before the least recently used is evicted.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Environment variable read by the logger.
pub const LOG_ENV: &str = "BROADSIDE_LOG";
