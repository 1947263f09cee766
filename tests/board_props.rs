use broadside::{
    Board, CellMask, CellState, Coordinate, GameError, Orientation, ShipType, BOARD_SIZE, SHIPS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn ship_type() -> impl Strategy<Value = ShipType> {
    prop::sample::select(SHIPS.to_vec())
}

fn coord() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE as usize, 0..BOARD_SIZE as usize).prop_map(|(r, c)| Coordinate::new(r, c))
}

/// Board with a random subset of ships placed and some random shots taken.
fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for ship_type in SHIPS {
        if rng.random_bool(0.7) {
            let (origin, o) = board.random_placement(&mut rng, ship_type).unwrap();
            board.place(ship_type, origin, o).unwrap();
        }
    }
    for _ in 0..rng.random_range(0..BOARD_SIZE as usize * 3) {
        let r = rng.random_range(0..BOARD_SIZE as usize);
        let c = rng.random_range(0..BOARD_SIZE as usize);
        let _ = board.receive_shot(Coordinate::new(r, c));
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placements_stay_in_bounds_and_disjoint(
        attempts in prop::collection::vec((ship_type(), coord(), orientation()), 1..12)
    ) {
        let mut board = Board::new();
        for (ship_type, origin, o) in attempts {
            let before = board.clone();
            match board.place(ship_type, origin, o) {
                Ok(()) => {
                    let mask = board.fleet().ship(ship_type).mask();
                    prop_assert_eq!(mask.count_ones(), ship_type.length());
                    prop_assert!(mask.iter().all(|c| c.in_bounds()));
                    for other in board.fleet().ships() {
                        if other.ship_type() != ship_type {
                            prop_assert!(!mask.intersects(&other.mask()));
                        }
                    }
                }
                Err(_) => {
                    prop_assert_eq!(&board, &before);
                }
            }
        }
        let occupied = board.fleet().occupied();
        let expected: usize = board.fleet().ships().iter().filter(|s| s.placed()).map(|s| s.length()).sum();
        prop_assert_eq!(occupied.count_ones(), expected);
        prop_assert_eq!(board.grid().count(CellState::Ship), expected);
    }

    #[test]
    fn second_placement_of_a_type_is_duplicate(
        ship_type in ship_type(),
        second in coord(),
        o in orientation(),
    ) {
        let mut board = Board::new();
        board.place(ship_type, Coordinate::new(0, 0), Orientation::Vertical).unwrap();
        let result = board.place(ship_type, second, o);
        // off-board proposals are rejected on bounds first
        let fits = broadside::footprint(second, o, ship_type.length()).is_ok();
        if fits {
            prop_assert_eq!(result, Err(GameError::DuplicateShip));
        } else {
            prop_assert_eq!(result, Err(GameError::OutOfBounds));
        }
    }

    #[test]
    fn refire_is_rejected_without_change(seed in any::<u64>(), target in coord()) {
        let mut board = random_board(seed);
        let first = board.receive_shot(target);
        prop_assume!(first.is_ok());
        let after_first = board.clone();
        prop_assert_eq!(board.receive_shot(target), Err(GameError::AlreadyFired));
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn sunk_iff_all_segments_hit(seed in any::<u64>()) {
        let board = random_board(seed);
        let hits = {
            let mut m = CellMask::new();
            for c in Coordinate::all() {
                if board.grid().cell_at(c).unwrap() == CellState::Hit {
                    m.set(c).unwrap();
                }
            }
            m
        };
        for ship in board.fleet().ships() {
            let hit_cells = (ship.mask() & hits).count_ones();
            prop_assert_eq!(ship.hits(), hit_cells);
            prop_assert_eq!(ship.is_sunk(), ship.placed() && hit_cells == ship.length());
        }
    }
}
