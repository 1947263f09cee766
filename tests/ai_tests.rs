use std::collections::HashSet;

use broadside::{
    Board, ComputerOpponent, Coordinate, Orientation, ShipType, ShotOutcome, ShotReport,
    CELL_COUNT,
};
use proptest::prelude::*;

fn at(s: &str) -> Coordinate {
    s.parse().unwrap()
}

fn hit(target: Coordinate) -> ShotReport {
    ShotReport {
        target,
        outcome: ShotOutcome::Hit,
        sunk: None,
        fleet_destroyed: false,
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = ComputerOpponent::new(7);
    let mut b = ComputerOpponent::new(7);
    for _ in 0..CELL_COUNT {
        assert_eq!(a.select_target(), b.select_target());
    }
}

#[test]
fn test_neighbors_tried_after_unsunk_hit() {
    let mut ai = ComputerOpponent::new(1);
    let first = ai.select_target().unwrap();
    ai.observe(&hit(first));
    let expected: HashSet<_> = first.neighbors().collect();
    let queued: HashSet<_> = ai.queued_targets().collect();
    assert_eq!(queued, expected);

    for _ in 0..expected.len() {
        let next = ai.select_target().unwrap();
        assert!(expected.contains(&next), "{next} should be a neighbour of {first}");
    }
}

#[test]
fn test_no_follow_up_after_sink_or_miss() {
    let mut ai = ComputerOpponent::new(3);
    let t = ai.select_target().unwrap();
    ai.observe(&ShotReport {
        sunk: Some(ShipType::Destroyer),
        ..hit(t)
    });
    assert_eq!(ai.queued_targets().count(), 0);

    let t = ai.select_target().unwrap();
    ai.observe(&ShotReport {
        outcome: ShotOutcome::Miss,
        ..hit(t)
    });
    assert_eq!(ai.queued_targets().count(), 0);
}

#[test]
fn test_queued_neighbors_skip_fired_cells() {
    let mut ai = ComputerOpponent::new(11);
    let mut fired = HashSet::new();
    // spend a block of shots, then report a hit in the middle of them
    for _ in 0..60 {
        fired.insert(ai.select_target().unwrap());
    }
    let centre = *fired.iter().next().unwrap();
    ai.observe(&hit(centre));
    assert!(ai.queued_targets().all(|c| !fired.contains(&c) && c.in_bounds()));
    assert!(ai.queued_targets().all(|c| !ai.has_fired(c)));
}

#[test]
fn test_exhausts_board_then_stops() {
    let mut ai = ComputerOpponent::new(5);
    let mut seen = HashSet::new();
    while let Some(c) = ai.select_target() {
        assert!(seen.insert(c), "{c} selected twice");
    }
    assert_eq!(seen.len(), CELL_COUNT);
    assert_eq!(ai.remaining(), 0);
}

#[test]
fn test_places_full_fleet() {
    let mut ai = ComputerOpponent::new(9);
    let mut board = Board::new();
    ai.place_fleet(&mut board).unwrap();
    assert!(board.fleet().all_placed());
}

#[test]
fn test_hunts_down_a_ship() {
    let mut ai = ComputerOpponent::new(21);
    let mut board = Board::new();
    board
        .place(ShipType::Carrier, at("E3"), Orientation::Horizontal)
        .unwrap();
    let mut shots = 0;
    loop {
        let target = ai.select_target().unwrap();
        let report = board.receive_shot(target).unwrap();
        ai.observe(&report);
        shots += 1;
        if report.sunk.is_some() {
            break;
        }
    }
    assert!(shots <= CELL_COUNT);
    assert!(board.fleet().ship(ShipType::Carrier).is_sunk());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn never_repeats_while_playing_a_real_board(seed in any::<u64>()) {
        let mut ai = ComputerOpponent::new(seed);
        let mut board = Board::new();
        let mut placer = ComputerOpponent::new(seed ^ 0xdead_beef);
        placer.place_fleet(&mut board).unwrap();

        let mut seen = HashSet::new();
        while let Some(target) = ai.select_target() {
            prop_assert!(seen.insert(target));
            let report = board.receive_shot(target);
            prop_assert!(report.is_ok());
            let report = report.unwrap();
            ai.observe(&report);
            if report.fleet_destroyed {
                break;
            }
        }
        prop_assert!(board.fleet().is_defeated());
        prop_assert_eq!(seen.len() + ai.remaining(), CELL_COUNT);
    }
}
