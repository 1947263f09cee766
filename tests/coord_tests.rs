use broadside::{Coordinate, GameError};

#[test]
fn test_parse_letter_then_number() {
    assert_eq!("A1".parse::<Coordinate>().unwrap(), Coordinate::new(0, 0));
    assert_eq!("C7".parse::<Coordinate>().unwrap(), Coordinate::new(2, 6));
    assert_eq!("E10".parse::<Coordinate>().unwrap(), Coordinate::new(4, 9));
    assert_eq!("J10".parse::<Coordinate>().unwrap(), Coordinate::new(9, 9));
}

#[test]
fn test_parse_is_case_insensitive_and_output_is_upper() {
    let c: Coordinate = "c7".parse().unwrap();
    assert_eq!(c, Coordinate::new(2, 6));
    assert_eq!(c.to_string(), "C7");
    assert_eq!(Coordinate::new(4, 9).to_string(), "E10");
}

#[test]
fn test_parse_malformed() {
    for s in ["", "A", "7", "7C", "AB3", "A1x", "A-1", "A 1", "é3", "A+1", "A01", "A0010", "B100", "C07"] {
        assert_eq!(
            s.parse::<Coordinate>().unwrap_err(),
            GameError::MalformedCoordinate,
            "{s:?}"
        );
    }
}

#[test]
fn test_parse_off_board() {
    for s in ["K1", "Z5", "A0", "A11", "J99"] {
        assert_eq!(
            s.parse::<Coordinate>().unwrap_err(),
            GameError::OutOfBounds,
            "{s:?}"
        );
    }
}

#[test]
fn test_neighbors_clip_at_edges() {
    let corner: Vec<_> = Coordinate::new(0, 0).neighbors().collect();
    assert_eq!(corner, vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]);
    assert_eq!(Coordinate::new(5, 5).neighbors().count(), 4);
    assert_eq!(Coordinate::new(9, 4).neighbors().count(), 3);
}

#[test]
fn test_all_cells() {
    let all: Vec<_> = Coordinate::all().collect();
    assert_eq!(all.len(), 100);
    assert_eq!(all[0], Coordinate::new(0, 0));
    assert_eq!(all[99], Coordinate::new(9, 9));
    assert!(all.iter().all(Coordinate::in_bounds));
}
