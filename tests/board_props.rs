use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    random_board, Board, BoardError, Coordinate, ShotOutcome, BOARD_SIZE, FLEET, FLEET_SIZE,
};

fn board_with_shots(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = random_board(&mut rng);
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let r = rng.random_range(0..BOARD_SIZE as i32);
        let c = rng.random_range(0..BOARD_SIZE as i32);
        let _ = board.shoot(Coordinate::new(r, c));
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), FLEET_SIZE);
        for (i, a) in ships.iter().enumerate() {
            prop_assert_eq!(a.length(), FLEET[i]);
            for cell in a.cells() {
                prop_assert!(Board::in_bounds(cell));
            }
            for b in ships.iter().skip(i + 1) {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert_ne!(ca, cb);
                        prop_assert!(!ca.is_adjacent(cb), "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn repeat_shot_is_rejected(seed in any::<u64>(), row in 0..BOARD_SIZE as i32, col in 0..BOARD_SIZE as i32) {
        let mut board = board_with_shots(seed);
        let target = Coordinate::new(row, col);
        let _ = board.shoot(target);
        let before = board.clone();
        prop_assert_eq!(board.shoot(target), Err(BoardError::AlreadyShot(target)));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_never_mutates(seed in any::<u64>(), row in -20i32..20, col in -20i32..20) {
        let target = Coordinate::new(row, col);
        prop_assume!(!Board::in_bounds(target));
        let mut board = board_with_shots(seed);
        let before = board.clone();
        prop_assert_eq!(board.shoot(target), Err(BoardError::OutOfBounds(target)));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn sunk_count_matches_ships(seed in any::<u64>()) {
        let board = board_with_shots(seed);
        let sunk = board.ships().iter().filter(|s| s.is_sunk()).count();
        prop_assert_eq!(board.sunk_count(), sunk);
        prop_assert!(board.sunk_count() <= FLEET_SIZE);
    }

    #[test]
    fn each_ship_sinks_exactly_once(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        let ships = board.ships().to_vec();
        for ship in ships {
            let before = board.sunk_count();
            let cells: Vec<_> = ship.cells().collect();
            for (i, cell) in cells.iter().enumerate() {
                let expected = if i + 1 == cells.len() { ShotOutcome::Sunk } else { ShotOutcome::Hit };
                prop_assert_eq!(board.shoot(*cell), Ok(expected));
            }
            prop_assert_eq!(board.sunk_count(), before + 1);
        }
        prop_assert!(board.all_sunk());
    }
}
