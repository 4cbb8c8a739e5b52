use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{Board, BoardError, Coordinate, HumanPlayer, Player};

fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    HumanPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_reprompts_until_valid() {
    let mut p = player("abc\n1\nx y\n3 4\n");
    let mut rng = SmallRng::seed_from_u64(1);
    let target = p.select_target(&mut rng, &Board::new()).unwrap();
    assert_eq!(target, Coordinate::new(2, 3));

    let (_, out) = p.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Your move: ").count(), 4);
    assert_eq!(out.matches("Enter 2 coordinates!").count(), 2);
    assert_eq!(out.matches("Enter numbers!").count(), 1);
}

#[test]
fn test_zero_is_passed_through() {
    let mut p = player("0 1\n");
    let mut rng = SmallRng::seed_from_u64(1);
    let target = p.select_target(&mut rng, &Board::new()).unwrap();
    assert!(!Board::in_bounds(target));
}

#[test]
fn test_end_of_input_is_an_error() {
    let mut p = player("1\n");
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(p.select_target(&mut rng, &Board::new()).is_err());
}

#[test]
fn test_rejection_is_reported() {
    let mut p = player("");
    let target = Coordinate::new(0, 0);
    p.handle_rejected(target, BoardError::AlreadyShot(target));
    p.handle_rejected(target, BoardError::OutOfBounds(target));
    let (_, out) = p.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("You already shot at this cell"));
    assert!(out.contains("You shot outside the board!"));
}
