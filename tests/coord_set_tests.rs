use seabattle::{CoordSet, Coordinate};

#[test]
fn test_insert_contains_clear() {
    let mut set = CoordSet::<u64, 6>::new();
    let a = Coordinate::new(5, 5);
    assert!(!set.contains(a));
    assert_eq!(set.insert(a), Ok(true));
    assert!(set.contains(a));
    assert_eq!(set.insert(a), Ok(false));
    set.clear();
    assert!(!set.contains(a));
}

#[test]
fn test_every_cell_fits() {
    let mut set = CoordSet::<u64, 6>::new();
    for r in 0..6 {
        for c in 0..6 {
            assert_eq!(set.insert(Coordinate::new(r, c)), Ok(true));
        }
    }
    for r in 0..6 {
        for c in 0..6 {
            assert!(set.contains(Coordinate::new(r, c)));
        }
    }
    assert!(!set.contains(Coordinate::new(6, 0)));
}
