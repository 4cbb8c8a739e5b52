//! A fixed-size coordinate set backed by a bitboard.
//!
//! The set is `no_std` friendly and avoids heap allocations. Membership of an
//! `N×N` grid is packed into an unsigned integer `T`, one bit per cell, so
//! insertion and lookup are constant time.

use core::{any, fmt};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned by coordinate set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordSetError {
    /// Coordinate lies outside [0..N) × [0..N).
    OutOfBounds(Coordinate),
}

impl fmt::Display for CoordSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordSetError::OutOfBounds(c) => {
                write!(f, "OutOfBounds: row={}, col={}", c.row, c.col)
            }
        }
    }
}

/// Set of coordinates on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CoordSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CoordSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty set. `T` must have at least N*N bits.
    #[inline]
    pub fn new() -> Self {
        CoordSet { bits: T::zero() }
    }

    #[inline]
    fn index(coord: Coordinate) -> Result<usize, CoordSetError> {
        if coord.in_bounds(N) {
            Ok(coord.row as usize * N + coord.col as usize)
        } else {
            Err(CoordSetError::OutOfBounds(coord))
        }
    }

    /// Membership test. Out-of-bounds coordinates are never members.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Add `coord`. Returns `Ok(true)` if it was not already present.
    pub fn insert(&mut self, coord: Coordinate) -> Result<bool, CoordSetError> {
        let idx = Self::index(coord)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Remove every coordinate.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }
}

impl<T, const N: usize> Default for CoordSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CoordSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CoordSet<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coordinate::new(r as i32, c as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
