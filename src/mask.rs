//! A compact coordinate set for the 10×10 board, packed into a `u128`.
//!
//! One bit per cell, indexed row-major. Used to track the hit and miss
//! sets without heap allocation.

use crate::board::Coord;
use crate::config::BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// Empty set.
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    #[inline]
    fn bit(coord: Coord) -> u128 {
        1u128 << (coord.row * BOARD_SIZE + coord.col)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.bits & Self::bit(coord) != 0
    }

    /// Insert a coordinate. Returns `false` if it was already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let bit = Self::bit(coord);
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}
