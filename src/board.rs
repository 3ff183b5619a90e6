//! Board grid, coordinates and random fleet placement.

use core::fmt;
use rand::Rng;

use crate::cell::CellKind;
use crate::config::{BOARD_SIZE, FLEET};

/// A (row, column) pair on the board. Value equality and hashing, usable
/// as a set or map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors returned by manual placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Target cell already holds a ship.
    CellOccupied,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::CellOccupied => write!(f, "cell already holds a ship"),
        }
    }
}

/// The N×N grid of cells plus a registry of where ships were placed.
///
/// Ship positions never move once placement completes; the resolver and
/// renderer only read the grid.
pub struct Board {
    cells: [[CellKind; BOARD_SIZE]; BOARD_SIZE],
    placements: Vec<Coord>,
}

impl Board {
    /// Create an all-empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            cells: [[CellKind::Empty; BOARD_SIZE]; BOARD_SIZE],
            placements: Vec::new(),
        }
    }

    /// Validity predicate over raw signed indices. Bounds checks are the
    /// caller's responsibility; `Coord` itself carries no proof.
    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// Kind occupying `coord`.
    pub fn kind_at(&self, coord: Coord) -> CellKind {
        self.cells[coord.row][coord.col]
    }

    /// Place a single ship cell at `coord`, recording it in the registry.
    pub fn place(&mut self, coord: Coord, kind: CellKind) -> Result<(), PlaceError> {
        if self.kind_at(coord).is_ship() {
            return Err(PlaceError::CellOccupied);
        }
        self.cells[coord.row][coord.col] = kind;
        self.placements.push(coord);
        Ok(())
    }

    /// Scatter `count` cells of `kind` onto uniformly random empty cells,
    /// resampling any draw that lands on an occupied cell. The grid is
    /// sparse relative to the fleet, so the loop always terminates.
    pub fn scatter<R: Rng>(&mut self, rng: &mut R, kind: CellKind, count: usize) {
        let mut placed = 0;
        while placed < count {
            let coord = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if self.place(coord, kind).is_ok() {
                placed += 1;
            }
        }
        log::debug!("scattered {} {} cells", count, kind.name());
    }

    /// Place the full configured fleet in inventory order.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) {
        for (kind, count) in FLEET {
            self.scatter(rng, kind, count);
        }
    }

    /// Coordinates where ships were placed, in placement order.
    pub fn placements(&self) -> &[Coord] {
        &self.placements
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
