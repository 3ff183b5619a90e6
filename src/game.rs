//! Core session engine: guess resolution and per-session state tracking.

use core::fmt;
use std::collections::HashMap;

use rand::Rng;

use crate::board::{Board, Coord};
use crate::cell::CellKind;
use crate::config::MAX_ATTEMPTS;
use crate::hint::proximity_hint;
use crate::mask::CellSet;

/// Rejections that do not consume an attempt. Input errors are free so
/// the player is never penalized for a typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Row or column outside [0, N), including the -1 parse sentinel.
    OutOfBounds,
    /// Coordinate already in the hit or miss set.
    AlreadyTargeted,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::OutOfBounds => write!(f, "Invalid coordinates"),
            GuessError::AlreadyTargeted => write!(f, "Position already targeted"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Outcome of a valid, attempt-consuming guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Ship cell hit; carries the kind and the running score.
    Hit { kind: CellKind, score: u32 },
    /// Empty cell; carries the proximity hint character.
    Miss { hint: char },
}

/// Owns the board and all mutable per-session state. Built fresh at
/// session setup and discarded at session end.
pub struct GameEngine {
    board: Board,
    hits: CellSet,
    misses: CellSet,
    hints: HashMap<Coord, char>,
    score: u32,
    attempts: u32,
}

impl GameEngine {
    /// Set up a session: fresh board with the full fleet placed.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut board = Board::new();
        board.place_fleet(rng);
        Self::with_board(board)
    }

    /// Set up a session over an already-populated board. Used for
    /// deterministic scenarios.
    pub fn with_board(board: Board) -> Self {
        GameEngine {
            board,
            hits: CellSet::new(),
            misses: CellSet::new(),
            hints: HashMap::new(),
            score: 0,
            attempts: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn misses(&self) -> CellSet {
        self.misses
    }

    /// Hint recorded for a missed coordinate, if any.
    pub fn hint_at(&self, coord: Coord) -> Option<char> {
        self.hints.get(&coord).copied()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Attempts consumed so far. Only valid, non-repeat guesses count.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// `true` once the attempt budget is exhausted.
    pub fn is_over(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// Resolve a raw guess.
    ///
    /// Out-of-range and repeated coordinates are rejected without touching
    /// any state; otherwise one attempt is consumed and the cell resolves
    /// to a scored hit or a hinted miss.
    pub fn resolve_guess(&mut self, row: i32, col: i32) -> Result<GuessOutcome, GuessError> {
        if !Board::in_bounds(row, col) {
            return Err(GuessError::OutOfBounds);
        }
        let coord = Coord::new(row as usize, col as usize);
        if self.hits.contains(coord) || self.misses.contains(coord) {
            return Err(GuessError::AlreadyTargeted);
        }

        self.attempts += 1;
        let kind = self.board.kind_at(coord);
        let outcome = if kind.is_ship() {
            self.hits.insert(coord);
            self.score += kind.points();
            GuessOutcome::Hit {
                kind,
                score: self.score,
            }
        } else {
            let hint = proximity_hint(&self.board, coord);
            self.misses.insert(coord);
            self.hints.insert(coord, hint);
            GuessOutcome::Miss { hint }
        };
        log::debug!("guess {} -> {:?}", coord, outcome);
        Ok(outcome)
    }
}
