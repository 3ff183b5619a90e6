//! Nearest-ship proximity hints, reported to the player on a miss.

use crate::board::{Board, Coord};
use crate::config::HINT_RADIUS;

/// Hint character returned when no ship lies within [`HINT_RADIUS`].
pub const NO_SHIP_NEARBY: char = 'M';

/// Cardinal search order: down, up, right, left. Radius is walked before
/// direction and the first occupied cell found wins, so hint output is
/// reproducible even when several ships tie.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Distance hint for a miss at `origin` (a known-empty cell): the digit
/// '1'..'3' of the first ship found by the fixed ring-then-direction
/// search, or [`NO_SHIP_NEARBY`].
pub fn proximity_hint(board: &Board, origin: Coord) -> char {
    for distance in 1..=HINT_RADIUS {
        for (dr, dc) in DIRECTIONS {
            let row = origin.row as i32 + dr * distance;
            let col = origin.col as i32 + dc * distance;
            if !Board::in_bounds(row, col) {
                continue;
            }
            if board.kind_at(Coord::new(row as usize, col as usize)).is_ship() {
                return (b'0' + distance as u8) as char;
            }
        }
    }
    NO_SHIP_NEARBY
}
