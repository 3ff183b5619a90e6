use crate::cell::CellKind;

pub const BOARD_SIZE: usize = 10;
pub const MAX_ATTEMPTS: u32 = 15;
pub const HINT_RADIUS: i32 = 3;

/// Fleet inventory scattered at the start of every session, in placement
/// order.
pub const FLEET: [(CellKind, usize); 3] = [
    (CellKind::Carrier, 10),
    (CellKind::Cruiser, 1),
    (CellKind::Tug, 2),
];

pub const TOTAL_SHIP_CELLS: usize = 13;

/// Score obtained by hitting every ship cell on the board.
pub const MAX_SCORE: u32 = 85;
