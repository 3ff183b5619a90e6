//! Console rendering and raw input parsing.
//!
//! The core stays styling-agnostic: each rendered cell resolves to a
//! symbol plus a [`CellClass`], and only this module maps classes to
//! concrete ANSI colors.

use core::fmt;

use crate::board::Coord;
use crate::config::BOARD_SIZE;
use crate::game::GameEngine;
use crate::hint::NO_SHIP_NEARBY;

const ANSI_RESET: &str = "\u{1b}[0m";

/// Visual class of a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Guessed coordinate that held a ship.
    Hit,
    /// Guessed coordinate that was empty; shows its hint character.
    Miss,
    /// Un-hit ship disclosed at end of session.
    Revealed,
    /// Nothing known about the cell.
    Plain,
}

impl CellClass {
    fn ansi(self) -> &'static str {
        match self {
            CellClass::Hit => "\u{1b}[31m",
            CellClass::Miss => "\u{1b}[32m",
            CellClass::Revealed => "\u{1b}[34m",
            CellClass::Plain => "",
        }
    }
}

/// Board snapshot ready for display. With `reveal` set, un-hit ships are
/// disclosed in their own visual class.
pub struct BoardView<'a> {
    engine: &'a GameEngine,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(engine: &'a GameEngine, reveal: bool) -> Self {
        BoardView { engine, reveal }
    }

    fn classify(&self, coord: Coord) -> (char, CellClass) {
        let kind = self.engine.board().kind_at(coord);
        if self.engine.hits().contains(coord) {
            (kind.symbol(), CellClass::Hit)
        } else if self.engine.misses().contains(coord) {
            let hint = self.engine.hint_at(coord).unwrap_or(NO_SHIP_NEARBY);
            (hint, CellClass::Miss)
        } else if self.reveal && kind.is_ship() {
            (kind.symbol(), CellClass::Revealed)
        } else {
            (' ', CellClass::Plain)
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..BOARD_SIZE {
            if col > 0 {
                write!(f, "   ")?;
            }
            write!(f, "{}", col)?;
        }
        writeln!(f)?;
        let rule: String = "-".repeat(BOARD_SIZE * 4 + 1);
        writeln!(f, "  {}", rule)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{:>2}| ", row)?;
            for col in 0..BOARD_SIZE {
                let (symbol, class) = self.classify(Coord::new(row, col));
                match class.ansi() {
                    "" => write!(f, "{}", symbol)?,
                    code => write!(f, "{}{}{}", code, symbol, ANSI_RESET)?,
                }
                write!(f, " | ")?;
            }
            writeln!(f)?;
            writeln!(f, "  {}", rule)?;
        }
        Ok(())
    }
}

/// Parse a guess line into raw (row, col) integers. Missing or
/// unparsable tokens become -1 so the resolver rejects them as out of
/// bounds instead of the reader crashing.
pub fn parse_guess(line: &str) -> (i32, i32) {
    let mut nums = line
        .split_whitespace()
        .map(|token| token.parse::<i32>().unwrap_or(-1));
    let row = nums.next().unwrap_or(-1);
    let col = nums.next().unwrap_or(-1);
    (row, col)
}

/// Replay confirmation: "sim" (or "yes"), case-insensitively, continues;
/// anything else exits.
pub fn wants_replay(line: &str) -> bool {
    let answer = line.trim();
    answer.eq_ignore_ascii_case("sim") || answer.eq_ignore_ascii_case("yes")
}
