//! Interactive session loop: setup, play until the attempt budget runs
//! out, reveal the board, offer a replay.
//!
//! Generic over the reader, writer and RNG so scripted sessions can run
//! in tests without a terminal.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::config::{MAX_ATTEMPTS, MAX_SCORE};
use crate::game::{GameEngine, GuessOutcome};
use crate::ui::{parse_guess, wants_replay, BoardView};

/// Run sessions until the player declines a replay or input ends.
pub fn run<R, W, G>(input: &mut R, out: &mut W, rng: &mut G) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    loop {
        let mut engine = GameEngine::new(rng);
        play_session(input, out, &mut engine)?;

        write!(out, "Play again? (sim/nao): ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || !wants_replay(&line) {
            break;
        }
    }
    Ok(())
}

/// Drive one session on an already-set-up engine through to the reveal.
pub fn play_session<R, W>(input: &mut R, out: &mut W, engine: &mut GameEngine) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    log::info!("session started, budget {} attempts", MAX_ATTEMPTS);
    while !engine.is_over() {
        writeln!(out, "{}", BoardView::new(engine, false))?;
        write!(out, "Enter coordinates (row col): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // input ended mid-session; reveal what there was and stop
            break;
        }
        let (row, col) = parse_guess(&line);
        match engine.resolve_guess(row, col) {
            Ok(GuessOutcome::Hit { kind, score }) => {
                writeln!(out, "Hit a {}! Score: {}", kind.name(), score)?;
            }
            Ok(GuessOutcome::Miss { hint }) => {
                writeln!(out, "Miss. Distance hint: {}", hint)?;
            }
            Err(err) => {
                writeln!(out, "{}. Try again.", err)?;
            }
        }
    }

    writeln!(out, "{}", BoardView::new(engine, true))?;
    writeln!(out, "Game over! Final score: {}", engine.score())?;
    if engine.score() == MAX_SCORE {
        writeln!(out, "Perfect game, the whole fleet is sunk!")?;
    }
    Ok(())
}
