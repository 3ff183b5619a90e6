use rand::rngs::SmallRng;
use rand::SeedableRng;
use seahunt::cli::{play_session, run};
use seahunt::{Board, CellKind, Coord, GameEngine};
use std::io::Cursor;

fn script(lines: &[String]) -> Cursor<Vec<u8>> {
    let mut joined = lines.join("\n");
    joined.push('\n');
    Cursor::new(joined.into_bytes())
}

/// Fifteen distinct in-bounds guesses, enough to exhaust one session.
fn budget_guesses() -> Vec<String> {
    (0..15).map(|i| format!("{} {}", i / 10, i % 10)).collect()
}

#[test]
fn test_scripted_session_hit_repeat_miss() {
    let mut board = Board::new();
    board.place(Coord::new(0, 0), CellKind::Carrier).unwrap();
    let mut engine = GameEngine::with_board(board);

    let mut lines = vec!["0 0".to_string(), "0 0".to_string(), "5 5".to_string()];
    // thirteen more distinct empty cells to burn the remaining attempts
    lines.extend((0..13).map(|i| format!("{} {}", 8 + i / 10, i % 10)));

    let mut input = script(&lines);
    let mut out = Vec::new();
    play_session(&mut input, &mut out, &mut engine).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Hit a Carrier! Score: 5"));
    assert!(out.contains("Position already targeted. Try again."));
    assert!(out.contains("Miss. Distance hint: M"));
    assert!(out.contains("Game over! Final score: 5"));
    assert_eq!(engine.attempts(), 15);
    assert_eq!(engine.score(), 5);
}

#[test]
fn test_invalid_input_is_free_and_reprompts() {
    let mut engine = GameEngine::with_board(Board::new());
    let lines = vec![
        "foo bar".to_string(),
        "10 10".to_string(),
        "-1 3".to_string(),
        "3".to_string(),
    ];
    let mut input = script(&lines);
    let mut out = Vec::new();
    play_session(&mut input, &mut out, &mut engine).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(engine.attempts(), 0);
    assert!(out.contains("Invalid coordinates. Try again."));
    // input ran out before the budget; the session still ends with a reveal
    assert!(out.contains("Game over! Final score: 0"));
}

#[test]
fn test_run_replay_then_exit() {
    let mut lines = budget_guesses();
    lines.push("sim".to_string());
    lines.extend(budget_guesses());
    lines.push("nao".to_string());

    let mut input = script(&lines);
    let mut out = Vec::new();
    let mut rng = SmallRng::seed_from_u64(42);
    run(&mut input, &mut out, &mut rng).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(out.matches("Game over!").count(), 2);
    assert_eq!(out.matches("Play again? (sim/nao):").count(), 2);
}

#[test]
fn test_run_stops_on_non_yes_answer() {
    let mut lines = budget_guesses();
    lines.push("whatever".to_string());

    let mut input = script(&lines);
    let mut out = Vec::new();
    let mut rng = SmallRng::seed_from_u64(7);
    run(&mut input, &mut out, &mut rng).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(out.matches("Game over!").count(), 1);
}

#[test]
fn test_run_handles_eof_at_replay_prompt() {
    let lines = budget_guesses();
    let mut input = script(&lines);
    let mut out = Vec::new();
    let mut rng = SmallRng::seed_from_u64(3);
    run(&mut input, &mut out, &mut rng).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(out.matches("Game over!").count(), 1);
}
