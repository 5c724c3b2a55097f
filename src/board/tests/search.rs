//! Search behavior tests.

use std::time::Duration;

use super::{mirror, position, square};
use crate::board::search::{think, SearchContext, SilentIo, Verbosity, WIN};
use crate::board::{Board, Color};

fn search_score(board: &Board, depth: u32) -> i32 {
    let mut context = SearchContext::new(&SilentIo, None);
    context.begin_iteration(&[]);
    let mut line = Vec::new();
    context
        .alpha_beta(board, &mut line, depth, -WIN - 1, WIN + 1, 0)
        .expect("no deadline, no input: search cannot time out")
}

#[test]
fn opening_search_finds_a_legal_push() {
    let board = Board::opening();
    let mut best_moves = Vec::new();
    let timed_out = think(
        &SilentIo,
        &mut best_moves,
        &board,
        Some(4),
        None,
        Verbosity::Silent,
    );
    assert!(!timed_out);
    assert!(best_moves.len() >= 4, "healthy PV reaches the depth limit");
    assert!(board.generate_moves().contains(&best_moves[0]));
}

#[test]
fn opening_score_is_small_and_color_symmetric() {
    let board = Board::opening();
    let score = search_score(&board, 4);
    assert!(score.abs() < 256, "no material swings in four plies: {score}");
    assert_eq!(score, search_score(&mirror(&board), 4));
}

#[test]
fn mirrored_search_is_symmetric() {
    // An asymmetric middlegame shape; minimax values must match exactly
    // under color-and-rotation mirroring.
    let board = position(&[20, 21, 17, 28], &[2], &[8, 9, 13], &[26], Color::Black);
    for depth in 1..=5 {
        assert_eq!(
            search_score(&board, depth),
            search_score(&mirror(&board), depth),
            "asymmetric score at depth {depth}"
        );
    }
}

#[test]
fn forced_jump_heads_the_pv() {
    let board = position(&[17], &[], &[12, 0], &[], Color::Black);
    let mut best_moves = Vec::new();
    think(
        &SilentIo,
        &mut best_moves,
        &board,
        Some(3),
        None,
        Verbosity::Silent,
    );
    assert_eq!(best_moves[0].origin(), square(17));
    assert_eq!(best_moves[0].capture(), square(12));
}

#[test]
fn multi_jump_chain_appears_whole_in_the_pv() {
    let board = position(&[25], &[], &[21, 14], &[], Color::Black);
    let mut best_moves = Vec::new();
    let timed_out = think(
        &SilentIo,
        &mut best_moves,
        &board,
        Some(2),
        None,
        Verbosity::Silent,
    );
    assert!(!timed_out);
    // Both legs of the chain are in the line, played by the same side.
    assert!(best_moves.len() >= 2);
    assert_eq!(best_moves[0].capture(), square(21));
    assert_eq!(best_moves[1].origin(), best_moves[0].dest());
    assert_eq!(best_moves[1].capture(), square(14));
}

#[test]
fn search_avoids_stepping_into_a_capture() {
    // Black's b6 man can go a5 (safe) or c5 (taken by d4). Depth 4 sees the
    // loss and keeps the man.
    let board = position(&[20], &[], &[13], &[], Color::Black);
    let mut best_moves = Vec::new();
    think(
        &SilentIo,
        &mut best_moves,
        &board,
        Some(4),
        None,
        Verbosity::Silent,
    );
    assert_eq!(best_moves[0].dest(), square(16));
}

#[test]
fn lost_position_scores_minus_win() {
    // Black to move with no pieces at all.
    let board = position(&[], &[], &[12, 13], &[], Color::Black);
    assert!(!board.is_winning());
    assert!(board.is_losing());
    assert_eq!(search_score(&board, 5), -WIN);
}

#[test]
fn won_position_scores_plus_win() {
    let board = position(&[20], &[], &[], &[], Color::Black);
    assert!(board.is_winning());
    assert_eq!(search_score(&board, 5), WIN);
}

#[test]
fn win_is_preferred_sooner() {
    // From the mover's view a win in fewer plies scores higher.
    let board = position(&[25], &[], &[21, 14], &[], Color::Black);
    let score = search_score(&board, 6);
    assert!(score > WIN - 10, "captures everything and wins: {score}");
    assert!(score < WIN, "ply offset applies: {score}");
}

#[test]
fn think_on_terminal_position_returns_empty_line() {
    let board = position(&[], &[], &[12], &[], Color::Black);
    let mut best_moves = Vec::new();
    let timed_out = think(
        &SilentIo,
        &mut best_moves,
        &board,
        None,
        None,
        Verbosity::Silent,
    );
    assert!(!timed_out, "a decided game ends the deepening loop");
    assert!(best_moves.is_empty());
}

#[test]
fn zero_time_limit_times_out_and_keeps_the_pv() {
    let board = Board::opening();
    let mut best_moves = Vec::new();
    think(
        &SilentIo,
        &mut best_moves,
        &board,
        Some(3),
        None,
        Verbosity::Silent,
    );
    let kept = best_moves.clone();
    assert!(!kept.is_empty());

    let timed_out = think(
        &SilentIo,
        &mut best_moves,
        &board,
        None,
        Some(Duration::ZERO),
        Verbosity::Silent,
    );
    assert!(timed_out);
    assert_eq!(best_moves, kept);
}

#[test]
fn deeper_search_still_prefers_the_safe_step() {
    // The PV hint from each completed iteration seeds the next; ten
    // iterations later the answer is unchanged and no timeout occurred.
    let board = position(&[20], &[], &[13], &[], Color::Black);
    let mut best_moves = Vec::new();
    let timed_out = think(
        &SilentIo,
        &mut best_moves,
        &board,
        Some(10),
        None,
        Verbosity::Silent,
    );
    assert!(!timed_out);
    assert_eq!(best_moves[0].dest(), square(16));
}
