//! Move generation and legality tests.

use super::{position, square};
use crate::board::{Bitboard, Board, Color, Move};

#[test]
fn opening_has_seven_black_pushes() {
    let board = Board::opening();
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 7);
    for m in &moves {
        assert!(!m.is_capture());
        assert!(!m.will_crown());
        assert!((m.origin() & board.black_pieces()).any());
        assert!(board.is_valid_move(m));
    }
}

#[test]
fn opening_movers_are_the_front_rank() {
    let board = Board::opening();
    assert_eq!(board.black_movers(), Bitboard(0x00F0_0000));
    assert_eq!(board.white_movers(), Bitboard(0x0000_0F00));
    assert!(board.black_jumpers().is_empty());
    assert!(board.white_jumpers().is_empty());
}

#[test]
fn two_lone_men_step_freely() {
    // White man on d4, Black man on b6: not diagonally adjacent, so no jumps
    // exist and Black simply steps.
    let board: Board = "0000000000000w000000b00000000000".parse().unwrap();
    assert!(board.is_black_to_move());
    assert!(!board.is_losing());
    assert!(board.black_jumpers().is_empty());

    let moves = board.generate_moves();
    assert_eq!(moves.len(), 2);
    let dests: Vec<Bitboard> = moves.iter().map(|m| m.dest()).collect();
    assert!(dests.contains(&square(16)));
    assert!(dests.contains(&square(17)));
    for m in &moves {
        assert_eq!(m.origin(), square(20));
        assert!(!m.is_capture());
    }
}

#[test]
fn forced_jump_is_the_only_move() {
    // Black man on c5 must jump the White man on b4 and land on a3.
    let board = position(&[17], &[], &[12], &[], Color::Black);
    assert_eq!(board.black_jumpers(), square(17));

    let moves = board.generate_moves();
    assert_eq!(moves.len(), 1);
    let jump = moves[0];
    assert_eq!(jump.origin(), square(17));
    assert_eq!(jump.capture(), square(12));
    assert_eq!(jump.dest(), square(8));
    assert!(!jump.captures_king());
    assert!(!jump.will_crown());

    // While a jumper exists, the quiet step is rejected.
    let step = Move::new(square(17), square(13), Bitboard::EMPTY, false, false);
    assert!(!board.is_valid_move(&step));
    assert!(board.is_valid_move(&jump));
}

#[test]
fn king_moves_in_all_four_directions() {
    let board = position(&[], &[13], &[], &[], Color::Black);
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 4);
    let dests: Vec<Bitboard> = moves.iter().map(|m| m.dest()).collect();
    for dest in [square(9), square(10), square(17), square(18)] {
        assert!(dests.contains(&dest));
    }
    // A king never crowns again.
    assert!(moves.iter().all(|m| !m.will_crown()));
}

#[test]
fn man_on_edge_has_one_step() {
    let board = position(&[23], &[], &[], &[], Color::Black);
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].dest(), square(19));
}

#[test]
fn step_into_kings_row_sets_crown_flag() {
    let board = position(&[5], &[], &[31], &[], Color::Black);
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 2);
    for m in &moves {
        assert!(m.will_crown());
        assert!((m.dest() & Bitboard::BLACK_KINGS_ROW).any());
        assert!((m.origin() & board.kings()).is_empty());
    }
}

#[test]
fn white_man_steps_up_the_board() {
    let board = position(&[31], &[], &[14], &[], Color::White);
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 2);
    let dests: Vec<Bitboard> = moves.iter().map(|m| m.dest()).collect();
    assert!(dests.contains(&square(18)));
    assert!(dests.contains(&square(19)));
}

#[test]
fn white_jump_captures_black_king() {
    // White man on c5 jumps the Black king on d6 and lands on e7.
    let board = position(&[31], &[21], &[17], &[], Color::White);
    assert_eq!(board.white_jumpers(), square(17));

    let moves = board.generate_moves();
    assert_eq!(moves.len(), 1);
    let jump = moves[0];
    assert_eq!(jump.capture(), square(21));
    assert_eq!(jump.dest(), square(26));
    assert!(jump.captures_king());
}

#[test]
fn jumper_set_requires_empty_landing_square() {
    // Same shape as the forced jump, but the landing square a3 is occupied,
    // so no capture is possible and the man just steps.
    let board = position(&[17, 8], &[], &[12], &[], Color::Black);
    assert!(board.black_jumpers().is_empty());
    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn generated_moves_are_valid_in_sample_game() {
    // Walk a short fixed game; every generated move must satisfy
    // is_valid_move on the position that generated it.
    let mut board = Board::opening();
    for _ in 0..20 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        for m in &moves {
            assert!(board.is_valid_move(m), "generator produced illegal {m}");
        }
        let m = moves[0];
        board.make_move(&m);
    }
}
