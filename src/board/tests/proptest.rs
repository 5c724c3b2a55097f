//! Property-based tests over random playouts.

use proptest::prelude::*;

use crate::board::{Bitboard, Board, Color, Move};

/// Strategy for the length of a random move sequence.
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy for the seed driving move selection.
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn random_playout(seed: u64, num_moves: usize) -> (Board, Vec<Move>) {
    use rand::prelude::*;

    let mut board = Board::opening();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();

    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[rng.gen_range(0..moves.len())];
        board.make_move(&m);
        played.push(m);
    }
    (board, played)
}

proptest! {
    /// Reachable positions never hold two pieces on one square and never
    /// crown an empty square.
    #[test]
    fn prop_board_invariants_hold(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);
        prop_assert_eq!(board.black_pieces() & board.white_pieces(), Bitboard::EMPTY);
        prop_assert_eq!(board.kings() & !board.occupied(), Bitboard::EMPTY);
    }

    /// Every generated move passes the legality predicate, and while any
    /// jumper exists every generated move captures.
    #[test]
    fn prop_generated_moves_are_valid(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);
        let jumping = match board.side_to_move() {
            Color::Black => board.black_jumpers().any(),
            Color::White => board.white_jumpers().any(),
        };
        for m in &board.generate_moves() {
            prop_assert!(board.is_valid_move(m));
            if jumping {
                prop_assert!(m.is_capture(), "mandatory capture violated by {}", m);
            }
        }
    }

    /// A crowning move starts on a man, ends on the right kings row, and
    /// leaves the destination crowned.
    #[test]
    fn prop_crowning_is_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);
        for m in &board.generate_moves() {
            if m.will_crown() {
                prop_assert_eq!(m.origin() & board.kings(), Bitboard::EMPTY);
                let kings_row = if board.is_black_to_move() {
                    Bitboard::BLACK_KINGS_ROW
                } else {
                    Bitboard::WHITE_KINGS_ROW
                };
                prop_assert!((m.dest() & kings_row).any());

                let mut child = board.clone();
                child.make_move(m);
                prop_assert!((child.kings() & m.dest()).any());
            }
        }
    }

    /// Unwinding a random game restores the opening exactly, field by field.
    #[test]
    fn prop_make_undo_round_trips(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, mut played) = random_playout(seed, num_moves);
        while let Some(m) = played.pop() {
            board.undo_move(&m);
        }
        prop_assert_eq!(board, Board::opening());
    }

    /// The incrementally maintained hash always matches a from-scratch
    /// recomputation.
    #[test]
    fn prop_hash_matches_recompute(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::opening();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let m = moves[rng.gen_range(0..moves.len())];
            board.make_move(&m);
            prop_assert_eq!(board.hash(), board.compute_hash());
        }
    }
}
