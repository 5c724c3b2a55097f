//! Board and search scenario tests.

mod movegen;
mod proptest;
mod search;

use crate::board::{Bitboard, Board, Color};

/// Build a position from square lists. Goes through the descriptor parser so
/// fixtures stay readable and the parser gets exercised along the way.
pub(crate) fn position(
    black_men: &[u32],
    black_kings: &[u32],
    white_men: &[u32],
    white_kings: &[u32],
    side: Color,
) -> Board {
    let mut squares = ['0'; 32];
    for &square in black_men {
        squares[square as usize] = 'b';
    }
    for &square in black_kings {
        squares[square as usize] = 'B';
    }
    for &square in white_men {
        squares[square as usize] = 'w';
    }
    for &square in white_kings {
        squares[square as usize] = 'W';
    }
    let mut text: String = squares.iter().collect();
    text.push(' ');
    text.push(if side == Color::Black { 'b' } else { 'w' });
    text.parse().expect("valid test position")
}

/// The same position seen by the other player: colors swapped and the board
/// rotated 180 degrees.
pub(crate) fn mirror(board: &Board) -> Board {
    let mut mirrored = Board {
        black_pieces: Bitboard(board.white_pieces().0.reverse_bits()),
        white_pieces: Bitboard(board.black_pieces().0.reverse_bits()),
        kings: Bitboard(board.kings().0.reverse_bits()),
        side_to_move: board.side_to_move().opponent(),
        hash: 0,
    };
    mirrored.hash = mirrored.compute_hash();
    mirrored
}

pub(crate) fn square(n: u32) -> Bitboard {
    Bitboard(1 << n)
}
