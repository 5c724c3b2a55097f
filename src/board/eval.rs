//! Static evaluation.

use super::state::Board;
use super::types::{Bitboard, Color};

// Term weights, tuned together. Material dominates; the positional terms
// break ties between materially equal lines.
const WEIGHT_PIECES: i32 = 256;
const WEIGHT_KINGS: i32 = 128;
const WEIGHT_MOVERS: i32 = 16;
const WEIGHT_KINGS_ROW: i32 = 32;
const WEIGHT_EDGES: i32 = 8;

impl Board {
    /// Static score from the perspective of the side to move; positive means
    /// the mover is ahead.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.evaluate_pieces() * WEIGHT_PIECES
            + self.evaluate_kings() * WEIGHT_KINGS
            + self.evaluate_movers() * WEIGHT_MOVERS
            + self.evaluate_kings_row() * WEIGHT_KINGS_ROW
            + self.evaluate_edges() * WEIGHT_EDGES
    }

    /// Material difference.
    fn evaluate_pieces(&self) -> i32 {
        self.perspective(
            self.black_pieces.bitcount() as i32,
            self.white_pieces.bitcount() as i32,
        )
    }

    /// Crowned-piece difference, on top of the material term.
    fn evaluate_kings(&self) -> i32 {
        self.perspective(
            self.black_kings().bitcount() as i32,
            self.white_kings().bitcount() as i32,
        )
    }

    /// Mobility: pieces with at least one move.
    fn evaluate_movers(&self) -> i32 {
        self.perspective(
            self.black_movers().bitcount() as i32,
            self.white_movers().bitcount() as i32,
        )
    }

    /// Back-rank defence. A piece sitting on its own kings row is a square
    /// the opponent cannot crown on.
    fn evaluate_kings_row(&self) -> i32 {
        self.perspective(
            (self.black_pieces & Bitboard::WHITE_KINGS_ROW).bitcount() as i32,
            (self.white_pieces & Bitboard::BLACK_KINGS_ROW).bitcount() as i32,
        )
    }

    /// Edge occupancy. Edge pieces cannot be captured but also cover less of
    /// the board.
    fn evaluate_edges(&self) -> i32 {
        self.perspective(
            (self.black_pieces & Bitboard::EDGES).bitcount() as i32,
            (self.white_pieces & Bitboard::EDGES).bitcount() as i32,
        )
    }

    fn perspective(&self, black: i32, white: i32) -> i32 {
        match self.side_to_move {
            Color::Black => black - white,
            Color::White => white - black,
        }
    }
}
