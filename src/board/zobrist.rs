//! Zobrist hashing for checkers positions.
//!
//! One 64-bit key per (color, man-or-king, square) plus a side key, generated
//! once from a fixed seed so hashes are reproducible across runs. The board
//! keeps its hash current through make/undo; XOR toggles are self-inverse, so
//! undo applies the same toggles as make.

use once_cell::sync::Lazy;
use rand::prelude::*;

use super::state::Board;
use super::types::Color;

pub(crate) struct ZobristKeys {
    // piece_keys[color][is_king][square]
    piece_keys: [[[u64; 32]; 2]; 2],
    white_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed for reproducibility.
        let mut rng = StdRng::seed_from_u64(0x00c0_ffee_d00d_f00d);
        let mut piece_keys = [[[0; 32]; 2]; 2];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys {
            piece_keys,
            white_to_move_key: rng.gen(),
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Key for a piece of `color` on `square` (a bit index in 0..32).
#[inline]
pub(crate) fn piece_key(color: Color, is_king: bool, square: u32) -> u64 {
    ZOBRIST.piece_keys[color.index()][usize::from(is_king)][square as usize]
}

/// Key toggled in and out as the side to move changes.
#[inline]
pub(crate) fn side_key() -> u64 {
    ZOBRIST.white_to_move_key
}

impl Board {
    /// Recompute the hash from scratch. Used when a position is constructed
    /// and by tests to cross-check the incremental updates.
    pub(crate) fn compute_hash(&self) -> u64 {
        let mut hash = 0;
        for (color, pieces) in [
            (Color::Black, self.black_pieces),
            (Color::White, self.white_pieces),
        ] {
            let mut remaining = pieces;
            while remaining.any() {
                let square = remaining.lsb();
                remaining ^= square;
                hash ^= piece_key(color, (self.kings & square).any(), square.ntz());
            }
        }
        if self.side_to_move == Color::White {
            hash ^= side_key();
        }
        hash
    }
}
