//! Making and undoing moves.

use super::state::Board;
use super::types::{Color, Move};
use super::zobrist;

impl Board {
    /// Apply a legal move.
    ///
    /// Returns `true` when the same side must move again: the move captured a
    /// piece and its landing square is itself in the recomputed jumper set,
    /// so the multi-jump chain is not finished. In that case the side to move
    /// is left unchanged and the caller must supply the next jump leg.
    /// Crowning mid-chain does not end the turn by itself; a just-crowned
    /// king continues if it can jump.
    ///
    /// Calling this with an illegal move is a programming error.
    pub fn make_move(&mut self, m: &Move) -> bool {
        debug_assert!(self.is_valid_move(m), "make_move on illegal move {m}");

        match self.side_to_move {
            Color::Black => self.make_black_move(m),
            Color::White => self.make_white_move(m),
        }
    }

    /// Reverse `m`, the last move applied to this board. Restores every field
    /// exactly; afterwards `is_valid_move(m)` holds again.
    pub fn undo_move(&mut self, m: &Move) {
        if (self.black_pieces & m.dest()).any() {
            self.undo_black_move(m);
        } else {
            self.undo_white_move(m);
        }

        debug_assert!(self.is_valid_move(m), "undo_move restored a state where {m} is illegal");
    }

    fn make_black_move(&mut self, m: &Move) -> bool {
        let origin_was_king = (self.kings & m.origin()).any();
        let dest_is_king = origin_was_king || m.will_crown();

        self.black_pieces &= !m.origin();
        self.black_pieces |= m.dest();
        if origin_was_king {
            self.kings &= !m.origin();
            self.kings |= m.dest();
        }
        if m.will_crown() {
            self.kings |= m.dest();
        }
        self.hash ^= zobrist::piece_key(Color::Black, origin_was_king, m.origin().ntz());
        self.hash ^= zobrist::piece_key(Color::Black, dest_is_king, m.dest().ntz());

        if m.is_capture() {
            self.white_pieces &= !m.capture();
            if m.captures_king() {
                self.kings &= !m.capture();
            }
            self.hash ^= zobrist::piece_key(Color::White, m.captures_king(), m.capture().ntz());

            if (m.dest() & self.black_jumpers()).any() {
                return true;
            }
        }

        self.side_to_move = Color::White;
        self.hash ^= zobrist::side_key();
        false
    }

    fn make_white_move(&mut self, m: &Move) -> bool {
        let origin_was_king = (self.kings & m.origin()).any();
        let dest_is_king = origin_was_king || m.will_crown();

        self.white_pieces &= !m.origin();
        self.white_pieces |= m.dest();
        if origin_was_king {
            self.kings &= !m.origin();
            self.kings |= m.dest();
        }
        if m.will_crown() {
            self.kings |= m.dest();
        }
        self.hash ^= zobrist::piece_key(Color::White, origin_was_king, m.origin().ntz());
        self.hash ^= zobrist::piece_key(Color::White, dest_is_king, m.dest().ntz());

        if m.is_capture() {
            self.black_pieces &= !m.capture();
            if m.captures_king() {
                self.kings &= !m.capture();
            }
            self.hash ^= zobrist::piece_key(Color::Black, m.captures_king(), m.capture().ntz());

            if (m.dest() & self.white_jumpers()).any() {
                return true;
            }
        }

        self.side_to_move = Color::Black;
        self.hash ^= zobrist::side_key();
        false
    }

    fn undo_black_move(&mut self, m: &Move) {
        let dest_is_king = (self.kings & m.dest()).any();
        let origin_was_king = dest_is_king && !m.will_crown();

        self.black_pieces &= !m.dest();
        self.black_pieces |= m.origin();
        if dest_is_king {
            self.kings &= !m.dest();
            if origin_was_king {
                self.kings |= m.origin();
            }
        }
        self.hash ^= zobrist::piece_key(Color::Black, dest_is_king, m.dest().ntz());
        self.hash ^= zobrist::piece_key(Color::Black, origin_was_king, m.origin().ntz());

        if m.is_capture() {
            self.white_pieces |= m.capture();
            if m.captures_king() {
                self.kings |= m.capture();
            }
            self.hash ^= zobrist::piece_key(Color::White, m.captures_king(), m.capture().ntz());
        }

        // The move only flipped the side when it ended the turn.
        if self.side_to_move == Color::White {
            self.side_to_move = Color::Black;
            self.hash ^= zobrist::side_key();
        }
    }

    fn undo_white_move(&mut self, m: &Move) {
        let dest_is_king = (self.kings & m.dest()).any();
        let origin_was_king = dest_is_king && !m.will_crown();

        self.white_pieces &= !m.dest();
        self.white_pieces |= m.origin();
        if dest_is_king {
            self.kings &= !m.dest();
            if origin_was_king {
                self.kings |= m.origin();
            }
        }
        self.hash ^= zobrist::piece_key(Color::White, dest_is_king, m.dest().ntz());
        self.hash ^= zobrist::piece_key(Color::White, origin_was_king, m.origin().ntz());

        if m.is_capture() {
            self.black_pieces |= m.capture();
            if m.captures_king() {
                self.kings |= m.capture();
            }
            self.hash ^= zobrist::piece_key(Color::Black, m.captures_king(), m.capture().ntz());
        }

        if self.side_to_move == Color::Black {
            self.side_to_move = Color::White;
            self.hash ^= zobrist::side_key();
        }
    }
}
