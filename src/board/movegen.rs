//! Move legality, mover/jumper sets, and move enumeration.
//!
//! Everything here is pure shift/mask arithmetic over the four diagonal
//! shifts; no per-square loops. Black men step with the right shifts (toward
//! rank 1), White men with the left shifts, and kings with both.

use super::state::Board;
use super::types::{Bitboard, Color, Move, MoveList};

impl Board {
    /// True when `m` is a legal non-capturing Black move on this board.
    #[must_use]
    pub fn is_valid_black_move(&self, m: &Move) -> bool {
        (self.black_pieces & m.origin()).any()
            && (self.not_occupied() & m.dest()).any()
            && if (self.kings & m.origin()).any() {
                m.fits_king()
            } else {
                m.fits_black_man()
            }
    }

    /// True when `m` is a legal Black jump. The two-step geometry is implicit
    /// in the jump generator having produced the move.
    #[must_use]
    pub fn is_valid_black_jump(&self, m: &Move) -> bool {
        (self.black_pieces & m.origin()).any()
            && (self.not_occupied() & m.dest()).any()
            && (self.white_pieces & m.capture()).any()
    }

    /// True when `m` is a legal non-capturing White move on this board.
    #[must_use]
    pub fn is_valid_white_move(&self, m: &Move) -> bool {
        (self.white_pieces & m.origin()).any()
            && (self.not_occupied() & m.dest()).any()
            && if (self.kings & m.origin()).any() {
                m.fits_king()
            } else {
                m.fits_white_man()
            }
    }

    /// True when `m` is a legal White jump.
    #[must_use]
    pub fn is_valid_white_jump(&self, m: &Move) -> bool {
        (self.white_pieces & m.origin()).any()
            && (self.not_occupied() & m.dest()).any()
            && (self.black_pieces & m.capture()).any()
    }

    /// True when `m` is legal for the side to move. Captures are mandatory:
    /// while any jumper exists, only jumps are legal.
    #[must_use]
    pub fn is_valid_move(&self, m: &Move) -> bool {
        match self.side_to_move {
            Color::Black => {
                if self.black_jumpers().any() {
                    self.is_valid_black_jump(m)
                } else {
                    self.is_valid_black_move(m)
                }
            }
            Color::White => {
                if self.white_jumpers().any() {
                    self.is_valid_white_jump(m)
                } else {
                    self.is_valid_white_move(m)
                }
            }
        }
    }

    /// Black pieces with at least one legal non-capturing move.
    #[must_use]
    pub fn black_movers(&self) -> Bitboard {
        let not_occupied = self.not_occupied();
        let black_kings = self.black_kings();
        let mut movers = (not_occupied << 4) & self.black_pieces;
        movers |= ((not_occupied & Bitboard::MASK_L3) << 3) & self.black_pieces;
        movers |= ((not_occupied & Bitboard::MASK_L5) << 5) & self.black_pieces;

        if black_kings.any() {
            movers |= (not_occupied >> 4) & black_kings;
            movers |= ((not_occupied & Bitboard::MASK_R3) >> 3) & black_kings;
            movers |= ((not_occupied & Bitboard::MASK_R5) >> 5) & black_kings;
        }
        movers
    }

    /// White pieces with at least one legal non-capturing move.
    #[must_use]
    pub fn white_movers(&self) -> Bitboard {
        let not_occupied = self.not_occupied();
        let white_kings = self.white_kings();
        let mut movers = (not_occupied >> 4) & self.white_pieces;
        movers |= ((not_occupied & Bitboard::MASK_R3) >> 3) & self.white_pieces;
        movers |= ((not_occupied & Bitboard::MASK_R5) >> 5) & self.white_pieces;

        if white_kings.any() {
            movers |= (not_occupied << 4) & white_kings;
            movers |= ((not_occupied & Bitboard::MASK_L3) << 3) & white_kings;
            movers |= ((not_occupied & Bitboard::MASK_L5) << 5) & white_kings;
        }
        movers
    }

    /// Black pieces that can capture right now.
    #[must_use]
    pub fn black_jumpers(&self) -> Bitboard {
        let not_occupied = self.not_occupied();
        let black_kings = self.black_kings();
        let mut jumpers = Bitboard::EMPTY;

        // White pieces one step above an empty landing square, then the
        // Black piece one further step above completes the pattern.
        let mut targets = (not_occupied << 4) & self.white_pieces;
        if targets.any() {
            jumpers |= (((targets & Bitboard::MASK_L3) << 3)
                | ((targets & Bitboard::MASK_L5) << 5))
                & self.black_pieces;
        }
        targets = (((not_occupied & Bitboard::MASK_L3) << 3)
            | ((not_occupied & Bitboard::MASK_L5) << 5))
            & self.white_pieces;
        if targets.any() {
            jumpers |= (targets << 4) & self.black_pieces;
        }

        if black_kings.any() {
            targets = (not_occupied >> 4) & self.white_pieces;
            if targets.any() {
                jumpers |= (((targets & Bitboard::MASK_R3) >> 3)
                    | ((targets & Bitboard::MASK_R5) >> 5))
                    & black_kings;
            }
            targets = (((not_occupied & Bitboard::MASK_R3) >> 3)
                | ((not_occupied & Bitboard::MASK_R5) >> 5))
                & self.white_pieces;
            if targets.any() {
                jumpers |= (targets >> 4) & black_kings;
            }
        }
        jumpers
    }

    /// White pieces that can capture right now.
    #[must_use]
    pub fn white_jumpers(&self) -> Bitboard {
        let not_occupied = self.not_occupied();
        let white_kings = self.white_kings();
        let mut jumpers = Bitboard::EMPTY;

        let mut targets = (not_occupied >> 4) & self.black_pieces;
        if targets.any() {
            jumpers |= (((targets & Bitboard::MASK_R3) >> 3)
                | ((targets & Bitboard::MASK_R5) >> 5))
                & self.white_pieces;
        }
        targets = (((not_occupied & Bitboard::MASK_R3) >> 3)
            | ((not_occupied & Bitboard::MASK_R5) >> 5))
            & self.black_pieces;
        if targets.any() {
            jumpers |= (targets >> 4) & self.white_pieces;
        }

        if white_kings.any() {
            targets = (not_occupied << 4) & self.black_pieces;
            if targets.any() {
                jumpers |= (((targets & Bitboard::MASK_L3) << 3)
                    | ((targets & Bitboard::MASK_L5) << 5))
                    & white_kings;
            }
            targets = (((not_occupied & Bitboard::MASK_L3) << 3)
                | ((not_occupied & Bitboard::MASK_L5) << 5))
                & self.black_pieces;
            if targets.any() {
                jumpers |= (targets << 4) & white_kings;
            }
        }
        jumpers
    }

    /// Every legal move for the side on move. While jumpers exist only jumps
    /// are generated; multi-jump chains are continued through `make_move`.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        match self.side_to_move {
            Color::Black => {
                if self.black_jumpers().any() {
                    self.generate_black_jumps()
                } else {
                    self.generate_black_moves()
                }
            }
            Color::White => {
                if self.white_jumpers().any() {
                    self.generate_white_jumps()
                } else {
                    self.generate_white_moves()
                }
            }
        }
    }

    /// Non-capturing Black moves.
    #[must_use]
    pub fn generate_black_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let mut movers = self.black_movers();
        let not_occupied = self.not_occupied();

        while movers.any() {
            let origin = movers.lsb();
            movers ^= origin;
            let origin_is_king = (self.kings & origin).any();

            let dest = (origin >> 4) & not_occupied;
            if dest.any() {
                moves.push(Move::new(
                    origin,
                    dest,
                    Bitboard::EMPTY,
                    false,
                    !origin_is_king && (dest & Bitboard::BLACK_KINGS_ROW).any(),
                ));
            }

            let dest = (((origin & Bitboard::MASK_R3) >> 3)
                | ((origin & Bitboard::MASK_R5) >> 5))
                & not_occupied;
            if dest.any() {
                moves.push(Move::new(
                    origin,
                    dest,
                    Bitboard::EMPTY,
                    false,
                    !origin_is_king && (dest & Bitboard::BLACK_KINGS_ROW).any(),
                ));
            }

            if origin_is_king {
                let dest = (origin << 4) & not_occupied;
                if dest.any() {
                    moves.push(Move::new(origin, dest, Bitboard::EMPTY, false, false));
                }

                let dest = (((origin & Bitboard::MASK_L3) << 3)
                    | ((origin & Bitboard::MASK_L5) << 5))
                    & not_occupied;
                if dest.any() {
                    moves.push(Move::new(origin, dest, Bitboard::EMPTY, false, false));
                }
            }
        }
        moves
    }

    /// Non-capturing White moves.
    #[must_use]
    pub fn generate_white_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let mut movers = self.white_movers();
        let not_occupied = self.not_occupied();

        while movers.any() {
            let origin = movers.lsb();
            movers ^= origin;
            let origin_is_king = (self.kings & origin).any();

            let dest = (origin << 4) & not_occupied;
            if dest.any() {
                moves.push(Move::new(
                    origin,
                    dest,
                    Bitboard::EMPTY,
                    false,
                    !origin_is_king && (dest & Bitboard::WHITE_KINGS_ROW).any(),
                ));
            }

            let dest = (((origin & Bitboard::MASK_L3) << 3)
                | ((origin & Bitboard::MASK_L5) << 5))
                & not_occupied;
            if dest.any() {
                moves.push(Move::new(
                    origin,
                    dest,
                    Bitboard::EMPTY,
                    false,
                    !origin_is_king && (dest & Bitboard::WHITE_KINGS_ROW).any(),
                ));
            }

            if origin_is_king {
                let dest = (origin >> 4) & not_occupied;
                if dest.any() {
                    moves.push(Move::new(origin, dest, Bitboard::EMPTY, false, false));
                }

                let dest = (((origin & Bitboard::MASK_R3) >> 3)
                    | ((origin & Bitboard::MASK_R5) >> 5))
                    & not_occupied;
                if dest.any() {
                    moves.push(Move::new(origin, dest, Bitboard::EMPTY, false, false));
                }
            }
        }
        moves
    }

    /// Single-leg Black jumps.
    #[must_use]
    pub fn generate_black_jumps(&self) -> MoveList {
        let mut moves = MoveList::new();
        let mut jumpers = self.black_jumpers();
        let not_occupied = self.not_occupied();

        while jumpers.any() {
            let origin = jumpers.lsb();
            jumpers ^= origin;
            let origin_is_king = (self.kings & origin).any();

            let capture = (origin >> 4) & self.white_pieces;
            if capture.any() {
                let dest = (((capture & Bitboard::MASK_R3) >> 3)
                    | ((capture & Bitboard::MASK_R5) >> 5))
                    & not_occupied;
                if dest.any() {
                    moves.push(Move::new(
                        origin,
                        dest,
                        capture,
                        (capture & self.kings).any(),
                        !origin_is_king && (dest & Bitboard::BLACK_KINGS_ROW).any(),
                    ));
                }
            }

            let capture = (((origin & Bitboard::MASK_R3) >> 3)
                | ((origin & Bitboard::MASK_R5) >> 5))
                & self.white_pieces;
            if capture.any() {
                let dest = (capture >> 4) & not_occupied;
                if dest.any() {
                    moves.push(Move::new(
                        origin,
                        dest,
                        capture,
                        (capture & self.kings).any(),
                        !origin_is_king && (dest & Bitboard::BLACK_KINGS_ROW).any(),
                    ));
                }
            }

            if origin_is_king {
                let capture = (origin << 4) & self.white_pieces;
                if capture.any() {
                    let dest = (((capture & Bitboard::MASK_L3) << 3)
                        | ((capture & Bitboard::MASK_L5) << 5))
                        & not_occupied;
                    if dest.any() {
                        moves.push(Move::new(
                            origin,
                            dest,
                            capture,
                            (capture & self.kings).any(),
                            false,
                        ));
                    }
                }

                let capture = (((origin & Bitboard::MASK_L3) << 3)
                    | ((origin & Bitboard::MASK_L5) << 5))
                    & self.white_pieces;
                if capture.any() {
                    let dest = (capture << 4) & not_occupied;
                    if dest.any() {
                        moves.push(Move::new(
                            origin,
                            dest,
                            capture,
                            (capture & self.kings).any(),
                            false,
                        ));
                    }
                }
            }
        }
        moves
    }

    /// Single-leg White jumps.
    #[must_use]
    pub fn generate_white_jumps(&self) -> MoveList {
        let mut moves = MoveList::new();
        let mut jumpers = self.white_jumpers();
        let not_occupied = self.not_occupied();

        while jumpers.any() {
            let origin = jumpers.lsb();
            jumpers ^= origin;
            let origin_is_king = (self.kings & origin).any();

            let capture = (origin << 4) & self.black_pieces;
            if capture.any() {
                let dest = (((capture & Bitboard::MASK_L3) << 3)
                    | ((capture & Bitboard::MASK_L5) << 5))
                    & not_occupied;
                if dest.any() {
                    moves.push(Move::new(
                        origin,
                        dest,
                        capture,
                        (capture & self.kings).any(),
                        !origin_is_king && (dest & Bitboard::WHITE_KINGS_ROW).any(),
                    ));
                }
            }

            let capture = (((origin & Bitboard::MASK_L3) << 3)
                | ((origin & Bitboard::MASK_L5) << 5))
                & self.black_pieces;
            if capture.any() {
                let dest = (capture << 4) & not_occupied;
                if dest.any() {
                    moves.push(Move::new(
                        origin,
                        dest,
                        capture,
                        (capture & self.kings).any(),
                        !origin_is_king && (dest & Bitboard::WHITE_KINGS_ROW).any(),
                    ));
                }
            }

            if origin_is_king {
                let capture = (origin >> 4) & self.black_pieces;
                if capture.any() {
                    let dest = (((capture & Bitboard::MASK_R3) >> 3)
                        | ((capture & Bitboard::MASK_R5) >> 5))
                        & not_occupied;
                    if dest.any() {
                        moves.push(Move::new(
                            origin,
                            dest,
                            capture,
                            (capture & self.kings).any(),
                            false,
                        ));
                    }
                }

                let capture = (((origin & Bitboard::MASK_R3) >> 3)
                    | ((origin & Bitboard::MASK_R5) >> 5))
                    & self.black_pieces;
                if capture.any() {
                    let dest = (capture >> 4) & not_occupied;
                    if dest.any() {
                        moves.push(Move::new(
                            origin,
                            dest,
                            capture,
                            (capture & self.kings).any(),
                            false,
                        ));
                    }
                }
            }
        }
        moves
    }
}
