//! Textual position descriptors and move text.
//!
//! A position is 32 characters in bitboard index order (`b`/`B`/`w`/`W`/`0`),
//! optionally broken up by `/` separators, optionally followed by whitespace
//! and a `b` or `w` side-to-move marker (Black when omitted). The stream form
//! inserts a `/` after every group of four squares:
//!
//! ```text
//! wwww/wwww/wwww/0000/0000/bbbb/bbbb/bbbb b
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::{MoveParseError, PositionParseError};
use super::state::Board;
use super::types::{Bitboard, Color, Move};

impl FromStr for Board {
    type Err = PositionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut black_pieces = Bitboard::EMPTY;
        let mut white_pieces = Bitboard::EMPTY;
        let mut kings = Bitboard::EMPTY;

        let mut chars = input.chars();
        let mut squares = 0;
        while squares < 32 {
            let Some(c) = chars.next() else {
                return Err(PositionParseError::TooFewSquares { found: squares });
            };
            let square = Bitboard(1 << squares);
            match c {
                'b' => black_pieces |= square,
                'B' => {
                    black_pieces |= square;
                    kings |= square;
                }
                'w' => white_pieces |= square,
                'W' => {
                    white_pieces |= square;
                    kings |= square;
                }
                '0' => {}
                '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(PositionParseError::InvalidPiece { char: c }),
            }
            squares += 1;
        }

        let side_to_move = match chars.find(|c| !c.is_whitespace() && *c != '/') {
            None => Color::Black,
            Some('b') => Color::Black,
            Some('w') => Color::White,
            Some(c) => return Err(PositionParseError::InvalidSideToMove { found: c }),
        };

        let mut board = Board {
            black_pieces,
            white_pieces,
            kings,
            side_to_move,
            hash: 0,
        };
        board.hash = board.compute_hash();
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..32 {
            if i > 0 && i % 4 == 0 {
                write!(f, "/")?;
            }
            let square = Bitboard(1 << i);
            let c = if (self.black_pieces & square).any() {
                if (self.kings & square).any() {
                    'B'
                } else {
                    'b'
                }
            } else if (self.white_pieces & square).any() {
                if (self.kings & square).any() {
                    'W'
                } else {
                    'w'
                }
            } else {
                '0'
            };
            write!(f, "{c}")?;
        }
        write!(f, " {}", if self.is_black_to_move() { 'b' } else { 'w' })
    }
}

impl Board {
    /// Resolve move text like `b6a5` (also `b6-a5` or `b6xd4`) against the
    /// legal moves of this position.
    ///
    /// The board is left untouched; an error means either malformed text or a
    /// move that is not legal here (including a step given while a capture is
    /// mandatory).
    pub fn find_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        let (origin_part, dest_part) = match chars.len() {
            4 => (&chars[0..2], &chars[2..4]),
            5 if chars[2] == '-' || chars[2] == 'x' => (&chars[0..2], &chars[3..5]),
            len => return Err(MoveParseError::InvalidLength { len }),
        };

        let parse = |part: &[char]| Bitboard::from_file_rank(part[0], part[1]);
        let (Some(origin), Some(dest)) = (parse(origin_part), parse(dest_part)) else {
            return Err(MoveParseError::InvalidSquare {
                notation: text.to_string(),
            });
        };

        self.generate_moves()
            .iter()
            .find(|m| m.origin() == origin && m.dest() == dest)
            .copied()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}
