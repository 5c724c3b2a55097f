//! Error types for board operations.

use std::fmt;

/// Error type for position-descriptor parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    /// Fewer than 32 square characters before the string ended
    TooFewSquares { found: usize },
    /// A character that is neither a piece, `0`, nor a separator
    InvalidPiece { char: char },
    /// Trailing side-to-move marker was not `b` or `w`
    InvalidSideToMove { found: char },
}

impl fmt::Display for PositionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionParseError::TooFewSquares { found } => {
                write!(f, "position needs 32 squares, found {found}")
            }
            PositionParseError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in position")
            }
            PositionParseError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'b' or 'w'")
            }
        }
    }
}

impl std::error::Error for PositionParseError {}

/// Error type for move-text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move text has the wrong shape (must be two squares, e.g. `b6a5`)
    InvalidLength { len: usize },
    /// A square name did not parse or is not a dark square
    InvalidSquare { notation: String },
    /// The squares parsed but no legal move matches them
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
