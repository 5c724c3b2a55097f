//! Core engine types.
//!
//! - `Bitboard` - 32-bit dark-square set with the layout constants and shift
//!   masks all move generation is built on
//! - `Color` - side to move
//! - `Move` and `MoveList` - single-ply move representation

mod bitboard;
mod color;
mod moves;

pub use bitboard::Bitboard;
pub use color::Color;
pub use moves::{Move, MoveList};
