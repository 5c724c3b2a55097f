//! Console rendering: the board diagram, help text, and game results.

use std::fmt::Write as _;

use crate::board::{Bitboard, Board};

/// The bordered board diagram. `rotate` flips the point of view 180 degrees
/// so the board can be read from White's side.
#[must_use]
pub(crate) fn render_board(board: &Board, rotate: bool) -> String {
    let mut out = String::new();
    if rotate {
        out.push_str("       H   G   F   E   D   C   B   A\n");
        out.push_str("     +---+---+---+---+---+---+---+---+\n");
        for rank in 1..=8u32 {
            let _ = write!(out, "  {rank}");
            if rank % 2 == 1 {
                out.push_str("  | ");
            }
            for square in (rank * 4 - 4..=rank * 4 - 1).rev() {
                out.push_str("  |");
                out.push_str(square_cell(board, square));
                out.push_str("| ");
            }
            if rank % 2 == 0 {
                out.push_str("  | ");
            }
            let _ = write!(out, " {rank}\n     +---+---+---+---+---+---+---+---+\n");
        }
        out.push_str("       H   G   F   E   D   C   B   A\n");
    } else {
        out.push_str("       A   B   C   D   E   F   G   H\n");
        out.push_str("     +---+---+---+---+---+---+---+---+\n");
        for rank in (1..=8u32).rev() {
            let _ = write!(out, "  {rank}");
            if rank % 2 == 0 {
                out.push_str("  | ");
            }
            for square in rank * 4 - 4..=rank * 4 - 1 {
                out.push_str("  |");
                out.push_str(square_cell(board, square));
                out.push_str("| ");
            }
            if rank % 2 == 1 {
                out.push_str("  | ");
            }
            let _ = write!(out, " {rank}\n     +---+---+---+---+---+---+---+---+\n");
        }
        out.push_str("       A   B   C   D   E   F   G   H\n");
    }
    out
}

fn square_cell(board: &Board, square: u32) -> &'static str {
    let bit = Bitboard(1 << square);
    if (board.black_men() & bit).any() {
        "(b)"
    } else if (board.white_men() & bit).any() {
        "(w)"
    } else if (board.black_kings() & bit).any() {
        "(B)"
    } else if (board.white_kings() & bit).any() {
        "(W)"
    } else {
        " \\ "
    }
}

/// The game result line when the position is decided, from the side to
/// move's point of view.
#[must_use]
pub(crate) fn result_line(board: &Board) -> Option<&'static str> {
    if board.is_winning() {
        Some(if board.is_black_to_move() {
            "RESULT 1-0 {Black win}\n"
        } else {
            "RESULT 0-1 {White win}\n"
        })
    } else if board.is_losing() {
        Some(if board.is_black_to_move() {
            "RESULT 0-1 {White win}\n"
        } else {
            "RESULT 1-0 {Black win}\n"
        })
    } else {
        None
    }
}

pub(crate) const HELP: &str = "\
    analyze         Engine thinks about what move it would make next if it
                    were on move.
    black           Set Black on move, and the engine will play White.
    force           Set the engine to play neither color (\"force mode\").
    go              Leave force mode and set the engine to play the color that
                    is on move.  Start thinking and eventually make a move.
    help            Show this help information.
    history         Show the record of moves.
    new             Reset the board to the standard starting position.
    ping N          N is a decimal number.  Reply by sending the string
                    \"pong N\".
    print           Show the current board.
    quit            Quit this program.
    rotate          Rotate the board 180 degrees.
    setboard POS    Set up the pieces position on the board.
    sd DEPTH        The engine should limit its thinking to DEPTH ply.
    st TIME         Set the time control to TIME seconds per move.
    white           Set White on move, and the engine will play Black.
    undo            Back up a move.
";
