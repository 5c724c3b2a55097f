//! Search: negamax alpha-beta with iterative deepening.
//!
//! The search owns nothing global. Each `think` call builds a fresh
//! [`SearchContext`] holding the node counter, the wall-clock deadline, the
//! principal variation carried over from the previous iteration, and a keyed
//! best-move table for ordering. Cancellation is cooperative: every 2^16
//! nodes the context flushes output and polls for a deadline, new input, or
//! end of input, and unwinds by returning `None` through every frame.

mod log;
mod transposition;

use std::time::{Duration, Instant};

use super::state::Board;
use super::types::{Move, MoveList};
use transposition::TranspositionTable;

pub use log::{SearchIo, SilentIo};

/// Score for a won position, before the ply adjustment that prefers faster
/// wins and slower losses. Far above any evaluation the terms can produce.
pub const WIN: i32 = 30_000;

/// Root search window; strictly wider than any reachable score.
const INFINITY: i32 = 32_000;

/// The I/O poll runs whenever `nodes` is a multiple of this.
const POLL_INTERVAL: u64 = 1 << 16;

/// Whether `think` narrates its iterations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verbosity {
    Silent,
    Verbose,
}

/// Per-search state: created by [`think`], threaded through the recursion.
pub struct SearchContext<'a> {
    io: &'a dyn SearchIo,
    deadline: Option<Instant>,
    nodes: u64,
    pv: Vec<Move>,
    reorder: bool,
    table: TranspositionTable,
}

impl<'a> SearchContext<'a> {
    #[must_use]
    pub fn new(io: &'a dyn SearchIo, deadline: Option<Instant>) -> Self {
        SearchContext {
            io,
            deadline,
            nodes: 0,
            pv: Vec::new(),
            reorder: false,
            table: TranspositionTable::new(),
        }
    }

    /// Nodes visited in the current iteration.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Reset the per-iteration counters and arm move reordering with the
    /// principal variation of the previous iteration.
    pub fn begin_iteration(&mut self, pv: &[Move]) {
        self.nodes = 0;
        self.pv.clear();
        self.pv.extend_from_slice(pv);
        self.reorder = true;
    }

    fn interrupted(&self) -> bool {
        if self.deadline.is_some_and(|deadline| Instant::now() > deadline) {
            return true;
        }
        self.io.poll_input()
    }

    /// Negamax alpha-beta. Returns the score within `[alpha, beta]`, or
    /// `None` when the deadline passed or input arrived; `None` propagates
    /// through every open frame. On an alpha raise, `line` receives the move
    /// followed by the child's best line.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        line: &mut Vec<Move>,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        ply: u32,
    ) -> Option<i32> {
        if self.nodes % POLL_INTERVAL == 0 && self.interrupted() {
            return None;
        }
        self.nodes += 1;

        if board.is_winning() {
            line.clear();
            return Some(WIN - ply as i32);
        }
        if board.is_losing() {
            line.clear();
            return Some(-WIN + ply as i32);
        }
        if depth == 0 {
            line.clear();
            return Some(board.evaluate());
        }

        let mut moves = board.generate_moves();
        let pv_applied = self.reorder_moves(&mut moves, ply);
        if !pv_applied {
            if let Some(hint) = self.table.probe(board.hash()) {
                if let Some(idx) = moves.iter().position(|m| *m == hint) {
                    moves.swap(0, idx);
                }
            }
        }

        let mut best_move = None;
        let mut child_line = Vec::new();
        for m in &moves {
            // A capture on the last ply searches one deeper, so chains of
            // exchanges do not cut off at the horizon.
            let depth = if depth == 1 && m.is_capture() {
                depth + 1
            } else {
                depth
            };

            let mut child = board.clone();
            let val = if child.make_move(m) {
                // Same side continues the jump chain: same depth, same
                // window, no negation.
                self.alpha_beta(&child, &mut child_line, depth, alpha, beta, ply + 1)?
            } else {
                -self.alpha_beta(&child, &mut child_line, depth - 1, -beta, -alpha, ply + 1)?
            };

            if val >= beta {
                self.table.store(board.hash(), depth, *m);
                return Some(beta);
            }
            if val > alpha {
                alpha = val;
                best_move = Some(*m);
                line.clear();
                line.push(*m);
                line.extend_from_slice(&child_line);
            }
        }

        if let Some(m) = best_move {
            self.table.store(board.hash(), depth, m);
        }
        Some(alpha)
    }

    /// Swap the previous iteration's PV move for this ply to the front of
    /// the list. The first ply where the hint is missing or does not match
    /// disables reordering for the rest of the search: the line has diverged
    /// and deeper hints would be noise.
    fn reorder_moves(&mut self, moves: &mut MoveList, ply: u32) -> bool {
        if !self.reorder {
            return false;
        }
        let Some(hint) = self.pv.get(ply as usize).copied() else {
            self.reorder = false;
            return false;
        };
        match moves.iter().position(|m| *m == hint) {
            Some(idx) => {
                moves.swap(0, idx);
                true
            }
            None => {
                self.reorder = false;
                false
            }
        }
    }
}

/// Iteratively deepened search.
///
/// Deepens from `max(best_moves.len(), 1)`, which continues a line kept from
/// a previous call when pondering, up to `depth_limit` (`None` = unlimited)
/// or until the deadline set by `time_limit` fires. `best_moves` is replaced
/// after every completed iteration and left untouched by an interrupted one.
/// Returns `true` when the search ended by interruption rather than by
/// reaching a limit or a forced finish.
pub fn think(
    io: &dyn SearchIo,
    best_moves: &mut Vec<Move>,
    board: &Board,
    depth_limit: Option<u32>,
    time_limit: Option<Duration>,
    verbosity: Verbosity,
) -> bool {
    let deadline = time_limit.map(|limit| Instant::now() + limit);
    let mut context = SearchContext::new(io, deadline);
    let mut depth = best_moves.len().max(1) as u32;
    let mut iteration = 0u32;

    loop {
        if depth_limit.is_some_and(|limit| depth > limit) {
            return false;
        }

        context.begin_iteration(best_moves);
        let started = Instant::now();
        let mut line = Vec::new();
        let result = context.alpha_beta(board, &mut line, depth, -INFINITY, INFINITY, 0);

        if verbosity == Verbosity::Verbose {
            let pv = if result.is_some() { &line } else { &*best_moves };
            io.write(&log::iteration_report(
                depth,
                result,
                started.elapsed(),
                context.nodes(),
                pv,
                iteration % 8 == 0,
            ));
        }
        trace_log!(
            "depth {depth}: score {result:?}, {nodes} nodes",
            nodes = context.nodes()
        );

        if result.is_none() {
            return true;
        }
        *best_moves = line;

        // A line shorter than the depth ran into a forced finish; deepening
        // further cannot change it.
        if (best_moves.len() as u32) < depth {
            return false;
        }

        depth += 1;
        iteration += 1;
    }
}
