//! Keyed best-move table.
//!
//! A map from position hash to the best move found there, used purely as a
//! move-ordering hint once the principal-variation hint has diverged. Entries
//! carry the search depth so a deep result is not overwritten by a shallow
//! one. Scores are deliberately not cached: iterative deepening stops when a
//! completed iteration's line comes back shorter than the target depth, and
//! bound-based cutoffs would truncate healthy lines.

use crate::board::types::Move;

#[derive(Clone, Copy, Debug)]
struct Entry {
    key: u64,
    depth: u32,
    best_move: Move,
}

/// Number of slots; must be a power of two so the hash can be masked down.
const TABLE_SLOTS: usize = 1 << 16;

pub(crate) struct TranspositionTable {
    slots: Vec<Option<Entry>>,
    mask: usize,
}

impl TranspositionTable {
    pub(crate) fn new() -> Self {
        TranspositionTable {
            slots: vec![None; TABLE_SLOTS],
            mask: TABLE_SLOTS - 1,
        }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Best move recorded for this position, if the slot still holds it.
    pub(crate) fn probe(&self, key: u64) -> Option<Move> {
        self.slots[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
            .map(|entry| entry.best_move)
    }

    /// Record `best_move` for the position. Same-position entries are always
    /// refreshed; a different position evicts only shallower data.
    pub(crate) fn store(&mut self, key: u64, depth: u32, best_move: Move) {
        let index = self.index(key);
        match &self.slots[index] {
            Some(existing) if existing.key != key && existing.depth > depth => {}
            _ => {
                self.slots[index] = Some(Entry {
                    key,
                    depth,
                    best_move,
                });
            }
        }
    }
}
