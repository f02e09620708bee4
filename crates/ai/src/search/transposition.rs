//! Cache of searched positions.

use std::collections::HashMap;

use quoridor_core::StateDigest;

/// How a cached score relates to the true minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The search window contained the value.
    Exact,
    /// The search failed high; the value is at least the score.
    Lower,
    /// The search failed low; the value is at most the score.
    Upper,
}

impl Bound {
    /// Classifies a fail-soft result against the window it was searched with.
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranspositionEntry {
    /// Plies searched below the cached node.
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

impl TranspositionEntry {
    /// Returns the score if it is deep enough and settles the `(alpha, beta)` window.
    pub fn resolve(&self, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Key: state digest plus whether the node maximises.
pub type TranspositionKey = (StateDigest, bool);

#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<TranspositionKey, TranspositionEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&self, key: &TranspositionKey, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        self.entries.get(key)?.resolve(depth, alpha, beta)
    }

    /// Keeps the deeper entry; ties go to the newer one.
    pub fn store(&mut self, key: TranspositionKey, entry: TranspositionEntry) {
        match self.entries.get(&key) {
            Some(existing) if existing.depth > entry.depth => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }

    pub fn get(&self, key: &TranspositionKey) -> Option<&TranspositionEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
