//! Canonical state digest.
//!
//! The digest is a SHA-256 over a fixed byte layout so that equal states always
//! produce equal keys regardless of how they were reached:
//!
//! ```text
//! [p1.row, p1.col, p2.row, p2.col, budget1, budget2, turn, (orientation, row, col)*]
//! ```
//!
//! Walls are fed in `BTreeSet` order, which is already canonical.

use std::fmt;

use sha2::{Digest, Sha256};

use super::{GameState, Orientation, PlayerId};

/// 256-bit fingerprint of a [`GameState`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateDigest([u8; 32]);

impl StateDigest {
    /// Folds the leading bytes into a `u64`, handy for seeding.
    pub fn fold_u64(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(head)
    }
}

impl fmt::Debug for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateDigest({self})")
    }
}

impl fmt::Display for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

pub(super) fn compute(state: &GameState) -> StateDigest {
    let mut hasher = Sha256::new();

    let mut header = [0u8; 7];
    for player in PlayerId::ALL {
        let position = state.position(player);
        header[player.index() * 2] = position.row as u8;
        header[player.index() * 2 + 1] = position.col as u8;
        header[4 + player.index()] = state.wall_budget(player);
    }
    header[6] = state.turn().index() as u8;
    hasher.update(header);

    for wall in state.walls() {
        let tag = match wall.orientation {
            Orientation::Horizontal => 0u8,
            Orientation::Vertical => 1u8,
        };
        hasher.update([tag, wall.row as u8, wall.col as u8]);
    }

    StateDigest(hasher.finalize().into())
}
