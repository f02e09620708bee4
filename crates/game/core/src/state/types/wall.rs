use std::fmt;

use crate::config::GameConfig;

/// Orientation of a wall segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Lies along a row boundary and blocks vertical steps.
    Horizontal,
    /// Lies along a column boundary and blocks horizontal steps.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    pub const fn orthogonal(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    const fn tag(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}

/// A two-unit wall anchored on the inner grid.
///
/// A horizontal wall at `(r, c)` sits between rows `r` and `r + 1` and covers
/// columns `c` and `c + 1`. A vertical wall at `(r, c)` sits between columns
/// `c` and `c + 1` and covers rows `r` and `r + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub orientation: Orientation,
    pub row: i32,
    pub col: i32,
}

impl Wall {
    pub const fn new(orientation: Orientation, row: i32, col: i32) -> Self {
        Self {
            orientation,
            row,
            col,
        }
    }

    pub const fn horizontal(row: i32, col: i32) -> Self {
        Self::new(Orientation::Horizontal, row, col)
    }

    pub const fn vertical(row: i32, col: i32) -> Self {
        Self::new(Orientation::Vertical, row, col)
    }

    /// Returns true if the anchor lies in `[0, N-2]²`.
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0
            && self.row <= GameConfig::MAX_WALL_ANCHOR
            && self.col >= 0
            && self.col <= GameConfig::MAX_WALL_ANCHOR
    }

    /// Same-orientation walls that would share a boundary unit with this one.
    pub const fn overlapping(self) -> [Wall; 2] {
        match self.orientation {
            Orientation::Horizontal => [
                Wall::horizontal(self.row, self.col - 1),
                Wall::horizontal(self.row, self.col + 1),
            ],
            Orientation::Vertical => [
                Wall::vertical(self.row - 1, self.col),
                Wall::vertical(self.row + 1, self.col),
            ],
        }
    }

    /// The perpendicular wall sharing this anchor (their midpoints coincide).
    pub const fn crossing(self) -> Wall {
        Wall::new(self.orientation.orthogonal(), self.row, self.col)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.orientation.tag(), self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_bounds_cover_inner_grid() {
        assert!(Wall::horizontal(0, 0).is_in_bounds());
        assert!(Wall::vertical(7, 7).is_in_bounds());
        assert!(!Wall::horizontal(8, 0).is_in_bounds());
        assert!(!Wall::vertical(0, -1).is_in_bounds());
    }

    #[test]
    fn overlap_runs_along_long_axis() {
        assert_eq!(
            Wall::horizontal(3, 3).overlapping(),
            [Wall::horizontal(3, 2), Wall::horizontal(3, 4)]
        );
        assert_eq!(
            Wall::vertical(3, 3).overlapping(),
            [Wall::vertical(2, 3), Wall::vertical(4, 3)]
        );
        assert_eq!(Wall::horizontal(2, 5).crossing(), Wall::vertical(2, 5));
    }
}
