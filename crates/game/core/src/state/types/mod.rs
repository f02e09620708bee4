pub mod common;
pub mod wall;

// Re-export common types
pub use common::{CardinalDirection, PlayerId, Position};
pub use wall::{Orientation, Wall};
