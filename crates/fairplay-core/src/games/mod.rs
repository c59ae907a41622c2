//! Move sets and winner resolution.

mod moves;
mod resolver;

pub use moves::{MoveIndex, MoveSet, MIN_MOVES};
pub use resolver::WinnerResolver;
