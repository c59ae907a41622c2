//! Winner resolution for any odd number of cyclically ordered moves.

use super::moves::{MoveIndex, MoveSet};
use crate::error::Result;
use crate::protocol::RoundOutcome;

/// Decides rounds over a fixed [`MoveSet`].
///
/// Moves sit on a circle in their given order. Each move beats the
/// `(n - 1) / 2` moves that come before it going backwards around the
/// circle and loses to the other half, so the classic
/// `Rock, Paper, Scissors` ordering has each move beating its predecessor.
#[derive(Clone, Copy, Debug)]
pub struct WinnerResolver<'a> {
    moves: &'a MoveSet,
}

impl<'a> WinnerResolver<'a> {
    pub fn new(moves: &'a MoveSet) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &'a MoveSet {
        self.moves
    }

    /// Outcome for the player; fails if either label is not in the set.
    pub fn resolve(&self, player_move: &str, computer_move: &str) -> Result<RoundOutcome> {
        let p = self.moves.index_of(player_move)?;
        let c = self.moves.index_of(computer_move)?;
        Ok(self.resolve_indices(p, c))
    }

    /// Outcome for the player by index
    pub fn resolve_indices(&self, player: MoveIndex, computer: MoveIndex) -> RoundOutcome {
        if player == computer {
            return RoundOutcome::Draw;
        }

        // n is odd, so half is never an integer and no distance ties with it
        let half = self.moves.len() as f64 / 2.0;
        let diff = player.get() as i64 - computer.get() as i64;
        let abs_diff = diff.unsigned_abs() as f64;

        if (diff < 0 && abs_diff > half) || (diff > 0 && abs_diff < half) {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        }
    }

    /// Full outcome matrix: `table[computer][player]`
    pub fn table(&self) -> Vec<Vec<RoundOutcome>> {
        let n = self.moves.len();
        (0..n)
            .map(|c| {
                (0..n)
                    .map(|p| self.resolve_indices(MoveIndex::at(p), MoveIndex::at(c)))
                    .collect()
            })
            .collect()
    }
}
