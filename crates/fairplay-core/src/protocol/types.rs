//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round outcome, from the player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::Win => "Win",
            RoundOutcome::Lose => "Lose",
            RoundOutcome::Draw => "Draw",
        }
    }

    /// The same result seen from the other side of the table
    pub fn reversed(&self) -> RoundOutcome {
        match self {
            RoundOutcome::Win => RoundOutcome::Lose,
            RoundOutcome::Lose => RoundOutcome::Win,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Running score over a session of rounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub abandoned: u32,
}

impl SessionTally {
    pub fn record(&mut self, outcome: Option<RoundOutcome>) {
        match outcome {
            Some(RoundOutcome::Win) => self.wins += 1,
            Some(RoundOutcome::Lose) => self.losses += 1,
            Some(RoundOutcome::Draw) => self.draws += 1,
            None => self.abandoned += 1,
        }
    }

    /// Rounds that reached an outcome
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_generation() {
        let id1 = RoundId::new();
        let id2 = RoundId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_round_id_parse() {
        let id = RoundId::new();
        let parsed: RoundId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_outcome_str() {
        assert_eq!(RoundOutcome::Win.as_str(), "Win");
        assert_eq!(RoundOutcome::Lose.as_str(), "Lose");
        assert_eq!(RoundOutcome::Draw.as_str(), "Draw");
    }

    #[test]
    fn test_outcome_reversed() {
        assert_eq!(RoundOutcome::Win.reversed(), RoundOutcome::Lose);
        assert_eq!(RoundOutcome::Lose.reversed(), RoundOutcome::Win);
        assert_eq!(RoundOutcome::Draw.reversed(), RoundOutcome::Draw);
    }

    #[test]
    fn test_tally_counts() {
        let mut tally = SessionTally::default();
        tally.record(Some(RoundOutcome::Win));
        tally.record(Some(RoundOutcome::Win));
        tally.record(Some(RoundOutcome::Draw));
        tally.record(None);

        assert_eq!(tally.wins, 2);
        assert_eq!(tally.draws, 1);
        assert_eq!(tally.abandoned, 1);
        assert_eq!(tally.played(), 3);
    }
}
