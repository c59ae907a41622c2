//! Protocol messages.

use crate::crypto::{Commitment, HmacSha256, SecretKey};
use crate::error::Result;
use crate::protocol::{RoundId, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Published before the player is asked for a move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentAnnouncement {
    pub round_id: RoundId,
    pub commitment: Commitment,
}

/// Published after the outcome is decided
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDisclosure {
    pub round_id: RoundId,
    pub commitment: Commitment,
    pub player_move: String,
    pub computer_move: String,
    pub outcome: RoundOutcome,
    pub key: SecretKey,
}

impl RoundDisclosure {
    /// Recompute HMAC-SHA256(key, computer_move) and compare with the
    /// commitment announced before the player moved.
    pub fn verify(&self) -> Result<bool> {
        self.commitment
            .verify(&HmacSha256, &self.key, &self.computer_move)
    }
}
