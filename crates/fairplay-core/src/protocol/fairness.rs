//! Commit/reveal state machine for the computer's move.
//!
//! A [`FairnessCommitment`] lives for exactly one round:
//!
//! ```text
//! Uninitialized --commit--> Committed --reveal--> Revealed
//! ```
//!
//! The key and the chosen move are fixed at `commit`, and only leave the
//! machine through `reveal`. Operations called out of order fail with an
//! error and leave the state untouched.

use crate::crypto::{
    Commitment, EntropySource, HmacSha256, KeyedHasher, OsEntropy, SecretKey,
};
use crate::error::{GameError, Result};
use crate::games::{MoveIndex, MoveSet};
use crate::protocol::RoundId;
use tracing::debug;

/// Observable phase of a [`FairnessCommitment`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitPhase {
    Uninitialized,
    Committed,
    Revealed,
}

/// Opaque reference to a committed (key, move) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitHandle {
    round_id: RoundId,
}

impl CommitHandle {
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }
}

struct Sealed {
    round_id: RoundId,
    key: SecretKey,
    chosen: MoveIndex,
    label: String,
    commitment: Commitment,
}

enum State {
    Uninitialized,
    Committed(Sealed),
    Revealed(Sealed),
}

/// One round's commitment to the computer's move
pub struct FairnessCommitment<E = OsEntropy, H = HmacSha256> {
    entropy: E,
    hasher: H,
    state: State,
}

impl FairnessCommitment {
    /// Production instance: OS randomness and HMAC-SHA256
    pub fn new() -> Self {
        Self::with_capabilities(OsEntropy, HmacSha256)
    }
}

impl Default for FairnessCommitment {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource, H: KeyedHasher> FairnessCommitment<E, H> {
    pub fn with_capabilities(entropy: E, hasher: H) -> Self {
        Self {
            entropy,
            hasher,
            state: State::Uninitialized,
        }
    }

    pub fn phase(&self) -> CommitPhase {
        match self.state {
            State::Uninitialized => CommitPhase::Uninitialized,
            State::Committed(_) => CommitPhase::Committed,
            State::Revealed(_) => CommitPhase::Revealed,
        }
    }

    /// The published commitment, once there is one
    pub fn commitment(&self) -> Option<Commitment> {
        match &self.state {
            State::Uninitialized => None,
            State::Committed(s) | State::Revealed(s) => Some(s.commitment),
        }
    }

    /// Draw a fresh key, pick a move uniformly from `moves` and commit to it.
    pub fn commit(&mut self, moves: &MoveSet) -> Result<(Commitment, CommitHandle)> {
        if !matches!(self.state, State::Uninitialized) {
            return Err(GameError::AlreadyCommitted);
        }

        let key = SecretKey::generate(&mut self.entropy)?;
        let chosen = MoveIndex::at(self.entropy.index_below(moves.len())?);
        let label = moves.label(chosen).to_string();
        let commitment = Commitment::new(&self.hasher, &key, &label)?;
        let round_id = RoundId::new();

        debug!(round = %round_id, %commitment, "computer move committed");

        self.state = State::Committed(Sealed {
            round_id,
            key,
            chosen,
            label,
            commitment,
        });
        Ok((commitment, CommitHandle { round_id }))
    }

    fn sealed(&self, handle: &CommitHandle) -> Result<&Sealed> {
        match &self.state {
            State::Committed(s) | State::Revealed(s) if s.round_id == handle.round_id => Ok(s),
            _ => Err(GameError::NotCommitted),
        }
    }

    /// The committed move, without disclosing the key
    pub fn revealed_move(&self, handle: &CommitHandle) -> Result<&str> {
        Ok(&self.sealed(handle)?.label)
    }

    /// Index of the committed move within the move set
    pub fn revealed_index(&self, handle: &CommitHandle) -> Result<MoveIndex> {
        Ok(self.sealed(handle)?.chosen)
    }

    /// Disclose the key and move. Repeated calls return the same pair.
    pub fn reveal(&mut self, handle: &CommitHandle) -> Result<(SecretKey, String)> {
        self.sealed(handle)?;

        self.state = match std::mem::replace(&mut self.state, State::Uninitialized) {
            State::Committed(s) => {
                debug!(round = %s.round_id, "key revealed");
                State::Revealed(s)
            }
            other => other,
        };

        let sealed = self.sealed(handle)?;
        Ok((sealed.key.clone(), sealed.label.clone()))
    }
}
