//! Fairplay Core Library
//!
//! Provably fair rock-paper-scissors over any odd number of moves. The
//! computer commits to its move with HMAC-SHA256 before the player picks,
//! then discloses the key so the player can check the move was not changed.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{verify_disclosure, Commitment, EntropySource, KeyedHasher, SecretKey};
pub use error::{GameError, MoveSetViolation, Result};
pub use games::{MoveIndex, MoveSet, WinnerResolver};
pub use protocol::{
    CommitHandle, CommitPhase, CommitmentAnnouncement, FairnessCommitment, PlayerChannel,
    PlayerChoice, RoundDisclosure, RoundId, RoundOrchestrator, RoundOutcome, RoundReport,
    SessionTally,
};
