//! Protocol types, the commit/reveal machine and round sequencing.

mod fairness;
mod messages;
mod round;
mod types;

pub use fairness::{CommitHandle, CommitPhase, FairnessCommitment};
pub use messages::{CommitmentAnnouncement, RoundDisclosure};
pub use round::{PlayerChannel, PlayerChoice, RoundOrchestrator, RoundReport};
pub use types::{RoundId, RoundOutcome, SessionTally};
