//! Round sequencing.
//!
//! A round runs in a fixed order: commit, announce, read the player's
//! move, resolve, reveal, disclose. The key never reaches the player
//! channel before the player's move has been read and the outcome decided.

use crate::crypto::{EntropySource, HmacSha256, KeyedHasher, OsEntropy};
use crate::error::Result;
use crate::games::{MoveSet, WinnerResolver};
use crate::protocol::fairness::FairnessCommitment;
use crate::protocol::{CommitmentAnnouncement, RoundDisclosure, RoundOutcome, SessionTally};
use tracing::{debug, info};

/// What the player picked
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerChoice {
    Move(String),
    /// Leave the game; the round ends without a disclosure
    Quit,
}

/// The player-facing side of a round: display and input.
///
/// Implementations own all input validation. `choose_move` must only
/// return labels that belong to `moves`, looping on bad input itself.
pub trait PlayerChannel {
    /// Show the commitment before asking for a move
    fn announce(&mut self, moves: &MoveSet, announcement: &CommitmentAnnouncement) -> Result<()>;

    /// Block until the player picks a move or quits
    fn choose_move(&mut self, moves: &MoveSet) -> Result<PlayerChoice>;

    /// Show the outcome, the computer's move and the key
    fn disclose(&mut self, disclosure: &RoundDisclosure) -> Result<()>;
}

impl<C: PlayerChannel + ?Sized> PlayerChannel for &mut C {
    fn announce(&mut self, moves: &MoveSet, announcement: &CommitmentAnnouncement) -> Result<()> {
        (**self).announce(moves, announcement)
    }

    fn choose_move(&mut self, moves: &MoveSet) -> Result<PlayerChoice> {
        (**self).choose_move(moves)
    }

    fn disclose(&mut self, disclosure: &RoundDisclosure) -> Result<()> {
        (**self).disclose(disclosure)
    }
}

/// How a round ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundReport {
    Completed(RoundDisclosure),
    /// The player quit after the commitment was published
    Abandoned(CommitmentAnnouncement),
}

impl RoundReport {
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self {
            RoundReport::Completed(d) => Some(d.outcome),
            RoundReport::Abandoned(_) => None,
        }
    }
}

/// Plays rounds over one move set
pub struct RoundOrchestrator<'a, E = OsEntropy, H = HmacSha256> {
    resolver: WinnerResolver<'a>,
    entropy: E,
    hasher: H,
}

impl<'a> RoundOrchestrator<'a> {
    /// Production orchestrator: OS randomness and HMAC-SHA256
    pub fn new(moves: &'a MoveSet) -> Self {
        Self::with_capabilities(moves, OsEntropy, HmacSha256)
    }
}

impl<'a, E: EntropySource, H: KeyedHasher> RoundOrchestrator<'a, E, H> {
    pub fn with_capabilities(moves: &'a MoveSet, entropy: E, hasher: H) -> Self {
        Self {
            resolver: WinnerResolver::new(moves),
            entropy,
            hasher,
        }
    }

    pub fn moves(&self) -> &'a MoveSet {
        self.resolver.moves()
    }

    /// Play one round. Every round gets its own key.
    pub fn play_round<C: PlayerChannel + ?Sized>(&mut self, channel: &mut C) -> Result<RoundReport> {
        let moves = self.resolver.moves();
        let mut fairness = FairnessCommitment::with_capabilities(&mut self.entropy, &self.hasher);

        let (commitment, handle) = fairness.commit(moves)?;
        let announcement = CommitmentAnnouncement {
            round_id: handle.round_id(),
            commitment,
        };
        channel.announce(moves, &announcement)?;

        let player_move = match channel.choose_move(moves)? {
            PlayerChoice::Move(m) => m,
            PlayerChoice::Quit => {
                info!(round = %announcement.round_id, "player left before moving");
                return Ok(RoundReport::Abandoned(announcement));
            }
        };
        debug!(round = %announcement.round_id, player_move = %player_move, "player moved");

        let outcome = self
            .resolver
            .resolve(&player_move, fairness.revealed_move(&handle)?)?;
        let (key, computer_move) = fairness.reveal(&handle)?;

        let disclosure = RoundDisclosure {
            round_id: announcement.round_id,
            commitment,
            player_move,
            computer_move,
            outcome,
            key,
        };
        channel.disclose(&disclosure)?;

        info!(
            round = %disclosure.round_id,
            computer_move = %disclosure.computer_move,
            outcome = %outcome,
            "round complete"
        );
        Ok(RoundReport::Completed(disclosure))
    }

    /// Play up to `rounds` rounds, stopping early if the player quits.
    pub fn play_session<C: PlayerChannel + ?Sized>(
        &mut self,
        channel: &mut C,
        rounds: usize,
    ) -> Result<SessionTally> {
        let mut tally = SessionTally::default();
        for _ in 0..rounds {
            let report = self.play_round(channel)?;
            tally.record(report.outcome());
            if matches!(report, RoundReport::Abandoned(_)) {
                break;
            }
        }
        Ok(tally)
    }
}
