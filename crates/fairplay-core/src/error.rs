//! Error types for the fairplay protocol.

use thiserror::Error;

/// Why a move set was refused
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetViolation {
    #[error("need at least 3 moves, got {0}")]
    TooFew(usize),

    #[error("need an odd number of moves, got {0}")]
    EvenCount(usize),

    #[error("move {0:?} appears more than once")]
    Duplicate(String),

    #[error("move at position {0} is empty")]
    EmptyLabel(usize),
}

/// Errors from protocol operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetViolation),

    #[error("Unknown move: {0:?}")]
    UnknownMove(String),

    #[error("Secure randomness unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("No move has been committed for this round")]
    NotCommitted,

    #[error("A move is already committed for this round")]
    AlreadyCommitted,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Player channel failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
