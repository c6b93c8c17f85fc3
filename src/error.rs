//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the available balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A round is already in progress.
    #[error("invalid game state for betting")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur when encoding or restoring a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session data could not be encoded or decoded.
    #[error("malformed session data")]
    Malformed,
    /// The persisted state is never observed between calls.
    #[error("session state cannot be resumed")]
    InvalidState,
    /// The persisted hands contradict the persisted state.
    #[error("session hands do not match the game state")]
    InvalidHand,
    /// The persisted shoe holds the same card more than once.
    #[error("session shoe holds a duplicate card")]
    DuplicateCard,
    /// A round is in progress without a bet.
    #[error("session bet does not match the game state")]
    InvalidBet,
}
