//! Error types for table operations.

use thiserror::Error;

/// The shoe ran out of cards.
///
/// The pre-deal reshuffle check keeps this from happening in play; seeing it
/// means that check was bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct ShoeExhausted;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round phase for betting.
    #[error("invalid round phase for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The stakes would exceed the balance.
    #[error("insufficient balance")]
    InsufficientBalance,
    /// There is no earlier bet slip to repeat.
    #[error("no previous bets to repeat")]
    NoPreviousBets,
}

/// Errors that can occur when dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidState,
    /// Nothing has been staked.
    #[error("no bets have been placed")]
    NoBetsPlaced,
}

/// Errors that can occur when advancing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// There is no step to take in the current phase.
    #[error("nothing to advance in the current phase")]
    InvalidState,
    /// The shoe ran out of cards mid-round.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

impl From<ShoeExhausted> for AdvanceError {
    fn from(_: ShoeExhausted) -> Self {
        Self::ShoeExhausted
    }
}

/// Errors that can occur when changing table settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Settings can only change while betting.
    #[error("settings can only change while betting")]
    InvalidState,
}

/// Errors that can occur when starting or abandoning a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not been settled.
    #[error("the current round has not been settled")]
    InvalidState,
    /// No round is being dealt or drawn.
    #[error("no round is in progress")]
    NotInProgress,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid round phase for reshuffling.
    #[error("invalid round phase for reshuffling")]
    InvalidState,
}

/// Errors that can occur when playing a whole round at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The deal was rejected.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A step of the round failed.
    #[error(transparent)]
    Advance(#[from] AdvanceError),
}
