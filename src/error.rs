//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero, negative, or not a number.
    #[error("bet amount must be positive")]
    NotPositive,
    /// Bet exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
///
/// A rejected action leaves the game untouched, so callers driving a UI may
/// safely ignore these and keep the session going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The table limit on player hands is reached.
    #[error("maximum number of hands reached")]
    MaxHandsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur while driving the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer to play.
    #[error("invalid game state for dealer play")]
    InvalidState,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors raised by the shoe itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}
