//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when placing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Invalid game state for wagering.
    #[error("invalid game state for wagering")]
    InvalidState,
    /// Wager amount is zero.
    #[error("wager amount is zero")]
    ZeroWager,
    /// Wager exceeds the total bankroll.
    #[error("wager exceeds total money available")]
    InsufficientFunds,
    /// Wager cannot be matched exactly with the coins on hand.
    #[error("cannot make this amount with available coins")]
    NoExactChange,
    /// The deck ran out of cards during the initial deal.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out of cards mid-round.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur in coin purse arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoinError {
    /// No combination of held coins matches the requested amount exactly.
    #[error("cannot make this amount with available coins")]
    NoExactChange,
    /// A deduction would take a coin count negative.
    #[error("insufficient coins for deduction")]
    InsufficientFunds,
}
