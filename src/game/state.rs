//! Round lifecycle states.

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for a wager to be placed.
    AwaitingWager,
    /// Waiting for player actions (hit or stand).
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled; a new round may be started.
    Settled,
}
