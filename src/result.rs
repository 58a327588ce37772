//! Round result types for settlement.

/// Outcome of a settled round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins (dealer busts, player has the higher score, or the player
    /// draws to exactly 21).
    Win,
    /// Player loses (busts, or the dealer finishes higher).
    Lose,
    /// Push (tie); the wager is returned with no profit or loss.
    Push,
    /// Player has a natural blackjack, paid at 3:2.
    Blackjack,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The wager that was at stake, in cents.
    pub wager: u32,
    /// The total credited back to the purse, in cents
    /// (0 for a loss, the wager for a push, more for a win).
    pub payout: u32,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
