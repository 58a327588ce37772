use crate::error::ActionError;
use crate::result::{RoundOutcome, RoundSummary};
use crate::view::GameView;

use super::{GameSession, RoundState};

impl<V: GameView> GameSession<V> {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The dealer draws while holding 16 or less and stands on any 17, soft
    /// or hard. The view is notified after each draw.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        while self.dealer_hand.value() <= 16 {
            let Some(card) = self.draw() else {
                self.abort_round();
                return Err(ActionError::EmptyDeck);
            };

            self.dealer_hand.add_card(card);
            self.notify_hands();
        }

        let dealer_value = self.dealer_hand.value();
        let player_value = self.player_hand.value();

        if dealer_value > 21 {
            self.settle(RoundOutcome::Win, "Dealer busts, you win!");
        } else if player_value > dealer_value {
            self.settle(RoundOutcome::Win, "You win!");
        } else if player_value < dealer_value {
            self.settle(RoundOutcome::Lose, "Dealer wins!");
        } else {
            self.settle(RoundOutcome::Push, "Push! No winner.");
        }

        Ok(())
    }

    /// Total cents returned to the purse for an outcome.
    ///
    /// A push returns the wager, an ordinary win returns double, and a
    /// natural blackjack returns the wager plus a 3:2 profit (floored to a
    /// whole cent; sub-nickel remainders are dropped at crediting).
    const fn payout_for(outcome: RoundOutcome, wager: u32) -> u32 {
        match outcome {
            RoundOutcome::Lose => 0,
            RoundOutcome::Push => wager,
            RoundOutcome::Win => wager * 2,
            RoundOutcome::Blackjack => wager + wager * 3 / 2,
        }
    }

    /// Settles the round: credits the payout, records the summary, zeroes
    /// the wager, and notifies the view.
    pub(super) fn settle(&mut self, outcome: RoundOutcome, message: &str) {
        let wager = self.wager;
        let payout = Self::payout_for(outcome, wager);

        self.purse.credit_payout(payout);
        self.summary = Some(RoundSummary {
            outcome,
            wager,
            payout,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
        });
        self.wager = 0;
        self.state = RoundState::Settled;

        self.set_status(message);
        self.notify_coins();
        self.notify_controls();
    }
}
