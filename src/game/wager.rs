use crate::error::WagerError;
use crate::result::RoundOutcome;
use crate::view::GameView;

use super::{GameSession, RoundState};

impl<V: GameView> GameSession<V> {
    /// Places a wager and deals the opening hands.
    ///
    /// The amount is decomposed into coins actually on hand and deducted,
    /// then two cards go to the player and two to the dealer. If either side
    /// holds a natural blackjack the round settles immediately (dealer
    /// natural: loss; player natural: 3:2 win; both: push); otherwise play
    /// passes to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the amount is
    /// zero, the amount exceeds the bankroll, or no combination of held
    /// coins matches it exactly. No state is mutated on a rejected wager.
    pub fn place_wager(&mut self, cents: u32) -> Result<(), WagerError> {
        if self.state != RoundState::AwaitingWager {
            return Err(WagerError::InvalidState);
        }
        if cents == 0 {
            return Err(WagerError::ZeroWager);
        }
        if cents > self.purse.total_cents() {
            return Err(WagerError::InsufficientFunds);
        }

        let coins = self
            .purse
            .decompose(cents)
            .map_err(|_| WagerError::NoExactChange)?;

        // A round-start deck always holds 52 cards; a short deck is rejected
        // before any purse mutation.
        if self.deck.len() < 4 {
            return Err(WagerError::EmptyDeck);
        }

        self.purse
            .apply_wager(&coins)
            .map_err(|_| WagerError::InsufficientFunds)?;
        self.wager = cents;
        self.notify_coins();

        self.deal();
        Ok(())
    }

    /// Deals the opening hands and runs the natural-blackjack check.
    fn deal(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();

        // Two cards each, interleaved: player, dealer up, player, dealer hole.
        if let Some(card) = self.draw() {
            self.player_hand.add_card(card);
        }
        if let Some(card) = self.draw() {
            self.dealer_hand.add_card(card);
        }
        if let Some(card) = self.draw() {
            self.player_hand.add_card(card);
        }
        if let Some(card) = self.draw() {
            self.dealer_hand.add_card(card);
        }

        let player_natural = self.player_hand.is_blackjack();
        let dealer_natural = self.dealer_hand.is_blackjack();

        if player_natural || dealer_natural {
            self.dealer_hand.reveal_hole();
            self.notify_hands();

            if player_natural && dealer_natural {
                self.settle(RoundOutcome::Push, "Both have Blackjack! Push!");
            } else if dealer_natural {
                self.settle(RoundOutcome::Lose, "Dealer has Blackjack! You lose!");
            } else {
                self.settle(RoundOutcome::Blackjack, "Blackjack! You win!");
            }
        } else {
            self.state = RoundState::PlayerTurn;
            self.notify_hands();
            self.notify_controls();
        }
    }
}
