use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundOutcome;
use crate::view::GameView;

use super::{GameSession, RoundState};

impl<V: GameView> GameSession<V> {
    /// Player action: Hit (draw a card).
    ///
    /// Busting settles the round as a loss. Drawing to exactly 21 settles it
    /// at once as an ordinary win; a natural blackjack is only possible on
    /// the opening two cards, so a drawn 21 never pays 3:2.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck is
    /// empty (which aborts the round, refunding the wager).
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let Some(card) = self.draw() else {
            self.abort_round();
            return Err(ActionError::EmptyDeck);
        };

        self.player_hand.add_card(card);
        self.notify_hands();

        let value = self.player_hand.value();
        if value > 21 {
            self.settle(RoundOutcome::Lose, "Player busts!");
        } else if value == 21 {
            self.settle(RoundOutcome::Win, "You have 21!");
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Reveals the dealer hole card and runs the dealer's turn to completion
    /// synchronously; the round is settled when this returns. Pacing between
    /// dealer draws belongs to the view.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck runs
    /// out while the dealer must draw (which aborts the round, refunding the
    /// wager).
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer_hand.reveal_hole();
        self.state = RoundState::DealerTurn;
        self.notify_hands();
        self.notify_controls();

        self.dealer_play()
    }
}
