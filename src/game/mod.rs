//! Game session and round state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::coins::CoinPurse;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::result::RoundSummary;
use crate::view::{Controls, GameView};

mod actions;
mod dealer;
pub mod state;
mod wager;

pub use state::RoundState;

/// A single-player blackjack session.
///
/// The session exclusively owns the deck, the coin purse, both hands, and the
/// RNG; all mutation goes through `&mut self`, so independent sessions can
/// coexist freely. Every observable state change is pushed to the owned
/// [`GameView`].
pub struct GameSession<V> {
    /// The presentation layer receiving state-change notifications.
    pub view: V,
    /// Cards remaining this round. The top of the deck is the end of the
    /// vector; a fresh shuffled deck is built at the start of every round.
    pub deck: Vec<Card>,
    /// The player's bankroll.
    pub purse: CoinPurse,
    /// Current round state.
    state: RoundState,
    /// The wager at stake, in cents (0 outside an active round).
    wager: u32,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// The last status message pushed to the view.
    status: String,
    /// The result of the most recently settled round.
    summary: Option<RoundSummary>,
    /// Random number generator driving the shuffle.
    rng: ChaCha8Rng,
}

impl<V: GameView> GameSession<V> {
    /// Creates a new session with a fresh $4.00 purse and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use coinjack::{GameSession, RoundState};
    ///
    /// let session = GameSession::new((), 42);
    /// assert_eq!(session.state(), RoundState::AwaitingWager);
    /// assert_eq!(session.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(view: V, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::build_deck(&mut rng);

        Self {
            view,
            deck,
            purse: CoinPurse::new(),
            state: RoundState::AwaitingWager,
            wager: 0,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            status: String::new(),
            summary: None,
            rng,
        }
    }

    /// Creates and shuffles a fresh 52-card deck.
    fn build_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Draws a card from the top of the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Starts the next round.
    ///
    /// A bankrupt purse (total of zero) is refilled to the starting $4.00
    /// with a bankroll-reset message. The deck is rebuilt and reshuffled,
    /// hands and wager are cleared, and the session returns to
    /// [`RoundState::AwaitingWager`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] while a round is in progress.
    pub fn start_new_round(&mut self) -> Result<(), ActionError> {
        if !matches!(
            self.state,
            RoundState::AwaitingWager | RoundState::Settled
        ) {
            return Err(ActionError::InvalidState);
        }

        if self.purse.total_cents() == 0 {
            self.purse.refill();
            self.set_status("You Lose! Game restarting with $4.00");
        } else {
            self.set_status("");
        }

        self.reset_round();
        Ok(())
    }

    /// Rebuilds the deck and clears per-round state.
    fn reset_round(&mut self) {
        self.deck = Self::build_deck(&mut self.rng);
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.wager = 0;
        self.state = RoundState::AwaitingWager;

        self.notify_hands();
        self.notify_coins();
        self.notify_controls();
    }

    /// Aborts the round after deck exhaustion.
    ///
    /// A single 52-card deck always covers one round, so this is a fatal,
    /// never-expected condition: the pending wager is refunded and the
    /// session is fully reset.
    fn abort_round(&mut self) {
        let wager = self.wager;
        self.purse.credit_payout(wager);
        self.wager = 0;
        self.reset_round();
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the wager at stake, in cents (0 outside an active round).
    #[must_use]
    pub const fn wager_cents(&self) -> u32 {
        self.wager
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the last status message.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the result of the most recently settled round.
    #[must_use]
    pub const fn last_summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    /// Returns which intents the presentation layer should currently offer.
    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls {
            can_hit: self.state == RoundState::PlayerTurn,
            can_stand: self.state == RoundState::PlayerTurn,
            can_start_new_round: matches!(
                self.state,
                RoundState::AwaitingWager | RoundState::Settled
            ),
        }
    }

    /// Pushes the complete current state to the view.
    ///
    /// Useful when a presentation layer attaches to an existing session.
    pub fn sync_view(&mut self) {
        self.notify_hands();
        self.notify_coins();
        self.notify_controls();
        self.view.on_status_message(&self.status);
    }

    /// Stores and pushes a status message.
    fn set_status(&mut self, text: &str) {
        self.status.clear();
        self.status.push_str(text);
        self.view.on_status_message(text);
    }

    /// Pushes both hands and both scores to the view.
    fn notify_hands(&mut self) {
        self.view.on_hands_changed(
            self.player_hand.cards(),
            self.dealer_hand.cards(),
            self.dealer_hand.is_hole_revealed(),
        );
        self.view
            .on_scores_changed(self.player_hand.value(), self.dealer_hand.visible_value());
    }

    /// Pushes the coin counts to the view.
    fn notify_coins(&mut self) {
        let purse = self.purse;
        self.view.on_coins_changed(
            purse.quarters,
            purse.dimes,
            purse.nickels,
            purse.total_cents(),
        );
    }

    /// Pushes the current control availability to the view.
    fn notify_controls(&mut self) {
        let controls = self.controls();
        self.view.on_controls_changed(controls);
    }
}
