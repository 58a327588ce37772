//! Presentation layer boundary.
//!
//! The engine pushes every observable state change through [`GameView`] and
//! receives user intents as method calls on
//! [`GameSession`](crate::GameSession). Rendering, input wiring, and pacing
//! (such as delays between dealer draws) belong entirely to the view.

use crate::card::Card;

/// Which user intents the presentation layer should currently offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// Whether the player may hit.
    pub can_hit: bool,
    /// Whether the player may stand.
    pub can_stand: bool,
    /// Whether a new round may be started.
    pub can_start_new_round: bool,
}

/// Callbacks the engine invokes as game state changes.
///
/// All methods have empty default implementations, so a view only implements
/// what it renders. The unit type is the null view for headless use:
///
/// ```
/// use coinjack::GameSession;
///
/// let session = GameSession::new((), 42);
/// assert_eq!(session.purse.total_cents(), 400);
/// ```
pub trait GameView {
    /// Called when either hand changes, with the dealer hole card visibility.
    ///
    /// While `hole_revealed` is false the second dealer card should be
    /// rendered face down.
    fn on_hands_changed(&mut self, player: &[Card], dealer: &[Card], hole_revealed: bool) {
        let _ = (player, dealer, hole_revealed);
    }

    /// Called when either score changes.
    ///
    /// `dealer_score` is the visible score: only the up card counts while the
    /// hole card is hidden.
    fn on_scores_changed(&mut self, player_score: u8, dealer_score: u8) {
        let _ = (player_score, dealer_score);
    }

    /// Called with user-facing status text (round results, bankroll resets).
    fn on_status_message(&mut self, text: &str) {
        let _ = text;
    }

    /// Called when coin counts change, with the new total in cents.
    fn on_coins_changed(&mut self, quarters: u32, dimes: u32, nickels: u32, total_cents: u32) {
        let _ = (quarters, dimes, nickels, total_cents);
    }

    /// Called when the set of available intents changes.
    fn on_controls_changed(&mut self, controls: Controls) {
        let _ = controls;
    }
}

/// The null view: ignores every notification.
impl GameView for () {}
