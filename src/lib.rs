//! A single-player blackjack engine with a coin-denomination bankroll and
//! optional `no_std` support.
//!
//! The crate provides a [`GameSession`] type that manages the full round
//! flow: wager placement against a purse of quarters, dimes, and nickels,
//! the initial deal, player actions, dealer auto-play, and settlement. The
//! presentation layer implements [`GameView`] to receive state-change
//! notifications and drives the session with user intents.
//!
//! # Example
//!
//! ```no_run
//! use coinjack::GameSession;
//!
//! let session = GameSession::new((), 42);
//! let _ = session;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod coins;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use coins::{CoinCount, CoinPurse, DIME, NICKEL, QUARTER, STARTING_COINS};
pub use error::{ActionError, CoinError, WagerError};
pub use game::{GameSession, RoundState};
pub use hand::{DealerHand, Hand};
pub use result::{RoundOutcome, RoundSummary};
pub use view::{Controls, GameView};
