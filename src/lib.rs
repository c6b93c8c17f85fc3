//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow: betting,
//! dealing, the player's turn, the dealer's turn, and settlement. A game can
//! be captured as a [`Session`] and rebuilt later, so a front-end that holds
//! no engine between requests can resume play.
//!
//! # Example
//!
//! ```
//! use bjsession::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let snapshot = game.start_round(10).unwrap();
//! if snapshot.game_state == GameState::Playing {
//!     game.stand().unwrap();
//! }
//! assert_eq!(game.state(), GameState::Finished);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, SessionError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{RoundOutcome, RoundResult};
pub use session::Session;
pub use shoe::Shoe;
pub use snapshot::{CardView, Snapshot};
