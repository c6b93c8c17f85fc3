//! Game engine and state management.

use alloc::string::String;

use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod dealer;
mod round;
pub mod state;

pub use state::GameState;

/// A single-player blackjack engine that manages the balance and round flow.
///
/// The game owns the shoe and both hands and is their only mutator. Drive it
/// with [`Game::start_round`], [`Game::hit`] and [`Game::stand`]; each call
/// runs to completion and returns a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Chips available to bet.
    balance: usize,
    /// Stake of the current or most recent round.
    current_bet: usize,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand. The first card is the hole card.
    dealer_hand: Hand,
    /// Outcome text of the most recent round.
    message: String,
    /// Result of the most recent settlement in this instance.
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.balance(), 100);
    /// assert_eq!(game.state(), GameState::Betting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            shoe: Shoe::with_threshold(seed, options.reshuffle_threshold),
            balance: options.starting_balance,
            options,
            state: GameState::Betting,
            current_bet: 0,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            message: String::new(),
            last_result: None,
        }
    }

    /// Assembles a game from already validated parts.
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the persisted session fields one to one"
    )]
    pub(crate) fn from_parts(
        options: GameOptions,
        shoe: Shoe,
        state: GameState,
        balance: usize,
        current_bet: usize,
        player_hand: Hand,
        dealer_hand: Hand,
        message: String,
    ) -> Self {
        Self {
            shoe,
            options,
            state,
            balance,
            current_bet,
            player_hand,
            dealer_hand,
            message,
            last_result: None,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the chips available to bet.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the stake of the current or most recent round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the outcome message, empty until a round is settled.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the result of the last round settled by this instance.
    ///
    /// Results are not part of the session, so a restored game starts with
    /// `None` even if the persisted round was finished.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns whether the player is out of chips with no round in progress.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.balance == 0 && self.state.accepts_bets()
    }
}
