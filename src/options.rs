//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::shoe::DEFAULT_RESHUFFLE_THRESHOLD;

/// Balance a new session starts with.
pub const DEFAULT_STARTING_BALANCE: usize = 100;

/// Configuration options for a blackjack session.
///
/// Payouts and the dealer's drawing rule are fixed; only the session
/// parameters are configurable. Use the builder pattern to customize them:
///
/// ```
/// use bjsession::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(500)
///     .with_persist_shoe(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Balance of a freshly created game.
    pub starting_balance: usize,
    /// The shoe is rebuilt before a draw when fewer cards than this remain.
    ///
    /// Values above [`DECK_SIZE`] act as [`DECK_SIZE`].
    pub reshuffle_threshold: usize,
    /// Whether sessions carry the undrawn shoe.
    ///
    /// When disabled, every restored game shuffles a fresh deck and cards
    /// already seen may be drawn again.
    pub persist_shoe: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            persist_shoe: false,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the reshuffle threshold, capped at [`DECK_SIZE`].
    ///
    /// At the cap every draw comes from a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::{DECK_SIZE, GameOptions};
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(15);
    /// assert_eq!(options.reshuffle_threshold, 15);
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(1000);
    /// assert_eq!(options.reshuffle_threshold, DECK_SIZE);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = if threshold > DECK_SIZE {
            DECK_SIZE
        } else {
            threshold
        };
        self
    }

    /// Sets whether sessions carry the undrawn shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::GameOptions;
    ///
    /// let options = GameOptions::default().with_persist_shoe(true);
    /// assert!(options.persist_shoe);
    /// ```
    #[must_use]
    pub const fn with_persist_shoe(mut self, persist: bool) -> Self {
        self.persist_shoe = persist;
        self
    }
}
