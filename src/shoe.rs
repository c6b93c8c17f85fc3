//! The shuffled card shoe.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Remaining-card count below which the shoe is rebuilt before a draw.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 10;

/// A single-deck shoe that rebuilds itself when it runs low.
///
/// The shoe owns its random number generator, so a fixed seed reproduces the
/// same sequence of draws, including every automatic reshuffle.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Undrawn cards. The next card drawn is the last element.
    cards: Vec<Card>,
    /// Reshuffle when fewer than this many cards remain.
    threshold: usize,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe with the default reshuffle threshold.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_threshold(seed, DEFAULT_RESHUFFLE_THRESHOLD)
    }

    /// Creates a freshly shuffled shoe that reshuffles below `threshold` cards.
    ///
    /// `threshold` is capped at [`DECK_SIZE`].
    #[must_use]
    pub fn with_threshold(seed: u64, threshold: usize) -> Self {
        let mut shoe = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            threshold: threshold.min(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reset();
        shoe
    }

    /// Creates a shoe that resumes from the given undrawn cards.
    ///
    /// The last card of `cards` is drawn first. `seed` drives later reshuffles.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64, threshold: usize) -> Self {
        Self {
            cards,
            threshold: threshold.min(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds a complete deck in suit-then-rank order.
    fn build_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Discards the undrawn cards and replaces them with a shuffled full deck.
    pub fn reset(&mut self) {
        let discarded = self.cards.len();
        self.cards = Self::build_deck();
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(discarded, "reshuffled shoe");
    }

    /// Draws a card, reshuffling first if the shoe is running low.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly reset shoe always holds a full deck"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < self.threshold || self.cards.is_empty() {
            self.reset();
        }

        self.cards
            .pop()
            .expect("reset guarantees the shoe is not empty")
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the undrawn cards; the last element is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Replaces the undrawn cards without shuffling.
    ///
    /// The last card of `cards` is drawn first.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
