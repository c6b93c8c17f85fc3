//! Read-only views of a game for front-ends.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::game::{Game, GameState};

/// A card as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardView {
    /// The card is face down.
    Hidden,
    /// The card is face up.
    Face(Card),
}

impl CardView {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<&Card> {
        match self {
            Self::Hidden => None,
            Self::Face(card) => Some(card),
        }
    }
}

/// What a front-end may show about a game at a point in time.
///
/// Until the dealer's turn the dealer's first card is masked and the dealer
/// value is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player's cards, all face up.
    pub player_cards: Vec<Card>,
    /// Player's hand value.
    pub player_value: u8,
    /// Dealer's cards, with the hole card masked while hidden.
    pub dealer_cards: Vec<CardView>,
    /// Dealer's hand value, `None` while the hole card is hidden.
    pub dealer_value: Option<u8>,
    /// Chips available to bet.
    pub balance: usize,
    /// Stake of the current or most recent round.
    pub current_bet: usize,
    /// Current game state.
    pub game_state: GameState,
    /// Outcome message, empty until the round is settled.
    pub message: String,
}

impl Game {
    /// Returns a read-only view of the game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let revealed = self.state().reveals_dealer();
        let dealer = self.dealer_hand();

        let dealer_cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| {
                if index == 0 && !revealed {
                    CardView::Hidden
                } else {
                    CardView::Face(card)
                }
            })
            .collect();

        Snapshot {
            player_cards: self.player_hand().cards().to_vec(),
            player_value: self.player_hand().value(),
            dealer_cards,
            dealer_value: revealed.then(|| dealer.value()),
            balance: self.balance(),
            current_bet: self.current_bet(),
            game_state: self.state(),
            message: self.message().into(),
        }
    }
}
