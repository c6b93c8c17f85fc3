//! Persisting and resuming a game between independent calls.
//!
//! A deployment that serves each request with a fresh engine stores a
//! [`Session`] after every call and rebuilds the engine from it on the next
//! one. Keeping only one writer per session at a time is the store's job.
//!
//! The shoe is not part of the session unless
//! [`GameOptions::persist_shoe`] is set. Without it, a restored game shuffles
//! a fresh deck from the supplied seed, so cards already on the table may be
//! drawn again.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE};
use crate::error::SessionError;
use crate::game::{Game, GameState};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::shoe::Shoe;

/// The persistable state of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Chips available to bet.
    pub balance: usize,
    /// Stake of the current or most recent round.
    pub current_bet: usize,
    /// Game state at the end of the last call.
    pub game_state: GameState,
    /// Outcome message of the last settled round.
    #[serde(default)]
    pub message: String,
    /// Player's cards in deal order.
    #[serde(default)]
    pub player_cards: Vec<Card>,
    /// Dealer's cards in deal order.
    #[serde(default)]
    pub dealer_cards: Vec<Card>,
    /// Undrawn shoe cards, present only when the shoe is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoe: Option<Vec<Card>>,
}

impl Session {
    /// Encodes the session as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|err| {
            tracing::warn!(%err, "failed to encode session");
            SessionError::Malformed
        })
    }

    /// Decodes a session from JSON.
    ///
    /// Only the shape is checked here; [`Game::from_session`] validates the
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] if the input is not a valid
    /// session document.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        serde_json::from_str(json).map_err(|err| {
            tracing::warn!(%err, "failed to decode session");
            SessionError::Malformed
        })
    }

    /// Checks that the hands, bet and shoe are consistent with the state.
    fn validate(&self) -> Result<(), SessionError> {
        let player = Hand::from_cards(self.player_cards.clone());
        let dealer_len = self.dealer_cards.len();

        match self.game_state {
            GameState::Betting => {
                if !player.is_empty() || dealer_len != 0 {
                    return Err(SessionError::InvalidHand);
                }
            }
            GameState::Playing => {
                // A natural settles during the deal, so it is never in play.
                if player.len() < 2
                    || dealer_len < 2
                    || player.is_bust()
                    || player.is_blackjack()
                {
                    return Err(SessionError::InvalidHand);
                }
                if self.current_bet == 0 {
                    return Err(SessionError::InvalidBet);
                }
            }
            // Stand settles before returning, so this state is never stored.
            GameState::DealerTurn => return Err(SessionError::InvalidState),
            GameState::Finished => {
                if player.len() < 2 || dealer_len < 2 {
                    return Err(SessionError::InvalidHand);
                }
            }
        }

        if let Some(cards) = &self.shoe {
            if cards.len() > DECK_SIZE {
                return Err(SessionError::Malformed);
            }
            // Hands are not checked against the shoe: a reshuffle mid-round
            // leaves cards from the previous deck on the table.
            let mut seen: u64 = 0;
            for card in cards {
                let bit = 1u64 << card.index();
                if seen & bit != 0 {
                    return Err(SessionError::DuplicateCard);
                }
                seen |= bit;
            }
        }

        Ok(())
    }
}

impl Game {
    /// Captures the persistable state of the game.
    ///
    /// The undrawn shoe is included only when
    /// [`GameOptions::persist_shoe`] is set.
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session {
            balance: self.balance(),
            current_bet: self.current_bet(),
            game_state: self.state(),
            message: self.message().into(),
            player_cards: self.player_hand().cards().to_vec(),
            dealer_cards: self.dealer_hand().cards().to_vec(),
            shoe: self
                .options
                .persist_shoe
                .then(|| self.shoe.cards().to_vec()),
        }
    }

    /// Rebuilds a game from a persisted session.
    ///
    /// `seed` drives every shuffle of the restored game. When the options
    /// persist the shoe and the session carries one, drawing resumes from it;
    /// otherwise a fresh deck is shuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is in a state that is never persisted,
    /// its hands or bet contradict its state, or its shoe repeats a card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let mut game = Game::new(options, 1);
    /// game.start_round(10).unwrap();
    ///
    /// let json = game.to_session().to_json().unwrap();
    /// let session = bjsession::Session::from_json(&json).unwrap();
    /// let restored = Game::from_session(session, options, 2).unwrap();
    /// assert_eq!(restored.snapshot(), game.snapshot());
    /// ```
    pub fn from_session(
        session: Session,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SessionError> {
        if let Err(err) = session.validate() {
            tracing::warn!(%err, state = ?session.game_state, "rejected session");
            return Err(err);
        }

        let shoe = match session.shoe {
            Some(cards) if options.persist_shoe => {
                Shoe::from_cards(cards, seed, options.reshuffle_threshold)
            }
            _ => Shoe::with_threshold(seed, options.reshuffle_threshold),
        };

        tracing::debug!(
            state = ?session.game_state,
            balance = session.balance,
            shoe = shoe.len(),
            "restored session"
        );

        Ok(Self::from_parts(
            options,
            shoe,
            session.game_state,
            session.balance,
            session.current_bet,
            Hand::from_cards(session.player_cards),
            Hand::from_cards(session.dealer_cards),
            session.message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::{Rank, Suit};

    fn finished_session() -> Session {
        Session {
            balance: 90,
            current_bet: 10,
            game_state: GameState::Finished,
            message: "Dealer wins".into(),
            player_cards: vec![
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Seven, Suit::Clubs),
            ],
            dealer_cards: vec![
                Card::new(Rank::Nine, Suit::Spades),
                Card::new(Rank::Nine, Suit::Diamonds),
            ],
            shoe: None,
        }
    }

    #[test]
    fn json_uses_rank_and_suit_names() {
        let json = finished_session().to_json().unwrap();
        assert!(json.contains(r#"{"rank":"10","suit":"hearts"}"#));
        assert!(json.contains(r#""game_state":"finished""#));
        assert!(!json.contains("shoe"));
    }

    #[test]
    fn unknown_rank_is_malformed() {
        let json = r#"{"balance":100,"current_bet":0,"game_state":"finished",
            "player_cards":[{"rank":"1","suit":"hearts"}],"dealer_cards":[]}"#;
        assert_eq!(Session::from_json(json), Err(SessionError::Malformed));
    }

    #[test]
    fn unknown_state_is_malformed() {
        let json = r#"{"balance":100,"current_bet":0,"game_state":"insurance"}"#;
        assert_eq!(Session::from_json(json), Err(SessionError::Malformed));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"balance":100,"current_bet":0,"game_state":"betting"}"#;
        let session = Session::from_json(json).unwrap();
        assert!(session.player_cards.is_empty());
        assert!(session.message.is_empty());
        assert!(session.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inconsistent_hands() {
        let mut session = finished_session();
        session.game_state = GameState::Betting;
        assert_eq!(session.validate(), Err(SessionError::InvalidHand));

        let mut session = finished_session();
        session.game_state = GameState::Playing;
        session.player_cards.push(Card::new(Rank::King, Suit::Clubs));
        assert_eq!(session.validate(), Err(SessionError::InvalidHand));

        let mut session = finished_session();
        session.dealer_cards.truncate(1);
        assert_eq!(session.validate(), Err(SessionError::InvalidHand));
    }

    #[test]
    fn validate_rejects_dealer_turn_and_missing_bet() {
        let mut session = finished_session();
        session.game_state = GameState::DealerTurn;
        assert_eq!(session.validate(), Err(SessionError::InvalidState));

        let mut session = finished_session();
        session.game_state = GameState::Playing;
        session.current_bet = 0;
        assert_eq!(session.validate(), Err(SessionError::InvalidBet));
    }

    #[test]
    fn validate_rejects_oversized_shoe() {
        let mut session = finished_session();
        session.shoe = Some(vec![Card::new(Rank::Two, Suit::Clubs); DECK_SIZE + 1]);
        assert_eq!(session.validate(), Err(SessionError::Malformed));
    }

    #[test]
    fn validate_rejects_a_natural_in_play() {
        let mut session = finished_session();
        session.game_state = GameState::Playing;
        session.player_cards = vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Clubs),
        ];
        assert_eq!(session.validate(), Err(SessionError::InvalidHand));

        session.game_state = GameState::Finished;
        assert!(session.validate().is_ok());
    }

    #[test]
    fn validate_rejects_a_repeated_shoe_card() {
        let mut session = finished_session();
        session.shoe = Some(vec![
            Card::new(Rank::Four, Suit::Spades),
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::Four, Suit::Spades),
        ]);
        assert_eq!(session.validate(), Err(SessionError::DuplicateCard));
    }

    #[test]
    fn shoe_may_repeat_cards_on_the_table() {
        // The shoe was rebuilt after the hands were dealt.
        let mut session = finished_session();
        session.shoe = Some(vec![
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Spades),
        ]);
        assert!(session.validate().is_ok());
    }
}
