use crate::error::BetError;
use crate::snapshot::Snapshot;

use super::{Game, GameState};

impl Game {
    /// Deals the opening cards: player, dealer, player, dealer.
    fn deal_opening_cards(&mut self) {
        for _ in 0..2 {
            let card = self.shoe.draw();
            self.player_hand.add_card(card);

            let card = self.shoe.draw();
            self.dealer_hand.add_card(card);
        }
    }

    /// Places a bet and deals a new round.
    ///
    /// The bet is deducted from the balance immediately. If the player's
    /// opening cards total 21 the round settles before this returns, without
    /// the dealer drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, exceeds the balance, or a round is
    /// already in progress. The game is left unchanged in every error case.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// let snapshot = game.start_round(10).unwrap();
    /// assert_eq!(snapshot.player_cards.len(), 2);
    /// assert_eq!(snapshot.dealer_cards.len(), 2);
    /// ```
    pub fn start_round(&mut self, bet: usize) -> Result<Snapshot, BetError> {
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }

        if !self.state.accepts_bets() {
            return Err(BetError::InvalidState);
        }

        if bet > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= bet;
        self.current_bet = bet;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.message.clear();
        self.last_result = None;

        self.deal_opening_cards();
        self.state = GameState::Playing;

        tracing::debug!(
            bet,
            balance = self.balance,
            player_value = self.player_hand.value(),
            "round dealt"
        );

        // A natural settles at once.
        if self.player_hand.value() == 21 {
            self.settle();
        }

        Ok(self.snapshot())
    }
}
