use crate::error::ActionError;
use crate::snapshot::Snapshot;

use super::{Game, GameState};

impl Game {
    const fn ensure_playing(&self) -> Result<(), ActionError> {
        match self.state {
            GameState::Playing => Ok(()),
            GameState::Betting | GameState::DealerTurn | GameState::Finished => {
                Err(ActionError::InvalidState)
            }
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a loss. Reaching exactly 21 does not
    /// end the turn; the player still has to stand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a player action.
    pub fn hit(&mut self) -> Result<Snapshot, ActionError> {
        self.ensure_playing()?;

        let card = self.shoe.draw();
        self.player_hand.add_card(card);

        let value = self.player_hand.value();
        tracing::debug!(%card, value, "player hit");

        if self.player_hand.is_bust() {
            self.settle();
        }

        Ok(self.snapshot())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a player action.
    pub fn stand(&mut self) -> Result<Snapshot, ActionError> {
        self.ensure_playing()?;

        self.state = GameState::DealerTurn;
        self.dealer_play();
        self.settle();

        Ok(self.snapshot())
    }
}
