//! Game state types.

use serde::{Deserialize, Serialize};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    Betting,
    /// Waiting for the player to hit or stand.
    Playing,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled.
    Finished,
}

impl GameState {
    /// Returns whether a new round may start from this state.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        match self {
            Self::Betting | Self::Finished => true,
            Self::Playing | Self::DealerTurn => false,
        }
    }

    /// Returns whether the dealer's hole card is face up in this state.
    #[must_use]
    pub const fn reveals_dealer(self) -> bool {
        match self {
            Self::DealerTurn | Self::Finished => true,
            Self::Betting | Self::Playing => false,
        }
    }
}
