//! Round result types for settlement.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How a round was decided.
///
/// Variants are listed in the order settlement checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Player went over 21. Checked before the dealer's total.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player holds a natural.
    Blackjack,
    /// Player total beats the dealer total.
    Win,
    /// Totals are equal; the stake is returned.
    Push,
    /// Dealer total beats the player total.
    Lose,
}

impl RoundOutcome {
    /// Returns the amount credited back to the balance for `bet`.
    ///
    /// The stake was deducted when the round started, so a win credits twice
    /// the bet and a push credits the bet alone.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::DealerBust | Self::Blackjack | Self::Win => bet.saturating_mul(2),
            Self::Push => bet,
            Self::PlayerBust | Self::Lose => 0,
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::Blackjack | Self::Win)
    }

    /// Returns the human-readable outcome message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player busts! Dealer wins",
            Self::DealerBust => "Dealer busts! Player wins!",
            Self::Blackjack => "Blackjack! Player wins!",
            Self::Win => "Player wins!",
            Self::Push => "Push",
            Self::Lose => "Dealer wins",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// The stake for the round.
    pub bet: usize,
    /// Amount credited to the balance at settlement.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Builds a result, deriving the payout and net from `outcome` and `bet`.
    ///
    /// The net saturates at the bounds of `isize` for stakes too large to
    /// represent.
    #[must_use]
    pub fn new(outcome: RoundOutcome, bet: usize, player_value: u8, dealer_value: u8) -> Self {
        let payout = outcome.payout(bet);
        let net = if payout >= bet {
            isize::try_from(payout - bet).unwrap_or(isize::MAX)
        } else {
            isize::try_from(bet - payout).map_or(isize::MIN, |loss| -loss)
        };
        Self {
            outcome,
            bet,
            payout,
            net,
            player_value,
            dealer_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_follows_the_outcome() {
        assert_eq!(RoundResult::new(RoundOutcome::Win, 10, 20, 18).net, 10);
        assert_eq!(RoundResult::new(RoundOutcome::Push, 10, 18, 18).net, 0);
        assert_eq!(RoundResult::new(RoundOutcome::Lose, 10, 17, 19).net, -10);
    }

    #[test]
    fn net_handles_huge_stakes() {
        let bet = 1usize << (usize::BITS - 2);
        let win = RoundResult::new(RoundOutcome::Win, bet, 19, 17);
        assert_eq!(win.payout, bet * 2);
        assert_eq!(win.net, isize::try_from(bet).unwrap());

        let loss = RoundResult::new(RoundOutcome::Lose, usize::MAX, 17, 19);
        assert_eq!(loss.net, isize::MIN);

        let capped = RoundResult::new(RoundOutcome::DealerBust, usize::MAX, 12, 26);
        assert_eq!(capped.payout, usize::MAX);
        assert_eq!(capped.net, 0);
    }
}
