use alloc::string::ToString;

use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

/// The dealer draws below this total and stands on anything at or above it,
/// soft totals included.
const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Dealer plays their hand: draws until reaching 17 or higher.
    pub(super) fn dealer_play(&mut self) {
        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.shoe.draw();
            self.dealer_hand.add_card(card);
            tracing::debug!(%card, value = self.dealer_hand.value(), "dealer draws");
        }
    }

    /// Decides the round from the current hands.
    ///
    /// A player bust is checked first, so it loses even against a busted
    /// dealer.
    fn decide(&self) -> RoundOutcome {
        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        if self.player_hand.is_bust() {
            RoundOutcome::PlayerBust
        } else if self.dealer_hand.is_bust() {
            RoundOutcome::DealerBust
        } else if self.player_hand.is_blackjack() {
            RoundOutcome::Blackjack
        } else if player_value > dealer_value {
            RoundOutcome::Win
        } else if player_value == dealer_value {
            RoundOutcome::Push
        } else {
            RoundOutcome::Lose
        }
    }

    /// Settles the round: credits the payout, records the message and result,
    /// and finishes the round.
    pub(super) fn settle(&mut self) {
        let outcome = self.decide();
        let result = RoundResult::new(
            outcome,
            self.current_bet,
            self.player_hand.value(),
            self.dealer_hand.value(),
        );

        self.balance = self.balance.saturating_add(result.payout);
        self.message = outcome.message().to_string();
        self.state = GameState::Finished;
        self.last_result = Some(result);

        tracing::info!(
            ?outcome,
            bet = result.bet,
            payout = result.payout,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            balance = self.balance,
            "round settled"
        );
    }
}
