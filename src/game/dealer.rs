use alloc::vec::Vec;
use rand::Rng;

use crate::card::Card;
use crate::error::DealerError;
use crate::hand::Hand;
use crate::money::round_hundredths;
use crate::options::{DealerPace, RoundingMode};
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    pub(super) fn begin_dealer_turn(&mut self) {
        self.state = GameState::DealerTurn;
        if self.options.dealer_pace == DealerPace::Instant {
            self.play_out_dealer();
        }
    }

    /// Returns whether the dealer must draw.
    ///
    /// The dealer hits below 17 and, unless `stand_on_soft_17` is set, on soft 17.
    fn dealer_must_hit(&self) -> bool {
        let value = self.dealer.value();
        value < 17 || (value == 17 && self.dealer.is_soft() && !self.options.stand_on_soft_17)
    }

    /// Draws one dealer card, or settles the round once the dealer stands.
    fn dealer_draw_or_settle(&mut self) -> Option<Card> {
        if self.dealer_must_hit() {
            let card = self.draw();
            self.dealer.add_card(card);
            Some(card)
        } else {
            self.settle();
            None
        }
    }

    fn play_out_dealer(&mut self) -> Vec<Card> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_draw_or_settle() {
            drawn_cards.push(card);
        }
        drawn_cards
    }

    /// Advances the dealer's turn by one card.
    ///
    /// Returns the card drawn, or `None` once the dealer stands, at which
    /// point the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn state.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }
        Ok(self.dealer_draw_or_settle())
    }

    /// Plays out the dealer's hand and settles the round.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }
        Ok(self.play_out_dealer())
    }

    fn hand_outcome(&self, hand: &Hand, bet: f64) -> (HandOutcome, f64) {
        let player_value = hand.value();
        let dealer_value = self.dealer.value();

        if hand.is_blackjack() {
            if self.dealer.is_blackjack() {
                (HandOutcome::Push, bet)
            } else {
                let winnings = round_hundredths(
                    bet * self.options.blackjack_pays,
                    self.options.rounding_blackjack,
                );
                (
                    HandOutcome::Blackjack,
                    round_hundredths(bet + winnings, RoundingMode::Nearest),
                )
            }
        } else if hand.is_bust() {
            (HandOutcome::Bust, 0.0)
        } else if self.dealer.is_bust() || player_value > dealer_value {
            (HandOutcome::Win, bet * 2.0)
        } else if player_value == dealer_value {
            (HandOutcome::Push, bet)
        } else {
            (HandOutcome::Lose, 0.0)
        }
    }

    /// Compares every hand with the dealer, pays out, and ends the round.
    ///
    /// Only reachable from a state transition, so a round is settled once.
    pub(super) fn settle(&mut self) {
        let dealer_value = self.dealer.value();

        let hands: Vec<HandResult> = self
            .seats
            .iter()
            .enumerate()
            .map(|(hand_index, seat)| {
                let (outcome, payout) = self.hand_outcome(&seat.hand, seat.bet);
                HandResult {
                    hand_index,
                    outcome,
                    bet: seat.bet,
                    payout,
                    player_value: seat.hand.value(),
                    dealer_value,
                }
            })
            .collect();

        let total_bet: f64 = hands.iter().map(|hand| hand.bet).sum();
        let total_payout = round_hundredths(
            hands.iter().map(|hand| hand.payout).sum(),
            RoundingMode::Nearest,
        );
        self.credit(total_payout);

        for hand in &hands {
            log::debug!("{hand}");
        }

        self.result = Some(RoundResult {
            hands,
            dealer_value,
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack: self.dealer.is_blackjack(),
            total_payout,
            net: round_hundredths(total_payout - total_bet, RoundingMode::Nearest),
        });
        self.current_bet = 0.0;
        self.state = GameState::RoundOver;
        log::debug!("round settled, bankroll {:.2}", self.bankroll);
    }
}
