use rand::Rng;

use crate::error::BetError;
use crate::money::round_hundredths;
use crate::options::RoundingMode;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    /// Places the opening bet and deals the initial cards.
    ///
    /// The amount is rounded to cents. If the player is dealt a blackjack the
    /// round settles immediately; otherwise play starts on the first hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet, the amount is not
    /// positive, or the amount exceeds the bankroll. Nothing changes on error.
    pub fn place_bet(&mut self, amount: f64) -> Result<(), BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        if amount.is_nan() || amount <= 0.0 {
            return Err(BetError::NotPositive);
        }

        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        let bet = round_hundredths(amount, RoundingMode::Nearest);
        if bet <= 0.0 {
            return Err(BetError::NotPositive);
        }

        self.debit(bet);
        self.current_bet = bet;
        self.seats[0].bet = bet;
        log::debug!("bet {bet:.2}, bankroll {:.2}", self.bankroll);

        self.deal();
        Ok(())
    }

    /// Deals player, dealer, player, dealer.
    fn deal(&mut self) {
        for _ in 0..2 {
            let card = self.draw();
            self.seats[0].hand.add_card(card);

            let card = self.draw();
            self.dealer.add_card(card);
        }

        if self.seats[0].hand.is_blackjack() {
            log::debug!("player dealt blackjack");
            self.settle();
        } else {
            self.state = GameState::InRound { acting: 0 };
        }
    }
}
