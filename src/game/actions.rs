use rand::Rng;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, Seat};
use crate::options::SplitDeal;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    fn ensure_in_round(&self) -> Result<usize, ActionError> {
        self.state.acting().ok_or(ActionError::InvalidState)
    }

    fn check_split(&self) -> Result<usize, ActionError> {
        let acting = self.ensure_in_round()?;
        let seat = &self.seats[acting];

        if !seat.hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }

        if self.seats.len() >= self.options.max_hands {
            return Err(ActionError::MaxHandsReached);
        }

        if seat.bet > self.bankroll {
            return Err(ActionError::InsufficientFunds);
        }

        Ok(acting)
    }

    fn check_double(&self) -> Result<usize, ActionError> {
        let acting = self.ensure_in_round()?;
        let seat = &self.seats[acting];

        if !self.options.double.allows(seat.hand.value()) {
            return Err(ActionError::CannotDouble);
        }

        if seat.bet > self.bankroll {
            return Err(ActionError::InsufficientFunds);
        }

        Ok(acting)
    }

    /// Returns whether [`split`](Self::split) would be accepted right now.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.check_split().is_ok()
    }

    /// Returns whether [`double_down`](Self::double_down) would be accepted
    /// right now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.check_double().is_ok()
    }

    /// Moves play past the hand at `acting`.
    ///
    /// A split hand still holding a single card is dealt its second card as
    /// play reaches it. After the last hand the dealer takes over.
    fn advance_after_hand(&mut self, acting: usize) {
        let next = acting + 1;
        if next < self.seats.len() {
            if self.seats[next].hand.len() == 1 {
                let card = self.draw();
                self.seats[next].hand.add_card(card);
            }
            self.state = GameState::InRound { acting: next };
        } else {
            self.begin_dealer_turn();
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 or busting finishes the hand and moves play on.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is being played.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let acting = self.ensure_in_round()?;

        let card = self.draw();
        let hand = &mut self.seats[acting].hand;
        hand.add_card(card);

        if hand.value() >= 21 {
            self.advance_after_hand(acting);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is being played.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let acting = self.ensure_in_round()?;
        self.advance_after_hand(acting);
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is being played, the table's double rule
    /// excludes the hand's value, or the bankroll cannot cover the extra bet.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let acting = self.check_double()?;

        let bet = self.seats[acting].bet;
        self.debit(bet);
        self.seats[acting].bet = bet * 2.0;
        log::debug!("doubled hand {acting} to {:.2}", bet * 2.0);

        let card = self.draw();
        self.seats[acting].hand.add_card(card);
        self.advance_after_hand(acting);

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand appended after the others, carrying
    /// a copy of the bet. The current hand is dealt a replacement card; the new
    /// hand receives its second card when play reaches it, or immediately with
    /// [`SplitDeal::Eager`].
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is being played, the hand is not a pair,
    /// the hand limit is reached, or the bankroll cannot cover the extra bet.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let acting = self.check_split()?;

        let moved = self.seats[acting]
            .hand
            .take_split_card()
            .ok_or(ActionError::CannotSplit)?;
        let bet = self.seats[acting].bet;
        self.debit(bet);

        // The moved card is counted again as it starts the new hand.
        self.count.record(&moved);

        let replacement = self.draw();
        self.seats[acting].hand.add_card(replacement);

        let mut hand = Hand::from_cards(&[moved]);
        if self.options.split_deal == SplitDeal::Eager {
            let card = self.draw();
            hand.add_card(card);
        }
        self.seats.push(Seat::new(hand, bet));
        log::debug!("split hand {acting}, now {} hands", self.seats.len());

        Ok(())
    }
}
