//! Game engine and state management.

use alloc::vec;
use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::count::RunningCount;
use crate::error::ReshuffleError;
use crate::hand::{Hand, Seat};
use crate::money::round_hundredths;
use crate::options::{GameOptions, RoundingMode};
use crate::result::{HandResult, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack session.
///
/// The game owns the shoe, the player's seats and bankroll, the dealer's hand
/// and the High-Low count. Use [`GameOptions`] to configure rules such as
/// decks, doubling rules and the reshuffle threshold.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    shoe: Shoe<R>,
    options: GameOptions,
    state: GameState,
    /// Player hands paired with their bets; split appends.
    seats: Vec<Seat>,
    dealer: Hand,
    bankroll: f64,
    /// Opening wager of the round, cleared on settlement.
    current_bet: f64,
    count: RunningCount,
    result: Option<RoundResult>,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.cards_remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game shuffling with the given random source.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        let shoe = Shoe::new(options.decks, rng);
        Self::with_shoe(options, shoe)
    }

    /// Creates a new game drawing from a prepared shoe.
    ///
    /// The shoe is used as-is for the first round, even when it holds fewer
    /// cards than the reshuffle threshold.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe<R>) -> Self {
        let bankroll = round_hundredths(options.starting_bankroll, RoundingMode::Nearest);
        Self {
            shoe,
            options,
            state: GameState::AwaitingBet,
            seats: vec![Seat::default()],
            dealer: Hand::new(),
            bankroll,
            current_bet: 0.0,
            count: RunningCount::new(),
            result: None,
        }
    }

    /// Starts a new round.
    ///
    /// Replenishes the shoe if it has fallen below the reshuffle threshold,
    /// then clears hands, bets and the previous result. Stakes on a round that
    /// was still in progress are forfeited.
    pub fn new_round(&mut self) {
        if self.state.is_in_progress() {
            log::warn!(
                "abandoning an unfinished round, forfeiting {:.2}",
                self.seats.iter().map(|seat| seat.bet).sum::<f64>()
            );
        }

        let threshold = self.options.reshuffle_threshold;
        if threshold > 0 && self.shoe.remaining() < threshold {
            log::debug!(
                "{} cards left, below the threshold of {threshold}",
                self.shoe.remaining()
            );
            self.replenish();
        }

        self.seats = vec![Seat::default()];
        self.dealer = Hand::new();
        self.current_bet = 0.0;
        self.result = None;
        self.state = GameState::AwaitingBet;
        log::debug!("new round, bankroll {:.2}", self.bankroll);
    }

    /// Reshuffles the shoe and resets the count.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state.is_in_progress() {
            return Err(ReshuffleError::InvalidState);
        }
        self.replenish();
        Ok(())
    }

    fn replenish(&mut self) {
        self.shoe.shuffle();
        self.count.reset();
    }

    /// Draws a card and records it in the count.
    ///
    /// An exhausted shoe is replaced first, so a round never runs dry.
    fn draw(&mut self) -> Card {
        if self.shoe.is_empty() {
            log::debug!("shoe exhausted mid-round");
            self.replenish();
        }
        let card = self
            .shoe
            .draw()
            .expect("an exhausted shoe is replenished before drawing");
        self.count.record(&card);
        log::trace!("dealt {card}, running count {}", self.count.value());
        card
    }

    fn debit(&mut self, amount: f64) {
        self.bankroll = round_hundredths(self.bankroll - amount, RoundingMode::Nearest);
    }

    fn credit(&mut self, amount: f64) {
        self.bankroll = round_hundredths(self.bankroll + amount, RoundingMode::Nearest);
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the value of the dealer's hand.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    /// Returns the player's seats in play order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the player's hands in play order.
    #[must_use]
    pub fn hands(&self) -> impl Iterator<Item = &Hand> {
        self.seats.iter().map(|seat| &seat.hand)
    }

    /// Returns the player's hand at `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.seats.get(index).map(|seat| &seat.hand)
    }

    /// Returns the bet on each hand, in play order.
    #[must_use]
    pub fn bets(&self) -> impl Iterator<Item = f64> {
        self.seats.iter().map(|seat| seat.bet)
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn acting_index(&self) -> Option<usize> {
        self.state.acting()
    }

    /// Returns the hand being played.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.acting_index().and_then(|index| self.hand(index))
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Returns the opening bet of the round, or 0 once the round is settled.
    #[must_use]
    pub const fn current_bet(&self) -> f64 {
        self.current_bet
    }

    /// Returns whether the round is settled.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.state == GameState::RoundOver
    }

    /// Returns the settled result of the round.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the per-hand outcomes of the round; empty until it is settled.
    #[must_use]
    pub fn outcomes(&self) -> &[HandResult] {
        match &self.result {
            Some(result) => &result.hands,
            None => &[],
        }
    }

    /// Returns the High-Low running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.count.value()
    }

    /// Returns the running count divided by the decks left in the shoe.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.count.true_count(self.shoe.remaining())
    }
}
