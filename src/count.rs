//! High-Low card counting.

use crate::card::{Card, DECK_SIZE, Rank};
use crate::money::round_hundredths;
use crate::options::RoundingMode;

/// High-Low tag of a rank: +1 for 2 through 6, -1 for tens and aces, 0 otherwise.
#[must_use]
pub const fn hi_lo_value(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Running High-Low count over every card seen since the last shuffle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningCount(i32);

impl RunningCount {
    /// Creates a count of zero.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds a seen card to the count.
    pub const fn record(&mut self, card: &Card) {
        self.0 += hi_lo_value(card.rank);
    }

    /// Resets the count after a reshuffle.
    pub const fn reset(&mut self) {
        self.0 = 0;
    }

    /// Returns the running count.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Normalizes the running count by the decks left in the shoe, rounded to
    /// two decimal places. Returns 0 for an empty shoe.
    #[must_use]
    pub fn true_count(&self, remaining_cards: usize) -> f64 {
        if remaining_cards == 0 {
            return 0.0;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining_decks = remaining_cards as f64 / DECK_SIZE as f64;
        round_hundredths(f64::from(self.0) / remaining_decks, RoundingMode::Nearest)
    }
}
