//! The multi-deck shoe cards are drawn from.

extern crate alloc;

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// A shuffled stack of cards built from one or more standard decks.
///
/// The random source is injected so shuffles can be reproduced. Use
/// [`Shoe::seeded`] for the default `ChaCha8` generator.
#[derive(Debug, Clone)]
pub struct Shoe<R = ChaCha8Rng> {
    /// Undrawn cards; the next card is the last element.
    cards: Vec<Card>,
    decks: u8,
    rng: R,
}

impl Shoe<ChaCha8Rng> {
    /// Creates a shuffled shoe from a seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::Shoe;
    ///
    /// let shoe = Shoe::seeded(6, 42);
    /// assert_eq!(shoe.remaining(), 312);
    /// ```
    #[must_use]
    pub fn seeded(decks: u8, seed: u64) -> Self {
        Self::new(decks, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shoe<R> {
    /// Creates a shuffled shoe of `decks` full decks. Zero decks is treated as one.
    #[must_use]
    pub fn new(decks: u8, rng: R) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            decks: decks.max(1),
            rng,
        };
        shoe.shuffle();
        shoe
    }

    /// Creates a shoe whose next draws are exactly `draws`, first element
    /// first. Once they run out the shoe reshuffles as a full `decks` shoe.
    #[must_use]
    pub fn stacked(decks: u8, draws: &[Card], rng: R) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks: decks.max(1),
            rng,
        }
    }

    /// Replaces the contents with a freshly shuffled set of full decks.
    pub fn shuffle(&mut self) {
        let capacity = self.capacity();
        self.cards.clear();
        self.cards.reserve(capacity);

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }

        self.cards.shuffle(&mut self.rng);
        log::debug!("shuffled a {}-deck shoe", self.decks);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }
}

impl<R> Shoe<R> {
    /// Returns the next card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the size of a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }
}
