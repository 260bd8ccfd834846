//! Hands and the seats that pair them with a bet.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.primary_value());
    }

    // Softness is judged on the unadjusted total: every ace still at 11.
    let is_soft = aces > 0 && value <= 21;

    // Soften aces one at a time until the hand stops busting.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, is_soft)
}

/// An ordered sequence of cards belonging to the dealer or one player seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, which is the dealer's face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the best value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// When no assignment avoids busting, the minimal total is returned.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft: it holds an ace and counting every
    /// ace as 11 does not bust. A hand that only stays under 22 by counting
    /// some aces as 1, such as A-5-A, is hard.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a blackjack (two cards totalling 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is two cards of equal rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// A player hand together with the amount wagered on it.
///
/// Split appends a whole seat, so a hand can never lose track of its bet.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    /// Cards held by the seat.
    pub hand: Hand,
    /// Amount wagered on the hand.
    pub bet: f64,
}

impl Seat {
    pub(crate) const fn new(hand: Hand, bet: f64) -> Self {
        Self { hand, bet }
    }
}
