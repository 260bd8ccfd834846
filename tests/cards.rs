//! Card, hand, shoe and count tests.

#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use bjcount::{Card, DECK_SIZE, Hand, Rank, RunningCount, Shoe, ShoeError, Suit, hi_lo_value};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(Card::new(Suit::Clubs, rank));
    }
    hand
}

#[test]
fn card_values_follow_rank() {
    assert_eq!(Rank::Ace.primary_value(), 11);
    assert_eq!(Rank::Ace.secondary_value(), 1);
    assert_eq!(Rank::King.primary_value(), 10);
    assert_eq!(Rank::Queen.secondary_value(), 10);
    assert_eq!(Rank::Seven.primary_value(), 7);
    assert_eq!(Rank::Seven.secondary_value(), 7);

    let hearts = Card::new(Suit::Hearts, Rank::Jack);
    let spades = Card::new(Suit::Spades, Rank::Jack);
    assert_eq!(hearts.primary_value(), spades.primary_value());
}

#[test]
fn card_display() {
    assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
}

#[test]
fn hand_softens_aces_to_avoid_busting() {
    let two_aces = hand_of(&[Rank::Ace, Rank::Ace]);
    assert_eq!(two_aces.value(), 12);
    assert!(!two_aces.is_soft());

    let ace_ace_nine = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(ace_ace_nine.value(), 21);
    assert!(!ace_ace_nine.is_soft());

    let hard_16 = hand_of(&[Rank::Ace, Rank::King, Rank::Five]);
    assert_eq!(hard_16.value(), 16);
    assert!(!hard_16.is_soft());
    assert!(!hard_16.is_bust());

    let four_aces = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
    assert_eq!(four_aces.value(), 14);
}

#[test]
fn soft_only_when_every_ace_counts_eleven() {
    let soft_17 = hand_of(&[Rank::Ace, Rank::Six]);
    assert_eq!(soft_17.value(), 17);
    assert!(soft_17.is_soft());

    let soft_18 = hand_of(&[Rank::Ace, Rank::Two, Rank::Five]);
    assert_eq!(soft_18.value(), 18);
    assert!(soft_18.is_soft());

    let ace_five_ace = hand_of(&[Rank::Ace, Rank::Five, Rank::Ace]);
    assert_eq!(ace_five_ace.value(), 17);
    assert!(!ace_five_ace.is_soft());

    assert!(!hand_of(&[Rank::King, Rank::Seven]).is_soft());
}

#[test]
fn bust_hand_reports_minimal_total() {
    let bust = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
    assert_eq!(bust.value(), 25);
    assert!(bust.is_bust());

    let bust_with_ace = hand_of(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]);
    assert_eq!(bust_with_ace.value(), 26);
    assert!(!bust_with_ace.is_soft());
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    let natural = hand_of(&[Rank::Ace, Rank::King]);
    assert!(natural.is_blackjack());
    assert!(natural.is_soft());

    let three_card_21 = hand_of(&[Rank::Ace, Rank::Five, Rank::Five]);
    assert_eq!(three_card_21.value(), 21);
    assert!(!three_card_21.is_blackjack());
}

#[test]
fn pairs_match_on_rank() {
    assert!(hand_of(&[Rank::Eight, Rank::Eight]).is_pair());
    assert!(!hand_of(&[Rank::King, Rank::Queen]).is_pair());
    assert!(!hand_of(&[Rank::Eight, Rank::Eight, Rank::Two]).is_pair());
    assert_eq!(
        hand_of(&[Rank::Nine, Rank::Four]).up_card().map(|c| c.rank),
        Some(Rank::Nine)
    );
}

#[test]
fn fresh_shoe_holds_every_card_once_per_deck() {
    let mut shoe = Shoe::seeded(6, 9);
    assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
    assert_eq!(shoe.capacity(), 312);

    let mut seen: HashMap<Card, usize> = HashMap::new();
    while let Ok(card) = shoe.draw() {
        *seen.entry(card).or_default() += 1;
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(seen.values().all(|&n| n == 6));
}

#[test]
fn draw_removes_one_card_at_a_time() {
    let mut shoe = Shoe::seeded(1, 2);
    for expected in (0..DECK_SIZE).rev() {
        shoe.draw().unwrap();
        assert_eq!(shoe.remaining(), expected);
    }

    assert!(shoe.is_empty());
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::Empty);
}

#[test]
fn shuffle_restores_a_full_shoe() {
    let mut shoe = Shoe::seeded(2, 5);
    for _ in 0..30 {
        shoe.draw().unwrap();
    }

    shoe.shuffle();
    assert_eq!(shoe.remaining(), 104);
}

#[test]
fn zero_decks_builds_a_single_deck() {
    let shoe = Shoe::seeded(0, 1);
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.remaining(), DECK_SIZE);
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::seeded(6, 77);
    let mut b = Shoe::new(6, ChaCha8Rng::seed_from_u64(77));
    let mut c = Shoe::seeded(6, 78);

    let a_cards: Vec<Card> = (0..20).map(|_| a.draw().unwrap()).collect();
    let b_cards: Vec<Card> = (0..20).map(|_| b.draw().unwrap()).collect();
    let c_cards: Vec<Card> = (0..20).map(|_| c.draw().unwrap()).collect();

    assert_eq!(a_cards, b_cards);
    assert_ne!(a_cards, c_cards);
}

#[test]
fn stacked_shoe_draws_in_order() {
    let draws = [
        Card::new(Suit::Hearts, Rank::Two),
        Card::new(Suit::Spades, Rank::King),
    ];
    let mut shoe = Shoe::stacked(6, &draws, ChaCha8Rng::seed_from_u64(0));

    assert_eq!(shoe.remaining(), 2);
    assert_eq!(shoe.peek(), Some(&draws[0]));
    assert_eq!(shoe.draw(), Ok(draws[0]));
    assert_eq!(shoe.draw(), Ok(draws[1]));
    assert_eq!(shoe.draw(), Err(ShoeError::Empty));
}

#[test]
fn hi_lo_tags() {
    for rank in [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
        assert_eq!(hi_lo_value(rank), 1);
    }
    for rank in [Rank::Seven, Rank::Eight, Rank::Nine] {
        assert_eq!(hi_lo_value(rank), 0);
    }
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
        assert_eq!(hi_lo_value(rank), -1);
    }
}

#[test]
fn running_count_over_two_king_seven_is_zero() {
    let mut count = RunningCount::new();
    count.record(&Card::new(Suit::Hearts, Rank::Two));
    assert_eq!(count.value(), 1);
    count.record(&Card::new(Suit::Hearts, Rank::King));
    assert_eq!(count.value(), 0);
    count.record(&Card::new(Suit::Hearts, Rank::Seven));
    assert_eq!(count.value(), 0);
}

#[test]
fn true_count_divides_by_decks_remaining() {
    let mut count = RunningCount::new();
    for _ in 0..3 {
        count.record(&Card::new(Suit::Diamonds, Rank::Five));
    }
    assert_eq!(count.true_count(156), 1.0);
    assert_eq!(count.true_count(0), 0.0);

    count.reset();
    for _ in 0..2 {
        count.record(&Card::new(Suit::Diamonds, Rank::Ace));
    }
    // -2 / (100 / 52) = -1.04
    assert_eq!(count.true_count(100), -1.04);
}

#[test]
fn true_count_rounds_halves_to_even() {
    let mut count = RunningCount::new();
    count.record(&Card::new(Suit::Clubs, Rank::Three));
    // 1 / 8 decks = 0.125
    assert_eq!(count.true_count(8 * DECK_SIZE), 0.12);

    for _ in 0..2 {
        count.record(&Card::new(Suit::Clubs, Rank::Three));
    }
    // 3 / 8 decks = 0.375
    assert_eq!(count.true_count(8 * DECK_SIZE), 0.38);

    count.reset();
    count.record(&Card::new(Suit::Clubs, Rank::King));
    assert_eq!(count.true_count(8 * DECK_SIZE), -0.12);
}
