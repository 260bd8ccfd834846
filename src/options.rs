//! Game configuration options.

/// Conditions under which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any hand.
    #[default]
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    pub(crate) fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => (9..=11).contains(&value),
            Self::None => false,
        }
    }
}

/// When the hand created by a split receives its second card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitDeal {
    /// The new hand is topped up to two cards when play reaches it.
    #[default]
    OnArrival,
    /// Both hands are dealt their second card at the moment of the split.
    Eager,
}

/// How the dealer's turn is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DealerPace {
    /// The dealer plays out inside the action that finished the last hand.
    #[default]
    Instant,
    /// The game stops in [`GameState::DealerTurn`](crate::GameState::DealerTurn)
    /// and the caller draws the dealer's cards one at a time.
    Stepped,
}

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, ties to even.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcount::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_starting_bankroll(500.0)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Bankroll at the start of the session.
    pub starting_bankroll: f64,
    /// Maximum number of player hands, counting those created by splits.
    pub max_hands: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Double down conditions.
    pub double: DoubleOption,
    /// When a split hand receives its second card.
    pub split_deal: SplitDeal,
    /// How the dealer's turn is driven.
    pub dealer_pace: DealerPace,
    /// A new round starts from a fresh shoe when fewer cards than this remain.
    /// 0 disables the check.
    pub reshuffle_threshold: usize,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_bankroll: 1000.0,
            max_hands: 4,
            blackjack_pays: 1.5,
            stand_on_soft_17: false,
            double: DoubleOption::Any,
            split_deal: SplitDeal::OnArrival,
            dealer_pace: DealerPace::Instant,
            reshuffle_threshold: 156,
            rounding_blackjack: RoundingMode::Nearest,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: f64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the maximum number of player hands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{DoubleOption, GameOptions};
    ///
    /// let options = GameOptions::default().with_double(DoubleOption::NineThrough11);
    /// assert_eq!(options.double, DoubleOption::NineThrough11);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets when a split hand receives its second card.
    #[must_use]
    pub const fn with_split_deal(mut self, split_deal: SplitDeal) -> Self {
        self.split_deal = split_deal;
        self
    }

    /// Sets how the dealer's turn is driven.
    #[must_use]
    pub const fn with_dealer_pace(mut self, pace: DealerPace) -> Self {
        self.dealer_pace = pace;
        self
    }

    /// Sets the low-card threshold that forces a fresh shoe between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(120);
    /// assert_eq!(options.reshuffle_threshold, 120);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
