//! Game state types.

/// Where the current round stands.
///
/// Each command on [`Game`](crate::Game) is accepted only from the states it
/// is valid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Waiting for the opening bet.
    AwaitingBet,
    /// Waiting for player actions on the hand at `acting`.
    InRound {
        /// Index of the seat being played.
        acting: usize,
    },
    /// Every player hand is finished; the dealer draws next.
    ///
    /// Only observable with [`DealerPace::Stepped`](crate::DealerPace::Stepped).
    DealerTurn,
    /// Bets are settled and the round result is available.
    RoundOver,
}

impl GameState {
    /// Returns the index of the seat being played, if any.
    #[must_use]
    pub const fn acting(self) -> Option<usize> {
        match self {
            Self::InRound { acting } => Some(acting),
            _ => None,
        }
    }

    /// Returns whether a round has been dealt and is not yet settled.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InRound { .. } | Self::DealerTurn)
    }
}
