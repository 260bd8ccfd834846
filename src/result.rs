//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player has blackjack and the dealer does not.
    Blackjack,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Push (tie), including blackjack against blackjack.
    Push,
    /// Player busted.
    Bust,
    /// Dealer has the higher value.
    Lose,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: f64,
    /// The amount credited back to the bankroll, stake included.
    pub payout: f64,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

impl HandResult {
    /// Profit or loss on the hand.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.payout - self.bet
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self.hand_index + 1;
        match self.outcome {
            HandOutcome::Blackjack => write!(
                f,
                "Hand {number}: Blackjack! Total winnings: ${:.2}.",
                self.payout
            ),
            HandOutcome::Win => write!(
                f,
                "Hand {number}: You Win! Total winnings: ${:.2}.",
                self.payout
            ),
            HandOutcome::Push => write!(f, "Hand {number}: Tie! Bet refunded."),
            HandOutcome::Bust => write!(f, "Hand {number}: Bust! Lost ${:.2}.", self.bet),
            HandOutcome::Lose => {
                write!(f, "Hand {number}: Dealer Wins! Lost ${:.2}.", self.bet)
            }
        }
    }
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Results for each hand, in seat order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Total credited back to the bankroll.
    pub total_payout: f64,
    /// Net result (positive = profit, negative = loss).
    pub net: f64,
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hand in &self.hands {
            writeln!(f, "{hand}")?;
        }
        Ok(())
    }
}
