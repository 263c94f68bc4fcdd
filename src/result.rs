//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::bet::BetType;
use crate::hand::Side;

/// Which side won a round, or a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player has the higher value.
    Player,
    /// Banker has the higher value.
    Banker,
    /// Both values are equal.
    Tie,
}

impl Outcome {
    /// Compares final hand values.
    #[must_use]
    pub const fn from_values(player_value: u8, banker_value: u8) -> Self {
        if player_value > banker_value {
            Self::Player
        } else if banker_value > player_value {
            Self::Banker
        } else {
            Self::Tie
        }
    }

    /// The winning side, or `None` for a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Player => Some(Side::Player),
            Self::Banker => Some(Side::Banker),
            Self::Tie => None,
        }
    }
}

/// Settlement of one staked bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetPayout {
    /// The bet type.
    pub bet: BetType,
    /// Amount staked.
    pub stake: u64,
    /// Amount handed back (stake plus profit, the stake alone on a push, 0 on a loss).
    pub returned: u64,
}

/// Hand-level settlement, independent of any balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Round outcome.
    pub outcome: Outcome,
    /// Player's final value.
    pub player_value: u8,
    /// Banker's final value.
    pub banker_value: u8,
    /// Total amount returned across all bets.
    pub winnings: u64,
    /// Bets that paid, in [`BetType::ALL`] order. Pushes are not listed.
    pub winners: Vec<BetType>,
    /// One entry per staked bet.
    pub payouts: Vec<BetPayout>,
}

/// Result of a completed round at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Settlement of the bet slip against the final hands.
    pub settlement: Settlement,
    /// Whether either side opened with a natural.
    pub natural: bool,
    /// Total staked this round.
    pub staked: u64,
    /// Net result (positive = profit, negative = loss).
    pub net: i64,
    /// Balance after the winnings were credited.
    pub balance: u64,
    /// Whether the balance was refilled after going broke.
    pub refilled: bool,
}
