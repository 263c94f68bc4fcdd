//! Bet types and the per-round bet slip.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Chip denominations offered by the table.
pub const CHIP_VALUES: [u64; 10] = [50, 100, 250, 500, 1000, 2500, 5000, 10000, 25000, 50000];

/// The nine wagers available on every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BetType {
    /// Player hand wins. Pays 1:1.
    Player,
    /// Banker hand wins. Pays 0.95:1, or 1:1 (0.5:1 on a six) without commission.
    Banker,
    /// Both hands finish level. Pays 8:1.
    Tie,
    /// Player's first two cards are a pair. Pays 11:1.
    PlayerPair,
    /// Banker's first two cards are a pair. Pays 11:1.
    BankerPair,
    /// Either hand opens with a suited pair. Pays 25:1.
    PerfectPair,
    /// Either hand opens with a pair. Pays 5:1.
    EitherPair,
    /// Player wins with 8 or 9, or by four points or more.
    PlayerBonus,
    /// Banker wins with 8 or 9, or by four points or more.
    BankerBonus,
}

impl BetType {
    /// Every bet type, in settlement order.
    pub const ALL: [Self; 9] = [
        Self::Player,
        Self::Banker,
        Self::Tie,
        Self::PlayerPair,
        Self::BankerPair,
        Self::PerfectPair,
        Self::EitherPair,
        Self::PlayerBonus,
        Self::BankerBonus,
    ];

    /// Stable camelCase key for this bet.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Banker => "banker",
            Self::Tie => "tie",
            Self::PlayerPair => "playerPair",
            Self::BankerPair => "bankerPair",
            Self::PerfectPair => "perfectPair",
            Self::EitherPair => "eitherPair",
            Self::PlayerBonus => "playerBonus",
            Self::BankerBonus => "bankerBonus",
        }
    }

    /// Looks up a bet type by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bet| bet.name() == name)
    }

    /// Payout odds as shown on the layout.
    #[must_use]
    pub const fn payout_label(self, no_commission: bool) -> &'static str {
        match self {
            Self::Player => "1:1",
            Self::Banker if no_commission => "1:1 (6 pays 0.5:1)",
            Self::Banker => "0.95:1",
            Self::Tie => "8:1",
            Self::PlayerPair | Self::BankerPair => "11:1",
            Self::PerfectPair => "25:1",
            Self::EitherPair => "5:1",
            Self::PlayerBonus | Self::BankerBonus => "up to 30:1",
        }
    }
}

/// Stakes placed on each bet type for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetSlip {
    stakes: HashMap<BetType, u64>,
}

impl BetSlip {
    /// Creates an empty slip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the stake on `bet`.
    pub fn add(&mut self, bet: BetType, amount: u64) {
        if amount == 0 {
            return;
        }
        let stake = self.stakes.entry(bet).or_insert(0);
        *stake = stake.saturating_add(amount);
    }

    /// Returns the stake on `bet` (zero if none).
    #[must_use]
    pub fn stake(&self, bet: BetType) -> u64 {
        self.stakes.get(&bet).copied().unwrap_or(0)
    }

    /// Sum of all stakes.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.stakes.values().fold(0, |acc, &s| acc.saturating_add(s))
    }

    /// Returns whether nothing is staked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates over non-zero stakes in [`BetType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (BetType, u64)> + '_ {
        BetType::ALL
            .into_iter()
            .map(|bet| (bet, self.stake(bet)))
            .filter(|&(_, stake)| stake > 0)
    }

    /// Removes every stake.
    pub fn clear(&mut self) {
        self.stakes.clear();
    }
}

impl FromIterator<(BetType, u64)> for BetSlip {
    fn from_iter<I: IntoIterator<Item = (BetType, u64)>>(iter: I) -> Self {
        let mut slip = Self::new();
        for (bet, amount) in iter {
            slip.add(bet, amount);
        }
        slip
    }
}
