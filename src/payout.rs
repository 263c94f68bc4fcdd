//! Settlement of a bet slip against the final hands.

use alloc::vec::Vec;

use crate::bet::{BetSlip, BetType};
use crate::hand::{Hand, Side};
use crate::options::RoundingMode;
use crate::result::{BetPayout, Outcome, Settlement};

/// Return multipliers (stake included), per bet.
mod multipliers {
    /// Player win, 1:1.
    pub const EVEN: u64 = 2;
    /// Tie, 8:1.
    pub const TIE: u64 = 9;
    /// Player or Banker pair, 11:1.
    pub const PAIR: u64 = 12;
    /// Perfect pair, 25:1.
    pub const PERFECT_PAIR: u64 = 26;
    /// Either pair, 5:1.
    pub const EITHER_PAIR: u64 = 6;
    /// Bonus win on a 9, 30:1.
    pub const BONUS_NINE: u64 = 31;
    /// Bonus win on an 8, 10:1.
    pub const BONUS_EIGHT: u64 = 11;
    /// Bonus win by four points or more, 1:1.
    pub const BONUS_MARGIN: u64 = 2;
    /// Banker win with commission: 1.95x.
    pub const COMMISSION: (u64, u64) = (195, 100);
    /// No-commission Banker win on a six: 1.5x.
    pub const BANKER_SIX: (u64, u64) = (3, 2);
}

/// Everything about the final hands that bets are judged on.
#[derive(Debug, Clone, Copy)]
struct Board {
    outcome: Outcome,
    player_value: u8,
    banker_value: u8,
    player_pair: bool,
    banker_pair: bool,
    player_perfect: bool,
    banker_perfect: bool,
}

impl Board {
    fn read(player: &Hand, banker: &Hand) -> Self {
        let player_value = player.value();
        let banker_value = banker.value();
        Self {
            outcome: Outcome::from_values(player_value, banker_value),
            player_value,
            banker_value,
            player_pair: player.is_pair(),
            banker_pair: banker.is_pair(),
            player_perfect: player.is_perfect_pair(),
            banker_perfect: banker.is_perfect_pair(),
        }
    }

    const fn side_values(&self, side: Side) -> (u8, u8) {
        match side {
            Side::Player => (self.player_value, self.banker_value),
            Side::Banker => (self.banker_value, self.player_value),
        }
    }
}

/// Return multiplier for a side bonus, or `None` if it loses.
///
/// The bonus pays only on a strict win with a value of 8 or 9 or a margin of
/// four or more.
#[must_use]
pub const fn bonus_multiplier(own_value: u8, other_value: u8) -> Option<u64> {
    if own_value <= other_value {
        return None;
    }
    let margin = own_value - other_value;
    if own_value < 8 && margin < 4 {
        return None;
    }
    Some(match own_value {
        9 => multipliers::BONUS_NINE,
        8 => multipliers::BONUS_EIGHT,
        _ if margin >= 4 => multipliers::BONUS_MARGIN,
        _ => 1,
    })
}

fn returned(
    bet: BetType,
    stake: u64,
    board: &Board,
    no_commission: bool,
    rounding: RoundingMode,
) -> u64 {
    let times = |multiplier: u64| stake.saturating_mul(multiplier);
    let outcome = board.outcome;

    match bet {
        BetType::Player => match outcome {
            Outcome::Player => times(multipliers::EVEN),
            Outcome::Tie => stake,
            Outcome::Banker => 0,
        },
        BetType::Banker => match outcome {
            Outcome::Banker if !no_commission => {
                let (num, den) = multipliers::COMMISSION;
                rounding.scale(stake, num, den)
            }
            Outcome::Banker if board.banker_value == 6 => {
                let (num, den) = multipliers::BANKER_SIX;
                rounding.scale(stake, num, den)
            }
            Outcome::Banker => times(multipliers::EVEN),
            Outcome::Tie => stake,
            Outcome::Player => 0,
        },
        BetType::Tie if outcome == Outcome::Tie => times(multipliers::TIE),
        BetType::PlayerPair if board.player_pair => times(multipliers::PAIR),
        BetType::BankerPair if board.banker_pair => times(multipliers::PAIR),
        BetType::PerfectPair if board.player_perfect || board.banker_perfect => {
            times(multipliers::PERFECT_PAIR)
        }
        BetType::EitherPair if board.player_pair || board.banker_pair => {
            times(multipliers::EITHER_PAIR)
        }
        BetType::PlayerBonus | BetType::BankerBonus => {
            let side = if bet == BetType::PlayerBonus {
                Side::Player
            } else {
                Side::Banker
            };
            let (own, other) = board.side_values(side);
            bonus_multiplier(own, other).map_or(0, times)
        }
        _ => 0,
    }
}

/// Settles every staked bet on `bets` against the final hands.
///
/// Each bet is judged independently and the returns are summed. A bet is
/// listed in `winners` only when it paid; a pushed Player or Banker stake on
/// a tie is returned but not listed. Perfect Pair pays at most once even
/// when both hands qualify.
///
/// ```
/// use bacrs::{BetSlip, BetType, Card, Hand, RoundingMode, Suit, settle};
///
/// let player = Hand::from_cards(&[Card::new(Suit::Hearts, 4), Card::new(Suit::Clubs, 4)]);
/// let banker = Hand::from_cards(&[Card::new(Suit::Spades, 13), Card::new(Suit::Clubs, 6)]);
/// let bets: BetSlip = [(BetType::Player, 100), (BetType::PlayerBonus, 100)]
///     .into_iter()
///     .collect();
///
/// let settlement = settle(&player, &banker, &bets, false, RoundingMode::Down);
/// assert_eq!(settlement.winnings, 1300);
/// assert_eq!(settlement.winners, vec![BetType::Player, BetType::PlayerBonus]);
/// ```
#[must_use]
pub fn settle(
    player: &Hand,
    banker: &Hand,
    bets: &BetSlip,
    no_commission: bool,
    rounding: RoundingMode,
) -> Settlement {
    let board = Board::read(player, banker);

    let mut winnings: u64 = 0;
    let mut winners = Vec::new();
    let mut payouts = Vec::new();

    for (bet, stake) in bets.iter() {
        let amount = returned(bet, stake, &board, no_commission, rounding);
        winnings = winnings.saturating_add(amount);

        let pushed =
            board.outcome == Outcome::Tie && matches!(bet, BetType::Player | BetType::Banker);
        if amount > 0 && !pushed {
            winners.push(bet);
        }

        payouts.push(BetPayout {
            bet,
            stake,
            returned: amount,
        });
    }

    Settlement {
        outcome: board.outcome,
        player_value: board.player_value,
        banker_value: board.banker_value,
        winnings,
        winners,
        payouts,
    }
}
