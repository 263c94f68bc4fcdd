use crate::bet::BetType;
use crate::error::{BetError, ConfigError, DealError};
use crate::rules::DrawStage;

use super::{Phase, RoundState};

impl RoundState {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.phase == Phase::Betting {
            Ok(())
        } else {
            Err(BetError::InvalidState)
        }
    }

    /// Adds `amount` to the stake on `bet`.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, the amount
    /// is zero, or the slip would exceed the balance.
    pub fn place_bet(&self, bet: BetType, amount: u64) -> Result<Self, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        self.ensure_betting()?;

        let total = self
            .bets
            .total()
            .checked_add(amount)
            .ok_or(BetError::InsufficientBalance)?;
        if total > self.balance {
            tracing::debug!(
                bet = bet.name(),
                amount,
                total,
                balance = self.balance,
                "bet rejected"
            );
            return Err(BetError::InsufficientBalance);
        }

        let mut next = self.clone();
        next.bets.add(bet, amount);
        tracing::debug!(bet = bet.name(), amount, total, "bet placed");
        Ok(next)
    }

    /// Replaces the current slip with the one used on the last deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, no round
    /// has been dealt yet, or the balance cannot cover the repeated slip.
    pub fn rebet(&self) -> Result<Self, BetError> {
        self.ensure_betting()?;
        let previous = self.previous_bets.as_ref().ok_or(BetError::NoPreviousBets)?;
        if previous.total() > self.balance {
            return Err(BetError::InsufficientBalance);
        }

        let mut next = self.clone();
        next.bets = previous.clone();
        tracing::debug!(total = next.bets.total(), "rebet placed");
        Ok(next)
    }

    /// Removes every stake from the slip.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase.
    pub fn clear_bets(&self) -> Result<Self, BetError> {
        self.ensure_betting()?;

        let mut next = self.clone();
        next.bets.clear();
        Ok(next)
    }

    /// Switches Banker payouts between commission and no-commission.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase.
    pub fn set_no_commission(&self, no_commission: bool) -> Result<Self, ConfigError> {
        if self.phase != Phase::Betting {
            return Err(ConfigError::InvalidState);
        }

        let mut next = self.clone();
        next.no_commission = no_commission;
        Ok(next)
    }

    /// Freezes the slip, takes the stakes from the balance, and moves to
    /// the dealing phase.
    ///
    /// The cards themselves come out on the next [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase or nothing
    /// has been staked.
    pub fn deal(&self) -> Result<Self, DealError> {
        if self.phase != Phase::Betting {
            return Err(DealError::InvalidState);
        }
        let staked = self.bets.total();
        if staked == 0 {
            return Err(DealError::NoBetsPlaced);
        }

        let mut next = self.clone();
        next.previous_bets = Some(next.bets.clone());
        next.balance = next.balance.saturating_sub(staked);
        next.player.clear();
        next.banker.clear();
        next.last_result = None;
        next.draw_stage = DrawStage::Player;
        next.phase = Phase::Dealing;

        tracing::info!(staked, balance = next.balance, "bets locked for deal");
        Ok(next)
    }
}
