use crate::card::Card;
use crate::error::{AdvanceError, PlayError};
use crate::hand::{Hand, Side};
use crate::payout::settle;
use crate::result::RoundResult;
use crate::rules::{self, DrawStep};

use super::{Phase, RoundEvent, RoundState};

impl RoundState {
    /// Takes the next discrete step of the round.
    ///
    /// The engine keeps no clock: a driver calls this once per step at
    /// whatever pace it likes, and each call reports what happened.
    ///
    /// - `Dealing`: replaces a short shoe, then deals two cards to Player
    ///   and two to Banker.
    /// - `Revealing`: turns over one card, in Player, Banker, Player,
    ///   Banker order.
    /// - `Drawing`: one third-card decision per call, or the settlement
    ///   once no more cards are due.
    ///
    /// # Errors
    ///
    /// Returns [`AdvanceError::InvalidState`] while betting or after
    /// settlement, and [`AdvanceError::ShoeExhausted`] if the shoe runs dry.
    pub fn advance(&self) -> Result<(Self, RoundEvent), AdvanceError> {
        let mut next = self.clone();
        let event = match self.phase {
            Phase::Dealing => next.deal_opening_cards()?,
            Phase::Revealing => next.reveal_next(),
            Phase::Drawing => next.draw_or_settle()?,
            Phase::Betting | Phase::Payout => return Err(AdvanceError::InvalidState),
        };
        Ok((next, event))
    }

    /// Deals, then advances until the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is rejected or a step fails.
    pub fn play_round(&self) -> Result<(Self, RoundResult), PlayError> {
        let mut state = self.deal()?;
        loop {
            let (next, event) = state.advance()?;
            state = next;
            if let RoundEvent::Settled(result) = event {
                return Ok((state, result));
            }
        }
    }

    fn deal_opening_cards(&mut self) -> Result<RoundEvent, AdvanceError> {
        let reshuffled = self.shoe.remaining() < self.options.reshuffle_threshold;
        if reshuffled {
            let left = self.shoe.remaining();
            self.replace_shoe();
            tracing::info!(
                left,
                cards = self.shoe.remaining(),
                "shoe reshuffled before deal"
            );
        }

        for _ in 0..2 {
            let card = self.shoe.deal_one().inspect_err(|_| log_exhausted())?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.shoe.deal_one().inspect_err(|_| log_exhausted())?;
            self.banker.add_card(card);
        }

        self.phase = Phase::Revealing;
        Ok(RoundEvent::Dealt { reshuffled })
    }

    fn reveal_next(&mut self) -> RoundEvent {
        let side = if self.player.revealed() <= self.banker.revealed() {
            Side::Player
        } else {
            Side::Banker
        };
        let count = match side {
            Side::Player => self.player.reveal_next(),
            Side::Banker => self.banker.reveal_next(),
        };

        if self.player.revealed() >= 2 && self.banker.revealed() >= 2 {
            self.phase = Phase::Drawing;
        }
        RoundEvent::Revealed { side, count }
    }

    fn draw_or_settle(&mut self) -> Result<RoundEvent, AdvanceError> {
        let step = rules::next_step(&self.player, &self.banker, self.draw_stage);
        tracing::debug!(
            ?step,
            player = self.player.value(),
            banker = self.banker.value(),
            "third-card decision"
        );

        if step == DrawStep::Settle {
            return Ok(RoundEvent::Settled(self.settle_round()));
        }

        self.draw_stage =
            rules::apply_step(step, &mut self.player, &mut self.banker, &mut self.shoe)
                .inspect_err(|_| log_exhausted())?;

        let event = match step {
            DrawStep::PlayerDraws => RoundEvent::Drew {
                side: Side::Player,
                card: third_card(&self.player)?,
            },
            DrawStep::BankerDraws => RoundEvent::Drew {
                side: Side::Banker,
                card: third_card(&self.banker)?,
            },
            DrawStep::PlayerStands => RoundEvent::Stood { side: Side::Player },
            DrawStep::BankerStands | DrawStep::Settle => {
                RoundEvent::Stood { side: Side::Banker }
            }
        };
        Ok(event)
    }

    fn settle_round(&mut self) -> RoundResult {
        let settlement = settle(
            &self.player,
            &self.banker,
            &self.bets,
            self.no_commission,
            self.options.rounding,
        );
        let natural = self.player.is_natural() || self.banker.is_natural();
        let staked = self.bets.total();

        self.balance = self.balance.saturating_add(settlement.winnings);
        let refilled = self.balance == 0 && self.options.refill_when_broke;
        if refilled {
            self.balance = self.options.starting_balance;
            tracing::info!(balance = self.balance, "balance refilled");
        }

        self.big_road.record(settlement.outcome);
        self.phase = Phase::Payout;

        let net = i64::try_from(settlement.winnings)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(staked).unwrap_or(i64::MAX));

        tracing::info!(
            outcome = ?settlement.outcome,
            player = settlement.player_value,
            banker = settlement.banker_value,
            natural,
            winnings = settlement.winnings,
            winners = settlement.winners.len(),
            balance = self.balance,
            "round settled"
        );

        let result = RoundResult {
            settlement,
            natural,
            staked,
            net,
            balance: self.balance,
            refilled,
        };
        self.last_result = Some(result.clone());
        result
    }
}

fn third_card(hand: &Hand) -> Result<Card, AdvanceError> {
    hand.third_card().copied().ok_or(AdvanceError::InvalidState)
}

fn log_exhausted() {
    tracing::error!("shoe exhausted mid-round");
}
