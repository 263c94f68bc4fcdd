//! Round state and transitions.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bet::BetSlip;
use crate::error::{ReshuffleError, RoundError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::{Outcome, RoundResult};
use crate::road::{BigRoad, DerivedColumn, Prediction};
use crate::rules::DrawStage;
use crate::shoe::Shoe;

mod advance;
mod betting;
pub mod state;

pub use state::{Phase, RoundEvent};

/// Everything a baccarat table knows between two commands.
///
/// Every transition takes `&self` and hands back a new state, leaving the
/// original untouched when it fails. Nothing is shared or global: the shoe,
/// hands, stakes, balance and roads all live here, and the embedded seeded
/// generator makes a run fully reproducible from its seed and command
/// sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    options: TableOptions,
    no_commission: bool,
    balance: u64,
    shoe: Shoe,
    player: Hand,
    banker: Hand,
    bets: BetSlip,
    previous_bets: Option<BetSlip>,
    phase: Phase,
    draw_stage: DrawStage,
    big_road: BigRoad,
    last_result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl RoundState {
    /// Creates a table state with a freshly shuffled shoe.
    ///
    /// The options are [`normalized`](TableOptions::normalized) first.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::{Phase, RoundState, TableOptions};
    ///
    /// let state = RoundState::new(TableOptions::default(), 42);
    /// assert_eq!(state.phase(), Phase::Betting);
    /// assert_eq!(state.balance(), 5000);
    /// assert_eq!(state.cards_remaining(), 416);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let options = options.normalized();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng);

        Self {
            no_commission: options.no_commission,
            balance: options.starting_balance,
            options,
            shoe,
            player: Hand::new(),
            banker: Hand::new(),
            bets: BetSlip::new(),
            previous_bets: None,
            phase: Phase::Betting,
            draw_stage: DrawStage::Player,
            big_road: BigRoad::new(),
            last_result: None,
            rng,
        }
    }

    /// Installs a prepared shoe, clearing the roads.
    ///
    /// A shoe shorter than the reshuffle threshold is replaced on the next
    /// deal like any other.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is in the betting phase.
    pub fn with_shoe(&self, shoe: Shoe) -> Result<Self, ReshuffleError> {
        if self.phase != Phase::Betting {
            return Err(ReshuffleError::InvalidState);
        }

        let mut next = self.clone();
        next.shoe = shoe;
        next.big_road.clear();
        Ok(next)
    }

    /// Replaces the shoe and clears the roads, as between two shoes.
    pub(crate) fn replace_shoe(&mut self) {
        self.shoe = Shoe::new(self.options.decks, &mut self.rng);
        self.big_road.clear();
    }

    /// Shuffles a fresh shoe.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is in the betting phase.
    pub fn reshuffle(&self) -> Result<Self, ReshuffleError> {
        if self.phase != Phase::Betting {
            return Err(ReshuffleError::InvalidState);
        }

        let mut next = self.clone();
        next.replace_shoe();
        tracing::info!(cards = next.shoe.remaining(), "shoe reshuffled on request");
        Ok(next)
    }

    /// Clears the settled round and reopens betting.
    ///
    /// The last bet slip stays available for [`rebet`](Self::rebet).
    ///
    /// # Errors
    ///
    /// Returns an error unless the round has been settled.
    pub fn new_round(&self) -> Result<Self, RoundError> {
        if self.phase != Phase::Payout {
            return Err(RoundError::InvalidState);
        }

        let mut next = self.clone();
        next.clear_round();
        Ok(next)
    }

    /// Abandons the round in progress and hands the stakes back.
    ///
    /// The slip stays in place so the same bets can be dealt again. Cards
    /// already dealt are not returned to the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error while betting or after settlement.
    pub fn void_round(&self) -> Result<Self, RoundError> {
        if matches!(self.phase, Phase::Betting | Phase::Payout) {
            return Err(RoundError::NotInProgress);
        }

        let mut next = self.clone();
        let refund = next.bets.total();
        next.balance = next.balance.saturating_add(refund);
        next.player.clear();
        next.banker.clear();
        next.last_result = None;
        next.draw_stage = DrawStage::Player;
        next.phase = Phase::Betting;

        tracing::info!(refund, balance = next.balance, "round voided");
        Ok(next)
    }

    /// Starts over: new shoe, empty roads, starting balance, no bets.
    ///
    /// Allowed in any phase; an unfinished round is abandoned.
    #[must_use]
    pub fn restart(&self) -> Self {
        let mut next = self.clone();
        next.clear_round();
        next.replace_shoe();
        next.previous_bets = None;
        next.balance = next.options.starting_balance;
        next.no_commission = next.options.no_commission;
        tracing::info!(balance = next.balance, "table restarted");
        next
    }

    fn clear_round(&mut self) {
        self.player.clear();
        self.banker.clear();
        self.bets.clear();
        self.last_result = None;
        self.draw_stage = DrawStage::Player;
        self.phase = Phase::Betting;
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns where the round is in the drawing sequence.
    #[must_use]
    pub const fn draw_stage(&self) -> DrawStage {
        self.draw_stage
    }

    /// Returns the balance, net of any stakes already dealt.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns whether Banker wins currently pay without commission.
    #[must_use]
    pub const fn no_commission(&self) -> bool {
        self.no_commission
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the Player hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the Banker hand.
    #[must_use]
    pub const fn banker_hand(&self) -> &Hand {
        &self.banker
    }

    /// Returns the current bet slip.
    #[must_use]
    pub const fn bets(&self) -> &BetSlip {
        &self.bets
    }

    /// Returns the slip frozen at the last deal, if any.
    #[must_use]
    pub const fn previous_bets(&self) -> Option<&BetSlip> {
        self.previous_bets.as_ref()
    }

    /// Returns the result of the settled round, while in the payout phase.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the Big Road for the current shoe.
    #[must_use]
    pub const fn big_road(&self) -> &BigRoad {
        &self.big_road
    }

    /// Returns the Small Road for the current shoe.
    #[must_use]
    pub fn small_road(&self) -> Vec<DerivedColumn> {
        self.big_road.small_road()
    }

    /// Returns the Cockroach Road for the current shoe.
    #[must_use]
    pub fn cockroach_road(&self) -> Vec<DerivedColumn> {
        self.big_road.cockroach_road()
    }

    /// Previews the roads for a hypothetical next outcome.
    #[must_use]
    pub fn predict(&self, outcome: Outcome) -> Prediction {
        self.big_road.predict(outcome)
    }
}
