//! A shared table handle around [`RoundState`].

use alloc::vec::Vec;

use crate::bet::{BetSlip, BetType};
use crate::error::{
    AdvanceError, BetError, ConfigError, DealError, PlayError, ReshuffleError, RoundError,
};
use crate::game::{Phase, RoundEvent, RoundState};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::{Outcome, RoundResult};
use crate::road::{BigRoad, DerivedColumn, Prediction};
use crate::shoe::Shoe;
use crate::sync::Mutex;

/// A baccarat table that UI code and drivers can share by reference.
///
/// Each command runs the matching [`RoundState`] transition under the lock
/// and installs the new state only if it succeeded, so stakes, balance and
/// phase always change together.
///
/// # Example
///
/// ```
/// use bacrs::{BetType, Phase, RoundEvent, Table, TableOptions};
///
/// let table = Table::new(TableOptions::default(), 42);
/// table.place_bet(BetType::Banker, 100).unwrap();
/// table.deal().unwrap();
///
/// loop {
///     if let RoundEvent::Settled(result) = table.advance().unwrap() {
///         assert_eq!(result.staked, 100);
///         break;
///     }
/// }
/// assert_eq!(table.phase(), Phase::Payout);
/// table.new_round().unwrap();
/// ```
#[derive(Debug)]
pub struct Table {
    state: Mutex<RoundState>,
}

impl Table {
    /// Creates a new table with the given seed.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::from_state(RoundState::new(options, seed))
    }

    /// Wraps an existing state.
    #[must_use]
    pub const fn from_state(state: RoundState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Unwraps the table into its state.
    #[must_use]
    pub fn into_state(self) -> RoundState {
        self.state.into_inner()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> RoundState {
        self.state.lock().clone()
    }

    fn apply<E>(
        &self,
        transition: impl FnOnce(&RoundState) -> Result<RoundState, E>,
    ) -> Result<(), E> {
        let mut state = self.state.lock();
        let next = transition(&state)?;
        *state = next;
        Ok(())
    }

    /// Places a bet. See [`RoundState::place_bet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is rejected; the table is unchanged.
    pub fn place_bet(&self, bet: BetType, amount: u64) -> Result<(), BetError> {
        self.apply(|state| state.place_bet(bet, amount))
    }

    /// Repeats the last dealt slip. See [`RoundState::rebet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the rebet is rejected; the table is unchanged.
    pub fn rebet(&self) -> Result<(), BetError> {
        self.apply(RoundState::rebet)
    }

    /// Clears the current slip.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase.
    pub fn clear_bets(&self) -> Result<(), BetError> {
        self.apply(RoundState::clear_bets)
    }

    /// Switches the commission mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase.
    pub fn set_no_commission(&self, no_commission: bool) -> Result<(), ConfigError> {
        self.apply(|state| state.set_no_commission(no_commission))
    }

    /// Locks in the slip. See [`RoundState::deal`].
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is rejected; the table is unchanged.
    pub fn deal(&self) -> Result<(), DealError> {
        self.apply(RoundState::deal)
    }

    /// Takes the next step of the round. See [`RoundState::advance`].
    ///
    /// If the shoe runs dry the round is voided and its stakes are returned,
    /// so the table goes back to betting instead of staying stuck.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no step to take or the shoe runs dry.
    pub fn advance(&self) -> Result<RoundEvent, AdvanceError> {
        let mut state = self.state.lock();
        match state.advance() {
            Ok((next, event)) => {
                *state = next;
                Ok(event)
            }
            Err(AdvanceError::ShoeExhausted) => {
                if let Ok(voided) = state.void_round() {
                    *state = voided;
                }
                Err(AdvanceError::ShoeExhausted)
            }
            Err(err) => Err(err),
        }
    }

    /// Deals and plays a whole round without pausing.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is rejected or a step fails.
    pub fn play_round(&self) -> Result<RoundResult, PlayError> {
        let mut state = self.state.lock();
        let (next, result) = state.play_round()?;
        *state = next;
        Ok(result)
    }

    /// Abandons the round in progress. See [`RoundState::void_round`].
    ///
    /// # Errors
    ///
    /// Returns an error while betting or after settlement.
    pub fn void_round(&self) -> Result<(), RoundError> {
        self.apply(RoundState::void_round)
    }

    /// Reopens betting after a settled round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn new_round(&self) -> Result<(), RoundError> {
        self.apply(RoundState::new_round)
    }

    /// Shuffles a fresh shoe and clears the roads.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase.
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        self.apply(RoundState::reshuffle)
    }

    /// Loads a prepared shoe and clears the roads.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase.
    pub fn load_shoe(&self, shoe: Shoe) -> Result<(), ReshuffleError> {
        self.apply(|state| state.with_shoe(shoe))
    }

    /// Restarts the table from scratch.
    pub fn restart(&self) {
        let mut state = self.state.lock();
        *state = state.restart();
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase()
    }

    /// Returns the current balance.
    pub fn balance(&self) -> u64 {
        self.state.lock().balance()
    }

    /// Returns whether Banker wins pay without commission.
    pub fn no_commission(&self) -> bool {
        self.state.lock().no_commission()
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.state.lock().cards_remaining()
    }

    /// Returns a clone of the Player hand.
    pub fn player_hand(&self) -> Hand {
        self.state.lock().player_hand().clone()
    }

    /// Returns a clone of the Banker hand.
    pub fn banker_hand(&self) -> Hand {
        self.state.lock().banker_hand().clone()
    }

    /// Returns a clone of the current bet slip.
    pub fn bets(&self) -> BetSlip {
        self.state.lock().bets().clone()
    }

    /// Returns the stake on `bet`.
    pub fn stake(&self, bet: BetType) -> u64 {
        self.state.lock().bets().stake(bet)
    }

    /// Returns the last settled result, while in the payout phase.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.state.lock().last_result().cloned()
    }

    /// Returns a clone of the Big Road.
    pub fn big_road(&self) -> BigRoad {
        self.state.lock().big_road().clone()
    }

    /// Returns the Small Road.
    pub fn small_road(&self) -> Vec<DerivedColumn> {
        self.state.lock().small_road()
    }

    /// Returns the Cockroach Road.
    pub fn cockroach_road(&self) -> Vec<DerivedColumn> {
        self.state.lock().cockroach_road()
    }

    /// Previews the roads for a hypothetical next outcome.
    pub fn predict(&self, outcome: Outcome) -> Prediction {
        self.state.lock().predict(outcome)
    }
}
