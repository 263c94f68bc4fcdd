//! A baccarat rules engine with optional `no_std` support.
//!
//! The crate deals from a multi-deck shoe, applies the fixed third-card
//! rule, settles nine simultaneous bet types (with an optional
//! no-commission Banker payout), and keeps the Big Road together with the
//! Small and Cockroach roads derived from it.
//!
//! Round flow is driven from outside: [`RoundState`] holds the whole table
//! and each command returns the next state, while [`Table`] wraps it behind
//! a lock for callers that share one table by reference. Neither owns a
//! timer; a driver calls [`Table::advance`] once per step.
//!
//! # Example
//!
//! ```
//! use bacrs::{BetType, Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! table.place_bet(BetType::Player, 100).unwrap();
//! let result = table.play_round().unwrap();
//! assert_eq!(result.balance, table.balance());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod payout;
pub mod result;
pub mod road;
pub mod rules;
pub mod shoe;
mod sync;
pub mod table;

// Re-export main types
pub use bet::{BetSlip, BetType, CHIP_VALUES};
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{
    AdvanceError, BetError, ConfigError, DealError, PlayError, ReshuffleError, RoundError,
    ShoeExhausted,
};
pub use game::{Phase, RoundEvent, RoundState};
pub use hand::{Hand, Side, card_value, hand_value, is_natural, is_pair, is_perfect_pair};
pub use options::{MAX_CARDS_PER_ROUND, RoundingMode, TableOptions};
pub use payout::settle;
pub use result::{BetPayout, Outcome, RoundResult, Settlement};
pub use road::{BigRoad, Color, DerivedColumn, DerivedRoad, Entry, Prediction, RoadColumn};
pub use rules::{DrawStage, DrawStep};
pub use shoe::Shoe;
pub use table::Table;
