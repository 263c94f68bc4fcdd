//! Round phase and step event types.

use crate::card::Card;
use crate::hand::Side;
use crate::result::RoundResult;

/// Round phase.
///
/// A round always moves `Betting → Dealing → Revealing → Drawing → Payout`
/// and back to `Betting` on a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Accepting bets for the next round.
    #[default]
    Betting,
    /// Stakes are frozen; the four opening cards are next.
    Dealing,
    /// Opening cards are being turned over one at a time.
    Revealing,
    /// Third-card decisions are being made.
    Drawing,
    /// The round has been settled.
    Payout,
}

/// What a single [`advance`](crate::RoundState::advance) step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// The opening four cards were dealt.
    Dealt {
        /// Whether the shoe was replaced before dealing.
        reshuffled: bool,
    },
    /// One opening card was turned over.
    Revealed {
        /// The hand the card belongs to.
        side: Side,
        /// How many of that hand's cards are now showing.
        count: u8,
    },
    /// A side took a third card.
    Drew {
        /// The drawing hand.
        side: Side,
        /// The card drawn.
        card: Card,
    },
    /// A side stood on two cards.
    Stood {
        /// The standing hand.
        side: Side,
    },
    /// The round was settled.
    Settled(RoundResult),
}
