//! Hand evaluation and the two hands dealt each round.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// One of the two hands on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The Player hand.
    Player,
    /// The Banker hand.
    Banker,
}

/// Point value of a single card: Ace is 1, tens and faces are 0.
#[must_use]
pub const fn card_value(card: &Card) -> u8 {
    match card.rank {
        1..=9 => card.rank,
        _ => 0,
    }
}

/// Baccarat value of a run of cards (sum of card values, mod 10).
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    (cards.iter().map(|c| u32::from(card_value(c))).sum::<u32>() % 10) as u8
}

/// Returns whether exactly two cards total 8 or 9.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) >= 8
}

/// Returns whether the first two cards share a rank.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    matches!(cards, [first, second, ..] if first.rank == second.rank)
}

/// Returns whether the first two cards share both rank and suit.
#[must_use]
pub fn is_perfect_pair(cards: &[Card]) -> bool {
    matches!(cards, [first, second, ..] if first == second)
}

/// A Player or Banker hand.
///
/// Besides its cards, a hand carries a reveal cursor. The engine never hides
/// cards itself; the cursor only records how many of them the driver has
/// shown so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    revealed: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            revealed: 0,
        }
    }

    /// Creates a hand from the given cards, all of them unrevealed.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            revealed: 0,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds a drawn third card and marks it revealed.
    pub fn draw_third(&mut self, card: Card) {
        self.cards.push(card);
        self.revealed = self.cards.len() as u8;
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the third card, if one was drawn.
    #[must_use]
    pub fn third_card(&self) -> Option<&Card> {
        self.cards.get(2)
    }

    /// Returns how many cards have been revealed.
    #[must_use]
    pub const fn revealed(&self) -> u8 {
        self.revealed
    }

    /// Reveals one more card, up to the number held.
    pub fn reveal_next(&mut self) -> u8 {
        if (self.revealed as usize) < self.cards.len() {
            self.revealed += 1;
        }
        self.revealed
    }

    /// Value of the revealed cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        hand_value(&self.cards[..self.revealed as usize])
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the first two cards form a pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        is_pair(&self.cards)
    }

    /// Returns whether the first two cards form a suited pair.
    #[must_use]
    pub fn is_perfect_pair(&self) -> bool {
        is_perfect_pair(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.revealed = 0;
    }
}
